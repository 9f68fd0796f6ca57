pub mod industry_type;
pub mod resource_type;
pub mod risk_level;
pub mod source_type;

pub use industry_type::IndustryType;
pub use resource_type::ResourceType;
pub use risk_level::RiskLevel;
pub use source_type::SourceType;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde_names() {
        for industry in IndustryType::all() {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{}\"", industry.code()));
        }
        for source in SourceType::all() {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.code()));
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(IndustryType::from_code("mining"), Some(IndustryType::Mining));
        assert_eq!(ResourceType::from_code("gas"), Some(ResourceType::Gas));
        assert_eq!(SourceType::from_code("modis"), Some(SourceType::Modis));
        assert_eq!(IndustryType::from_code("steel"), None);
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(IndustryType::all().len(), 8);
        assert_eq!(ResourceType::all().len(), 6);
        assert_eq!(SourceType::all().len(), 5);
    }
}
