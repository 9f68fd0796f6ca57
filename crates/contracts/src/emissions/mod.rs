pub mod request;
pub mod response;

pub use request::{BarParams, DateRange, GroupBy, PageParams};
pub use response::{
    DashboardSummary, DataDetailsPage, EmissionRecordRow, HeatmapCell, IndustryDistribution,
    IndustryShare, LineSeries, MonthlyTrend, NamedValue, ResourceAnalysis, ResourceUsage,
    SeriesPoint,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bar_params_wire_names() {
        let params = BarParams::new(&DateRange::default(), GroupBy::Resource);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "start": "2022-01-01", "end": "2022-12-31", "groupBy": "resource" })
        );
    }

    #[test]
    fn test_line_series_camel_case_maps() {
        let series: LineSeries = serde_json::from_value(json!({
            "total": [{ "date": "2022-01", "value": 1200 }],
            "byIndustry": { "energy": [{ "date": "2022-01", "value": 400 }] },
            "byResource": {}
        }))
        .unwrap();
        assert_eq!(series.total[0].value, 1200.0);
        assert_eq!(series.by_industry["energy"].len(), 1);
        assert!(series.by_resource.is_empty());
    }

    #[test]
    fn test_resource_usage_type_field() {
        let analysis: ResourceAnalysis = serde_json::from_value(json!({
            "resources": [{
                "type": "renewable",
                "currentUsage": 850,
                "efficiency": 72,
                "carbonIntensity": 12,
                "renewablePercentage": 100
            }],
            "totalResources": 6,
            "analysisDate": "2024-06-01"
        }))
        .unwrap();
        assert_eq!(analysis.resources[0].resource_type, "renewable");
        assert_eq!(analysis.resources[0].renewable_percentage, 100.0);
    }

    #[test]
    fn test_data_details_page() {
        let page: DataDetailsPage = serde_json::from_value(json!({
            "records": [{
                "id": 21, "date": "2024-06-01", "industry": "energy", "resource": "coal",
                "emissions": 903, "location": "Location 1", "status": "anomaly"
            }],
            "totalRecords": 1000,
            "currentPage": 2,
            "pageSize": 20,
            "totalPages": 50
        }))
        .unwrap();
        assert_eq!(page.records[0].id, 21);
        assert_eq!(page.total_pages, 50);
    }
}
