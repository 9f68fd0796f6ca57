use serde::{Deserialize, Serialize};

/// Inclusive date window, ISO `YYYY-MM-DD` on both ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for DateRange {
    /// Same window the backend falls back to
    fn default() -> Self {
        Self::new("2022-01-01", "2022-12-31")
    }
}

/// Grouping dimension for `/emissions/bar`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    Industry,
    Resource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarParams {
    pub start: String,
    pub end: String,
    pub group_by: GroupBy,
}

impl BarParams {
    pub fn new(range: &DateRange, group_by: GroupBy) -> Self {
        Self {
            start: range.start.clone(),
            end: range.end.clone(),
            group_by,
        }
    }
}

/// 1-based pagination for `/emissions/data-details`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub page: u32,
    pub size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1, size: 20 }
    }
}
