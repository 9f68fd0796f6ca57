use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// `GET /emissions/line`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineSeries {
    pub total: Vec<SeriesPoint>,
    pub by_industry: HashMap<String, Vec<SeriesPoint>>,
    pub by_resource: HashMap<String, Vec<SeriesPoint>>,
}

/// One industry × resource cell of `GET /emissions/heatmap`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapCell {
    pub industry: String,
    pub resource: String,
    pub value: f64,
}

/// Item of `GET /emissions/bar`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyTrend {
    pub month: String,
    pub emissions: f64,
    pub target: f64,
}

/// `GET /emissions/dashboard-summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_emissions: f64,
    pub total_change: f64,
    pub change_rate: f64,
    pub industry_count: u32,
    pub resource_count: u32,
    pub data_points: u32,
    pub last_update: String,
    pub monthly_trends: Vec<MonthlyTrend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryShare {
    pub industry: String,
    pub percentage: f64,
    pub emissions: f64,
    /// "up" | "down"
    pub trend: String,
    pub change: f64,
}

/// `GET /emissions/industry-distribution`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndustryDistribution {
    pub distribution: Vec<IndustryShare>,
    pub total_industries: u32,
    pub analysis_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceUsage {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub current_usage: f64,
    pub efficiency: f64,
    pub carbon_intensity: f64,
    pub renewable_percentage: f64,
}

/// `GET /emissions/resource-analysis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceAnalysis {
    pub resources: Vec<ResourceUsage>,
    pub total_resources: u32,
    pub analysis_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionRecordRow {
    pub id: i64,
    pub date: String,
    pub industry: String,
    pub resource: String,
    pub emissions: f64,
    pub location: String,
    /// "normal" | "anomaly"
    pub status: String,
}

/// `GET /emissions/data-details`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataDetailsPage {
    pub records: Vec<EmissionRecordRow>,
    pub total_records: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}
