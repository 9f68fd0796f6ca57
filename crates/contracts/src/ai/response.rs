use crate::enums::RiskLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `GET /ai/health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiHealth {
    pub service: String,
    /// "healthy" | "unhealthy" | "error"
    pub status: String,
    /// Unix millis
    pub timestamp: i64,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl AiHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// `None` when the service sent no (or a nonsensical) timestamp
    pub fn checked_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp <= 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionPoint {
    pub date: String,
    pub predicted_emission: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendAnalysis {
    /// "increasing" | "decreasing"
    pub trend: String,
    pub rate: f64,
    pub confidence: f64,
}

/// `POST /ai/predict`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResponse {
    pub success: bool,
    pub predictions: Vec<PredictionPoint>,
    pub confidence: f64,
    pub carbon_neutral_year: Option<i32>,
    pub trend_analysis: TrendAnalysis,
    pub model_performance: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyRecord {
    pub date: String,
    pub anomaly_score: f64,
    pub reasons: Vec<String>,
    pub emission: f64,
    pub energy_consumption: f64,
    pub temperature: f64,
    pub severity: RiskLevel,
}

/// `POST /ai/anomalies`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyResponse {
    pub success: bool,
    pub anomalies: Vec<AnomalyRecord>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub statistical_summary: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonSink {
    pub total: f64,
    pub forest: f64,
    pub grassland: f64,
    pub wetland: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonSource {
    pub total: f64,
    pub industrial: f64,
    pub transportation: f64,
    pub agricultural: f64,
}

/// `POST /ai/carbon-cycle`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonCycleResponse {
    pub success: bool,
    pub carbon_sink: CarbonSink,
    pub carbon_source: CarbonSource,
    pub net_emission: f64,
    pub sequestration_potential: serde_json::Value,
    pub map_data: Option<serde_json::Value>,
    pub temporal_trends: Option<Vec<serde_json::Value>>,
}

/// `POST /ai/collect`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataCollectionResponse {
    pub success: bool,
    pub message: String,
    pub task_id: String,
    pub estimated_time: String,
    pub data_count: Option<u64>,
    pub file_path: Option<String>,
}

/// One collection task as tracked by the collector service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInfo {
    pub task_id: Option<String>,
    /// "running" | "completed" | "failed"
    pub status: String,
    pub progress: f64,
    pub start_time: Option<String>,
    pub error: Option<String>,
    pub result: Option<serde_json::Value>,
}

/// `GET /ai/tasks/status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStatusResponse {
    pub active_tasks: Vec<TaskInfo>,
    pub completed_tasks: Vec<TaskInfo>,
    pub failed_tasks: Vec<TaskInfo>,
}

impl TaskStatusResponse {
    pub fn total(&self) -> usize {
        self.active_tasks.len() + self.completed_tasks.len() + self.failed_tasks.len()
    }
}

/// Ответ каталогов `/ai/industries`, `/ai/resources`, `/ai/data-sources`.
///
/// Backend names the list after the catalog, so all three keys are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogResponse {
    #[serde(alias = "industries", alias = "resources", alias = "sources")]
    pub items: Vec<String>,
    pub descriptions: HashMap<String, String>,
}

impl CatalogResponse {
    /// (code, label) pairs in backend order; label falls back to the code.
    pub fn options(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .map(|code| {
                let label = self
                    .descriptions
                    .get(code)
                    .cloned()
                    .unwrap_or_else(|| code.clone());
                (code.clone(), label)
            })
            .collect()
    }
}
