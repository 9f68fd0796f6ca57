use serde::{Deserialize, Serialize};

/// Query parameters for `POST /ai/predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParams {
    pub industry: String,
    pub resource_type: String,
    /// Horizon in months
    pub time_period: u32,
}

/// Query parameters for `POST /ai/anomalies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyParams {
    pub industry: String,
    /// Window in days
    pub time_range: u32,
}

/// Query parameters for `POST /ai/carbon-cycle`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCycleParams {
    pub region: String,
    /// Window in years
    pub time_period: u32,
}

/// Query parameters for `POST /ai/collect`.
///
/// `industry` and `region` never reach the wire when they are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectParams {
    pub source_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl CollectParams {
    pub fn new(source_type: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            industry: None,
            region: None,
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}
