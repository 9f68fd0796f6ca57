use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy resources tracked by the emission records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Coal,
    Oil,
    Gas,
    Electricity,
    Renewable,
    Nuclear,
}

impl ResourceType {
    pub fn code(&self) -> &'static str {
        match self {
            ResourceType::Coal => "coal",
            ResourceType::Oil => "oil",
            ResourceType::Gas => "gas",
            ResourceType::Electricity => "electricity",
            ResourceType::Renewable => "renewable",
            ResourceType::Nuclear => "nuclear",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::Coal => "煤炭",
            ResourceType::Oil => "石油",
            ResourceType::Gas => "天然气",
            ResourceType::Electricity => "电力",
            ResourceType::Renewable => "可再生能源",
            ResourceType::Nuclear => "核能",
        }
    }

    pub fn all() -> Vec<ResourceType> {
        vec![
            ResourceType::Coal,
            ResourceType::Oil,
            ResourceType::Gas,
            ResourceType::Electricity,
            ResourceType::Renewable,
            ResourceType::Nuclear,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
