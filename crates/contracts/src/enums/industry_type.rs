use serde::{Deserialize, Serialize};
use std::fmt;

/// Отрасли, которые понимает AI-сервис
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryType {
    Manufacturing,
    Energy,
    Transportation,
    Agriculture,
    Construction,
    Services,
    Mining,
    Chemical,
}

impl IndustryType {
    pub fn code(&self) -> &'static str {
        match self {
            IndustryType::Manufacturing => "manufacturing",
            IndustryType::Energy => "energy",
            IndustryType::Transportation => "transportation",
            IndustryType::Agriculture => "agriculture",
            IndustryType::Construction => "construction",
            IndustryType::Services => "services",
            IndustryType::Mining => "mining",
            IndustryType::Chemical => "chemical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IndustryType::Manufacturing => "制造业",
            IndustryType::Energy => "能源",
            IndustryType::Transportation => "交通",
            IndustryType::Agriculture => "农业",
            IndustryType::Construction => "建筑",
            IndustryType::Services => "服务业",
            IndustryType::Mining => "采矿业",
            IndustryType::Chemical => "化工业",
        }
    }

    pub fn all() -> Vec<IndustryType> {
        vec![
            IndustryType::Manufacturing,
            IndustryType::Energy,
            IndustryType::Transportation,
            IndustryType::Agriculture,
            IndustryType::Construction,
            IndustryType::Services,
            IndustryType::Mining,
            IndustryType::Chemical,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|i| i.code() == code)
    }
}

impl fmt::Display for IndustryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
