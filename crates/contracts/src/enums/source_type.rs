use serde::{Deserialize, Serialize};
use std::fmt;

/// Источники для задачи сбора данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    WebScraping,
    EnergyLogs,
    RemoteSensing,
    PublicData,
    Modis,
}

impl SourceType {
    pub fn code(&self) -> &'static str {
        match self {
            SourceType::WebScraping => "web_scraping",
            SourceType::EnergyLogs => "energy_logs",
            SourceType::RemoteSensing => "remote_sensing",
            SourceType::PublicData => "public_data",
            SourceType::Modis => "modis",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceType::WebScraping => "网络爬虫",
            SourceType::EnergyLogs => "能源日志",
            SourceType::RemoteSensing => "遥感数据",
            SourceType::PublicData => "公开数据",
            SourceType::Modis => "MODIS卫星数据",
        }
    }

    pub fn all() -> Vec<SourceType> {
        vec![
            SourceType::WebScraping,
            SourceType::EnergyLogs,
            SourceType::RemoteSensing,
            SourceType::PublicData,
            SourceType::Modis,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
