pub mod request;
pub mod response;

pub use request::{AnomalyParams, CarbonCycleParams, CollectParams, PredictParams};
pub use response::{
    AiHealth, AnomalyRecord, AnomalyResponse, CarbonCycleResponse, CarbonSink, CarbonSource,
    CatalogResponse, DataCollectionResponse, PredictionPoint, PredictionResponse, TaskInfo,
    TaskStatusResponse, TrendAnalysis,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RiskLevel;
    use serde_json::json;

    #[test]
    fn test_collect_params_skip_absent_fields() {
        let params = CollectParams::new("modis");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "sourceType": "modis" })
        );

        let params = CollectParams::new("energy_logs").with_region("beijing");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "sourceType": "energy_logs", "region": "beijing" })
        );
    }

    #[test]
    fn test_predict_params_camel_case() {
        let params = PredictParams {
            industry: "steel".into(),
            resource_type: "energy".into(),
            time_period: 30,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "industry": "steel", "resourceType": "energy", "timePeriod": 30 })
        );
    }

    #[test]
    fn test_prediction_response_from_backend_payload() {
        let payload = json!({
            "success": true,
            "predictions": [
                { "date": "2025-01-01", "predicted_emission": 1034.5 },
                { "date": "2025-02-01", "predicted_emission": 998.12 }
            ],
            "confidence": 0.95,
            "carbon_neutral_year": 2058,
            "trend_analysis": { "trend": "decreasing", "rate": 1.7, "confidence": 0.95 },
            "model_performance": { "mae": 77.3, "rmse": 120.9, "r2": 0.88 }
        });

        let response: PredictionResponse = serde_json::from_value(payload).unwrap();
        assert!(response.success);
        assert_eq!(response.predictions.len(), 2);
        assert_eq!(response.carbon_neutral_year, Some(2058));
        assert_eq!(response.trend_analysis.trend, "decreasing");
        assert_eq!(
            response.model_performance.unwrap().get("rmse").copied(),
            Some(120.9)
        );
    }

    #[test]
    fn test_anomaly_response_severity() {
        let payload = json!({
            "success": true,
            "anomalies": [{
                "date": "2024-06-03",
                "anomaly_score": 0.91,
                "reasons": ["统计指标超出正常范围"],
                "emission": 1520.0,
                "energy_consumption": 7000.0,
                "temperature": 31.0,
                "severity": "high"
            }],
            "risk_level": "medium",
            "recommendations": ["检查设备"]
        });

        let response: AnomalyResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.risk_level, RiskLevel::Medium);
        assert_eq!(response.anomalies[0].severity, RiskLevel::High);
        assert!(response.statistical_summary.is_none());
    }

    #[test]
    fn test_health_and_task_status() {
        let health: AiHealth = serde_json::from_value(json!({
            "service": "AI服务",
            "status": "healthy",
            "timestamp": 1718000000000i64,
            "message": "后端AI服务运行正常"
        }))
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(
            health.checked_at().map(|t| t.to_rfc3339()),
            Some("2024-06-10T06:13:20+00:00".to_string())
        );
        assert_eq!(AiHealth::default().checked_at(), None);

        let status: TaskStatusResponse = serde_json::from_value(json!({
            "active_tasks": [{ "status": "running", "progress": 40, "start_time": "2024-06-01T10:00:00" }],
            "completed_tasks": [],
            "failed_tasks": [{ "status": "failed", "progress": 0, "error": "timeout" }]
        }))
        .unwrap();
        assert_eq!(status.total(), 2);
        assert_eq!(status.failed_tasks[0].error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_catalog_aliases_and_options() {
        let catalog: CatalogResponse = serde_json::from_value(json!({
            "resources": ["coal", "nuclear"],
            "descriptions": { "coal": "煤炭" }
        }))
        .unwrap();
        assert_eq!(
            catalog.options(),
            vec![
                ("coal".to_string(), "煤炭".to_string()),
                ("nuclear".to_string(), "nuclear".to_string())
            ]
        );
    }
}
