//! AI service endpoints.
//!
//! Each function is a single delegated call: parameters go out as the query
//! string of an empty-bodied POST (or a bare GET), and whatever the client
//! returns, success or error, is handed back as is.

use crate::shared::http::{self, ApiError, HttpClient};
use contracts::ai::{
    AiHealth, AnomalyParams, AnomalyResponse, CarbonCycleParams, CarbonCycleResponse,
    CatalogResponse, CollectParams, DataCollectionResponse, PredictParams, PredictionResponse,
    TaskStatusResponse,
};

/// `GET /ai/health`
pub async fn ai_health<C: HttpClient>(client: &C) -> Result<AiHealth, ApiError> {
    http::get(client, "/ai/health").await
}

/// `POST /ai/predict?industry&resourceType&timePeriod`
pub async fn ai_predict<C: HttpClient>(
    client: &C,
    params: &PredictParams,
) -> Result<PredictionResponse, ApiError> {
    http::post_query(client, "/ai/predict", params).await
}

/// `POST /ai/anomalies?industry&timeRange`
pub async fn ai_anomalies<C: HttpClient>(
    client: &C,
    params: &AnomalyParams,
) -> Result<AnomalyResponse, ApiError> {
    http::post_query(client, "/ai/anomalies", params).await
}

/// `POST /ai/carbon-cycle?region&timePeriod`
pub async fn ai_carbon_cycle<C: HttpClient>(
    client: &C,
    params: &CarbonCycleParams,
) -> Result<CarbonCycleResponse, ApiError> {
    http::post_query(client, "/ai/carbon-cycle", params).await
}

/// `POST /ai/collect?sourceType[&industry][&region]`
pub async fn ai_collect<C: HttpClient>(
    client: &C,
    params: &CollectParams,
) -> Result<DataCollectionResponse, ApiError> {
    http::post_query(client, "/ai/collect", params).await
}

/// `GET /ai/tasks/status`
pub async fn ai_task_status<C: HttpClient>(client: &C) -> Result<TaskStatusResponse, ApiError> {
    http::get(client, "/ai/tasks/status").await
}

/// `GET /ai/industries`
pub async fn ai_industries<C: HttpClient>(client: &C) -> Result<CatalogResponse, ApiError> {
    http::get(client, "/ai/industries").await
}

/// `GET /ai/resources`
pub async fn ai_resources<C: HttpClient>(client: &C) -> Result<CatalogResponse, ApiError> {
    http::get(client, "/ai/resources").await
}

/// `GET /ai/data-sources`
pub async fn ai_data_sources<C: HttpClient>(client: &C) -> Result<CatalogResponse, ApiError> {
    http::get(client, "/ai/data-sources").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockClient;
    use crate::shared::http::Method;
    use futures::executor::block_on;
    use serde_json::json;

    fn predict_params() -> PredictParams {
        PredictParams {
            industry: "steel".into(),
            resource_type: "energy".into(),
            time_period: 30,
        }
    }

    #[test]
    fn test_predict_sends_query_and_no_body() {
        let client = MockClient::replying(json!({ "success": true, "confidence": 0.9 }));

        let response = block_on(ai_predict(&client, &predict_params())).unwrap();
        assert!(response.success);

        let request = client.single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.path_and_query(),
            "/ai/predict?industry=steel&resourceType=energy&timePeriod=30"
        );
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_anomalies_and_carbon_cycle_query() {
        let client = MockClient::replying(json!({}));
        block_on(ai_anomalies(
            &client,
            &AnomalyParams {
                industry: "energy".into(),
                time_range: 30,
            },
        ))
        .unwrap();
        let request = client.single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path_and_query(), "/ai/anomalies?industry=energy&timeRange=30");
        assert_eq!(request.body, None);

        let client = MockClient::replying(json!({}));
        block_on(ai_carbon_cycle(
            &client,
            &CarbonCycleParams {
                region: "beijing".into(),
                time_period: 3,
            },
        ))
        .unwrap();
        let request = client.single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path_and_query(), "/ai/carbon-cycle?region=beijing&timePeriod=3");
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_collect_omits_absent_optionals() {
        let client = MockClient::replying(json!({ "success": true, "task_id": "collect_1" }));
        let response = block_on(ai_collect(&client, &CollectParams::new("modis"))).unwrap();
        assert_eq!(response.task_id, "collect_1");

        let request = client.single_request();
        assert_eq!(request.path_and_query(), "/ai/collect?sourceType=modis");
        assert!(!request.query.contains("industry"));
        assert!(!request.query.contains("region"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_collect_sends_provided_optionals() {
        let client = MockClient::replying(json!({}));
        let params = CollectParams::new("energy_logs")
            .with_industry("energy")
            .with_region("shanghai");
        block_on(ai_collect(&client, &params)).unwrap();

        assert_eq!(
            client.single_request().path_and_query(),
            "/ai/collect?sourceType=energy_logs&industry=energy&region=shanghai"
        );
    }

    #[test]
    fn test_get_endpoints_have_no_params() {
        let cases: Vec<(&str, Box<dyn Fn(&MockClient)>)> = vec![
            ("/ai/health", Box::new(|c: &MockClient| drop(block_on(ai_health(c))))),
            ("/ai/tasks/status", Box::new(|c: &MockClient| drop(block_on(ai_task_status(c))))),
            ("/ai/industries", Box::new(|c: &MockClient| drop(block_on(ai_industries(c))))),
            ("/ai/resources", Box::new(|c: &MockClient| drop(block_on(ai_resources(c))))),
            ("/ai/data-sources", Box::new(|c: &MockClient| drop(block_on(ai_data_sources(c))))),
        ];

        for (path, call) in cases {
            let client = MockClient::replying(json!({}));
            call(&client);
            let request = client.single_request();
            assert_eq!(request.method, Method::Get, "{}", path);
            assert_eq!(request.path_and_query(), path);
            assert_eq!(request.body, None);
        }
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let error = ApiError::Status {
            status: 500,
            message: "AI服务调用失败: connection refused".into(),
        };

        let client = MockClient::failing(error.clone());
        assert_eq!(block_on(ai_predict(&client, &predict_params())), Err(error.clone()));

        let client = MockClient::failing(error.clone());
        assert_eq!(block_on(ai_health(&client)), Err(error.clone()));

        let client = MockClient::failing(ApiError::Network("offline".into()));
        assert_eq!(
            block_on(ai_collect(&client, &CollectParams::new("modis"))),
            Err(ApiError::Network("offline".into()))
        );
        assert_eq!(client.requests.borrow().len(), 1);
    }
}
