//! Emission analytics endpoints backing the overview and analysis pages.

use crate::shared::http::{self, ApiError, HttpClient};
use contracts::emissions::{
    BarParams, DashboardSummary, DataDetailsPage, DateRange, HeatmapCell, IndustryDistribution,
    LineSeries, NamedValue, PageParams, ResourceAnalysis,
};

const BASE: &str = "/emissions";

/// Time series for the whole range, also split by industry and by resource
pub async fn emissions_line<C: HttpClient>(
    client: &C,
    range: &DateRange,
) -> Result<LineSeries, ApiError> {
    http::get_with(client, &format!("{}/line", BASE), range).await
}

pub async fn emissions_heatmap<C: HttpClient>(
    client: &C,
    range: &DateRange,
) -> Result<Vec<HeatmapCell>, ApiError> {
    http::get_with(client, &format!("{}/heatmap", BASE), range).await
}

pub async fn emissions_bar<C: HttpClient>(
    client: &C,
    params: &BarParams,
) -> Result<Vec<NamedValue>, ApiError> {
    http::get_with(client, &format!("{}/bar", BASE), params).await
}

pub async fn dashboard_summary<C: HttpClient>(client: &C) -> Result<DashboardSummary, ApiError> {
    http::get(client, &format!("{}/dashboard-summary", BASE)).await
}

pub async fn industry_distribution<C: HttpClient>(
    client: &C,
) -> Result<IndustryDistribution, ApiError> {
    http::get(client, &format!("{}/industry-distribution", BASE)).await
}

pub async fn resource_analysis<C: HttpClient>(client: &C) -> Result<ResourceAnalysis, ApiError> {
    http::get(client, &format!("{}/resource-analysis", BASE)).await
}

/// Paged raw records, 1-based
pub async fn data_details<C: HttpClient>(
    client: &C,
    params: &PageParams,
) -> Result<DataDetailsPage, ApiError> {
    http::get_with(client, &format!("{}/data-details", BASE), params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockClient;
    use crate::shared::http::Method;
    use contracts::emissions::GroupBy;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_range_endpoints_use_query() {
        let client = MockClient::replying(json!([
            { "industry": "energy", "resource": "coal", "value": 812 }
        ]));
        let cells = block_on(emissions_heatmap(
            &client,
            &DateRange::new("2023-01-01", "2023-06-30"),
        ))
        .unwrap();
        assert_eq!(cells.len(), 1);

        let request = client.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.path_and_query(),
            "/emissions/heatmap?start=2023-01-01&end=2023-06-30"
        );
    }

    #[test]
    fn test_bar_group_by() {
        let client = MockClient::replying(json!([{ "name": "gas", "value": 300 }]));
        let params = BarParams::new(&DateRange::default(), GroupBy::Resource);
        block_on(emissions_bar(&client, &params)).unwrap();

        assert_eq!(
            client.single_request().path_and_query(),
            "/emissions/bar?start=2022-01-01&end=2022-12-31&groupBy=resource"
        );
    }

    #[test]
    fn test_data_details_paging() {
        let client = MockClient::replying(json!({ "records": [], "totalPages": 0 }));
        block_on(data_details(&client, &PageParams { page: 3, size: 50 })).unwrap();
        assert_eq!(
            client.single_request().path_and_query(),
            "/emissions/data-details?page=3&size=50"
        );
    }

    #[test]
    fn test_summary_error_is_returned_as_is() {
        let error = ApiError::Status {
            status: 400,
            message: "数据获取失败: boom".into(),
        };
        let client = MockClient::failing(error.clone());
        assert_eq!(block_on(dashboard_summary(&client)), Err(error));
        assert_eq!(
            client.single_request().path_and_query(),
            "/emissions/dashboard-summary"
        );
    }
}
