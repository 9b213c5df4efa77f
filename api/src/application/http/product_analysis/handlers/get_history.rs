use axum::extract::State;
use nutriscan_core::domain::product_analysis::{
    entities::ProductAnalysis, ports::ProductAnalysisService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHistoryResponse {
    pub data: Vec<ProductAnalysis>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "Get scan history",
    description = "Returns every analyzed product, most recent first.",
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_history()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: history }))
}
