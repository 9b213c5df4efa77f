use axum::extract::State;
use nutriscan_core::domain::product_analysis::ports::ProductAnalysisService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearHistoryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "history",
    summary = "Clear scan history",
    responses(
        (status = 200, body = ClearHistoryResponse)
    ),
)]
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Response<ClearHistoryResponse>, ApiError> {
    state
        .service
        .clear_history()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearHistoryResponse {
        message: "History cleared successfully".to_string(),
    }))
}
