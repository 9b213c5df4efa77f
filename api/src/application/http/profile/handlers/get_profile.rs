use axum::extract::State;
use nutriscan_core::domain::profile::{entities::UserProfile, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get user profile",
    description = "Returns the saved health goals, or the defaults when none were saved yet.",
    responses(
        (status = 200, body = GetProfileResponse)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
