use axum::extract::State;
use nutriscan_core::domain::profile::{entities::HealthGoals, ports::ProfileService};

use crate::application::http::{
    profile::{handlers::get_profile::GetProfileResponse, validators::UpdateGoalsValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/goals",
    tag = "profile",
    summary = "Update health goals",
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = UpdateGoalsValidator
)]
pub async fn update_goals(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateGoalsValidator>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .save_goals(HealthGoals::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
