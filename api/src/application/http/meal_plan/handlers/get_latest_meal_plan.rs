use axum::extract::State;
use nutriscan_core::domain::meal_plan::ports::MealPlanService;

use crate::application::http::{
    meal_plan::handlers::generate_meal_plan::MealPlanResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/latest",
    tag = "meal-plans",
    summary = "Get the latest meal plan",
    responses(
        (status = 200, body = MealPlanResponse),
        (status = 404, description = "No plan generated since startup", body = ApiErrorResponse)
    ),
)]
pub async fn get_latest_meal_plan(
    State(state): State<AppState>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let plan = state
        .service
        .get_latest_meal_plan()
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("No meal plan has been generated yet".to_string()))?;

    Ok(Response::OK(MealPlanResponse { data: plan }))
}
