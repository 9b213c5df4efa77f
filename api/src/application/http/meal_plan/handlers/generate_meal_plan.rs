use axum::extract::State;
use nutriscan_core::domain::meal_plan::{entities::WeeklyPlan, ports::MealPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_plan::validators::GenerateMealPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MealPlanResponse {
    pub data: WeeklyPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-plans",
    summary = "Generate a weekly meal plan",
    description = "Generates a 7-day plan and shopping list from the given preferences and the scan history. Replaces the previously generated plan.",
    responses(
        (status = 201, body = MealPlanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse)
    ),
    request_body = GenerateMealPlanValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let plan = state
        .service
        .generate_meal_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(MealPlanResponse { data: plan }))
}
