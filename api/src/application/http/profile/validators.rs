use nutriscan_core::domain::profile::entities::HealthGoals;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateGoalsValidator {
    #[validate(range(max = 20000, message = "calories must be at most 20000"))]
    #[schema(example = 2000)]
    pub calories: u32,
    #[validate(range(max = 2000, message = "protein must be at most 2000"))]
    #[schema(example = 150)]
    pub protein: u32,
    #[validate(range(max = 2000, message = "carbs must be at most 2000"))]
    #[schema(example = 200)]
    pub carbs: u32,
    #[validate(range(max = 2000, message = "fat must be at most 2000"))]
    #[schema(example = 70)]
    pub fat: u32,
}

impl From<UpdateGoalsValidator> for HealthGoals {
    fn from(payload: UpdateGoalsValidator) -> Self {
        HealthGoals {
            calories: payload.calories,
            protein: payload.protein,
            carbs: payload.carbs,
            fat: payload.fat,
        }
    }
}
