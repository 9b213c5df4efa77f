use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::WeeklyPlan, value_objects::GenerateMealPlanInput},
};

pub trait MealPlanService: Send + Sync {
    /// Builds a fresh plan from the preferences and the current scan history.
    fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<WeeklyPlan, CoreError>> + Send;

    /// Most recently generated plan, if any was generated since startup.
    fn get_latest_meal_plan(
        &self,
    ) -> impl Future<Output = Result<Option<WeeklyPlan>, CoreError>> + Send;
}
