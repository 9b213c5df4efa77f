use crate::domain::{
    meal_plan::entities::WeeklyPlan, product_analysis::entities::History,
    profile::entities::UserProfile,
};

/// Everything the backend keeps between requests.
///
/// Only history and profile are persisted; the latest meal plan lives for the
/// lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub history: History,
    pub profile: Option<UserProfile>,
    pub latest_meal_plan: Option<WeeklyPlan>,
}
