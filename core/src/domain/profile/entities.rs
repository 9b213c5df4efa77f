use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Daily nutrition targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthGoals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Default for HealthGoals {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 150,
            carbs: 200,
            fat: 70,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub goals: HealthGoals,
}

impl UserProfile {
    pub fn new(goals: HealthGoals) -> Self {
        Self { goals }
    }
}
