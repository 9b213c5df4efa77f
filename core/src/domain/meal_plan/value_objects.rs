/// Free-text preferences entered by the user.
#[derive(Debug, Clone, Default)]
pub struct GenerateMealPlanInput {
    pub health_goals: String,
    pub favorite_foods: String,
    pub dietary_restrictions: String,
}
