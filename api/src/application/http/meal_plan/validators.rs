use nutriscan_core::domain::meal_plan::value_objects::GenerateMealPlanInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanValidator {
    #[validate(
        length(max = 2000, message = "healthGoals must be at most 2000 characters"),
        custom(function = "not_blank")
    )]
    #[schema(example = "Lose 5kg while keeping energy up for running")]
    pub health_goals: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "favoriteFoods must be at most 2000 characters"))]
    #[schema(example = "Salmon, avocado, oatmeal")]
    pub favorite_foods: String,
    #[serde(default)]
    #[validate(length(
        max = 2000,
        message = "dietaryRestrictions must be at most 2000 characters"
    ))]
    #[schema(example = "Lactose intolerant")]
    pub dietary_restrictions: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("healthGoals must not be empty".into());
        return Err(error);
    }
    Ok(())
}

impl From<GenerateMealPlanValidator> for GenerateMealPlanInput {
    fn from(payload: GenerateMealPlanValidator) -> Self {
        GenerateMealPlanInput {
            health_goals: payload.health_goals.trim().to_string(),
            favorite_foods: payload.favorite_foods.trim().to_string(),
            dietary_restrictions: payload.dietary_restrictions.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_goals_are_rejected() {
        let payload = GenerateMealPlanValidator {
            health_goals: "   ".to_string(),
            favorite_foods: String::new(),
            dietary_restrictions: String::new(),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let payload: GenerateMealPlanValidator =
            serde_json::from_str(r#"{"healthGoals":"Eat more protein"}"#).unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.favorite_foods, "");
    }
}
