use crate::domain::meal_plan::value_objects::GenerateMealPlanInput;

const EMPTY_HISTORY: &str = "The user has not scanned any items yet.";

/// Summarizes scanned product names as a preference hint.
pub fn summarize_history(product_names: &[&str]) -> String {
    if product_names.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    format!(
        "The user has recently scanned these items, which can indicate their preferences: {}.",
        product_names.join(", ")
    )
}

pub fn build_meal_plan_prompt(input: &GenerateMealPlanInput, product_names: &[&str]) -> String {
    format!(
        "You are an expert nutritionist and meal planner. \
Create a balanced and healthy 7-day meal plan based on the user's preferences.\n\
User's Health Goals: \"{health_goals}\"\n\
User's Favorite Foods: \"{favorite_foods}\"\n\
User's Dietary Restrictions/Preferences: \"{dietary_restrictions}\"\n\
{history}\n\
Your task is to generate a complete 7-day meal plan (Breakfast, Lunch, Dinner) and a corresponding shopping list.\n\
- The meal plan should be varied and aligned with the user's goals.\n\
- Provide simple recipe ideas for each meal.\n\
- Estimate nutritional information for each meal.\n\
- The shopping list should be categorized and include quantities.\n\
Your response must be a single JSON object that adheres to the provided schema.",
        health_goals = input.health_goals,
        favorite_foods = input.favorite_foods,
        dietary_restrictions = input.dietary_restrictions,
        history = summarize_history(product_names),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> GenerateMealPlanInput {
        GenerateMealPlanInput {
            health_goals: "Lose weight".to_string(),
            favorite_foods: "Salmon, avocado".to_string(),
            dietary_restrictions: "No dairy".to_string(),
        }
    }

    #[test]
    fn test_empty_history_sentence() {
        let prompt = build_meal_plan_prompt(&input(), &[]);

        assert!(prompt.contains("The user has not scanned any items yet."));
        assert!(prompt.contains("User's Health Goals: \"Lose weight\""));
        assert!(prompt.contains("User's Dietary Restrictions/Preferences: \"No dairy\""));
    }

    #[test]
    fn test_placeholders_in_user_text_are_kept_verbatim() {
        let input = GenerateMealPlanInput {
            health_goals: "Eat {favorite_foods} daily".to_string(),
            favorite_foods: "Rice".to_string(),
            dietary_restrictions: "{history}".to_string(),
        };

        let prompt = build_meal_plan_prompt(&input, &["{dietary_restrictions} bar"]);

        assert!(prompt.contains("User's Health Goals: \"Eat {favorite_foods} daily\""));
        assert!(prompt.contains("User's Dietary Restrictions/Preferences: \"{history}\""));
        assert!(prompt.contains(": {dietary_restrictions} bar."));
    }

    #[test]
    fn test_history_names_are_comma_joined() {
        let summary = summarize_history(&["Nutella", "Greek Yogurt", "Oat Milk"]);

        assert!(summary.ends_with(": Nutella, Greek Yogurt, Oat Milk."));
    }
}
