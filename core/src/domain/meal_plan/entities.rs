use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealNutrition {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbohydrates: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub name: String,
    pub recipe: String,
    pub nutrition: MealNutrition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyPlan {
    pub day: Weekday,
    pub meals: DayMeals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItem {
    pub item: String,
    pub quantity: String,
    pub category: String,
}

/// Seven-day plan plus the groceries needed to cook it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub weekly_plan: Vec<DailyPlan>,
    pub shopping_list: Vec<ShoppingListItem>,
}

impl WeeklyPlan {
    /// Exactly one entry per weekday.
    pub fn validate(self) -> Result<Self, CoreError> {
        if self.weekly_plan.len() != Weekday::ALL.len() {
            return Err(CoreError::GenerationFailed);
        }

        let days: HashSet<Weekday> = self.weekly_plan.iter().map(|plan| plan.day).collect();
        if days.len() != Weekday::ALL.len() {
            return Err(CoreError::GenerationFailed);
        }

        Ok(self)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn meal(name: &str) -> Meal {
        Meal {
            name: name.to_string(),
            recipe: "Mix and serve.".to_string(),
            nutrition: MealNutrition {
                calories: "400 kcal".to_string(),
                protein: "20g".to_string(),
                fat: "10g".to_string(),
                carbohydrates: "50g".to_string(),
            },
        }
    }

    pub(crate) fn plan_for(days: &[Weekday]) -> WeeklyPlan {
        WeeklyPlan {
            weekly_plan: days
                .iter()
                .map(|day| DailyPlan {
                    day: *day,
                    meals: DayMeals {
                        breakfast: meal("Oatmeal"),
                        lunch: meal("Lentil salad"),
                        dinner: meal("Grilled salmon"),
                    },
                })
                .collect(),
            shopping_list: vec![ShoppingListItem {
                item: "Rolled oats".to_string(),
                quantity: "500g".to_string(),
                category: "Pantry".to_string(),
            }],
        }
    }

    #[test]
    fn test_full_week_is_valid() {
        assert!(plan_for(&Weekday::ALL).validate().is_ok());
    }

    #[test]
    fn test_short_week_is_rejected() {
        let result = plan_for(&Weekday::ALL[..6]).validate();

        assert_eq!(result, Err(CoreError::GenerationFailed));
    }

    #[test]
    fn test_duplicate_day_is_rejected() {
        let mut days = Weekday::ALL;
        days[6] = Weekday::Monday;

        let result = plan_for(&days).validate();

        assert_eq!(result, Err(CoreError::GenerationFailed));
    }

    #[test]
    fn test_wire_format_uses_camel_case_and_day_names() {
        let value = serde_json::to_value(plan_for(&Weekday::ALL)).unwrap();

        assert_eq!(value["weeklyPlan"][0]["day"], "Monday");
        assert_eq!(value["weeklyPlan"][6]["day"], "Sunday");
        assert_eq!(value["shoppingList"][0]["category"], "Pantry");
        assert_eq!(
            value["weeklyPlan"][0]["meals"]["dinner"]["nutrition"]["carbohydrates"],
            "50g"
        );
    }
}
