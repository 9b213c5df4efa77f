pub mod generate_meal_plan;
pub mod get_latest_meal_plan;
