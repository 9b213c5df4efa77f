pub mod common;
pub mod meal_plan;
pub mod product_analysis;
pub mod profile;
pub mod storage;
