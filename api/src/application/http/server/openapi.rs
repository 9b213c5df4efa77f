use crate::application::http::{
    health::__path_health,
    meal_plan::router::MealPlanApiDoc,
    product_analysis::router::{HistoryApiDoc, ProductApiDoc},
    profile::router::ProfileApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriScan API",
        description = "Food product analysis, scan history and AI meal planning"
    ),
    paths(health),
    nest(
        (path = "/products", api = ProductApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/meal-plans", api = MealPlanApiDoc),
    )
)]
pub struct ApiDoc;
