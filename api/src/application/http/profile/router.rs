use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    update_goals::{__path_update_goals, update_goals},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profile, update_goals))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile),
        )
        .route(
            &format!("{}/profile/goals", state.args.server.root_path),
            put(update_goals),
        )
}
