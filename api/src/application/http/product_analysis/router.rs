use super::handlers::{
    analyze_image::{__path_analyze_image, MAX_IMAGE_SIZE, analyze_image},
    clear_history::{__path_clear_history, clear_history},
    get_history::{__path_get_history, get_history},
    lookup_barcode::{__path_lookup_barcode, lookup_barcode},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(lookup_barcode, analyze_image))]
pub struct ProductApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_history, clear_history))]
pub struct HistoryApiDoc;

pub fn product_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/products/image", state.args.server.root_path),
            // Multipart framing on top of the image itself.
            post(analyze_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .route(
            &format!("{}/products/{{barcode}}", state.args.server.root_path),
            get(lookup_barcode),
        )
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history).delete(clear_history),
        )
}
