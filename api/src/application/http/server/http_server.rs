use std::sync::Arc;

use crate::application::http::{
    health::health_routes,
    meal_plan::router::meal_plan_routes,
    product_analysis::router::product_analysis_routes,
    profile::router::profile_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use nutriscan_core::{application::create_service, domain::common::NutriScanConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = NutriScanConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let openapi_json = openapi.clone();

    let router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(
            &api_docs_url,
            axum::routing::get(move || {
                let openapi = openapi_json.clone();
                async move { axum::Json(openapi) }
            }),
        )
        .merge(product_analysis_routes(state.clone()))
        .merge(profile_routes(state.clone()))
        .merge(meal_plan_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
