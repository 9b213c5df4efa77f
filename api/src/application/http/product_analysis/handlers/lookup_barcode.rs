use axum::extract::{Path, State};
use nutriscan_core::domain::product_analysis::{
    entities::{ProductAnalysis, ResolutionOrigin, ScoreBand},
    ports::ProductAnalysisService,
    value_objects::{LookupBarcodeInput, LookupOutcome},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysisResponse {
    pub data: ProductAnalysis,
    pub origin: ResolutionOrigin,
    pub score_band: ScoreBand,
}

impl From<LookupOutcome> for ProductAnalysisResponse {
    fn from(outcome: LookupOutcome) -> Self {
        Self {
            score_band: outcome.analysis.score_band(),
            data: outcome.analysis,
            origin: outcome.origin,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{barcode}",
    tag = "products",
    summary = "Look up a product by barcode",
    description = "Resolves a barcode through the scan history, the product database and AI web search, in that order. Newly analyzed products are added to the history.",
    responses(
        (status = 200, body = ProductAnalysisResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, description = "No stage could resolve the product", body = ApiErrorResponse)
    ),
    params(
        ("barcode" = String, Path, description = "EAN/UPC barcode"),
    ),
)]
pub async fn lookup_barcode(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ProductAnalysisResponse>, ApiError> {
    let outcome = state
        .service
        .lookup_barcode(LookupBarcodeInput { barcode })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductAnalysisResponse::from(outcome)))
}
