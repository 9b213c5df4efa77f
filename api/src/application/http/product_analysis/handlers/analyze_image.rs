use axum::extract::{Multipart, State};
use nutriscan_core::domain::product_analysis::{
    ports::ProductAnalysisService,
    value_objects::{AnalyzeImageInput, ImageInput},
};

use crate::application::http::{
    product_analysis::handlers::lookup_barcode::ProductAnalysisResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[utoipa::path(
    post,
    path = "/image",
    tag = "products",
    summary = "Analyze a product photo",
    description = "Identifies the product in the uploaded image and researches it with AI web search. Expects a multipart form with an `image` field.",
    responses(
        (status = 200, body = ProductAnalysisResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, description = "The image could not be analyzed", body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ProductAnalysisResponse>, ApiError> {
    let mut image: Option<ImageInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .filter(|content_type| !content_type.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("Image is empty".to_string()));
        }

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(ImageInput {
            data: data.to_vec(),
            mime_type,
        });
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let outcome = state
        .service
        .analyze_image(AnalyzeImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductAnalysisResponse::from(outcome)))
}
