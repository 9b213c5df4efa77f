use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::{
        entities::ProductAnalysis,
        value_objects::{
            AnalyzeImageInput, GroundedResponse, ImageInput, LookupBarcodeInput, LookupOutcome,
            ProductRecord,
        },
    },
};

/// Public product database queried by barcode
#[cfg_attr(test, mockall::automock)]
pub trait ProductSource: Send + Sync {
    /// Fails with `ProductNotFound` or `IncompleteData`; the record is returned unmodified.
    fn fetch_product(
        &self,
        barcode: &str,
    ) -> impl Future<Output = Result<ProductRecord, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Schema-constrained generation; the returned text is JSON conforming to `response_schema`.
    fn generate_with_schema(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Unconstrained generation with live web search enabled.
    fn generate_with_search(
        &self,
        prompt: String,
        image: Option<ImageInput>,
    ) -> impl Future<Output = Result<GroundedResponse, CoreError>> + Send;
}

/// Service trait for product resolution and history
pub trait ProductAnalysisService: Send + Sync {
    fn lookup_barcode(
        &self,
        input: LookupBarcodeInput,
    ) -> impl Future<Output = Result<LookupOutcome, CoreError>> + Send;

    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<LookupOutcome, CoreError>> + Send;

    fn get_history(&self) -> impl Future<Output = Result<Vec<ProductAnalysis>, CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
