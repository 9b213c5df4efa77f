use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_image_id, services::Service},
    product_analysis::{
        analysis::{analyze_barcode_with_search, analyze_image_with_search, analyze_structured},
        entities::{ProductAnalysis, ResolutionOrigin},
        ports::{LLMClient, ProductAnalysisService, ProductSource},
        resolution::{
            Effect, IMAGE_FAILED_MESSAGE, ResolutionEvent, ResolutionState, transition,
        },
        value_objects::{AnalyzeImageInput, LookupBarcodeInput, LookupOutcome},
    },
    storage::ports::ClientStateRepository,
};

impl<PS, LLM, ST> ProductAnalysisService for Service<PS, LLM, ST>
where
    PS: ProductSource,
    LLM: LLMClient,
    ST: ClientStateRepository,
{
    #[instrument(skip(self), fields(barcode = %input.barcode))]
    async fn lookup_barcode(&self, input: LookupBarcodeInput) -> Result<LookupOutcome, CoreError> {
        let barcode = input.barcode.trim().to_string();
        if barcode.is_empty() {
            return Err(CoreError::Invalid);
        }

        let mut current = transition(ResolutionState::Idle, ResolutionEvent::Start { barcode });

        while let Some(effect) = current.effect.take() {
            let event = match effect {
                Effect::CheckCache { barcode } => {
                    let state = self.state.read().await;
                    match state.history.find_by_barcode(&barcode) {
                        Some(cached) => {
                            info!("Resolved from history");
                            ResolutionEvent::CacheHit(cached.clone())
                        }
                        None => ResolutionEvent::CacheMiss,
                    }
                }
                Effect::LookupSource { barcode } => {
                    match self.product_source.fetch_product(&barcode).await {
                        Ok(record) => {
                            info!(
                                product = record.product_name().unwrap_or("unknown"),
                                "Product found in source database"
                            );
                            ResolutionEvent::SourceFound(record)
                        }
                        Err(e) => {
                            warn!("Product source lookup failed, falling back to web search: {}", e);
                            ResolutionEvent::SourceFailed(e)
                        }
                    }
                }
                Effect::AnalyzeStructured { record } => {
                    match analyze_structured(&self.llm_client, &record).await {
                        Ok(product) => ResolutionEvent::AnalysisSucceeded(product),
                        Err(_) => {
                            warn!("Structured analysis failed, falling back to web search");
                            ResolutionEvent::AnalysisFailed
                        }
                    }
                }
                Effect::SearchWeb { barcode } => {
                    match analyze_barcode_with_search(&self.llm_client, &barcode).await {
                        Ok(product) => ResolutionEvent::AnalysisSucceeded(product),
                        Err(_) => ResolutionEvent::AnalysisFailed,
                    }
                }
                Effect::Record(analysis) => {
                    self.record_analysis(analysis).await;
                    continue;
                }
            };

            current = transition(current.state, event);
        }

        match current.state {
            ResolutionState::Resolved { analysis, origin } => {
                info!(?origin, product = %analysis.product_name, "Product resolved");
                Ok(LookupOutcome { analysis, origin })
            }
            ResolutionState::Failed { message } => {
                warn!("All resolution stages failed");
                Err(CoreError::Resolution(message))
            }
            state => {
                error!(?state, "Resolution stopped in a non-terminal state");
                Err(CoreError::InternalServerError)
            }
        }
    }

    #[instrument(skip(self, input), fields(mime_type = %input.image.mime_type, bytes = input.image.data.len()))]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<LookupOutcome, CoreError> {
        let product = analyze_image_with_search(&self.llm_client, input.image)
            .await
            .map_err(|_| CoreError::Resolution(IMAGE_FAILED_MESSAGE.to_string()))?;

        let analysis = product.identify(generate_image_id(), None);
        self.record_analysis(analysis.clone()).await;

        Ok(LookupOutcome {
            analysis,
            origin: ResolutionOrigin::Image,
        })
    }

    async fn get_history(&self) -> Result<Vec<ProductAnalysis>, CoreError> {
        let state = self.state.read().await;
        Ok(state.history.as_slice().to_vec())
    }

    #[instrument(skip(self))]
    async fn clear_history(&self) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        state.history.clear();

        if let Err(e) = self.state_repository.save_history(state.history.as_slice()).await {
            error!("Failed to persist cleared history: {}", e);
        }

        info!("History cleared");
        Ok(())
    }
}

impl<PS, LLM, ST> Service<PS, LLM, ST>
where
    PS: ProductSource,
    LLM: LLMClient,
    ST: ClientStateRepository,
{
    /// Prepends to history and writes the history back.
    ///
    /// The state lock is held until the write completes, so writes land in
    /// mutation order. A failed write is logged only; the in-memory history
    /// stays authoritative.
    async fn record_analysis(&self, analysis: ProductAnalysis) {
        let mut state = self.state.write().await;
        state.history.insert(analysis);

        if let Err(e) = self.state_repository.save_history(state.history.as_slice()).await {
            error!("Failed to persist history: {}", e);
        }
    }
}
