use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::{
    product_analysis::{entities::History, ports::LLMClient, ports::ProductSource},
    storage::{entities::ClientState, ports::ClientStateRepository},
};

/// Owns the outbound ports and the in-memory client state.
///
/// History and profile are loaded once at construction and written back
/// through the repository after every mutation.
#[derive(Clone)]
pub struct Service<PS, LLM, ST>
where
    PS: ProductSource,
    LLM: LLMClient,
    ST: ClientStateRepository,
{
    pub(crate) product_source: PS,
    pub(crate) llm_client: LLM,
    pub(crate) state_repository: ST,
    pub(crate) state: Arc<RwLock<ClientState>>,
}

impl<PS, LLM, ST> Service<PS, LLM, ST>
where
    PS: ProductSource,
    LLM: LLMClient,
    ST: ClientStateRepository,
{
    pub async fn new(product_source: PS, llm_client: LLM, state_repository: ST) -> Self {
        let history = match state_repository.load_history().await {
            Ok(entries) => History::from(entries),
            Err(e) => {
                warn!("Failed to load scan history, starting empty: {}", e);
                History::default()
            }
        };

        let profile = match state_repository.load_profile().await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Failed to load user profile, using defaults: {}", e);
                None
            }
        };

        info!(
            history_len = history.len(),
            has_profile = profile.is_some(),
            "Client state loaded"
        );

        Self {
            product_source,
            llm_client,
            state_repository,
            state: Arc::new(RwLock::new(ClientState {
                history,
                profile,
                latest_meal_plan: None,
            })),
        }
    }
}
