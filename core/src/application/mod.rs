use crate::{
    domain::common::{NutriScanConfig, services::Service},
    infrastructure::{
        llm::gemini_client::GeminiLLMClient,
        product_source::open_food_facts::OpenFoodFactsClient,
        storage::json_file_repository::JsonFileStateRepository,
    },
};

pub type NutriScanService =
    Service<OpenFoodFactsClient, GeminiLLMClient, JsonFileStateRepository>;

pub async fn create_service(config: NutriScanConfig) -> Result<NutriScanService, anyhow::Error> {
    if config.llm.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is empty, AI analysis calls will be rejected");
    }

    let product_source = OpenFoodFactsClient::new(&config.product_source);
    let llm_client = GeminiLLMClient::new(&config.llm);
    let state_repository = JsonFileStateRepository::new(&config.storage);

    tokio::fs::create_dir_all(state_repository.data_dir()).await?;

    Ok(Service::new(product_source, llm_client, state_repository).await)
}
