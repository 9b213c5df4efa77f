use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    common::{ProductSourceConfig, entities::app_errors::CoreError},
    product_analysis::{ports::ProductSource, value_objects::ProductRecord},
};

/// Open Food Facts v2 product endpoint.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OpenFoodFactsResponse {
    status: Option<i64>,
    product: Option<Map<String, Value>>,
}

impl OpenFoodFactsClient {
    pub fn new(config: &ProductSourceConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            client: Client::new(),
        }
    }
}

impl ProductSource for OpenFoodFactsClient {
    async fn fetch_product(&self, barcode: &str) -> Result<ProductRecord, CoreError> {
        let url = format!(
            "{}/api/v2/product/{}.json",
            self.base_url,
            urlencoding::encode(barcode)
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Product source request failed: {}", e);
                CoreError::ExternalServiceError(format!("Product source error: {}", e))
            })?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Product source returned no product");
            return Err(CoreError::ProductNotFound);
        }

        let body: OpenFoodFactsResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse product source response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse product source response: {}", e))
        })?;

        if body.status == Some(0) {
            return Err(CoreError::ProductNotFound);
        }
        let product = body.product.ok_or(CoreError::ProductNotFound)?;

        let record = ProductRecord::new(product);
        if !record.is_complete() {
            tracing::debug!("Product record has neither nutrients nor ingredients");
            return Err(CoreError::IncompleteData);
        }

        Ok(record)
    }
}
