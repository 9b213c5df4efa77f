use std::time::Duration;

use chrono::{DateTime, Utc};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriScanConfig {
    pub llm: LLMConfig,
    pub product_source: ProductSourceConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    /// Model used for schema-constrained generation.
    pub gemini_structured_model: String,
    /// Model used for web-search grounded generation.
    pub gemini_search_model: String,
    pub gemini_base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ProductSourceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: String,
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Identifier for analyses that have no barcode, e.g. `image-1718031234567`.
pub fn generate_image_id() -> String {
    format!("image-{}", generate_timestamp().timestamp_millis())
}
