use std::time::Duration;

use clap::{Parser, ValueEnum};
use nutriscan_core::domain::common::{
    LLMConfig, NutriScanConfig, ProductSourceConfig, StorageConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriscan-api", version, about = "NutriScan food product analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub product_source: ProductSourceArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-structured-model",
        env = "GEMINI_STRUCTURED_MODEL",
        default_value = "gemini-2.5-pro"
    )]
    pub gemini_structured_model: String,

    #[arg(
        long = "gemini-search-model",
        env = "GEMINI_SEARCH_MODEL",
        default_value = "gemini-2.5-flash"
    )]
    pub gemini_search_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    #[arg(id = "llm_timeout_secs", long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProductSourceArgs {
    #[arg(
        long = "product-source-url",
        env = "PRODUCT_SOURCE_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub url: String,

    #[arg(
        id = "product_source_timeout_secs",
        long = "product-source-timeout-secs",
        env = "PRODUCT_SOURCE_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    /// Directory holding `scanned_history.json` and `user_profile.json`.
    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl From<Args> for NutriScanConfig {
    fn from(args: Args) -> Self {
        NutriScanConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_structured_model: args.llm.gemini_structured_model,
                gemini_search_model: args.llm.gemini_search_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            product_source: ProductSourceConfig {
                base_url: args.product_source.url,
                timeout: Duration::from_secs(args.product_source.timeout_secs),
            },
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
        }
    }
}
