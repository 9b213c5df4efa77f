use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    product_analysis::{
        entities::Source,
        ports::LLMClient,
        value_objects::{GroundedResponse, ImageInput},
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    structured_model: String,
    search_model: String,
    base_url: String,
    timeout: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

impl Candidate {
    fn text(&self) -> String {
        self.content
            .iter()
            .flat_map(|content| &content.parts)
            .filter_map(|part| part.text.as_deref())
            .collect()
    }

    /// Web citations only; chunks without a URI are dropped.
    fn sources(&self) -> Vec<Source> {
        self.grounding_metadata
            .iter()
            .flat_map(|metadata| &metadata.grounding_chunks)
            .filter_map(|chunk| chunk.web.as_ref())
            .filter_map(|web| {
                web.uri.as_ref().map(|uri| Source {
                    title: web.title.clone().unwrap_or_default(),
                    uri: uri.clone(),
                })
            })
            .collect()
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            structured_model: config.gemini_structured_model.clone(),
            search_model: config.gemini_search_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(
        &self,
        model_name: &str,
        request: GeminiRequest,
    ) -> Result<Candidate, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_schema(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
            tools: None,
        };

        let text = self
            .call_gemini_api(&self.structured_model, request)
            .await?
            .text();

        if text.trim().is_empty() {
            return Err(CoreError::ExternalServiceError(
                "Empty response from LLM".to_string(),
            ));
        }

        Ok(text)
    }

    async fn generate_with_search(
        &self,
        prompt: String,
        image: Option<ImageInput>,
    ) -> Result<GroundedResponse, CoreError> {
        let mut parts = Vec::with_capacity(2);
        if let Some(image) = image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    data: image.to_base64(),
                    mime_type: image.mime_type,
                },
            });
        }
        parts.push(Part::Text { text: prompt });

        // Search grounding cannot be combined with a JSON response schema.
        let request = GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: None,
            tools: Some(vec![Tool {
                google_search: GoogleSearch {},
            }]),
        };

        let candidate = self.call_gemini_api(&self.search_model, request).await?;
        let sources = candidate.sources();
        tracing::debug!(sources = sources.len(), "Grounded response received");

        Ok(GroundedResponse {
            text: candidate.text(),
            sources,
        })
    }
}
