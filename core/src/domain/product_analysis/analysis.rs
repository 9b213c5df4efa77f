use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::{
        extractor::extract_json,
        ports::LLMClient,
        prompts::{
            build_barcode_search_prompt, build_image_search_prompt,
            build_structured_analysis_prompt,
        },
        schema::get_product_analysis_schema,
        value_objects::{AnalysisDraft, AnalyzedProduct, ImageInput, ProductRecord},
    },
};

/// Analyzes a product database record with schema-constrained generation.
///
/// The image falls back from the record's own image to the one named by the
/// model; the placeholder is applied when the analysis is identified.
pub async fn analyze_structured<L: LLMClient>(
    llm_client: &L,
    record: &ProductRecord,
) -> Result<AnalyzedProduct, CoreError> {
    let prompt = build_structured_analysis_prompt(record);

    let raw_response = llm_client
        .generate_with_schema(prompt, get_product_analysis_schema())
        .await
        .map_err(|e| {
            error!("Structured analysis call failed: {}", e);
            CoreError::AnalysisFailed
        })?;

    let mut product = AnalysisDraft::parse(&raw_response)?.validate()?;

    if let Some(source_image) = record.image_url() {
        product.image_url = Some(source_image.to_string());
    }

    Ok(product)
}

/// Asks the model to find the product on the web by barcode alone.
pub async fn analyze_barcode_with_search<L: LLMClient>(
    llm_client: &L,
    barcode: &str,
) -> Result<AnalyzedProduct, CoreError> {
    let prompt = build_barcode_search_prompt(barcode);
    analyze_with_search(llm_client, prompt, None).await
}

/// Asks the model to identify the product in a photo and research it on the web.
pub async fn analyze_image_with_search<L: LLMClient>(
    llm_client: &L,
    image: ImageInput,
) -> Result<AnalyzedProduct, CoreError> {
    let image_reference = image.to_data_url();
    let prompt = build_image_search_prompt();

    let mut product = analyze_with_search(llm_client, prompt, Some(image)).await?;
    if product.image_url.is_none() {
        product.image_url = Some(image_reference);
    }

    Ok(product)
}

async fn analyze_with_search<L: LLMClient>(
    llm_client: &L,
    prompt: String,
    image: Option<ImageInput>,
) -> Result<AnalyzedProduct, CoreError> {
    let response = llm_client
        .generate_with_search(prompt, image)
        .await
        .map_err(|e| {
            error!("Web search analysis call failed: {}", e);
            CoreError::AnalysisFailed
        })?;

    let json_text = extract_json(&response.text);
    debug!(sources = response.sources.len(), "Parsing grounded analysis");

    let mut product = AnalysisDraft::parse(json_text)?.validate()?;
    product.sources = Some(response.sources);

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product_analysis::{
        entities::Source, ports::MockLLMClient, value_objects::GroundedResponse,
    };
    use serde_json::json;

    const NUTELLA_JSON: &str = r#"{"productName":"Nutella","score":25,"recommendation":"High in sugar, enjoy sparingly.","organizedData":{"sugar":"56.3g","fat":"30.9g"}}"#;

    fn record(value: serde_json::Value) -> ProductRecord {
        match value {
            serde_json::Value::Object(map) => ProductRecord::new(map),
            _ => unreachable!(),
        }
    }

    fn answering_schema(response: Result<String, CoreError>) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_schema()
            .times(1)
            .returning(move |_, _| {
                let response = response.clone();
                Box::pin(async move { response })
            });
        llm
    }

    fn answering_search(text: String, sources: Vec<Source>) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_search()
            .times(1)
            .returning(move |_, _| {
                let response = GroundedResponse {
                    text: text.clone(),
                    sources: sources.clone(),
                };
                Box::pin(async move { Ok(response) })
            });
        llm
    }

    #[tokio::test]
    async fn test_structured_prefers_source_image() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_schema()
            .times(1)
            .withf(|prompt, _| prompt.contains("https://off/img.jpg"))
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"{"productName":"Nutella","imageUrl":"https://model/img.jpg","score":25,"recommendation":"r","organizedData":{}}"#.to_string())
                })
            });
        let record = record(json!({ "image_url": "https://off/img.jpg", "nutriments": { "a": 1 } }));

        let product = analyze_structured(&llm, &record).await.unwrap();

        assert_eq!(product.image_url.as_deref(), Some("https://off/img.jpg"));
    }

    #[tokio::test]
    async fn test_structured_falls_back_to_model_image() {
        let llm = answering_schema(Ok(
            r#"{"productName":"Nutella","imageUrl":"https://model/img.jpg","score":25,"recommendation":"r","organizedData":{}}"#.to_string(),
        ));
        let record = record(json!({ "ingredients_text": "sugar" }));

        let product = analyze_structured(&llm, &record).await.unwrap();

        assert_eq!(product.image_url.as_deref(), Some("https://model/img.jpg"));
        assert_eq!(product.sources, None);
    }

    #[tokio::test]
    async fn test_structured_transport_error_is_analysis_failure() {
        let llm = answering_schema(Err(CoreError::ExternalServiceError(
            "timeout".to_string(),
        )));

        let result = analyze_structured(&llm, &record(json!({}))).await;

        assert_eq!(result, Err(CoreError::AnalysisFailed));
    }

    #[tokio::test]
    async fn test_search_extracts_fenced_json_and_maps_sources() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_search()
            .times(1)
            .withf(|prompt, image| prompt.contains("3017620422003") && image.is_none())
            .returning(|_, _| {
                Box::pin(async {
                    Ok(GroundedResponse {
                        text: format!("Here you go:\n```json\n{}\n```", NUTELLA_JSON),
                        sources: vec![Source {
                            title: "openfoodfacts.org".to_string(),
                            uri: "https://world.openfoodfacts.org/product/3017620422003".to_string(),
                        }],
                    })
                })
            });

        let product = analyze_barcode_with_search(&llm, "3017620422003")
            .await
            .unwrap();

        assert_eq!(product.product_name, "Nutella");
        assert_eq!(product.sources.as_ref().map(Vec::len), Some(1));
        assert_eq!(product.image_url, None);
    }

    #[tokio::test]
    async fn test_search_rejects_prose_only_answer() {
        let llm = answering_search("I could not find that product.".to_string(), vec![]);

        let result = analyze_barcode_with_search(&llm, "0000").await;

        assert_eq!(result, Err(CoreError::AnalysisFailed));
    }

    #[tokio::test]
    async fn test_image_falls_back_to_data_url() {
        let image = ImageInput {
            data: vec![0xFF, 0xD8],
            mime_type: "image/jpeg".to_string(),
        };
        let expected = image.clone();
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_search()
            .times(1)
            .withf(move |_, sent| sent.as_ref() == Some(&expected))
            .returning(|_, _| {
                Box::pin(async {
                    Ok(GroundedResponse {
                        text: NUTELLA_JSON.to_string(),
                        sources: vec![],
                    })
                })
            });

        let product = analyze_image_with_search(&llm, image.clone()).await.unwrap();

        assert_eq!(product.image_url, Some(image.to_data_url()));
        assert_eq!(product.sources, Some(vec![]));
    }
}
