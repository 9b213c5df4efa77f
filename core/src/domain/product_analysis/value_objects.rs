use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::entities::{
        NutrientValue, PLACEHOLDER_IMAGE_URL, ProductAnalysis, ResolutionOrigin, Source,
    },
};

#[derive(Debug, Clone)]
pub struct LookupBarcodeInput {
    pub barcode: String,
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image: ImageInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub analysis: ProductAnalysis,
    pub origin: ResolutionOrigin,
}

/// Raw product record as returned by the product database.
///
/// Interpretation is left to the LLM; the accessors only cover what the
/// pipeline itself needs to decide on.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    raw: Map<String, Value>,
}

impl ProductRecord {
    pub fn new(raw: Map<String, Value>) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn image_url(&self) -> Option<&str> {
        self.non_empty_str("image_url")
    }

    pub fn product_name(&self) -> Option<&str> {
        self.non_empty_str("product_name")
    }

    pub fn nutriments(&self) -> Option<&Map<String, Value>> {
        self.raw
            .get("nutriments")
            .and_then(Value::as_object)
            .filter(|nutriments| !nutriments.is_empty())
    }

    pub fn ingredients_text(&self) -> Option<&str> {
        self.non_empty_str("ingredients_text")
    }

    pub fn has_nutrients(&self) -> bool {
        self.nutriments().is_some()
    }

    pub fn has_ingredients(&self) -> bool {
        self.ingredients_text().is_some()
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.raw
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// A record with neither a nutrient table nor an ingredient list is not worth analyzing.
    pub fn is_complete(&self) -> bool {
        self.has_nutrients() || self.has_ingredients()
    }

    pub fn to_json_string(&self) -> String {
        Value::Object(self.raw.clone()).to_string()
    }
}

/// Binary image plus its media type, as uploaded by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

/// Free-form model output together with the web citations it was grounded on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundedResponse {
    pub text: String,
    pub sources: Vec<Source>,
}

/// Shape of the analysis JSON returned by the model, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDraft {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub organized_data: Option<Map<String, Value>>,
}

impl AnalysisDraft {
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        serde_json::from_str(text).map_err(|e| {
            tracing::error!("Failed to parse analysis JSON: {}", e);
            CoreError::AnalysisFailed
        })
    }

    /// Checks the required fields and turns the draft into an analysis
    /// that still lacks its identity.
    pub fn validate(self) -> Result<AnalyzedProduct, CoreError> {
        let product_name = self
            .product_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| invalid("productName is missing"))?;

        let score = self
            .score
            .filter(|score| score.is_finite() && (0.0..=100.0).contains(score))
            .ok_or_else(|| invalid("score is missing or outside 0-100"))?;

        let recommendation = self
            .recommendation
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| invalid("recommendation is missing"))?;

        let organized_data = self
            .organized_data
            .map(nutrient_values)
            .ok_or_else(|| invalid("organizedData is missing"))?;

        Ok(AnalyzedProduct {
            product_name,
            image_url: self.image_url.filter(|url| !url.is_empty()),
            score: score.round() as u8,
            recommendation,
            organized_data,
            sources: None,
        })
    }
}

/// Keeps text and numeric facts; nulls, booleans and nested values are dropped.
fn nutrient_values(raw: Map<String, Value>) -> BTreeMap<String, NutrientValue> {
    raw.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, NutrientValue::Text(text))),
            Value::Number(number) => number.as_f64().map(|n| (key, NutrientValue::Number(n))),
            _ => None,
        })
        .collect()
}

fn invalid(reason: &str) -> CoreError {
    tracing::error!("Analysis response rejected: {}", reason);
    CoreError::AnalysisFailed
}

/// Validated analysis not yet tagged with an id.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedProduct {
    pub product_name: String,
    pub image_url: Option<String>,
    pub score: u8,
    pub recommendation: String,
    pub organized_data: BTreeMap<String, NutrientValue>,
    pub sources: Option<Vec<Source>>,
}

impl AnalyzedProduct {
    pub fn identify(self, id: String, barcode: Option<String>) -> ProductAnalysis {
        ProductAnalysis {
            id,
            barcode,
            product_name: self.product_name,
            image_url: self
                .image_url
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            score: self.score,
            recommendation: self.recommendation,
            organized_data: self.organized_data,
            sources: self.sources,
        }
    }
}
