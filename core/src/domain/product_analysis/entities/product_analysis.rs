use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/300/200";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysis {
    /// Barcode, or a generated token for image uploads.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub product_name: String,
    pub image_url: String,
    pub score: u8, // 0-100, 100 is healthiest
    pub recommendation: String,
    pub organized_data: BTreeMap<String, NutrientValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

impl ProductAnalysis {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// A nutritional fact, either free text ("10g") or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NutrientValue {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientValue::Text(s) => write!(f, "{}", s),
            NutrientValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Web citation returned by search grounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Source {
    #[serde(default)]
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreBand {
    Good,
    Moderate,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score > 75 {
            ScoreBand::Good
        } else if score > 40 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Poor
        }
    }
}

/// How a lookup was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOrigin {
    History,
    ProductSource,
    WebSearch,
    Image,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(76), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(41), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let analysis = ProductAnalysis {
            id: "3017620422003".to_string(),
            barcode: Some("3017620422003".to_string()),
            product_name: "Nutella".to_string(),
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            score: 25,
            recommendation: "High in sugar".to_string(),
            organized_data: BTreeMap::from([(
                "sugar".to_string(),
                NutrientValue::Text("56.3g".to_string()),
            )]),
            sources: None,
        };

        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["productName"], json!("Nutella"));
        assert_eq!(value["imageUrl"], json!(PLACEHOLDER_IMAGE_URL));
        assert_eq!(value["organizedData"]["sugar"], json!("56.3g"));
        assert!(value.get("sources").is_none());
    }

    #[test]
    fn test_nutrient_value_accepts_text_and_numbers() {
        let data: BTreeMap<String, NutrientValue> =
            serde_json::from_value(json!({ "calories": 539, "fat": "30.9g" })).unwrap();

        assert_eq!(data["calories"], NutrientValue::Number(539.0));
        assert_eq!(data["fat"], NutrientValue::Text("30.9g".to_string()));
        assert_eq!(data["calories"].to_string(), "539");
    }
}
