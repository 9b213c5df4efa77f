use crate::domain::product_analysis::value_objects::ProductRecord;

const STRUCTURED_ANALYSIS_TEMPLATE: &str = "You are an expert food nutritionist. \
Based on the following data for a food product, provide a detailed analysis. \
The data is: {product_data}. \
Your response must be a single JSON object adhering to the provided schema. \
'productName' and 'imageUrl' should be extracted from the data.";

const RESPONSE_SHAPE: &str = "Your response must be a single JSON object with the following structure: \
{ \"productName\": \"...\", \"score\": ..., \"recommendation\": \"...\", \"organizedData\": { \"calories\": \"...\", \"fat\": \"...\", \"carbohydrates\": \"...\", \"sugar\": \"...\", \"protein\": \"...\", \"ingredients\": \"...\" } }. \
The score should be a health score from 0 to 100, where 100 is healthiest. \
The organizedData values should be strings (e.g., '10g').";

const BARCODE_SEARCH_TEMPLATE: &str = "Using Google Search, find nutritional information for the food product with barcode: {barcode}. \
After finding the data, act as an expert food nutritionist. {response_shape}";

const IMAGE_SEARCH_TEMPLATE: &str = "From the provided image of a food product, identify the product. \
Then, use this identification to search for its nutritional information using Google Search. \
After finding the data, act as an expert food nutritionist. {response_shape}";

pub fn build_structured_analysis_prompt(record: &ProductRecord) -> String {
    STRUCTURED_ANALYSIS_TEMPLATE.replace("{product_data}", &record.to_json_string())
}

pub fn build_barcode_search_prompt(barcode: &str) -> String {
    BARCODE_SEARCH_TEMPLATE
        .replace("{response_shape}", RESPONSE_SHAPE)
        .replace("{barcode}", barcode)
}

pub fn build_image_search_prompt() -> String {
    IMAGE_SEARCH_TEMPLATE.replace("{response_shape}", RESPONSE_SHAPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_prompt_embeds_record() {
        let record = match json!({ "product_name": "Nutella", "nutriments": { "sugars_100g": 56.3 } }) {
            serde_json::Value::Object(map) => ProductRecord::new(map),
            _ => unreachable!(),
        };

        let prompt = build_structured_analysis_prompt(&record);

        assert!(prompt.contains(r#""product_name":"Nutella""#));
        assert!(prompt.contains("sugars_100g"));
        assert!(!prompt.contains("{product_data}"));
    }

    #[test]
    fn test_barcode_prompt_embeds_barcode_and_shape() {
        let prompt = build_barcode_search_prompt("3017620422003");

        assert!(prompt.contains("barcode: 3017620422003"));
        assert!(prompt.contains("\"organizedData\""));
        assert!(!prompt.contains("{barcode}"));
        assert!(!prompt.contains("{response_shape}"));
    }

    #[test]
    fn test_image_prompt_requests_identification() {
        let prompt = build_image_search_prompt();

        assert!(prompt.starts_with("From the provided image"));
        assert!(prompt.contains("\"productName\""));
    }
}
