use serde_json::json;

/// Returns the JSON schema for product analysis LLM responses
pub fn get_product_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string" },
            "imageUrl": { "type": "string" },
            "score": {
                "type": "number",
                "description": "Health score from 0 to 100, 100 is healthiest."
            },
            "recommendation": { "type": "string" },
            "organizedData": {
                "type": "object",
                "properties": {
                    "calories": { "type": "string" },
                    "fat": { "type": "string" },
                    "carbohydrates": { "type": "string" },
                    "sugar": { "type": "string" },
                    "protein": { "type": "string" },
                    "ingredients": { "type": "string" }
                },
                "description": "Key nutritional facts. Values should be strings (e.g., '10g')."
            }
        },
        "required": ["productName", "score", "recommendation", "organizedData"]
    })
}
