use serde_json::json;

fn meal_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "recipe": { "type": "string", "description": "A brief recipe or preparation instructions." },
            "nutrition": {
                "type": "object",
                "properties": {
                    "calories": { "type": "string" },
                    "protein": { "type": "string" },
                    "fat": { "type": "string" },
                    "carbohydrates": { "type": "string" }
                },
                "required": ["calories", "protein", "fat", "carbohydrates"]
            }
        },
        "required": ["name", "recipe", "nutrition"]
    })
}

/// Returns the JSON schema for weekly meal plan LLM responses
pub fn get_weekly_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "weeklyPlan": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": {
                            "type": "string",
                            "enum": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
                        },
                        "meals": {
                            "type": "object",
                            "properties": {
                                "breakfast": meal_schema(),
                                "lunch": meal_schema(),
                                "dinner": meal_schema()
                            },
                            "required": ["breakfast", "lunch", "dinner"]
                        }
                    },
                    "required": ["day", "meals"]
                }
            },
            "shoppingList": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "item": { "type": "string" },
                        "quantity": { "type": "string" },
                        "category": { "type": "string", "description": "e.g., Produce, Dairy, Protein, Pantry" }
                    },
                    "required": ["item", "quantity", "category"]
                }
            }
        },
        "required": ["weeklyPlan", "shoppingList"]
    })
}
