//! OpenAI function-schema rendering for tool declarations

use conductor_domain::ToolDefinition;
use serde_json::{Map, Value, json};

/// Render a tool declaration as an OpenAI `tools` array entry.
pub fn function_schema(definition: &ToolDefinition) -> Value {
    let mut properties = Map::new();
    let mut required: Vec<Value> = Vec::new();

    for param in &definition.parameters {
        properties.insert(
            param.name.clone(),
            json!({
                "type": param.param_type,
                "description": param.description,
            }),
        );
        if param.required {
            required.push(Value::String(param.name.clone()));
        }
    }

    json!({
        "type": "function",
        "function": {
            "name": definition.name,
            "description": definition.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
        },
    })
}
