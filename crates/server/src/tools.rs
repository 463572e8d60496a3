//! The tool catalog: names, descriptions, input schemas, and annotations.
//!
//! Schemas are declared by hand; defaults are surfaced in the schema so
//! clients can render sensible forms. All four tools are HTTP GETs
//! upstream, so they share read-only GET-semantics annotations.

use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use serde_json::{Value, json};
use std::sync::Arc;

pub const GET_RANDOM_DOG_IMAGE: &str = "get_random_dog_image";
pub const GET_DOG_BREEDS: &str = "get_dog_breeds";
pub const SEARCH_DOG_IMAGES: &str = "search_dog_images";
pub const CHECK_DOG_API_STATUS: &str = "check_dog_api_status";

/// List the tools exposed by this server.
#[must_use]
pub fn catalog() -> Vec<Tool> {
    vec![
        tool(
            GET_RANDOM_DOG_IMAGE,
            "Get random dog images with optional breed and category filtering.",
            json!({
                "type": "object",
                "properties": {
                    "breed_id": {
                        "type": "string",
                        "description": "Optional breed ID to filter by specific breed"
                    },
                    "category_ids": {
                        "type": "string",
                        "description": "Optional category IDs (comma-separated) to filter by"
                    },
                    "format": {
                        "type": "string",
                        "enum": ["json", "src"],
                        "default": "json",
                        "description": "Response format"
                    },
                    "limit": {
                        "type": "integer",
                        "default": 1,
                        "description": "Number of images to return (1-10)"
                    }
                }
            }),
        ),
        tool(
            GET_DOG_BREEDS,
            "Get list of dog breeds with detailed information.",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "default": 10,
                        "description": "Number of breeds to return (1-100)"
                    },
                    "page": {
                        "type": "integer",
                        "default": 0,
                        "description": "Page number for pagination"
                    },
                    "search": {
                        "type": "string",
                        "description": "Search term to filter breeds by name"
                    }
                }
            }),
        ),
        tool(
            SEARCH_DOG_IMAGES,
            "Search for dog images by breed name.",
            json!({
                "type": "object",
                "properties": {
                    "breed_name": {
                        "type": "string",
                        "description": "Name of the dog breed to search for"
                    },
                    "limit": {
                        "type": "integer",
                        "default": 5,
                        "description": "Number of images to return (1-10)"
                    },
                    "has_breeds": {
                        "type": "boolean",
                        "default": true,
                        "description": "Whether to include breed information"
                    }
                },
                "required": ["breed_name"]
            }),
        ),
        tool(
            CHECK_DOG_API_STATUS,
            "Check the status and configuration of The Dog API connection.",
            json!({
                "type": "object",
                "properties": {}
            }),
        ),
    ]
}

fn tool(name: &'static str, description: &'static str, input_schema: Value) -> Tool {
    let schema_obj = input_schema
        .as_object()
        .cloned()
        .unwrap_or_else(JsonObject::new);
    let mut tool = Tool::new(name, description, Arc::new(schema_obj));
    tool.annotations = Some(get_annotations());
    tool
}

/// Annotations for GET-backed tools: read-only, idempotent, open-world.
fn get_annotations() -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(true),
        destructive_hint: Some(false),
        idempotent_hint: Some(true),
        open_world_hint: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::{SEARCH_DOG_IMAGES, catalog};
    use serde_json::{Value, json};

    #[test]
    fn catalog_exposes_the_four_operations() {
        let names: Vec<String> = catalog().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "get_random_dog_image",
                "get_dog_breeds",
                "search_dog_images",
                "check_dog_api_status"
            ]
        );
    }

    #[test]
    fn breed_name_is_the_only_required_argument() {
        for tool in catalog() {
            let required = tool
                .input_schema
                .get("required")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            if tool.name == SEARCH_DOG_IMAGES {
                assert_eq!(required, vec![json!("breed_name")]);
            } else {
                assert!(required.is_empty(), "unexpected required in {}", tool.name);
            }
        }
    }

    #[test]
    fn schemas_surface_documented_defaults() {
        let tools = catalog();
        let image_tool = &tools[0];
        let props = image_tool
            .input_schema
            .get("properties")
            .and_then(Value::as_object)
            .expect("properties");
        assert_eq!(props["limit"]["default"], json!(1));
        assert_eq!(props["format"]["default"], json!("json"));

        let search_tool = &tools[2];
        let props = search_tool
            .input_schema
            .get("properties")
            .and_then(Value::as_object)
            .expect("properties");
        assert_eq!(props["limit"]["default"], json!(5));
        assert_eq!(props["has_breeds"]["default"], json!(true));
    }

    #[test]
    fn all_tools_are_annotated_read_only() {
        for tool in catalog() {
            let annotations = tool.annotations.as_ref().expect("annotations");
            assert_eq!(annotations.read_only_hint, Some(true));
            assert_eq!(annotations.destructive_hint, Some(false));
            assert_eq!(annotations.open_world_hint, Some(true));
        }
    }
}
