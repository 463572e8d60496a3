//! Fixed reference documents served as read-only resources.
//!
//! Pure constants: no network access, deterministic across calls.

use crate::config::DEFAULT_BASE_URL;
use serde_json::{Value, json};

/// Logical URI of the configuration document.
pub const CONFIG_URI: &str = "config://dog-api";

/// Logical URI of the popular-breeds document.
pub const POPULAR_BREEDS_URI: &str = "data://popular-breeds";

/// Descriptive document for The Dog API: metadata, features, auth scheme,
/// rate limits, and setup steps.
#[must_use]
pub fn configuration_document() -> Value {
    json!({
        "api_name": "The Dog API",
        "provider": "That API Company",
        "base_url": DEFAULT_BASE_URL,
        "documentation": "https://docs.thedogapi.com/",
        "features": {
            "random_images": "Get random dog images with breed filtering",
            "breed_search": "Search and list dog breeds with detailed info",
            "image_search": "Find images by specific breed name",
            "breed_info": "Detailed breed characteristics and temperament"
        },
        "authentication": {
            "type": "API Key",
            "header": "x-api-key",
            "required": "Optional (some features limited without key)",
            "signup": "https://thedogapi.com"
        },
        "rate_limits": {
            "free_tier": "1000 requests per month",
            "with_api_key": "Higher limits available"
        },
        "supported_formats": ["json", "src"],
        "max_images_per_request": 10,
        "setup_instructions": [
            "1. Visit https://thedogapi.com",
            "2. Sign up for a free account",
            "3. Get your API key from the dashboard",
            "4. Set DOG_API_KEY environment variable",
            "5. Restart the MCP server"
        ]
    })
}

/// Popular breed name/id/category triples plus usage examples, for quick
/// experimentation against the tool surface.
#[must_use]
pub fn popular_breeds_document() -> Value {
    json!({
        "popular_breeds": [
            {"name": "Golden Retriever", "id": "golden", "category": "Sporting"},
            {"name": "Labrador Retriever", "id": "labrador", "category": "Sporting"},
            {"name": "German Shepherd", "id": "german_shepherd", "category": "Herding"},
            {"name": "French Bulldog", "id": "french_bulldog", "category": "Non-Sporting"},
            {"name": "Bulldog", "id": "bulldog", "category": "Non-Sporting"},
            {"name": "Poodle", "id": "poodle", "category": "Non-Sporting"},
            {"name": "Beagle", "id": "beagle", "category": "Hound"},
            {"name": "Rottweiler", "id": "rottweiler", "category": "Working"},
            {"name": "Yorkshire Terrier", "id": "yorkshire_terrier", "category": "Toy"},
            {"name": "German Shorthaired Pointer", "id": "german_shorthaired_pointer", "category": "Sporting"}
        ],
        "usage_examples": {
            "get_random_image": "get_random_dog_image(breed_id='golden')",
            "search_breed": "get_dog_breeds(search='retriever')",
            "find_images": "search_dog_images(breed_name='German Shepherd')"
        },
        "categories": [
            "Sporting", "Hound", "Working", "Terrier",
            "Toy", "Non-Sporting", "Herding", "Misc"
        ],
        "note": "These are some of the most popular dog breeds. The API supports hundreds of breeds."
    })
}

#[cfg(test)]
mod tests {
    use super::{configuration_document, popular_breeds_document};

    #[test]
    fn documents_are_deterministic() {
        assert_eq!(configuration_document(), configuration_document());
        assert_eq!(popular_breeds_document(), popular_breeds_document());
    }

    #[test]
    fn configuration_document_describes_the_auth_scheme() {
        let doc = configuration_document();
        assert_eq!(doc["authentication"]["header"], "x-api-key");
        assert_eq!(doc["max_images_per_request"], 10);
        assert_eq!(doc["supported_formats"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn popular_breeds_document_lists_ten_breeds_and_eight_categories() {
        let doc = popular_breeds_document();
        assert_eq!(doc["popular_breeds"].as_array().map(Vec::len), Some(10));
        assert_eq!(doc["categories"].as_array().map(Vec::len), Some(8));
    }
}
