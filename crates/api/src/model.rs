//! Request and response data model.
//!
//! Query types deserialize straight from tool-call arguments. Output types
//! serialize into the envelopes returned to callers; absent upstream
//! scalars pass through as `null`, while the documented "Unknown" / empty
//! defaults are applied during mapping. Wire types mirror only the
//! upstream fields we surface and ignore the rest.

use crate::envelope::Status;
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "Unknown";

/// Upstream response format for image search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Json,
    Src,
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Src => f.write_str("src"),
        }
    }
}

/// Arguments for the random-image fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageQuery {
    pub breed_id: Option<String>,
    pub category_ids: Option<String>,
    pub format: ImageFormat,
    pub limit: i64,
}

impl Default for ImageQuery {
    fn default() -> Self {
        Self {
            breed_id: None,
            category_ids: None,
            format: ImageFormat::Json,
            limit: 1,
        }
    }
}

/// Arguments for the breed listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BreedQuery {
    pub limit: i64,
    pub page: i64,
    pub search: Option<String>,
}

impl Default for BreedQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 0,
            search: None,
        }
    }
}

/// Arguments for the breed-name image search. `breed_name` is the only
/// required argument on the whole tool surface.
#[derive(Debug, Clone, Deserialize)]
pub struct NameSearchQuery {
    pub breed_name: String,
    #[serde(default = "NameSearchQuery::default_limit")]
    pub limit: i64,
    #[serde(default = "NameSearchQuery::default_has_breeds")]
    pub has_breeds: bool,
}

impl NameSearchQuery {
    fn default_limit() -> i64 {
        5
    }

    fn default_has_breeds() -> bool {
        true
    }
}

/// Success payload of the random-image fetch.
#[derive(Debug, Serialize)]
pub struct RandomImages {
    pub status: Status,
    pub count: usize,
    pub images: Vec<ImageRecord>,
}

#[derive(Debug, Serialize)]
pub struct ImageRecord {
    pub id: Option<String>,
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<BreedSummary>,
}

/// Condensed breed info attached to an image.
#[derive(Debug, Serialize)]
pub struct BreedSummary {
    pub name: Option<String>,
    pub temperament: Option<String>,
    pub life_span: Option<String>,
    pub weight: String,
    pub height: String,
}

/// Success payload of the breed listing.
#[derive(Debug, Serialize)]
pub struct BreedList {
    pub status: Status,
    pub count: usize,
    pub page: i64,
    pub breeds: Vec<BreedRecord>,
}

#[derive(Debug, Serialize)]
pub struct BreedRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub temperament: Option<String>,
    pub life_span: Option<String>,
    pub alt_names: String,
    pub wikipedia_url: Option<String>,
    pub origin: String,
    pub weight_metric: String,
    pub height_metric: String,
    pub bred_for: String,
    pub breed_group: String,
    pub reference_image_id: Option<String>,
}

/// Success payload of the breed-name image search.
#[derive(Debug, Serialize)]
pub struct BreedImageSearch {
    pub status: Status,
    pub breed_searched: String,
    pub breed_found: String,
    pub count: usize,
    pub images: Vec<SearchImageRecord>,
}

#[derive(Debug, Serialize)]
pub struct SearchImageRecord {
    pub id: Option<String>,
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_details: Option<BreedDetails>,
}

#[derive(Debug, Serialize)]
pub struct BreedDetails {
    pub name: Option<String>,
    pub temperament: Option<String>,
    pub bred_for: Option<String>,
    pub life_span: Option<String>,
}

/// Success payload of the status check. Not `status`-tagged: this document
/// is a report, and degraded upstream states are still reported here rather
/// than as hard failures.
#[derive(Debug, Serialize)]
pub struct ApiStatusReport {
    pub timestamp: String,
    pub api_status: String,
    pub api_key_configured: bool,
    pub base_url: String,
    pub connectivity: String,
    pub configuration: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    pub troubleshooting: serde_json::Value,
}

// ---- upstream wire shapes ----

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamImage {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) width: Option<i64>,
    #[serde(default)]
    pub(crate) height: Option<i64>,
    #[serde(default)]
    pub(crate) breeds: Vec<UpstreamBreed>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamBreed {
    #[serde(default)]
    pub(crate) id: Option<i64>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) temperament: Option<String>,
    #[serde(default)]
    pub(crate) life_span: Option<String>,
    #[serde(default)]
    pub(crate) weight: Option<UpstreamMeasure>,
    #[serde(default)]
    pub(crate) height: Option<UpstreamMeasure>,
    #[serde(default)]
    pub(crate) bred_for: Option<String>,
    #[serde(default)]
    pub(crate) breed_group: Option<String>,
    #[serde(default)]
    pub(crate) origin: Option<String>,
    #[serde(default)]
    pub(crate) alt_names: Option<String>,
    #[serde(default)]
    pub(crate) wikipedia_url: Option<String>,
    #[serde(default)]
    pub(crate) reference_image_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamMeasure {
    #[serde(default)]
    pub(crate) metric: Option<String>,
}

/// One match from the breed name search. `id` and `name` are required:
/// without them the dependent image lookup cannot proceed.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchedBreed {
    pub(crate) id: i64,
    pub(crate) name: String,
}

fn metric_or_unknown(measure: Option<UpstreamMeasure>) -> String {
    measure
        .and_then(|m| m.metric)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

impl From<UpstreamImage> for ImageRecord {
    fn from(img: UpstreamImage) -> Self {
        // Upstream may attach several breeds to one image; only the first
        // entry is surfaced.
        let breed = img.breeds.into_iter().next().map(BreedSummary::from);
        Self {
            id: img.id,
            url: img.url,
            width: img.width,
            height: img.height,
            breed,
        }
    }
}

impl From<UpstreamBreed> for BreedSummary {
    fn from(breed: UpstreamBreed) -> Self {
        Self {
            name: breed.name,
            temperament: breed.temperament,
            life_span: breed.life_span,
            weight: metric_or_unknown(breed.weight),
            height: metric_or_unknown(breed.height),
        }
    }
}

impl From<UpstreamBreed> for BreedRecord {
    fn from(breed: UpstreamBreed) -> Self {
        Self {
            id: breed.id,
            name: breed.name,
            temperament: breed.temperament,
            life_span: breed.life_span,
            alt_names: breed.alt_names.unwrap_or_default(),
            wikipedia_url: breed.wikipedia_url,
            origin: or_unknown(breed.origin),
            weight_metric: metric_or_unknown(breed.weight),
            height_metric: metric_or_unknown(breed.height),
            bred_for: or_unknown(breed.bred_for),
            breed_group: or_unknown(breed.breed_group),
            reference_image_id: breed.reference_image_id,
        }
    }
}

impl From<UpstreamImage> for SearchImageRecord {
    fn from(img: UpstreamImage) -> Self {
        let breed_details = img.breeds.into_iter().next().map(BreedDetails::from);
        Self {
            id: img.id,
            url: img.url,
            width: img.width,
            height: img.height,
            breed_details,
        }
    }
}

impl From<UpstreamBreed> for BreedDetails {
    fn from(breed: UpstreamBreed) -> Self {
        Self {
            name: breed.name,
            temperament: breed.temperament,
            bred_for: breed.bred_for,
            life_span: breed.life_span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BreedRecord, ImageRecord, UpstreamImage};
    use serde_json::json;

    #[test]
    fn image_mapping_surfaces_only_the_first_breed() {
        let img: UpstreamImage = serde_json::from_value(json!({
            "id": "abc",
            "url": "https://cdn2.thedogapi.com/images/abc.jpg",
            "width": 800,
            "height": 600,
            "breeds": [
                {"name": "Akita", "weight": {"metric": "29 - 52"}},
                {"name": "Beagle"}
            ]
        }))
        .expect("wire image");

        let record = ImageRecord::from(img);
        let breed = record.breed.expect("first breed surfaced");
        assert_eq!(breed.name.as_deref(), Some("Akita"));
        assert_eq!(breed.weight, "29 - 52");
        assert_eq!(breed.height, "Unknown");
    }

    #[test]
    fn image_mapping_omits_breed_for_empty_list() {
        let img: UpstreamImage =
            serde_json::from_value(json!({"id": "x", "url": null})).expect("wire image");
        let record = ImageRecord::from(img);
        assert!(record.breed.is_none());
    }

    #[test]
    fn breed_record_applies_defaults_per_field() {
        let breed: super::UpstreamBreed = serde_json::from_value(json!({
            "id": 1,
            "name": "Affenpinscher",
            "weight": {"metric": "3 - 6"},
            "bred_for": "Small rodent hunting"
        }))
        .expect("wire breed");

        let record = BreedRecord::from(breed);
        assert_eq!(record.weight_metric, "3 - 6");
        assert_eq!(record.height_metric, "Unknown");
        assert_eq!(record.origin, "Unknown");
        assert_eq!(record.breed_group, "Unknown");
        assert_eq!(record.bred_for, "Small rodent hunting");
        assert_eq!(record.alt_names, "");
        assert!(record.wikipedia_url.is_none());
    }
}
