//! The four callable operations over The Dog API.
//!
//! Every operation returns exactly one [`Envelope`]; upstream failures are
//! folded into error documents here and never propagate to the caller.
//! There is one conditional branch point (whether the breed-name search
//! issues its dependent second request) and a uniform error-mapping stage
//! per operation; no other control flow.

use crate::client::{DogApiClient, UpstreamError};
use crate::envelope::{Envelope, ErrorEnvelope, Status, now_iso};
use crate::model::{
    ApiStatusReport, BreedImageSearch, BreedList, BreedQuery, BreedRecord, ImageQuery,
    ImageRecord, NameSearchQuery, RandomImages, SearchImageRecord, SearchedBreed, UpstreamBreed,
    UpstreamImage,
};
use crate::params;
use serde_json::{Value, json};
use tracing::{debug, warn};

/// The request adapter. Stateless apart from the shared client handle, so
/// concurrent invocations need no coordination.
#[derive(Clone)]
pub struct DogApiAdapter {
    client: DogApiClient,
}

impl DogApiAdapter {
    #[must_use]
    pub fn new(client: DogApiClient) -> Self {
        Self { client }
    }

    /// Random dog images with optional breed/category filtering.
    ///
    /// An out-of-range `limit` is reset to 1 (not clamped) before the
    /// upstream call.
    pub async fn fetch_random_images(&self, query: &ImageQuery) -> Envelope<RandomImages> {
        let limit = params::reset_outside(query.limit, 1..=10, 1);

        let mut upstream_query = vec![
            ("limit", limit.to_string()),
            ("format", query.format.to_string()),
        ];
        if let Some(breed_id) = &query.breed_id {
            upstream_query.push(("breed_ids", breed_id.clone()));
        }
        if let Some(category_ids) = &query.category_ids {
            upstream_query.push(("category_ids", category_ids.clone()));
        }

        debug!(limit, format = %query.format, "fetching random images");
        match self
            .client
            .get_json::<Vec<UpstreamImage>>("/images/search", &upstream_query)
            .await
        {
            Ok(images) => Envelope::Success(RandomImages {
                status: Status::Success,
                count: images.len(),
                images: images.into_iter().map(ImageRecord::from).collect(),
            }),
            Err(UpstreamError::Status { status, body }) => Envelope::Error(
                ErrorEnvelope::new(format!("API request failed with status {status}"))
                    .with_details(body),
            ),
            Err(UpstreamError::Timeout) => Envelope::Error(
                ErrorEnvelope::new("Request timeout - The Dog API took too long to respond")
                    .with_suggestion("Please try again in a moment"),
            ),
            Err(err) => {
                warn!(error = %err, "image search failed");
                Envelope::Error(
                    ErrorEnvelope::new(format!("Unexpected error: {err}")).with_timestamp(),
                )
            }
        }
    }

    /// List dog breeds with detailed information, paginated.
    pub async fn list_breeds(&self, query: &BreedQuery) -> Envelope<BreedList> {
        let limit = params::reset_outside(query.limit, 1..=100, 10);
        let page = params::reset_outside(query.page, 0..=i64::MAX, 0);

        let mut upstream_query = vec![("limit", limit.to_string()), ("page", page.to_string())];
        if let Some(search) = &query.search {
            upstream_query.push(("q", search.clone()));
        }

        match self
            .client
            .get_json::<Vec<UpstreamBreed>>("/breeds", &upstream_query)
            .await
        {
            Ok(breeds) => Envelope::Success(BreedList {
                status: Status::Success,
                count: breeds.len(),
                page,
                breeds: breeds.into_iter().map(BreedRecord::from).collect(),
            }),
            Err(UpstreamError::Status { status, body }) => Envelope::Error(
                ErrorEnvelope::new(format!("Failed to fetch breeds with status {status}"))
                    .with_details(body),
            ),
            Err(UpstreamError::Timeout) => Envelope::Error(
                ErrorEnvelope::new("Request timeout while fetching dog breeds").with_suggestion(
                    "Please try again with a smaller limit or check your connection",
                ),
            ),
            Err(err) => Envelope::Error(
                ErrorEnvelope::new(format!("Error fetching dog breeds: {err}")).with_timestamp(),
            ),
        }
    }

    /// Search for images by breed name: resolve the name to a breed id,
    /// then fetch images for that id.
    ///
    /// The second request is only issued when the name resolves; `limit`
    /// uses min/max clamping here, unlike the other operations.
    pub async fn search_images_by_breed_name(
        &self,
        query: &NameSearchQuery,
    ) -> Envelope<BreedImageSearch> {
        let name = query.breed_name.as_str();

        let matches = match self
            .client
            .get_json::<Vec<SearchedBreed>>("/breeds/search", &[("q", name.to_string())])
            .await
        {
            Ok(matches) => matches,
            Err(UpstreamError::Status { .. }) => {
                return Envelope::Error(
                    ErrorEnvelope::new(format!("Failed to search for breed '{name}'"))
                        .with_suggestion("Check the breed name spelling or try a different breed"),
                );
            }
            Err(err) => return Envelope::Error(generic_search_error(name, &err)),
        };

        let Some(breed) = matches.into_iter().next() else {
            return Envelope::Error(
                ErrorEnvelope::new(format!("No breeds found matching '{name}'")).with_suggestion(
                    "Try searching for popular breeds like 'Golden Retriever', 'Labrador', 'Poodle'",
                ),
            );
        };

        debug!(breed_id = breed.id, breed = %breed.name, "resolved breed name");
        let limit = params::clamp_into(query.limit, 1..=10);
        let upstream_query = vec![
            ("breed_ids", breed.id.to_string()),
            ("limit", limit.to_string()),
            ("has_breeds", String::from(if query.has_breeds { "1" } else { "0" })),
        ];

        match self
            .client
            .get_json::<Vec<UpstreamImage>>("/images/search", &upstream_query)
            .await
        {
            Ok(images) => Envelope::Success(BreedImageSearch {
                status: Status::Success,
                breed_searched: name.to_string(),
                breed_found: breed.name,
                count: images.len(),
                images: images.into_iter().map(SearchImageRecord::from).collect(),
            }),
            Err(UpstreamError::Status { body, .. }) => Envelope::Error(
                ErrorEnvelope::new(format!("Failed to fetch images for {name}")).with_details(body),
            ),
            Err(err) => Envelope::Error(generic_search_error(name, &err)),
        }
    }

    /// Connectivity and configuration report for the upstream API.
    ///
    /// The probe runs without the API key; a configured key is classified
    /// by a second, authenticated request to a key-gated endpoint. Degraded
    /// upstream states are reported in the document rather than as hard
    /// failures.
    pub async fn check_api_status(&self) -> Envelope<ApiStatusReport> {
        let mut report = ApiStatusReport {
            timestamp: now_iso(),
            api_status: "unknown".to_string(),
            api_key_configured: self.client.api_key_configured(),
            base_url: self.client.base_url().to_string(),
            connectivity: "unknown".to_string(),
            configuration: status_configuration_block(),
            api_key_status: None,
            note: None,
            error_details: None,
            troubleshooting: status_troubleshooting_block(),
        };

        match self
            .client
            .probe("/images/search", &[("limit", "1".to_string())], false)
            .await
        {
            Ok(()) => {
                report.api_status = "operational".to_string();
                report.connectivity = "successful".to_string();

                if self.client.api_key_configured() {
                    match self.client.probe("/breeds", &[], true).await {
                        Ok(()) => report.api_key_status = Some("valid".to_string()),
                        Err(UpstreamError::Status { .. }) => {
                            report.api_key_status = Some("invalid".to_string());
                        }
                        Err(UpstreamError::Timeout) => {
                            return Envelope::Error(status_timeout_envelope());
                        }
                        Err(err) => return Envelope::Error(status_generic_envelope(&err)),
                    }
                } else {
                    report.api_key_status = Some("not_configured".to_string());
                    report.note =
                        Some("API key not set. Some features may be limited.".to_string());
                }
            }
            Err(UpstreamError::Status { status, body }) => {
                warn!(status, "status probe failed");
                report.api_status = "error".to_string();
                report.connectivity = format!("failed_with_status_{status}");
                report.error_details = Some(body);
            }
            Err(UpstreamError::Timeout) => return Envelope::Error(status_timeout_envelope()),
            Err(err) => return Envelope::Error(status_generic_envelope(&err)),
        }

        Envelope::Success(report)
    }
}

fn generic_search_error(name: &str, err: &UpstreamError) -> ErrorEnvelope {
    ErrorEnvelope::new(format!("Error searching for {name} images: {err}")).with_timestamp()
}

fn status_timeout_envelope() -> ErrorEnvelope {
    ErrorEnvelope::new("Connection timeout to The Dog API")
        .with_troubleshooting(json!({
            "suggestions": [
                "Check your internet connection",
                "Try again in a few moments",
                "Verify The Dog API is operational"
            ]
        }))
        .with_timestamp()
}

fn status_generic_envelope(err: &UpstreamError) -> ErrorEnvelope {
    ErrorEnvelope::new(format!("Failed to check API status: {err}")).with_timestamp()
}

fn status_configuration_block() -> Value {
    json!({
        "timeout": "10 seconds",
        "max_images_per_request": 10,
        "supported_formats": ["json", "src"]
    })
}

fn status_troubleshooting_block() -> Value {
    json!({
        "api_key_setup": "Set DOG_API_KEY environment variable",
        "get_api_key": "Visit https://thedogapi.com to get a free API key",
        "common_issues": [
            "Check internet connection",
            "Verify API key is correct",
            "Ensure rate limits are not exceeded"
        ]
    })
}
