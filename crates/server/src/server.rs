//! MCP server handler: tool dispatch, resources, server metadata.

use crate::tools;
use dogmcp_api::adapter::DogApiAdapter;
use dogmcp_api::model::{BreedQuery, ImageQuery, NameSearchQuery};
use dogmcp_api::reference::{self, CONFIG_URI, POPULAR_BREEDS_URI};
use rmcp::model::{
    Annotated, CallToolRequestParam, CallToolResult, Content, Implementation, ListResourcesResult,
    ListToolsResult, PaginatedRequestParam, ProtocolVersion, RawResource, ReadResourceRequestParam,
    ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData, ServerHandler};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Why a tool call could not be dispatched. Upstream failures never show up
/// here; those are folded into the returned envelope text.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Clone)]
pub struct DogApiServer {
    adapter: DogApiAdapter,
}

impl DogApiServer {
    #[must_use]
    pub fn new(adapter: DogApiAdapter) -> Self {
        Self { adapter }
    }

    /// Route one tool call to its operation and serialize the envelope.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown tool name or arguments that do not
    /// decode into the operation's parameters.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> Result<String, DispatchError> {
        debug!(tool = name, "dispatching tool call");
        match name {
            tools::GET_RANDOM_DOG_IMAGE => {
                let query: ImageQuery = parse_args(arguments)?;
                Ok(self.adapter.fetch_random_images(&query).await.to_text())
            }
            tools::GET_DOG_BREEDS => {
                let query: BreedQuery = parse_args(arguments)?;
                Ok(self.adapter.list_breeds(&query).await.to_text())
            }
            tools::SEARCH_DOG_IMAGES => {
                let query: NameSearchQuery = parse_args(arguments)?;
                Ok(self
                    .adapter
                    .search_images_by_breed_name(&query)
                    .await
                    .to_text())
            }
            tools::CHECK_DOG_API_STATUS => Ok(self.adapter.check_api_status().await.to_text()),
            other => Err(DispatchError::UnknownTool(other.to_string())),
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, DispatchError> {
    serde_json::from_value(arguments).map_err(|e| DispatchError::InvalidArguments(e.to_string()))
}

/// The two addressable read-only resources.
#[must_use]
pub fn resource_catalog() -> Vec<Resource> {
    vec![
        resource(
            CONFIG_URI,
            "Dog API configuration",
            "Upstream API metadata, authentication scheme, rate limits, and setup steps.",
        ),
        resource(
            POPULAR_BREEDS_URI,
            "Popular dog breeds",
            "Popular breed name/id/category triples with usage examples.",
        ),
    ]
}

/// Serialize the reference document behind a resource URI, if any.
#[must_use]
pub fn resource_text(uri: &str) -> Option<String> {
    let doc = match uri {
        CONFIG_URI => reference::configuration_document(),
        POPULAR_BREEDS_URI => reference::popular_breeds_document(),
        _ => return None,
    };
    Some(serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string()))
}

fn resource(uri: &str, name: &str, description: &str) -> Resource {
    let mut raw = RawResource::new(uri, name.to_string());
    raw.description = Some(description.to_string());
    raw.mime_type = Some("application/json".to_string());
    Annotated::new(raw, None)
}

impl ServerHandler for DogApiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "dogmcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(
                "Tools for The Dog API: random dog images, breed listings, breed-name image \
                 search, and a connectivity/status check. The config://dog-api and \
                 data://popular-breeds resources describe the upstream API and common breeds."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: tools::catalog(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = Value::Object(request.arguments.unwrap_or_default());
        let text = self
            .dispatch(&request.name, arguments)
            .await
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            resources: resource_catalog(),
            ..Default::default()
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let Some(text) = resource_text(&request.uri) else {
            return Err(ErrorData::resource_not_found(
                format!("unknown resource: {}", request.uri),
                None,
            ));
        };
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }
}
