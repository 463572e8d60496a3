//! MCP surface for the Dog API adapter.
//!
//! The operations themselves live in `dogmcp-api`; this crate only
//! describes them as MCP tools/resources and routes protocol requests to
//! them.

pub mod server;
pub mod tools;
