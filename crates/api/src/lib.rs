//! Typed adapter over The Dog API (<https://docs.thedogapi.com/>).
//!
//! This crate owns everything between "a caller handed us structured
//! parameters" and "we hand back one serialized result document":
//! parameter clamping, upstream request construction, response
//! normalization, and the uniform success/error envelope. It knows nothing
//! about MCP; the `dogmcp-server` crate wires these operations to a
//! protocol surface.

pub mod adapter;
pub mod client;
pub mod config;
pub mod envelope;
pub mod model;
mod params;
pub mod reference;
