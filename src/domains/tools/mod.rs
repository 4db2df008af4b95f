//! Tools domain module.
//!
//! Every YouTube operation is exposed as one MCP tool. Tools are data, not
//! code: each is an `OperationDescriptor` interpreted by the single generic
//! `Dispatcher`.
//!
//! ## Architecture
//!
//! - `definitions/` - The operation catalog, one file per resource group
//! - `schema.rs` - Parameter contracts, validation and JSON Schema rendering
//! - `descriptor.rs` - Operation descriptor and REST endpoint
//! - `registry.rs` - Ordered catalog lookup and tool metadata
//! - `dispatcher.rs` - Validate, gate, route and execute one invocation
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Operation
//!
//! 1. Declare its descriptor in the matching file under `definitions/`
//! 2. Choose `OperationDescriptor::read` or `::write` for its capability
//!
//! The registry, router and HTTP transport pick it up automatically.

pub mod definitions;
pub mod descriptor;
mod dispatcher;
mod error;
mod invocation;
mod registry;
pub mod router;
pub mod schema;

pub use descriptor::{Endpoint, OperationDescriptor};
pub use dispatcher::{Dispatcher, build_request};
pub use error::ToolError;
pub use invocation::ToolInvocation;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use schema::{Field, Kind, ParamSchema, SchemaViolation};
