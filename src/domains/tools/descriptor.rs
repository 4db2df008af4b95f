//! Operation descriptors: the static declaration of one callable tool.

use reqwest::Method;
use rmcp::model::Tool;
use std::sync::Arc;

use super::schema::ParamSchema;
use crate::domains::auth::Capability;

/// Where and how an operation reaches the REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    /// Path relative to the API base URL. `{name}` segments are filled from
    /// the argument of the same name instead of the query string.
    pub path: &'static str,
    /// Argument forwarded verbatim as the JSON request body.
    pub body: Option<&'static str>,
}

impl Endpoint {
    pub fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &'static str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::DELETE, path)
    }

    fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            body: None,
        }
    }

    /// Send the `body` argument as the JSON request body.
    pub fn with_body(mut self) -> Self {
        self.body = Some("body");
        self
    }

    /// Names of the `{placeholder}` segments in the path template.
    pub fn path_params(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
            .collect()
    }

    /// Whether an argument is routed into the path or body rather than the query.
    pub fn is_routed_elsewhere(&self, name: &str) -> bool {
        self.body == Some(name) || self.path_params().contains(&name)
    }
}

/// Name, contract, endpoint and required capability of one tool.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub schema: ParamSchema,
    pub endpoint: Endpoint,
    pub capability: Capability,
}

impl OperationDescriptor {
    /// An operation any credential mode may call.
    pub fn read(
        name: &'static str,
        description: &'static str,
        endpoint: Endpoint,
        schema: ParamSchema,
    ) -> Self {
        Self {
            name,
            description,
            schema,
            endpoint,
            capability: Capability::ReadOnly,
        }
    }

    /// An operation that needs OAuth (read/write) credentials.
    pub fn write(
        name: &'static str,
        description: &'static str,
        endpoint: Endpoint,
        schema: ParamSchema,
    ) -> Self {
        Self {
            capability: Capability::ReadWrite,
            ..Self::read(name, description, endpoint, schema)
        }
    }

    pub fn requires_write_capability(&self) -> bool {
        self.capability == Capability::ReadWrite
    }

    /// Create a Tool model for this operation (metadata for `tools/list`).
    pub fn to_tool(&self) -> Tool {
        let description = if self.requires_write_capability() {
            format!("{} Requires OAuth credentials.", self.description)
        } else {
            self.description.to_string()
        };

        Tool {
            name: self.name.into(),
            description: Some(description.into()),
            input_schema: Arc::new(self.schema.to_json_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
