//! Tool Registry - the ordered catalog of operations.
//!
//! This module provides:
//! - Lookup of an operation by exact name
//! - Deterministic listing for capability advertisement
//! - Tool metadata (`rmcp::model::Tool`) for `tools/list`

use std::collections::HashMap;

use rmcp::model::Tool;

use super::definitions;
use super::descriptor::OperationDescriptor;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - holds every operation descriptor.
///
/// Built once at startup and shared read-only by every transport.
#[derive(Debug)]
pub struct ToolRegistry {
    operations: Vec<OperationDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create the registry holding the full YouTube catalog.
    pub fn new() -> Self {
        Self::from_operations(definitions::catalog())
    }

    /// Create a registry over an explicit set of operations.
    ///
    /// Later duplicates of a name are ignored so lookups stay unambiguous.
    pub fn from_operations(operations: Vec<OperationDescriptor>) -> Self {
        let mut unique = Vec::with_capacity(operations.len());
        let mut index = HashMap::with_capacity(operations.len());

        for op in operations {
            if index.contains_key(op.name) {
                tracing::warn!("Duplicate operation {} ignored", op.name);
                continue;
            }
            index.insert(op.name, unique.len());
            unique.push(op);
        }

        Self {
            operations: unique,
            index,
        }
    }

    /// All operations, in catalog order.
    pub fn list_operations(&self) -> &[OperationDescriptor] {
        &self.operations
    }

    /// Exact-match lookup; no aliasing or case folding.
    pub fn find_operation(&self, name: &str) -> Option<&OperationDescriptor> {
        self.index.get(name).map(|&i| &self.operations[i])
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both the HTTP transport and the rmcp router advertise these.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.operations.iter().map(OperationDescriptor::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
