//! Tool invocation input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A request to run one named operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// The name of the operation to execute.
    pub name: String,

    /// The arguments to pass to the operation. Absent means `{}`.
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

fn empty_arguments() -> Value {
    Value::Object(Default::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_arguments_default_to_empty_object() {
        let invocation: ToolInvocation = serde_json::from_value(json!({"name": "videos_list"})).unwrap();
        assert_eq!(invocation.name, "videos_list");
        assert_eq!(invocation.arguments, json!({}));
    }

    #[test]
    fn test_arguments_kept_verbatim() {
        let invocation: ToolInvocation = serde_json::from_value(json!({
            "name": "videos_rate",
            "arguments": {"id": "abc", "rating": "like"}
        }))
        .unwrap();
        assert_eq!(invocation.arguments["rating"], "like");
    }
}
