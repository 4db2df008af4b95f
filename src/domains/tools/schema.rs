//! Declarative parameter contracts for tools.
//!
//! A [`ParamSchema`] is a tree of field constraints rendered to JSON Schema.
//! The same rendering is advertised in `tools/list` and compiled with
//! `jsonschema` to validate arguments, so what clients see is what is enforced.
//! Tool definitions only declare data; no tool carries bespoke argument checks.

use jsonschema::{JSONSchema, ValidationError, error::ValidationErrorKind};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// A single constraint violation, located by its dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {message}")]
pub struct SchemaViolation {
    /// Dotted path of the offending field (`body.snippet.videoId`), or `arguments`.
    pub path: String,
    /// What was wrong with it.
    pub message: String,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// The type constraint of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A string, optionally restricted to a fixed set of values.
    String { allowed: Option<&'static [&'static str]> },
    /// An integer with optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    Boolean,
    /// An array whose items all match the inner kind.
    Array(Box<Kind>),
    /// A nested object. Open objects accept fields the schema does not declare.
    Object { schema: ParamSchema, open: bool },
}

impl Kind {
    pub fn string() -> Self {
        Kind::String { allowed: None }
    }

    pub fn one_of(allowed: &'static [&'static str]) -> Self {
        Kind::String {
            allowed: Some(allowed),
        }
    }

    pub fn integer() -> Self {
        Kind::Integer {
            min: None,
            max: None,
        }
    }

    pub fn integer_range(min: i64, max: i64) -> Self {
        Kind::Integer {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn boolean() -> Self {
        Kind::Boolean
    }

    pub fn array_of(item: Kind) -> Self {
        Kind::Array(Box::new(item))
    }

    /// A nested resource object that forwards undeclared fields untouched.
    pub fn resource(schema: ParamSchema) -> Self {
        Kind::Object { schema, open: true }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Kind::String { .. } => "string",
            Kind::Integer { .. } => "integer",
            Kind::Boolean => "boolean",
            Kind::Array(_) => "array",
            Kind::Object { .. } => "object",
        }
    }

    fn to_json_schema(&self) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("type".into(), json!(self.type_name()));
        match self {
            Kind::String {
                allowed: Some(allowed),
            } => {
                out.insert("enum".into(), json!(allowed));
            }
            Kind::Integer { min, max } => {
                if let Some(min) = min {
                    out.insert("minimum".into(), json!(min));
                }
                if let Some(max) = max {
                    out.insert("maximum".into(), json!(max));
                }
            }
            Kind::Array(item) => {
                out.insert("items".into(), Value::Object(item.to_json_schema()));
            }
            Kind::Object { schema, open } => {
                schema.write_object_schema(&mut out, *open);
            }
            _ => {}
        }
        out
    }
}

/// One named field of a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: Kind,
    pub required: bool,
}

/// An ordered set of fields. Declaration order is preserved in the rendered
/// JSON Schema and in the query string built from the arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSchema {
    fields: Vec<Field>,
}

impl ParamSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field.
    pub fn required(mut self, name: &'static str, kind: Kind, description: &'static str) -> Self {
        self.fields.push(Field {
            name,
            description,
            kind,
            required: true,
        });
        self
    }

    /// Add an optional field.
    pub fn optional(mut self, name: &'static str, kind: Kind, description: &'static str) -> Self {
        self.fields.push(Field {
            name,
            description,
            kind,
            required: false,
        });
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Compile the rendered JSON Schema.
    pub fn compile(&self) -> Result<JSONSchema, SchemaViolation> {
        let schema = Value::Object(self.to_json_schema());
        JSONSchema::compile(&schema).map_err(|e| {
            SchemaViolation::new("arguments", format!("invalid parameter schema: {}", e))
        })
    }

    /// Validate a tool's argument bundle. Top-level arguments are closed:
    /// an argument the schema does not declare is rejected. A `null` member
    /// counts as absent.
    pub fn validate(&self, arguments: &Value) -> Result<(), SchemaViolation> {
        if !arguments.is_object() {
            return Err(SchemaViolation::new("arguments", "expected an object"));
        }

        let instance = without_nulls(arguments);
        let compiled = self.compile()?;
        let violation = match compiled.validate(&instance) {
            Ok(()) => None,
            Err(mut errors) => errors.next().map(|e| violation_from(&instance, &e)),
        };
        match violation {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Render this schema as a JSON Schema object for capability advertisement.
    pub fn to_json_schema(&self) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("type".into(), json!("object"));
        self.write_object_schema(&mut out, false);
        out
    }

    fn write_object_schema(&self, out: &mut Map<String, Value>, open: bool) {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut property = field.kind.to_json_schema();
            if !field.description.is_empty() {
                property.insert("description".into(), json!(field.description));
            }
            properties.insert(field.name.to_string(), Value::Object(property));
        }
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        out.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            out.insert("required".into(), json!(required));
        }
        out.insert("additionalProperties".into(), json!(open));
    }
}

fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), without_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(without_nulls).collect()),
        other => other.clone(),
    }
}

/// Turn a JSON pointer into `instance` into a dotted path (`body.snippet`,
/// `tags[1]`).
fn dotted_path(instance: &Value, pointer: &str) -> String {
    let mut path = String::new();
    let mut node = Some(instance);
    for token in pointer.split('/').skip(1) {
        let token = token.replace("~1", "/").replace("~0", "~");
        match node {
            Some(Value::Array(items)) => {
                path.push_str(&format!("[{}]", token));
                node = token.parse::<usize>().ok().and_then(|i| items.get(i));
            }
            other => {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(&token);
                node = other.and_then(|v| v.get(token.as_str()));
            }
        }
    }
    path
}

fn violation_from(instance: &Value, error: &ValidationError<'_>) -> SchemaViolation {
    let path = dotted_path(instance, &error.instance_path.to_string());
    let member = |name: &str| match path.as_str() {
        "" => name.to_string(),
        prefix => format!("{}.{}", prefix, name),
    };

    match &error.kind {
        ValidationErrorKind::Required { property } => SchemaViolation::new(
            member(property.as_str().unwrap_or_default()),
            "required field is missing",
        ),
        ValidationErrorKind::AdditionalProperties { unexpected } => SchemaViolation::new(
            member(unexpected.first().map(String::as_str).unwrap_or_default()),
            "unknown field",
        ),
        _ if path.is_empty() => SchemaViolation::new("arguments", error.to_string()),
        _ => SchemaViolation::new(path, error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_schema() -> ParamSchema {
        ParamSchema::new()
            .required("part", Kind::string(), "Resource parts")
            .optional("maxResults", Kind::integer_range(1, 100), "Page size")
            .optional("order", Kind::one_of(&["time", "relevance"]), "Sort order")
            .optional("banAuthor", Kind::boolean(), "")
            .optional(
                "body",
                Kind::resource(ParamSchema::new().required(
                    "snippet",
                    Kind::resource(ParamSchema::new().required("videoId", Kind::string(), "")),
                    "",
                )),
                "",
            )
    }

    #[test]
    fn test_accepts_valid_arguments() {
        let args = json!({
            "part": "snippet",
            "maxResults": 20,
            "order": "time",
            "body": {"snippet": {"videoId": "V1", "extra": true}, "kind": "youtube#commentThread"}
        });
        assert!(comment_schema().validate(&args).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let err = comment_schema().validate(&json!({})).unwrap_err();
        assert_eq!(err.path, "part");
        assert!(err.message.contains("missing"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = comment_schema()
            .validate(&json!({"part": null}))
            .unwrap_err();
        assert_eq!(err.path, "part");
    }

    #[test]
    fn test_type_mismatch() {
        let err = comment_schema()
            .validate(&json!({"part": 5}))
            .unwrap_err();
        assert_eq!(err.path, "part");
        assert!(err.message.contains("string"));
    }

    #[test]
    fn test_enum_rejects_unknown_value() {
        let err = comment_schema()
            .validate(&json!({"part": "snippet", "order": "newest"}))
            .unwrap_err();
        assert_eq!(err.path, "order");
        assert!(err.message.contains("relevance"));
    }

    #[test]
    fn test_integer_bounds() {
        let schema = comment_schema();
        assert!(schema.validate(&json!({"part": "id", "maxResults": 0})).is_err());
        assert!(schema.validate(&json!({"part": "id", "maxResults": 101})).is_err());
        assert!(schema.validate(&json!({"part": "id", "maxResults": 100})).is_ok());
        assert!(schema.validate(&json!({"part": "id", "maxResults": 2.5})).is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let err = comment_schema()
            .validate(&json!({"part": "id", "videoID": "typo"}))
            .unwrap_err();
        assert_eq!(err.path, "videoID");
    }

    #[test]
    fn test_nested_required_field_path() {
        let err = comment_schema()
            .validate(&json!({"part": "snippet", "body": {"snippet": {}}}))
            .unwrap_err();
        assert_eq!(err.path, "body.snippet.videoId");
    }

    #[test]
    fn test_arguments_must_be_object() {
        let err = comment_schema().validate(&json!(["part"])).unwrap_err();
        assert_eq!(err.path, "arguments");
    }

    #[test]
    fn test_array_items_validated() {
        let schema = ParamSchema::new().required("tags", Kind::array_of(Kind::string()), "");
        assert!(schema.validate(&json!({"tags": ["a", "b"]})).is_ok());
        let err = schema.validate(&json!({"tags": ["a", 1]})).unwrap_err();
        assert_eq!(err.path, "tags[1]");
    }

    #[test]
    fn test_optional_null_accepted() {
        let args = json!({"part": "id", "order": null, "body": {"snippet": {"videoId": "V1", "title": null}}});
        assert!(comment_schema().validate(&args).is_ok());
    }

    #[test]
    fn test_nested_array_index_path() {
        let schema = ParamSchema::new().required(
            "body",
            Kind::resource(ParamSchema::new().optional(
                "snippet",
                Kind::resource(ParamSchema::new().optional("tags", Kind::array_of(Kind::string()), "")),
                "",
            )),
            "",
        );
        let err = schema
            .validate(&json!({"body": {"snippet": {"tags": ["a", "b", false]}}}))
            .unwrap_err();
        assert_eq!(err.path, "body.snippet.tags[2]");
    }

    #[test]
    fn test_rendered_schema_compiles() {
        let compiled = comment_schema().compile().unwrap();
        assert!(compiled.is_valid(&json!({"part": "snippet", "maxResults": 5})));
        assert!(!compiled.is_valid(&json!({"part": "snippet", "maxResults": 500})));
        assert!(!compiled.is_valid(&json!({"maxResults": 5})));
    }

    #[test]
    fn test_json_schema_rendering() {
        let rendered = Value::Object(comment_schema().to_json_schema());
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["required"], json!(["part"]));
        assert_eq!(rendered["additionalProperties"], json!(false));
        assert_eq!(rendered["properties"]["maxResults"]["maximum"], json!(100));
        assert_eq!(rendered["properties"]["order"]["enum"], json!(["time", "relevance"]));
        assert_eq!(
            rendered["properties"]["body"]["properties"]["snippet"]["required"],
            json!(["videoId"])
        );
        assert_eq!(rendered["properties"]["body"]["additionalProperties"], json!(true));
        assert!(rendered["properties"]["banAuthor"].get("description").is_none());
    }
}
