//! Parameter declarations shared across YouTube resources.

use crate::domains::tools::schema::{Kind, ParamSchema};

/// Standard upper bound for `maxResults` on most list endpoints.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Add the required `part` parameter.
pub fn with_part(schema: ParamSchema, parts: &'static str) -> ParamSchema {
    schema.required("part", Kind::string(), parts)
}

/// Add `maxResults` (bounded) and `pageToken`.
pub fn with_paging(schema: ParamSchema, min: i64, max: i64) -> ParamSchema {
    schema
        .optional(
            "maxResults",
            Kind::integer_range(min, max),
            "Maximum number of items to return per page",
        )
        .optional(
            "pageToken",
            Kind::string(),
            "Token identifying a specific result page (nextPageToken/prevPageToken)",
        )
}

/// Add `onBehalfOfContentOwner`, used by YouTube content partners.
pub fn with_content_owner(schema: ParamSchema) -> ParamSchema {
    schema.optional(
        "onBehalfOfContentOwner",
        Kind::string(),
        "Content owner the request is made on behalf of (content partners only)",
    )
}

/// The request body for insert/update operations: an open resource object
/// whose declared fields are checked and whose extra fields pass through.
pub fn with_body(schema: ParamSchema, resource: ParamSchema, description: &'static str) -> ParamSchema {
    schema.required("body", Kind::resource(resource), description)
}

/// A required resource ID, as used by every delete operation.
pub fn id_only(description: &'static str) -> ParamSchema {
    ParamSchema::new().required("id", Kind::string(), description)
}

/// A nested `snippet` object with the given declared fields.
pub fn snippet(fields: ParamSchema) -> Kind {
    Kind::resource(fields)
}
