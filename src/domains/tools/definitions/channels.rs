//! Channel operations.

use super::common::{MAX_PAGE_SIZE, with_body, with_content_owner, with_paging, with_part};
use crate::domains::tools::descriptor::{Endpoint, OperationDescriptor};
use crate::domains::tools::schema::{Kind, ParamSchema};

const CHANNEL_PARTS: &str = "Comma-separated channel resource parts: auditDetails, brandingSettings, \
     contentDetails, contentOwnerDetails, id, localizations, snippet, statistics, status, \
     topicDetails";

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::read(
            "channels_list",
            "Retrieve channels by ID, handle, legacy username, or the authenticated user's own channel.",
            Endpoint::get("/channels"),
            with_paging(
                with_content_owner(with_part(ParamSchema::new(), CHANNEL_PARTS))
                    .optional("id", Kind::string(), "Comma-separated list of channel IDs")
                    .optional("forHandle", Kind::string(), "Channel handle, with or without '@'")
                    .optional("forUsername", Kind::string(), "Legacy YouTube username")
                    .optional("mine", Kind::boolean(), "Return the authenticated user's channel (OAuth only)")
                    .optional("managedByMe", Kind::boolean(), "Channels managed by the content owner")
                    .optional("hl", Kind::string(), "Language for localized metadata"),
                0,
                MAX_PAGE_SIZE,
            ),
        ),
        OperationDescriptor::write(
            "channels_update",
            "Update a channel's branding settings or localizations.",
            Endpoint::put("/channels").with_body(),
            with_body(
                with_content_owner(with_part(
                    ParamSchema::new(),
                    "Parts being updated: brandingSettings, id, localizations, status",
                )),
                ParamSchema::new()
                    .required("id", Kind::string(), "ID of the channel to update")
                    .optional(
                        "brandingSettings",
                        Kind::resource(ParamSchema::new()),
                        "Branding settings",
                    ),
                "Channel resource with the fields to write",
            ),
        ),
    ]
}
