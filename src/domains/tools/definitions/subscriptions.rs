//! Subscription and channel membership operations.

use super::common::{MAX_PAGE_SIZE, id_only, snippet, with_body, with_content_owner, with_paging, with_part};
use crate::domains::tools::descriptor::{Endpoint, OperationDescriptor};
use crate::domains::tools::schema::{Kind, ParamSchema};

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::read(
            "subscriptions_list",
            "List subscriptions of a channel, by ID, or of the authenticated user.",
            Endpoint::get("/subscriptions"),
            with_paging(
                with_content_owner(with_part(
                    ParamSchema::new(),
                    "Comma-separated parts: contentDetails, id, snippet, subscriberSnippet",
                ))
                .optional("channelId", Kind::string(), "Subscriptions of this channel")
                .optional("id", Kind::string(), "Comma-separated list of subscription IDs")
                .optional("mine", Kind::boolean(), "The authenticated user's subscriptions (OAuth only)")
                .optional("myRecentSubscribers", Kind::boolean(), "Most recent subscribers (OAuth only)")
                .optional("mySubscribers", Kind::boolean(), "Subscribers of the user (OAuth only)")
                .optional(
                    "forChannelId",
                    Kind::string(),
                    "Comma-separated channel IDs to check subscriptions against",
                )
                .optional(
                    "order",
                    Kind::one_of(&["alphabetical", "relevance", "unread"]),
                    "Result ordering",
                ),
                0,
                MAX_PAGE_SIZE,
            ),
        ),
        OperationDescriptor::write(
            "subscriptions_insert",
            "Subscribe the authenticated user to a channel.",
            Endpoint::post("/subscriptions").with_body(),
            with_body(
                with_part(ParamSchema::new(), "Comma-separated parts: contentDetails, id, snippet"),
                ParamSchema::new().required(
                    "snippet",
                    snippet(ParamSchema::new().required(
                        "resourceId",
                        Kind::resource(
                            ParamSchema::new()
                                .required("kind", Kind::string(), "Always 'youtube#channel'")
                                .required("channelId", Kind::string(), "Channel to subscribe to"),
                        ),
                        "The channel being subscribed to",
                    )),
                    "Subscription snippet",
                ),
                "Subscription resource",
            ),
        ),
        OperationDescriptor::write(
            "subscriptions_delete",
            "Unsubscribe the authenticated user from a channel.",
            Endpoint::delete("/subscriptions"),
            id_only("ID of the subscription to delete"),
        ),
        OperationDescriptor::write(
            "members_list",
            "List members (channel sponsors) of the authenticated creator's channel.",
            Endpoint::get("/members"),
            with_paging(
                with_part(ParamSchema::new(), "Must be 'snippet'")
                    .optional(
                        "mode",
                        Kind::one_of(&["all_current", "updates"]),
                        "All current members, or only new members since the page token",
                    )
                    .optional(
                        "hasAccessToLevel",
                        Kind::string(),
                        "Only members with access to this membership level",
                    )
                    .optional(
                        "filterByMemberChannelId",
                        Kind::string(),
                        "Comma-separated channel IDs to check membership for",
                    ),
                0,
                1000,
            ),
        ),
        OperationDescriptor::write(
            "membershipsLevels_list",
            "List the membership levels offered by the authenticated creator's channel.",
            Endpoint::get("/membershipsLevels"),
            with_part(ParamSchema::new(), "Comma-separated parts: id, snippet")
                .optional("hl", Kind::string(), "Language for level names"),
        ),
    ]
}
