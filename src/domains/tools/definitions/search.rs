//! Search across videos, channels and playlists.

use super::common::{MAX_PAGE_SIZE, with_paging, with_part};
use crate::domains::tools::descriptor::{Endpoint, OperationDescriptor};
use crate::domains::tools::schema::{Kind, ParamSchema};

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::read(
            "search_list",
            "Search YouTube for videos, channels and playlists matching a query.",
            Endpoint::get("/search"),
            with_paging(
                with_part(ParamSchema::new(), "Must be 'snippet'")
                    .optional("q", Kind::string(), "Query term; supports NOT (-) and OR (|)")
                    .optional(
                        "type",
                        Kind::string(),
                        "Comma-separated resource types: channel, playlist, video",
                    )
                    .optional("channelId", Kind::string(), "Only resources created by this channel")
                    .optional(
                        "channelType",
                        Kind::one_of(&["any", "show"]),
                        "Restrict channel results",
                    )
                    .optional(
                        "eventType",
                        Kind::one_of(&["completed", "live", "upcoming"]),
                        "Broadcast events (requires type=video)",
                    )
                    .optional("forMine", Kind::boolean(), "Only the authenticated user's videos (OAuth only)")
                    .optional("location", Kind::string(), "Latitude,longitude of a search area")
                    .optional("locationRadius", Kind::string(), "Radius around location, e.g. 5km")
                    .optional(
                        "order",
                        Kind::one_of(&["date", "rating", "relevance", "title", "videoCount", "viewCount"]),
                        "Result ordering",
                    )
                    .optional("publishedAfter", Kind::string(), "RFC 3339 lower bound on creation time")
                    .optional("publishedBefore", Kind::string(), "RFC 3339 upper bound on creation time")
                    .optional("regionCode", Kind::string(), "ISO 3166-1 alpha-2 region")
                    .optional("relevanceLanguage", Kind::string(), "ISO 639-1 language most relevant to")
                    .optional(
                        "safeSearch",
                        Kind::one_of(&["moderate", "none", "strict"]),
                        "Restricted content filtering",
                    )
                    .optional("topicId", Kind::string(), "Freebase topic ID")
                    .optional(
                        "videoCaption",
                        Kind::one_of(&["any", "closedCaption", "none"]),
                        "Filter on captions (requires type=video)",
                    )
                    .optional("videoCategoryId", Kind::string(), "Filter on video category")
                    .optional(
                        "videoDefinition",
                        Kind::one_of(&["any", "high", "standard"]),
                        "Filter on HD/SD",
                    )
                    .optional(
                        "videoDimension",
                        Kind::one_of(&["2d", "3d", "any"]),
                        "Filter on 2D/3D",
                    )
                    .optional(
                        "videoDuration",
                        Kind::one_of(&["any", "long", "medium", "short"]),
                        "Filter on duration",
                    )
                    .optional(
                        "videoEmbeddable",
                        Kind::one_of(&["any", "true"]),
                        "Only embeddable videos",
                    )
                    .optional(
                        "videoLicense",
                        Kind::one_of(&["any", "creativeCommon", "youtube"]),
                        "Filter on license",
                    )
                    .optional(
                        "videoType",
                        Kind::one_of(&["any", "episode", "movie"]),
                        "Filter on video type",
                    ),
                0,
                MAX_PAGE_SIZE,
            ),
        ),
    ]
}
