//! Video resource operations (`videos.*`, `videoCategories.list`).

use super::common::{MAX_PAGE_SIZE, id_only, snippet, with_body, with_content_owner, with_paging, with_part};
use crate::domains::tools::descriptor::{Endpoint, OperationDescriptor};
use crate::domains::tools::schema::{Kind, ParamSchema};

const VIDEO_PARTS: &str = "Comma-separated video resource parts: contentDetails, fileDetails, id, \
     liveStreamingDetails, localizations, player, processingDetails, recordingDetails, snippet, \
     statistics, status, suggestions, topicDetails";

const RATINGS: &[&str] = &["like", "dislike", "none"];

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::read(
            "videos_list",
            "Retrieve videos by ID, the most popular chart, or the authenticated user's rated videos.",
            Endpoint::get("/videos"),
            with_paging(
                with_part(ParamSchema::new(), VIDEO_PARTS)
                    .optional("id", Kind::string(), "Comma-separated list of video IDs")
                    .optional(
                        "chart",
                        Kind::one_of(&["mostPopular"]),
                        "Chart to retrieve",
                    )
                    .optional(
                        "myRating",
                        Kind::one_of(&["like", "dislike"]),
                        "Return videos the authenticated user rated this way (OAuth only)",
                    )
                    .optional("regionCode", Kind::string(), "ISO 3166-1 alpha-2 region for charts")
                    .optional(
                        "videoCategoryId",
                        Kind::string(),
                        "Video category for the chart",
                    )
                    .optional("hl", Kind::string(), "Language for localized metadata")
                    .optional("maxHeight", Kind::integer_range(72, 8192), "Maximum player height")
                    .optional("maxWidth", Kind::integer_range(72, 8192), "Maximum player width"),
                1,
                MAX_PAGE_SIZE,
            ),
        ),
        OperationDescriptor::write(
            "videos_update",
            "Update a video's metadata (title, description, tags, category, privacy status).",
            Endpoint::put("/videos").with_body(),
            with_body(
                with_content_owner(with_part(
                    ParamSchema::new(),
                    "Parts being updated, e.g. snippet,status",
                )),
                ParamSchema::new()
                    .required("id", Kind::string(), "ID of the video to update")
                    .optional(
                        "snippet",
                        snippet(
                            ParamSchema::new()
                                .optional("title", Kind::string(), "Video title")
                                .optional("description", Kind::string(), "Video description")
                                .optional("tags", Kind::array_of(Kind::string()), "Keyword tags")
                                .optional("categoryId", Kind::string(), "Video category ID"),
                        ),
                        "Basic details",
                    )
                    .optional(
                        "status",
                        Kind::resource(ParamSchema::new().optional(
                            "privacyStatus",
                            Kind::one_of(&["private", "public", "unlisted"]),
                            "Privacy status",
                        )),
                        "Upload and privacy status",
                    ),
                "Video resource with the fields to write",
            ),
        ),
        OperationDescriptor::write(
            "videos_delete",
            "Delete a video owned by the authenticated user.",
            Endpoint::delete("/videos"),
            with_content_owner(id_only("ID of the video to delete")),
        ),
        OperationDescriptor::write(
            "videos_rate",
            "Add or remove the authenticated user's like/dislike on a video.",
            Endpoint::post("/videos/rate"),
            id_only("ID of the video to rate").required(
                "rating",
                Kind::one_of(RATINGS),
                "Rating to record; 'none' removes an existing rating",
            ),
        ),
        OperationDescriptor::write(
            "videos_getRating",
            "Retrieve the authenticated user's ratings for a list of videos.",
            Endpoint::get("/videos/getRating"),
            with_content_owner(id_only("Comma-separated list of video IDs")),
        ),
        OperationDescriptor::write(
            "videos_reportAbuse",
            "Report a video for containing abusive content.",
            Endpoint::post("/videos/reportAbuse").with_body(),
            with_body(
                with_content_owner(ParamSchema::new()),
                ParamSchema::new()
                    .required("videoId", Kind::string(), "ID of the video being reported")
                    .required(
                        "reasonId",
                        Kind::string(),
                        "Abuse reason ID (see videoAbuseReportReasons)",
                    )
                    .optional("secondaryReasonId", Kind::string(), "Secondary reason ID")
                    .optional("comments", Kind::string(), "Additional details")
                    .optional("language", Kind::string(), "Language of the reporter"),
                "Abuse report",
            ),
        ),
        OperationDescriptor::read(
            "videoCategories_list",
            "List the categories that can be associated with videos in a region.",
            Endpoint::get("/videoCategories"),
            with_part(ParamSchema::new(), "Must be 'snippet'")
                .optional("id", Kind::string(), "Comma-separated list of category IDs")
                .optional("regionCode", Kind::string(), "ISO 3166-1 alpha-2 region code")
                .optional("hl", Kind::string(), "Language for category titles"),
        ),
    ]
}
