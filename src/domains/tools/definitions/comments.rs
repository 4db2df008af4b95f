//! Comment thread and comment operations.

use super::common::{id_only, snippet, with_body, with_paging, with_part};
use crate::domains::tools::descriptor::{Endpoint, OperationDescriptor};
use crate::domains::tools::schema::{Kind, ParamSchema};

const TEXT_FORMATS: &[&str] = &["html", "plainText"];
const MODERATION_STATUSES: &[&str] = &["heldForReview", "published", "rejected"];

fn comment_body() -> ParamSchema {
    ParamSchema::new().required(
        "snippet",
        snippet(ParamSchema::new().required("textOriginal", Kind::string(), "Comment text")),
        "Comment snippet",
    )
}

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::read(
            "commentThreads_list",
            "List top-level comment threads for a video, a channel, or by ID.",
            Endpoint::get("/commentThreads"),
            with_paging(
                with_part(ParamSchema::new(), "Comma-separated parts: id, replies, snippet")
                    .optional("videoId", Kind::string(), "Threads on this video")
                    .optional(
                        "allThreadsRelatedToChannelId",
                        Kind::string(),
                        "Threads on any video of this channel",
                    )
                    .optional("id", Kind::string(), "Comma-separated list of thread IDs")
                    .optional(
                        "moderationStatus",
                        Kind::one_of(MODERATION_STATUSES),
                        "Filter by moderation status (channel owner only)",
                    )
                    .optional("order", Kind::one_of(&["time", "relevance"]), "Result ordering")
                    .optional("searchTerms", Kind::string(), "Only threads containing these terms")
                    .optional("textFormat", Kind::one_of(TEXT_FORMATS), "Format of returned text"),
                1,
                100,
            ),
        ),
        OperationDescriptor::write(
            "commentThreads_insert",
            "Post a new top-level comment on a video.",
            Endpoint::post("/commentThreads").with_body(),
            with_body(
                with_part(ParamSchema::new(), "Must be 'snippet'"),
                ParamSchema::new().required(
                    "snippet",
                    snippet(
                        ParamSchema::new()
                            .required("videoId", Kind::string(), "Video being commented on")
                            .optional("channelId", Kind::string(), "Channel that owns the video")
                            .required(
                                "topLevelComment",
                                Kind::resource(comment_body()),
                                "The comment itself",
                            ),
                    ),
                    "Thread snippet",
                ),
                "CommentThread resource",
            ),
        ),
        OperationDescriptor::read(
            "comments_list",
            "List comments by ID or the replies to a top-level comment.",
            Endpoint::get("/comments"),
            with_paging(
                with_part(ParamSchema::new(), "Comma-separated parts: id, snippet")
                    .optional("id", Kind::string(), "Comma-separated list of comment IDs")
                    .optional("parentId", Kind::string(), "Return replies to this comment")
                    .optional("textFormat", Kind::one_of(TEXT_FORMATS), "Format of returned text"),
                1,
                100,
            ),
        ),
        OperationDescriptor::write(
            "comments_insert",
            "Reply to an existing top-level comment.",
            Endpoint::post("/comments").with_body(),
            with_body(
                with_part(ParamSchema::new(), "Must be 'snippet'"),
                ParamSchema::new().required(
                    "snippet",
                    snippet(
                        ParamSchema::new()
                            .required("parentId", Kind::string(), "ID of the comment replied to")
                            .required("textOriginal", Kind::string(), "Reply text"),
                    ),
                    "Comment snippet",
                ),
                "Comment resource",
            ),
        ),
        OperationDescriptor::write(
            "comments_update",
            "Edit the text of a comment owned by the authenticated user.",
            Endpoint::put("/comments").with_body(),
            with_body(
                with_part(ParamSchema::new(), "Must be 'snippet'"),
                comment_body().required("id", Kind::string(), "ID of the comment to edit"),
                "Comment resource",
            ),
        ),
        OperationDescriptor::write(
            "comments_delete",
            "Delete a comment.",
            Endpoint::delete("/comments"),
            id_only("ID of the comment to delete"),
        ),
        OperationDescriptor::write(
            "comments_setModerationStatus",
            "Set the moderation status of one or more comments (channel owner only).",
            Endpoint::post("/comments/setModerationStatus"),
            id_only("Comma-separated list of comment IDs")
                .required(
                    "moderationStatus",
                    Kind::one_of(MODERATION_STATUSES),
                    "New moderation status",
                )
                .optional(
                    "banAuthor",
                    Kind::boolean(),
                    "Also ban the author (only with moderationStatus=rejected)",
                ),
        ),
    ]
}
