//! Caption track operations.
//!
//! Every caption endpoint requires OAuth upstream, so all of them are gated.

use super::common::{id_only, with_content_owner, with_part};
use crate::domains::tools::descriptor::{Endpoint, OperationDescriptor};
use crate::domains::tools::schema::{Kind, ParamSchema};

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::write(
            "captions_list",
            "List the caption tracks associated with a video.",
            Endpoint::get("/captions"),
            with_content_owner(
                with_part(ParamSchema::new(), "Comma-separated parts: id, snippet")
                    .required("videoId", Kind::string(), "Video whose captions are listed")
                    .optional("id", Kind::string(), "Comma-separated list of caption track IDs"),
            ),
        ),
        OperationDescriptor::write(
            "captions_download",
            "Download a caption track, optionally converted or translated.",
            Endpoint::get("/captions/{id}"),
            with_content_owner(
                id_only("ID of the caption track")
                    .optional(
                        "tfmt",
                        Kind::one_of(&["sbv", "scc", "srt", "ttml", "vtt"]),
                        "Format to return the track in",
                    )
                    .optional("tlang", Kind::string(), "ISO 639-1 language to translate into"),
            ),
        ),
        OperationDescriptor::write(
            "captions_delete",
            "Delete a caption track.",
            Endpoint::delete("/captions"),
            with_content_owner(id_only("ID of the caption track to delete")),
        ),
    ]
}
