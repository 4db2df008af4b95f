//! Playlist and playlist item operations.

use super::common::{MAX_PAGE_SIZE, id_only, snippet, with_body, with_content_owner, with_paging, with_part};
use crate::domains::tools::descriptor::{Endpoint, OperationDescriptor};
use crate::domains::tools::schema::{Kind, ParamSchema};

const PLAYLIST_PARTS: &str =
    "Comma-separated playlist parts: contentDetails, id, localizations, player, snippet, status";
const PLAYLIST_ITEM_PARTS: &str =
    "Comma-separated playlist item parts: contentDetails, id, snippet, status";

fn playlist_resource() -> ParamSchema {
    ParamSchema::new()
        .optional(
            "snippet",
            snippet(
                ParamSchema::new()
                    .required("title", Kind::string(), "Playlist title")
                    .optional("description", Kind::string(), "Playlist description")
                    .optional("defaultLanguage", Kind::string(), "Language of title/description"),
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
            "Privacy status",
        )
}

fn playlist_item_snippet() -> Kind {
    snippet(
        ParamSchema::new()
            .required("playlistId", Kind::string(), "Playlist the item belongs to")
            .required(
                "resourceId",
                Kind::resource(
                    ParamSchema::new()
                        .required("kind", Kind::string(), "Always 'youtube#video'")
                        .required("videoId", Kind::string(), "Video to add"),
                ),
                "The video the item refers to",
            )
            .optional("position", Kind::integer(), "Zero-based position in the playlist"),
    )
}

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::read(
            "playlists_list",
            "List playlists by ID, by channel, or for the authenticated user.",
            Endpoint::get("/playlists"),
            with_paging(
                with_content_owner(with_part(ParamSchema::new(), PLAYLIST_PARTS))
                    .optional("id", Kind::string(), "Comma-separated list of playlist IDs")
                    .optional("channelId", Kind::string(), "Playlists of this channel")
                    .optional("mine", Kind::boolean(), "The authenticated user's playlists (OAuth only)")
                    .optional("hl", Kind::string(), "Language for localized metadata"),
                0,
                MAX_PAGE_SIZE,
            ),
        ),
        OperationDescriptor::write(
            "playlists_insert",
            "Create a playlist.",
            Endpoint::post("/playlists").with_body(),
            with_body(
                with_content_owner(with_part(ParamSchema::new(), PLAYLIST_PARTS)),
                playlist_resource(),
                "Playlist resource",
            ),
        ),
        OperationDescriptor::write(
            "playlists_update",
            "Modify a playlist's title, description or privacy status.",
            Endpoint::put("/playlists").with_body(),
            with_body(
                with_content_owner(with_part(ParamSchema::new(), PLAYLIST_PARTS)),
                playlist_resource().required("id", Kind::string(), "ID of the playlist to update"),
                "Playlist resource",
            ),
        ),
        OperationDescriptor::write(
            "playlists_delete",
            "Delete a playlist.",
            Endpoint::delete("/playlists"),
            with_content_owner(id_only("ID of the playlist to delete")),
        ),
        OperationDescriptor::read(
            "playlistItems_list",
            "List the items of a playlist, or playlist items by ID.",
            Endpoint::get("/playlistItems"),
            with_paging(
                with_content_owner(with_part(ParamSchema::new(), PLAYLIST_ITEM_PARTS))
                    .optional("playlistId", Kind::string(), "Playlist whose items are listed")
                    .optional("id", Kind::string(), "Comma-separated list of playlist item IDs")
                    .optional("videoId", Kind::string(), "Only items for this video"),
                0,
                MAX_PAGE_SIZE,
            ),
        ),
        OperationDescriptor::write(
            "playlistItems_insert",
            "Add a video to a playlist.",
            Endpoint::post("/playlistItems").with_body(),
            with_body(
                with_content_owner(with_part(ParamSchema::new(), PLAYLIST_ITEM_PARTS)),
                ParamSchema::new().required("snippet", playlist_item_snippet(), "Item snippet"),
                "PlaylistItem resource",
            ),
        ),
        OperationDescriptor::write(
            "playlistItems_update",
            "Change the position or note of a playlist item.",
            Endpoint::put("/playlistItems").with_body(),
            with_body(
                with_content_owner(with_part(ParamSchema::new(), PLAYLIST_ITEM_PARTS)),
                ParamSchema::new()
                    .required("id", Kind::string(), "ID of the playlist item")
                    .required("snippet", playlist_item_snippet(), "Item snippet"),
                "PlaylistItem resource",
            ),
        ),
        OperationDescriptor::write(
            "playlistItems_delete",
            "Remove an item from a playlist.",
            Endpoint::delete("/playlistItems"),
            with_content_owner(id_only("ID of the playlist item to delete")),
        ),
    ]
}
