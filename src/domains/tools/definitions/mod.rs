//! Tool definitions module.
//!
//! The complete, fixed catalog of YouTube operations. Each file declares the
//! descriptors for one group of resources; nothing here performs I/O.

pub mod captions;
pub mod channels;
pub mod comments;
pub mod common;
pub mod playlists;
pub mod search;
pub mod subscriptions;
pub mod videos;

use super::descriptor::OperationDescriptor;

/// Every operation, in the order advertised to clients.
pub fn catalog() -> Vec<OperationDescriptor> {
    [
        videos::operations(),
        channels::operations(),
        search::operations(),
        comments::operations(),
        captions::operations(),
        playlists::operations(),
        subscriptions::operations(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
