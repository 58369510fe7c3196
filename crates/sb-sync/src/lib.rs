//! # sb-sync
//!
//! The synchronization layer: the one canonical copy of the suggestion
//! feed per running client, the persisted per-device session state, and
//! the reconciliation policy between the two and the remote store.
//!
//! Mutations are optimistic where the original product was (likes,
//! views) and confirm-first where it was not (create, comment). Remote
//! failures follow a fixed per-operation policy: fetch errors surface as
//! a display string, create/comment errors propagate to the caller, like
//! and view errors are logged and dropped.

pub mod session;
pub mod board;
pub mod feed;

pub use board::{BoardOptions, SuggestionBoard};
pub use feed::{FeedQuery, SortBy};
pub use session::Session;

#[cfg(test)]
pub(crate) mod testing;
