//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be wired in by the binary.

use async_trait::async_trait;
use crate::error::Result;
use crate::models::{Comment, NewSuggestion, Suggestion};

/// Remote data contract for the `suggestions` table.
///
/// Every operation returns a typed `Result`. Adapters never panic and
/// never hand back sentinel values; the synchronization layer decides per
/// operation whether a failure is surfaced, recorded, or dropped.
#[async_trait]
pub trait SuggestionStore: Send + Sync {
    /// Full feed, newest `createdAt` first.
    async fn list(&self) -> Result<Vec<Suggestion>>;

    /// Inserts a suggestion and returns the persisted row, server-assigned
    /// `id` included.
    async fn create(&self, new: NewSuggestion) -> Result<Suggestion>;

    /// Read-modify-write of the like counter: ±1 clamped at zero, returns
    /// the written value. There is no compare-and-swap here — concurrent
    /// likes from other sessions race and the last write wins.
    async fn set_like_count(&self, id: &str, increment: bool) -> Result<u32>;

    /// Appends a client-built comment to the suggestion's embedded
    /// comment array and returns it.
    async fn append_comment(&self, id: &str, content: &str, author: &str) -> Result<Comment>;

    /// Bumps the view counter by one.
    async fn touch_view(&self, id: &str) -> Result<()>;
}

/// Durable key-value storage for per-device session state (visitor id,
/// liked ids, submission draft).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns `None` for entries that are missing or unreadable; callers
    /// treat both as "value absent", never as fatal.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    async fn store(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}
