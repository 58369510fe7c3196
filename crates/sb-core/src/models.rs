//! # Domain Models
//!
//! Core entities of the suggestion board. Field names serialize in
//! camelCase to line up 1:1 with the columns of the remote `suggestions`
//! table, including the embedded JSON `comments` column.

use serde::{Deserialize, Serialize};

/// Which part of the program a suggestion is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Curriculum,
    Facilities,
    Networking,
    Practical,
    Other,
}

/// Whether a post proposes something new or improves something existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Initiative,
    Improvement,
}

/// Review lifecycle. Every suggestion starts at `Pending`; only
/// out-of-band administrative action moves it, this client never writes
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    Reviewed,
    Accepted,
    Implemented,
}

/// A reply attached to a suggestion. Ids are client-generated and only
/// need to be unique within one suggestion's comment sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: String,
    /// Epoch milliseconds, client-assigned.
    pub created_at: i64,
}

/// A user-submitted post with its engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Opaque, globally unique, assigned by the remote store on insert.
    pub id: String,
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub impact: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub status: Status,
    /// Display attribution derived from the visitor id at creation time.
    pub author: String,
    /// Epoch milliseconds, assigned at creation.
    pub created_at: i64,
    pub likes: u32,
    pub views: u32,
    /// Embedded JSON column; rows written before the column existed omit it.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Insert payload for a new suggestion. The server assigns `id`; the
/// adapter stamps `createdAt`, `Pending` status and zeroed counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuggestion {
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub impact: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub author: String,
}

/// An in-progress submission, persisted between wizard steps and across
/// reloads, cleared once the submission goes through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub impact: String,
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub kind: Option<SuggestionKind>,
}
