//! # BoardError
//!
//! Centralized error handling for the suggestion board client. Every
//! remote or local-storage failure maps to one of these variants; which
//! of them surface to the user is decided in the synchronization layer,
//! never here.

use thiserror::Error;

/// The primary error type for all sb-core port operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// The remote data API rejected the request
    #[error("remote store error: {0}")]
    Remote(String),

    /// A response or stored value could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// No row exists for the given suggestion id
    #[error("suggestion not found: {0}")]
    NotFound(String),

    /// Input rejected before any remote call (e.g., empty comment)
    #[error("validation error: {0}")]
    Invalid(String),

    /// Durable session storage could not be read or written
    #[error("session storage error: {0}")]
    Session(String),
}

/// A specialized Result type for suggestion board logic.
pub type Result<T> = std::result::Result<T, BoardError>;
