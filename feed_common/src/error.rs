//! Error types shared between client and server.
//!
//! The `FeedError` enum unifies the failure cases found at the edges of the system:
//! socket I/O, JSON decoding, HTTP transport and ticker file parsing. The price walk
//! and the renderer themselves never fail.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum FeedError {
    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing the ticker file.
    #[error("Parse tickers file error: {0}")]
    ParseTickersFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The feed answered with a non-success HTTP status.
    #[error("{status}:{message}")]
    Http {
        /// HTTP status code returned by the feed.
        status: u16,
        /// Response body, or the reason phrase when the body was unreadable.
        message: String,
    },

    /// The request never produced a response (connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A quote document decoded fine but lacks a section the consumer relies on.
    #[error("Missing field in quote document: {0}")]
    MissingField(&'static str),
}
