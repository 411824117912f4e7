//! # Error Handling
//!
//! This module defines the centralized error type for `registry-paths`. It
//! uses `thiserror` to describe every way a request against the platform API
//! can fail, so callers can decide whether a failure aborts the enumeration
//! (the root group) or is contained and logged (everything below it).
//!
//! ## Key Components
//!
//! - **`Error`**: one variant per failure mode. HTTP statuses the API
//!   documents (`404`, `401`) get their own variants; every other non-200
//!   status becomes [`Error::UnexpectedStatus`] rather than being dropped.
//!
//! - **`status_error`**: the pure status-code mapping used by the client.
//!
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for registry-paths operations
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered `404 Not Found`.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// The API answered `401 Unauthorized`, usually a missing or expired token.
    #[error("Not authorized: {url}")]
    Unauthorized { url: String },

    /// The API answered `200 OK` without a body.
    #[error("Body not found: {url}")]
    MissingBody { url: String },

    /// The API answered with a status that has no dedicated mapping.
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The body could not be decoded into the expected JSON shape.
    #[error("Invalid response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The base URL given on the command line is not a URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The HTTP client itself could not be built.
    #[error("HTTP client error: {message}")]
    HttpClient { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Maps an HTTP status code to the failure it represents.
///
/// Returns `None` only for `200`. Statuses without a dedicated variant map to
/// [`Error::UnexpectedStatus`].
pub fn status_error(status: u16, url: &str) -> Option<Error> {
    let url = url.to_string();
    match status {
        200 => None,
        404 => Some(Error::NotFound { url }),
        401 => Some(Error::Unauthorized { url }),
        status => Some(Error::UnexpectedStatus { url, status }),
    }
}
