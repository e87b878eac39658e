//! Error types for the zbx toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, transport, authentication, protocol, envelope decoding and
//! result projection failures.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// The unified error type for zbx operations.
///
/// Every failure mode in the toolkit maps onto exactly one variant so that
/// callers can match on the layer that failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction options. Never produced after construction.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network transport errors (connection, timeout, HTTP status).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The login exchange failed.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Protocol-level error object returned by the remote API.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The response body is not a well-formed envelope.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The result payload could not be coerced into the destination shape.
    #[error("projection error: {0}")]
    Projection(#[from] ProjectionError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(DecodeError {
            message: err.to_string(),
        })
    }
}

/// Invalid client construction options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The endpoint URL was empty.
    #[error("url can't be empty")]
    EmptyUrl,

    /// The endpoint URL could not be parsed or is not http(s).
    #[error("invalid url '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    /// Neither an API token nor a full username/password pair was supplied.
    #[error("you need to supply an api token or a user/password login")]
    MissingCredentials,

    /// Both an API token and a username/password pair were supplied.
    #[error("you can't supply both an api token and a user/password login")]
    ConflictingCredentials,

    /// The token refresher is already running.
    #[error("token refresher is already running")]
    RefresherRunning,

    /// The refresh interval does not leave the safety margin before expiry.
    #[error(
        "refresh interval {interval:?} must be shorter than the bearer \
         lifetime {lifetime:?} minus the refresh margin"
    )]
    RefreshIntervalTooLong {
        interval: Duration,
        lifetime: Duration,
    },
}

/// Transport-level errors. Exactly one attempt is made per call; none of
/// these are retried.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed (DNS, refused, TLS).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// The request deadline elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// The remote answered with a non-success HTTP status.
    #[error("request failed with status code: {code}")]
    Status { code: u16 },

    /// Any other HTTP-level failure.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Failures of the login exchange.
///
/// When raised during a background refresh tick this error is routed to the
/// configured error callback instead of being returned to a caller.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The remote rejected the supplied credentials.
    #[error("login rejected: {0}")]
    Rejected(ApiError),

    /// The login exchange could not be completed.
    #[error("login exchange failed: {0}")]
    Exchange(#[from] TransportError),

    /// The login response was not of the expected shape.
    #[error("malformed login response: {message}")]
    MalformedResponse { message: String },
}

/// Protocol-level error object returned inside a response envelope.
///
/// Presence of this object means the call failed, regardless of whether a
/// `result` field was also present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Numeric error code.
    pub code: i64,
    /// Short error message.
    #[serde(default)]
    pub message: String,
    /// Detailed error description.
    #[serde(default)]
    pub data: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error: {} - {} {}", self.code, self.message, self.data)
    }
}

impl std::error::Error for ApiError {}

/// The response body could not be parsed as an envelope.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
}

/// The opaque result payload did not fit the caller's destination shape.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProjectionError {
    pub message: String,
}

impl serde::de::Error for ProjectionError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self {
            message: msg.to_string(),
        }
    }
}
