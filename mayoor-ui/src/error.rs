//! Error types for the login client
//!
//! Remote failures are a tagged result so that mapping a rejection onto a
//! form field is a checked `match` instead of a runtime shape test.

use mayoor_common::{ErrorCode, GraphqlError};
use thiserror::Error;

/// Failure of the remote `login` call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("login rejected: {}", first_message(.0))]
    Graphql(Vec<GraphqlError>),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl LoginError {
    /// Code of the first GraphQL error, if the server sent a structured one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Graphql(errors) => errors.first().and_then(GraphqlError::code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

fn first_message(errors: &[GraphqlError]) -> &str {
    errors
        .first()
        .map(|e| e.message.as_str())
        .unwrap_or("no details")
}

/// Session store could not take the current user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("session store is no longer available")]
    Unavailable,
}

/// Token could not be persisted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// A side effect after a successful login failed. Nothing recovers from this;
/// the caller reports it and the user has to log in again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SideEffectError {
    #[error("could not set current user: {0}")]
    Session(#[from] SessionError),

    #[error("could not persist session token: {0}")]
    Storage(#[from] StorageError),
}
