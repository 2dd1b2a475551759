use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error taxonomy for authentication operations.
///
/// Token-shaped failures (`InvalidSignature`, `Expired`, `Malformed`) and
/// credential failures all surface to the HTTP boundary as a uniform
/// rejection; only `StorageUnavailable` is a server-side fault.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed")]
    Malformed,

    #[error("Token subject no longer resolves to a user")]
    UserNotFound,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::InvalidSignature => AuthError::InvalidSignature,
            auth::TokenError::Expired => AuthError::Expired,
            auth::TokenError::Malformed(_) | auth::TokenError::EncodingFailed(_) => {
                AuthError::Malformed
            }
        }
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        // Anything the repository reports during an authentication flow is a
        // storage-layer fault; lookups signal absence with None, not errors.
        AuthError::StorageUnavailable(err.to_string())
    }
}
