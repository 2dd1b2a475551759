use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::IssuedToken;
use crate::domain::user::models::User;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate a username/password pair.
    ///
    /// Returns `None` for both an unknown username and a wrong password; the
    /// two cases are indistinguishable to the caller. A successful
    /// authentication records the login instant.
    ///
    /// # Errors
    /// * `StorageUnavailable` - User lookup or last-login update failed
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError>;

    /// Authenticate and issue a bearer token for the user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Username or password did not match
    /// * `StorageUnavailable` - User lookup or last-login update failed
    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError>;

    /// Resolve the user a bearer token was issued to.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was tampered with
    /// * `Expired` - Token is past its expiry
    /// * `Malformed` - Token cannot be parsed
    /// * `UserNotFound` - Subject no longer resolves to an existing user
    /// * `StorageUnavailable` - User lookup failed
    async fn resolve_current_user(&self, token: &str) -> Result<User, AuthError>;
}
