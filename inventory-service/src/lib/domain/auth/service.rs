use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::IssuedToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Authentication coordinator for the user aggregate.
///
/// Composes the password hasher, the token issuer, and the user repository
/// as injected collaborators. Stateless between calls: the only mutation it
/// triggers is the last-login stamp, delegated to the repository.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_ttl: Duration,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Digest verification collaborator
    /// * `token_issuer` - Bearer token collaborator, already keyed
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(
        repository: Arc<UR>,
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_issuer,
            token_ttl,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        // A syntactically invalid username cannot belong to any user; treat
        // it exactly like an unknown one.
        let Ok(username) = Username::new(username.to_string()) else {
            return Ok(None);
        };

        let Some(mut user) = self.repository.find_by_username(&username).await? else {
            return Ok(None);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Ok(None);
        }

        let now = Utc::now();
        self.repository.update_last_login(&user.id, now).await?;
        user.last_login = Some(now);

        Ok(Some(user))
    }

    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let user = self
            .authenticate(username, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let access_token = self
            .token_issuer
            .issue(user.username.as_str(), self.token_ttl)?;

        tracing::debug!(username = %user.username, "Issued access token");

        Ok(IssuedToken { access_token })
    }

    async fn resolve_current_user(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.token_issuer.verify(token)?;

        // A verified token can still outlive its subject.
        let Ok(username) = Username::new(claims.sub) else {
            return Err(AuthError::UserNotFound);
        };

        self.repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn update_last_login(&self, id: &UserId, at: DateTime<Utc>) -> Result<(), UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn service(repository: MockTestUserRepository) -> AuthService<MockTestUserRepository> {
        AuthService::new(
            Arc::new(repository),
            PasswordHasher::new(),
            TokenIssuer::new(SECRET),
            Duration::minutes(30),
        )
    }

    fn stored_user(username: &str, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{}@example.com", username)).unwrap(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            is_active: true,
            is_admin: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    #[tokio::test]
    async fn test_authenticate_success_stamps_last_login() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "correct-password");
        let user_id = user.id;

        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_update_last_login()
            .withf(move |id, _| *id == user_id)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository);

        let authenticated = service
            .authenticate("alice", "correct-password")
            .await
            .unwrap()
            .expect("Expected authenticated user");
        assert_eq!(authenticated.username.as_str(), "alice");
        assert!(authenticated.last_login.is_some());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_is_none() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "correct-password");

        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_update_last_login().times(0);

        let service = service(repository);

        let result = service.authenticate("alice", "wrong").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user_is_none() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update_last_login().times(0);

        let service = service(repository);

        let result = service.authenticate("ghost", "anything").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_storage_failure_propagates() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection refused".to_string())));

        let service = service(repository);

        let result = service.authenticate("alice", "correct-password").await;
        assert!(matches!(
            result.unwrap_err(),
            AuthError::StorageUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_login_and_resolve_current_user() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "correct-password");

        let lookup_user = user.clone();
        repository
            .expect_find_by_username()
            .times(2)
            .returning(move |_| Ok(Some(lookup_user.clone())));
        repository
            .expect_update_last_login()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository);

        let issued = service.login("alice", "correct-password").await.unwrap();
        assert!(!issued.access_token.is_empty());

        let resolved = service
            .resolve_current_user(&issued.access_token)
            .await
            .unwrap();
        assert_eq!(resolved.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let result = service.login("ghost", "anything").await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_resolve_current_user_deleted_subject() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let token = TokenIssuer::new(SECRET)
            .issue("alice", Duration::minutes(30))
            .unwrap();

        let result = service.resolve_current_user(&token).await;
        assert!(matches!(result.unwrap_err(), AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_resolve_current_user_expired_token() {
        let repository = MockTestUserRepository::new();
        let service = service(repository);

        let token = TokenIssuer::new(SECRET)
            .issue("alice", Duration::seconds(-5))
            .unwrap();

        let result = service.resolve_current_user(&token).await;
        assert!(matches!(result.unwrap_err(), AuthError::Expired));
    }

    #[tokio::test]
    async fn test_resolve_current_user_tampered_token() {
        let repository = MockTestUserRepository::new();
        let service = service(repository);

        // Signed with a different secret.
        let token = TokenIssuer::new(b"another_secret_at_least_32_bytes!!")
            .issue("alice", Duration::minutes(30))
            .unwrap();

        let result = service.resolve_current_user(&token).await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidSignature));
    }

    #[tokio::test]
    async fn test_resolve_current_user_malformed_token() {
        let repository = MockTestUserRepository::new();
        let service = service(repository);

        let result = service.resolve_current_user("garbage").await;
        assert!(matches!(result.unwrap_err(), AuthError::Malformed));
    }
}
