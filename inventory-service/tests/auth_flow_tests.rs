use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use inventory_service::domain::auth::errors::AuthError;
use inventory_service::domain::auth::ports::AuthServicePort;
use inventory_service::domain::auth::service::AuthService;
use inventory_service::domain::user::errors::UserError;
use inventory_service::domain::user::models::CreateUserCommand;
use inventory_service::domain::user::models::EmailAddress;
use inventory_service::domain::user::models::UpdateUserCommand;
use inventory_service::domain::user::models::User;
use inventory_service::domain::user::models::UserId;
use inventory_service::domain::user::models::Username;
use inventory_service::domain::user::ports::UserRepository;
use inventory_service::domain::user::ports::UserServicePort;
use inventory_service::domain::user::service::UserService;
use uuid::Uuid;

const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

/// Map-backed repository double for driving full authentication flows
/// without a database.
#[derive(Default)]
struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn update_last_login(&self, id: &UserId, at: DateTime<Utc>) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&id.0)
            .ok_or(UserError::NotFound(id.to_string()))?;
        user.last_login = Some(at);
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        users
            .remove(&id.0)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

fn services(
    token_ttl: Duration,
) -> (
    Arc<InMemoryUserRepository>,
    UserService<InMemoryUserRepository>,
    AuthService<InMemoryUserRepository>,
) {
    let repository = Arc::new(InMemoryUserRepository::default());
    let user_service = UserService::new(Arc::clone(&repository));
    let auth_service = AuthService::new(
        Arc::clone(&repository),
        PasswordHasher::new(),
        TokenIssuer::new(SECRET),
        token_ttl,
    );
    (repository, user_service, auth_service)
}

fn register_command(username: &str, password: &str) -> CreateUserCommand {
    CreateUserCommand::new(
        Username::new(username.to_string()).unwrap(),
        EmailAddress::new(format!("{}@example.com", username)).unwrap(),
        password.to_string(),
    )
}

#[tokio::test]
async fn test_register_login_resolve_delete_flow() {
    let (repository, user_service, auth_service) = services(Duration::minutes(30));

    // Register
    let bob = user_service
        .create_user(register_command("bob", "pw123"))
        .await
        .unwrap();
    assert_ne!(bob.password_hash, "pw123");
    assert!(bob.last_login.is_none());

    // Login
    let issued = auth_service.login("bob", "pw123").await.unwrap();
    assert!(!issued.access_token.is_empty());

    // A successful login stamps last_login in storage.
    let stored = repository
        .find_by_id(&bob.id)
        .await
        .unwrap()
        .expect("Expected stored user");
    assert!(stored.last_login.is_some());

    // Resolve the token back to bob
    let resolved = auth_service
        .resolve_current_user(&issued.access_token)
        .await
        .unwrap();
    assert_eq!(resolved.id, bob.id);
    assert_eq!(resolved.username.as_str(), "bob");

    // Delete bob; the still-valid token no longer resolves
    user_service.delete_user(&bob.id).await.unwrap();

    let result = auth_service.resolve_current_user(&issued.access_token).await;
    assert!(matches!(result.unwrap_err(), AuthError::UserNotFound));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (_repository, user_service, auth_service) = services(Duration::minutes(30));

    user_service
        .create_user(register_command("alice", "correct-password"))
        .await
        .unwrap();

    let wrong_password = auth_service.authenticate("alice", "wrong").await.unwrap();
    let unknown_user = auth_service.authenticate("ghost", "anything").await.unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown_user.is_none());

    let wrong_password = auth_service.login("alice", "wrong").await;
    let unknown_user = auth_service.login("ghost", "anything").await;

    assert!(matches!(
        wrong_password.unwrap_err(),
        AuthError::InvalidCredentials
    ));
    assert!(matches!(
        unknown_user.unwrap_err(),
        AuthError::InvalidCredentials
    ));
}

#[tokio::test]
async fn test_short_lived_token_expires() {
    let (_repository, user_service, auth_service) = services(Duration::seconds(1));

    user_service
        .create_user(register_command("carol", "pw123"))
        .await
        .unwrap();

    let issued = auth_service.login("carol", "pw123").await.unwrap();

    // Valid right after issuance
    assert!(auth_service
        .resolve_current_user(&issued.access_token)
        .await
        .is_ok());

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    let result = auth_service.resolve_current_user(&issued.access_token).await;
    assert!(matches!(result.unwrap_err(), AuthError::Expired));
}

#[tokio::test]
async fn test_password_update_rotates_credential() {
    let (_repository, user_service, auth_service) = services(Duration::minutes(30));

    let dave = user_service
        .create_user(register_command("dave", "old-password"))
        .await
        .unwrap();

    user_service
        .update_user(
            &dave.id,
            UpdateUserCommand {
                username: None,
                email: None,
                password: Some("new-password".to_string()),
            },
        )
        .await
        .unwrap();

    let old = auth_service.authenticate("dave", "old-password").await.unwrap();
    assert!(old.is_none());

    let new = auth_service.authenticate("dave", "new-password").await.unwrap();
    assert!(new.is_some());
}
