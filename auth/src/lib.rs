//! Authentication primitives library
//!
//! Provides the reusable building blocks for credential handling:
//! - Password hashing (Argon2id)
//! - Signed bearer token issuance and verification (JWT, HS256)
//!
//! Services compose these into their own authentication flows; this crate
//! deliberately knows nothing about users, storage, or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("not_my_password", &digest));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let token = issuer.issue("alice", Duration::minutes(30)).unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
