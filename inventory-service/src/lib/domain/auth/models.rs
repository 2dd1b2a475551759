/// Result of a successful login.
///
/// The token is the only server-issued credential; nothing about it is
/// persisted, so it remains valid until its embedded expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
}
