use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::User;

/// The single account that is treated as an administrator.
pub const PRIVILEGED_USERNAME: &str = "izke";

/// Decides whether a user gets admin rights baked into their token.
pub type AdminPolicy = fn(&User) -> bool;

/// Default [`AdminPolicy`]: admin iff the username is [`PRIVILEGED_USERNAME`].
pub fn is_privileged_user(user: &User) -> bool {
    user.username == PRIVILEGED_USERNAME
}

/// Verified token payload. Field names on the wire follow the registered
/// JWT claims (`sub`, `exp`, `iat`) plus `name` and `admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "sub")]
    pub subject_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "admin")]
    pub is_admin: bool,
    #[serde(rename = "exp")]
    pub expires_at: i64,
    #[serde(rename = "iat")]
    pub issued_at: i64,
}

impl Claims {
    pub fn new(user: &User, is_admin: bool, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            subject_id: user.id.clone(),
            display_name: user.username.clone(),
            is_admin,
            issued_at: issued_at.timestamp(),
            expires_at: (issued_at + ttl).timestamp(),
        }
    }
}
