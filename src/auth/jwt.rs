use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::{is_privileged_user, AdminPolicy, Claims},
    config::Config,
    errors::{AppError, AppResult, AuthError},
    models::domain::User,
};

/// Issues and verifies HS256 tokens. The secret is fixed at construction.
///
/// Admin status is decided by the [`AdminPolicy`] when a token is minted and
/// travels inside the token; changing a user's role does not affect tokens
/// that are already out until they expire.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
    admin_policy: AdminPolicy,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            expiration: Duration::hours(expiration_hours),
            admin_policy: is_privileged_user,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expiration_hours)
    }

    pub fn with_admin_policy(mut self, admin_policy: AdminPolicy) -> Self {
        self.admin_policy = admin_policy;
        self
    }

    pub fn issue(&self, user: &User) -> AppResult<String> {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> AppResult<String> {
        let claims = Claims::new(user, (self.admin_policy)(user), issued_at, self.expiration);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    log::debug!("Rejected token: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}
