use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_JWT_SECRET: &str = "dev_secret_key_change_in_production";
const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "edu-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(72),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects configurations that would sign tokens with a guessable secret.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEFAULT_JWT_SECRET {
            return Err(AppError::ValidationError(
                "JWT_SECRET is using the default value; set it to a secure random string"
                    .to_string(),
            ));
        }

        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::ValidationError(format!(
                "JWT_SECRET is too short ({}); it must be at least {} characters",
                jwt_secret.len(),
                MIN_JWT_SECRET_LEN
            )));
        }

        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "edu-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 72,
            app_env: "test".to_string(),
        }
    }
}
