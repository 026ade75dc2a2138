use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{JwtService, PasswordHasher},
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{
            request::{ChangePasswordRequest, LoginRequest, RegisterRequest},
            response::AuthResponse,
        },
    },
    repositories::UserRepository,
};

/// Registration, login and password changes. Every successful sign-in path
/// ends with a freshly minted token.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    jwt_service: Arc<JwtService>,
}

impl AuthService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            jwt_service,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        if self
            .repository
            .exists_by_username_or_email(&request.username, &request.email)
            .await?
        {
            return Err(AppError::AlreadyExists(
                "A user with this username or email already exists".to_string(),
            ));
        }

        let user = User::new(
            &request.username,
            &request.email,
            self.hasher.hash(&request.password),
        );
        // The unique indexes still catch a concurrent registration that
        // slipped past the check above.
        let user = self.repository.create(user).await?;

        log::info!("Registered user '{}' ({})", user.username, user.id);

        Ok(AuthResponse {
            token: self.jwt_service.issue(&user)?,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .filter(|user| self.hasher.verify(&request.password, &user.password_hash))
            .ok_or(AppError::InvalidCredentials)?;

        Ok(AuthResponse {
            token: self.jwt_service.issue(&user)?,
        })
    }

    /// Operates only on the caller's own record, identified by the token
    /// subject. The old password must match before the digest is replaced.
    pub async fn change_password(
        &self,
        user_id: &str,
        request: ChangePasswordRequest,
    ) -> AppResult<()> {
        request.validate()?;

        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;

        if !self.hasher.verify(&request.old_password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        self.repository
            .update_password_hash(&user.id, &self.hasher.hash(&request.new_password))
            .await?;

        log::info!("Password changed for user '{}'", user.username);
        Ok(())
    }
}
