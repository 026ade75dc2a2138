use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    repositories::OwnershipRepository,
};

/// Answers "does this user own the course this quiz belongs to?".
///
/// Ownership is only reachable through course_owners -> courses -> sections
/// -> lessons -> quizzes. A quiz that does not exist is simply not owned, so
/// callers cannot tell a missing quiz from someone else's quiz.
pub struct OwnershipService {
    repository: Arc<dyn OwnershipRepository>,
}

impl OwnershipService {
    pub fn new(repository: Arc<dyn OwnershipRepository>) -> Self {
        Self { repository }
    }

    pub async fn is_owner(&self, user_id: &str, quiz_id: &str) -> AppResult<bool> {
        self.repository.is_quiz_owner(user_id, quiz_id).await
    }

    pub async fn require_quiz_owner(&self, user_id: &str, quiz_id: &str) -> AppResult<()> {
        if self.is_owner(user_id, quiz_id).await? {
            Ok(())
        } else {
            log::debug!("User '{}' does not own quiz '{}'", user_id, quiz_id);
            Err(AppError::Forbidden(
                "user is not the owner of the course".to_string(),
            ))
        }
    }
}
