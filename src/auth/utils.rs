use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
};

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if !claims.is_admin {
        return Err(AppError::Forbidden(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}
