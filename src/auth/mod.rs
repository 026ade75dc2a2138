pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod utils;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{AdminMiddleware, AuthMiddleware, AuthenticatedUser};
pub use password::{PasswordHasher, Sha256PasswordHasher};
pub use utils::require_admin;
