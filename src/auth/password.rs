//! Password digests.
//!
//! The stored format is the lowercase hex SHA-256 of the raw password: 64
//! characters, no salt, no key stretching. Identical passwords therefore share
//! a digest and the scheme is cheap to brute-force offline. It is kept for
//! compatibility with existing user records; a salted, slow scheme (argon2,
//! bcrypt) can be dropped in by implementing [`PasswordHasher`] without
//! touching the registration or login flow.

use sha2::{Digest, Sha256};

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;

    fn verify(&self, password: &str, digest: &str) -> bool {
        self.hash(password) == digest
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256PasswordHasher;

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> String {
        hash_password(password)
    }
}

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
