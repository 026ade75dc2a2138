use async_trait::async_trait;
use chrono::Utc;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{collections, index, is_duplicate_key_error, Database},
    errors::{AppError, AppResult},
    models::domain::User,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `AlreadyExists` when the username or email is taken.
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<bool>;
    async fn update_password_hash(&self, id: &str, password_hash: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(collections::USERS);
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key_error(&e) => Err(AppError::AlreadyExists(format!(
                "User with username '{}' or email '{}' already exists",
                user.username, user.email
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "id": id }).await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(user)
    }

    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<bool> {
        let count = self
            .collection
            .count_documents(doc! {
                "$or": [ { "username": username }, { "email": email } ]
            })
            .await?;
        Ok(count > 0)
    }

    async fn update_password_hash(&self, id: &str, password_hash: &str) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": {
                    "password_hash": password_hash,
                    "updated_at": Utc::now().to_rfc3339(),
                } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("User with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        self.collection
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(doc! { "username": 1 }, "username_unique", true),
                index(doc! { "email": 1 }, "email_unique", true),
            ])
            .await?;
        log::info!("Created unique indexes on users.id, users.username and users.email");

        Ok(())
    }
}
