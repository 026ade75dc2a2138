use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{collections, index, is_duplicate_key_error, Database},
    errors::{AppError, AppResult},
    models::domain::QuizAnswer,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizAnswerRepository: Send + Sync {
    /// Inserts the answer. The store's unique `(question_id, user_id)` index
    /// decides races: the loser gets `DuplicateSubmission`.
    async fn create(&self, answer: QuizAnswer) -> AppResult<QuizAnswer>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuizAnswerRepository {
    collection: Collection<QuizAnswer>,
}

impl MongoQuizAnswerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(collections::QUIZ_ANSWERS);
        Self { collection }
    }
}

#[async_trait]
impl QuizAnswerRepository for MongoQuizAnswerRepository {
    async fn create(&self, answer: QuizAnswer) -> AppResult<QuizAnswer> {
        match self.collection.insert_one(&answer).await {
            Ok(_) => Ok(answer),
            Err(e) if is_duplicate_key_error(&e) => Err(AppError::DuplicateSubmission {
                question_id: answer.question_id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_answers collection");

        self.collection
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(
                    doc! { "question_id": 1, "user_id": 1 },
                    "question_user_unique",
                    true,
                ),
            ])
            .await?;

        log::info!("Successfully created indexes for quiz_answers collection");
        Ok(())
    }
}
