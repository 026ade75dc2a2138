use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{collections, index, Database},
    errors::AppResult,
    models::domain::{Quiz, QuizQuestion},
};

/// Quizzes and their questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_quiz(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_quizzes_by_lesson(&self, lesson_id: &str) -> AppResult<Vec<Quiz>>;
    async fn add_question(&self, question: QuizQuestion) -> AppResult<QuizQuestion>;
    async fn find_question(&self, id: &str) -> AppResult<Option<QuizQuestion>>;
    async fn find_questions_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    quizzes: Collection<Quiz>,
    questions: Collection<QuizQuestion>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            quizzes: db.get_collection(collections::QUIZZES),
            questions: db.get_collection(collections::QUIZ_QUESTIONS),
        }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_quiz(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.quizzes.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_quizzes_by_lesson(&self, lesson_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .quizzes
            .find(doc! { "lesson_id": lesson_id })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn add_question(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        self.questions.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_question(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let question = self.questions.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_questions_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self
            .questions
            .find(doc! { "quiz_id": quiz_id })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes and quiz_questions collections");

        self.quizzes
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(doc! { "lesson_id": 1 }, "lesson_id", false),
            ])
            .await?;

        self.questions
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(doc! { "quiz_id": 1 }, "quiz_id", false),
            ])
            .await?;

        Ok(())
    }
}
