use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizQuestion},
        dto::{
            request::CreateQuestionRequest,
            response::{QuestionDto, QuizWithQuestionsDto},
        },
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.repository
            .find_quiz(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    /// The quiz and its questions, without reference answers.
    pub async fn get_quiz_with_questions(&self, id: &str) -> AppResult<QuizWithQuestionsDto> {
        let quiz = self.get_quiz(id).await?;
        let questions = self
            .repository
            .find_questions_by_quiz(id)
            .await?
            .into_iter()
            .map(QuestionDto::from)
            .collect();

        Ok(QuizWithQuestionsDto { quiz, questions })
    }

    pub async fn add_question(
        &self,
        quiz_id: &str,
        request: CreateQuestionRequest,
    ) -> AppResult<QuizQuestion> {
        request.validate()?;
        self.get_quiz(quiz_id).await?;

        let question =
            QuizQuestion::new(quiz_id, &request.question_text, &request.correct_answer);
        self.repository.add_question(question).await
    }
}
