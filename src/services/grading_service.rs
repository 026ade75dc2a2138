use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizAnswer,
    repositories::{QuizAnswerRepository, QuizRepository},
};

/// Grades a learner's answer against the question's reference answer and
/// records it. A learner gets exactly one recorded answer per question; the
/// answer store's unique index decides races between concurrent submissions.
pub struct GradingService {
    quizzes: Arc<dyn QuizRepository>,
    answers: Arc<dyn QuizAnswerRepository>,
}

impl GradingService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, answers: Arc<dyn QuizAnswerRepository>) -> Self {
        Self { quizzes, answers }
    }

    pub async fn submit_answer(
        &self,
        user_id: &str,
        quiz_id: &str,
        question_id: &str,
        answer_text: String,
    ) -> AppResult<QuizAnswer> {
        let question = self
            .quizzes
            .find_question(question_id)
            .await?
            .filter(|question| question.quiz_id == quiz_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Question with id '{}' not found in quiz '{}'",
                    question_id, quiz_id
                ))
            })?;

        let answer = QuizAnswer::graded(&question, user_id, answer_text);
        let answer = self.answers.create(answer).await?;

        log::info!(
            "User '{}' answered question '{}' (correct: {})",
            user_id,
            question_id,
            answer.is_correct
        );

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizQuestion;
    use crate::repositories::{
        quiz_answer_repository::MockQuizAnswerRepository, quiz_repository::MockQuizRepository,
    };

    fn quizzes_with(question: QuizQuestion) -> MockQuizRepository {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_question()
            .returning(move |_| Ok(Some(question.clone())));
        quizzes
    }

    #[tokio::test]
    async fn exact_answer_is_correct() {
        let question = QuizQuestion::new("quiz-1", "Capital of France?", "Paris");
        let question_id = question.id.clone();

        let mut answers = MockQuizAnswerRepository::new();
        answers.expect_create().times(1).returning(Ok);

        let service = GradingService::new(Arc::new(quizzes_with(question)), Arc::new(answers));
        let answer = service
            .submit_answer("user-1", "quiz-1", &question_id, "Paris".to_string())
            .await
            .unwrap();

        assert!(answer.is_correct);
        assert_eq!(answer.user_id, "user-1");
        assert_eq!(answer.question_id, question_id);
    }

    #[tokio::test]
    async fn case_and_whitespace_differences_are_wrong() {
        let question = QuizQuestion::new("quiz-1", "Capital of France?", "Paris");
        let question_id = question.id.clone();

        let mut answers = MockQuizAnswerRepository::new();
        answers.expect_create().times(2).returning(Ok);

        let service = GradingService::new(Arc::new(quizzes_with(question)), Arc::new(answers));
        for text in ["paris", "Paris "] {
            let answer = service
                .submit_answer("user-1", "quiz-1", &question_id, text.to_string())
                .await
                .unwrap();
            assert!(!answer.is_correct, "{:?} should not match", text);
        }
    }

    #[tokio::test]
    async fn question_from_another_quiz_is_not_found() {
        let question = QuizQuestion::new("quiz-2", "2 + 2?", "4");
        let question_id = question.id.clone();

        let mut answers = MockQuizAnswerRepository::new();
        answers.expect_create().never();

        let service = GradingService::new(Arc::new(quizzes_with(question)), Arc::new(answers));
        let result = service
            .submit_answer("user-1", "quiz-1", &question_id, "4".to_string())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_find_question().returning(|_| Ok(None));
        let mut answers = MockQuizAnswerRepository::new();
        answers.expect_create().never();

        let service = GradingService::new(Arc::new(quizzes), Arc::new(answers));
        let result = service
            .submit_answer("user-1", "quiz-1", "missing", "4".to_string())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_submission_is_propagated() {
        let question = QuizQuestion::new("quiz-1", "2 + 2?", "4");
        let question_id = question.id.clone();

        let mut answers = MockQuizAnswerRepository::new();
        answers.expect_create().returning(|answer| {
            Err(AppError::DuplicateSubmission {
                question_id: answer.question_id,
            })
        });

        let service = GradingService::new(Arc::new(quizzes_with(question)), Arc::new(answers));
        let result = service
            .submit_answer("user-1", "quiz-1", &question_id, "4".to_string())
            .await;

        assert!(matches!(result, Err(AppError::DuplicateSubmission { .. })));
    }
}
