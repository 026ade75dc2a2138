use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question with its reference answer. Only admins ever see
/// `correct_answer`; learners get [`crate::models::dto::response::QuestionDto`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub quiz_id: String,
    pub question_text: String,
    pub correct_answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuizQuestion {
    pub fn new(quiz_id: &str, question_text: &str, correct_answer: &str) -> Self {
        let now = Utc::now();
        QuizQuestion {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            question_text: question_text.to_string(),
            correct_answer: correct_answer.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Strict match: no trimming, no case folding.
    pub fn is_correct(&self, answer_text: &str) -> bool {
        answer_text == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_answer_is_correct() {
        let question = QuizQuestion::new("quiz-1", "2 + 2?", "4");
        assert!(question.is_correct("4"));
    }

    #[test]
    fn whitespace_and_case_differences_are_incorrect() {
        let question = QuizQuestion::new("quiz-1", "Capital of France?", "Paris");
        assert!(!question.is_correct("Paris "));
        assert!(!question.is_correct(" Paris"));
        assert!(!question.is_correct("paris"));
        assert!(!question.is_correct("PARIS"));
        assert!(!question.is_correct(""));
    }
}
