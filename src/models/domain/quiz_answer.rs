use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::QuizQuestion;

/// One learner's answer to one question. `(question_id, user_id)` is unique
/// and `is_correct` is fixed when the answer is written.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAnswer {
    pub id: String,
    pub question_id: String,
    pub user_id: String,
    pub answer_text: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

impl QuizAnswer {
    pub fn graded(question: &QuizQuestion, user_id: &str, answer_text: String) -> Self {
        QuizAnswer {
            id: Uuid::new_v4().to_string(),
            question_id: question.id.clone(),
            user_id: user_id.to_string(),
            is_correct: question.is_correct(&answer_text),
            answer_text,
            created_at: Utc::now(),
        }
    }
}
