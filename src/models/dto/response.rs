use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Course, CourseSection, Lesson, Quiz, QuizQuestion};

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Question as shown to learners: the reference answer is withheld.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub quiz_id: String,
    pub question_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<QuizQuestion> for QuestionDto {
    fn from(question: QuizQuestion) -> Self {
        QuestionDto {
            id: question.id,
            quiz_id: question.quiz_id,
            question_text: question.question_text,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizWithQuestionsDto {
    pub quiz: Quiz,
    pub questions: Vec<QuestionDto>,
}

/// A lesson annotated with the course and section it belongs to. The
/// section id comes from the flattened lesson.
#[derive(Debug, Clone, Serialize)]
pub struct LessonOverviewDto {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub course_id: String,
    pub course_title: String,
    pub section_title: String,
}

impl LessonOverviewDto {
    pub fn new(lesson: Lesson, section: &CourseSection, course: &Course) -> Self {
        LessonOverviewDto {
            lesson,
            course_id: course.id.clone(),
            course_title: course.title.clone(),
            section_title: section.title.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
