use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub old_password: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub new_password: String,
}

/// Body of a quiz answer submission. The text is graded byte-for-byte, so it
/// is deliberately not validated or normalised.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer_text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub meta: Option<serde_json::Value>,

    #[serde(default)]
    pub instructor_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub meta: Option<serde_json::Value>,
    pub instructor_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSectionRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSectionRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLessonRequest {
    #[validate(length(min = 1))]
    pub section_id: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub content_text: String,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLessonRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub content_text: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub question_text: String,

    pub correct_answer: String,
}
