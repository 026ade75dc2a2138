pub mod auth_service;
pub mod course_service;
pub mod grading_service;
pub mod lesson_service;
pub mod ownership_service;
pub mod quiz_service;

pub use auth_service::AuthService;
pub use course_service::CourseService;
pub use grading_service::GradingService;
pub use lesson_service::LessonService;
pub use ownership_service::OwnershipService;
pub use quiz_service::QuizService;
