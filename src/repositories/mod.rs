pub mod course_repository;
pub mod lesson_repository;
pub mod ownership_repository;
pub mod quiz_answer_repository;
pub mod quiz_repository;
pub mod section_repository;
pub mod user_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use lesson_repository::{LessonRepository, MongoLessonRepository};
pub use ownership_repository::{MongoOwnershipRepository, OwnershipRepository};
pub use quiz_answer_repository::{MongoQuizAnswerRepository, QuizAnswerRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use section_repository::{MongoSectionRepository, SectionRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
