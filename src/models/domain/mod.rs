pub mod course;
pub mod lesson;
pub mod quiz;
pub mod quiz_answer;
pub mod quiz_question;
pub mod user;

pub use course::{Course, CourseOwner, CourseSection};
pub use lesson::Lesson;
pub use quiz::Quiz;
pub use quiz_answer::QuizAnswer;
pub use quiz_question::QuizQuestion;
pub use user::User;
