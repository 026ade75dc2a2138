#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use edu_server::{
    app_state::{AppState, Repositories},
    auth::password::hash_password,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        Course, CourseOwner, CourseSection, Lesson, Quiz, QuizAnswer, QuizQuestion, User,
    },
    repositories::{
        CourseRepository, LessonRepository, OwnershipRepository, QuizAnswerRepository,
        QuizRepository, SectionRepository, UserRepository,
    },
};

/// One in-memory store standing in for every collection. Uniqueness rules
/// mirror the Mongo indexes and are checked under the write lock.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, User>>,
    courses: RwLock<HashMap<String, Course>>,
    owners: RwLock<Vec<CourseOwner>>,
    sections: RwLock<HashMap<String, CourseSection>>,
    lessons: RwLock<HashMap<String, Lesson>>,
    quizzes: RwLock<HashMap<String, Quiz>>,
    questions: RwLock<HashMap<String, QuizQuestion>>,
    answers: RwLock<Vec<QuizAnswer>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            users: self.clone(),
            courses: self.clone(),
            sections: self.clone(),
            lessons: self.clone(),
            quizzes: self.clone(),
            answers: self.clone(),
            ownership: self.clone(),
        }
    }

    pub async fn answer_count(&self) -> usize {
        self.answers.read().await.len()
    }

    pub async fn stored_answer(&self, user_id: &str, question_id: &str) -> Option<QuizAnswer> {
        let answers = self.answers.read().await;
        answers
            .iter()
            .find(|a| a.user_id == user_id && a.question_id == question_id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::AlreadyExists(format!(
                "User '{}' already exists",
                user.username
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<bool> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .any(|u| u.username == username || u.email == email))
    }

    async fn update_password_hash(&self, id: &str, password_hash: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn create(&self, course: Course) -> AppResult<Course> {
        self.courses
            .write()
            .await
            .insert(course.id.clone(), course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        Ok(self.courses.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        Ok(self.courses.read().await.values().cloned().collect())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(ids.iter().filter_map(|id| courses.get(id).cloned()).collect())
    }

    async fn find_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(courses
            .values()
            .filter(|c| c.instructor_id.as_deref() == Some(instructor_id))
            .cloned()
            .collect())
    }

    async fn update(&self, course: Course) -> AppResult<Course> {
        let mut courses = self.courses.write().await;
        match courses.get_mut(&course.id) {
            Some(existing) => {
                *existing = course.clone();
                Ok(course)
            }
            None => Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                course.id
            ))),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.courses
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    async fn add_owner(&self, owner: CourseOwner) -> AppResult<CourseOwner> {
        let mut owners = self.owners.write().await;
        if owners
            .iter()
            .any(|o| o.user_id == owner.user_id && o.course_id == owner.course_id)
        {
            return Err(AppError::AlreadyExists(
                "User already owns this course".to_string(),
            ));
        }
        owners.push(owner.clone());
        Ok(owner)
    }

    async fn find_owned_course_ids(&self, user_id: &str) -> AppResult<Vec<String>> {
        let owners = self.owners.read().await;
        Ok(owners
            .iter()
            .filter(|o| o.user_id == user_id)
            .map(|o| o.course_id.clone())
            .collect())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl SectionRepository for InMemoryStore {
    async fn create_many(&self, sections: Vec<CourseSection>) -> AppResult<Vec<CourseSection>> {
        let mut stored = self.sections.write().await;
        for section in &sections {
            stored.insert(section.id.clone(), section.clone());
        }
        Ok(sections)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseSection>> {
        Ok(self.sections.read().await.get(id).cloned())
    }

    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<CourseSection>> {
        let sections = self.sections.read().await;
        let mut found: Vec<_> = sections
            .values()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect();
        found.sort_by_key(|s| s.order);
        Ok(found)
    }

    async fn find_by_courses(&self, course_ids: &[String]) -> AppResult<Vec<CourseSection>> {
        let sections = self.sections.read().await;
        Ok(sections
            .values()
            .filter(|s| course_ids.contains(&s.course_id))
            .cloned()
            .collect())
    }

    async fn update(&self, section: CourseSection) -> AppResult<CourseSection> {
        let mut sections = self.sections.write().await;
        if !sections.contains_key(&section.id) {
            return Err(AppError::NotFound(format!(
                "Section with id '{}' not found",
                section.id
            )));
        }
        sections.insert(section.id.clone(), section.clone());
        Ok(section)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.sections
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Section with id '{}' not found", id)))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl LessonRepository for InMemoryStore {
    async fn create(&self, lesson: Lesson) -> AppResult<Lesson> {
        self.lessons
            .write()
            .await
            .insert(lesson.id.clone(), lesson.clone());
        Ok(lesson)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Lesson>> {
        Ok(self.lessons.read().await.get(id).cloned())
    }

    async fn find_by_section(&self, section_id: &str) -> AppResult<Vec<Lesson>> {
        let lessons = self.lessons.read().await;
        let mut found: Vec<_> = lessons
            .values()
            .filter(|l| l.section_id == section_id)
            .cloned()
            .collect();
        found.sort_by_key(|l| l.order);
        Ok(found)
    }

    async fn find_by_sections(&self, section_ids: &[String]) -> AppResult<Vec<Lesson>> {
        let lessons = self.lessons.read().await;
        Ok(lessons
            .values()
            .filter(|l| section_ids.contains(&l.section_id))
            .cloned()
            .collect())
    }

    async fn update(&self, lesson: Lesson) -> AppResult<Lesson> {
        let mut lessons = self.lessons.write().await;
        if !lessons.contains_key(&lesson.id) {
            return Err(AppError::NotFound(format!(
                "Lesson with id '{}' not found",
                lesson.id
            )));
        }
        lessons.insert(lesson.id.clone(), lesson.clone());
        Ok(lesson)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.lessons
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Lesson with id '{}' not found", id)))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for InMemoryStore {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes
            .write()
            .await
            .insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_quiz(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn find_quizzes_by_lesson(&self, lesson_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes
            .values()
            .filter(|q| q.lesson_id == lesson_id)
            .cloned()
            .collect())
    }

    async fn add_question(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        self.questions
            .write()
            .await
            .insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn find_question(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        Ok(self.questions.read().await.get(id).cloned())
    }

    async fn find_questions_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self.questions.read().await;
        Ok(questions
            .values()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl QuizAnswerRepository for InMemoryStore {
    async fn create(&self, answer: QuizAnswer) -> AppResult<QuizAnswer> {
        let mut answers = self.answers.write().await;
        if answers
            .iter()
            .any(|a| a.question_id == answer.question_id && a.user_id == answer.user_id)
        {
            return Err(AppError::DuplicateSubmission {
                question_id: answer.question_id,
            });
        }
        answers.push(answer.clone());
        Ok(answer)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl OwnershipRepository for InMemoryStore {
    async fn is_quiz_owner(&self, user_id: &str, quiz_id: &str) -> AppResult<bool> {
        let Some(quiz) = self.quizzes.read().await.get(quiz_id).cloned() else {
            return Ok(false);
        };
        let Some(lesson) = self.lessons.read().await.get(&quiz.lesson_id).cloned() else {
            return Ok(false);
        };
        let Some(section) = self.sections.read().await.get(&lesson.section_id).cloned() else {
            return Ok(false);
        };
        let Some(course) = self.courses.read().await.get(&section.course_id).cloned() else {
            return Ok(false);
        };

        let owners = self.owners.read().await;
        Ok(owners
            .iter()
            .any(|o| o.user_id == user_id && o.course_id == course.id))
    }
}

/// A course with one section, one lesson, one quiz and one question.
pub struct SeededQuiz {
    pub course: Course,
    pub section: CourseSection,
    pub lesson: Lesson,
    pub quiz: Quiz,
    pub question: QuizQuestion,
}

pub async fn seed_quiz(store: &Arc<InMemoryStore>, correct_answer: &str) -> SeededQuiz {
    let course = CourseRepository::create(store.as_ref(), Course::new("Rust", "Systems"))
        .await
        .unwrap();
    let section = store
        .create_many(vec![CourseSection::new(&course.id, "Basics", 1)])
        .await
        .unwrap()
        .remove(0);
    let lesson = LessonRepository::create(
        store.as_ref(),
        Lesson::new(&section.id, "Ownership", "Moves and borrows", 1),
    )
    .await
    .unwrap();
    let quiz = store
        .create_quiz(Quiz::new(&lesson.id, "Ownership check"))
        .await
        .unwrap();
    let question = store
        .add_question(QuizQuestion::new(
            &quiz.id,
            "Which keyword moves captures into a closure?",
            correct_answer,
        ))
        .await
        .unwrap();

    SeededQuiz {
        course,
        section,
        lesson,
        quiz,
        question,
    }
}

pub async fn seed_user(store: &Arc<InMemoryStore>, username: &str, password: &str) -> User {
    UserRepository::create(
        store.as_ref(),
        User::new(
            username,
            &format!("{}@example.com", username),
            hash_password(password),
        ),
    )
    .await
    .unwrap()
}

pub async fn make_owner(store: &Arc<InMemoryStore>, user: &User, course: &Course) {
    store
        .add_owner(CourseOwner::new(&user.id, &course.id))
        .await
        .unwrap();
}

pub fn test_state(store: &Arc<InMemoryStore>) -> AppState {
    AppState::with_repositories(Config::test_config(), store.repositories())
}
