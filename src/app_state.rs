use std::sync::Arc;

use crate::{
    auth::{JwtService, PasswordHasher, Sha256PasswordHasher},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CourseRepository, LessonRepository, MongoCourseRepository, MongoLessonRepository,
        MongoOwnershipRepository, MongoQuizAnswerRepository, MongoQuizRepository,
        MongoSectionRepository, MongoUserRepository, OwnershipRepository, QuizAnswerRepository,
        QuizRepository, SectionRepository, UserRepository,
    },
    services::{
        AuthService, CourseService, GradingService, LessonService, OwnershipService, QuizService,
    },
};

/// The storage seams every service is built on.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub sections: Arc<dyn SectionRepository>,
    pub lessons: Arc<dyn LessonRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub answers: Arc<dyn QuizAnswerRepository>,
    pub ownership: Arc<dyn OwnershipRepository>,
}

impl Repositories {
    pub async fn mongo(db: &Database) -> AppResult<Self> {
        let users = Arc::new(MongoUserRepository::new(db));
        users.ensure_indexes().await?;

        let courses = Arc::new(MongoCourseRepository::new(db));
        courses.ensure_indexes().await?;

        let sections = Arc::new(MongoSectionRepository::new(db));
        sections.ensure_indexes().await?;

        let lessons = Arc::new(MongoLessonRepository::new(db));
        lessons.ensure_indexes().await?;

        let quizzes = Arc::new(MongoQuizRepository::new(db));
        quizzes.ensure_indexes().await?;

        let answers = Arc::new(MongoQuizAnswerRepository::new(db));
        answers.ensure_indexes().await?;

        Ok(Self {
            users,
            courses,
            sections,
            lessons,
            quizzes,
            answers,
            ownership: Arc::new(MongoOwnershipRepository::new(db)),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: Option<Database>,
    pub jwt_service: Arc<JwtService>,
    pub auth_service: Arc<AuthService>,
    pub course_service: Arc<CourseService>,
    pub lesson_service: Arc<LessonService>,
    pub quiz_service: Arc<QuizService>,
    pub ownership_service: Arc<OwnershipService>,
    pub grading_service: Arc<GradingService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        let repositories = Repositories::mongo(&db).await?;

        let mut state = Self::with_repositories(config, repositories);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires the services over the given repositories. No database handle is
    /// attached, so readiness reports the store as unconfigured.
    pub fn with_repositories(config: Config, repositories: Repositories) -> Self {
        let jwt_service = Arc::new(JwtService::from_config(&config));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Sha256PasswordHasher);

        let auth_service = Arc::new(AuthService::new(
            repositories.users.clone(),
            hasher,
            jwt_service.clone(),
        ));
        let course_service = Arc::new(CourseService::new(
            repositories.courses.clone(),
            repositories.sections.clone(),
            repositories.lessons.clone(),
            repositories.users.clone(),
        ));
        let lesson_service = Arc::new(LessonService::new(
            repositories.lessons.clone(),
            repositories.sections.clone(),
            repositories.courses.clone(),
            repositories.quizzes.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(repositories.quizzes.clone()));
        let ownership_service = Arc::new(OwnershipService::new(repositories.ownership.clone()));
        let grading_service = Arc::new(GradingService::new(
            repositories.quizzes,
            repositories.answers,
        ));

        Self {
            db: None,
            jwt_service,
            auth_service,
            course_service,
            lesson_service,
            quiz_service,
            ownership_service,
            grading_service,
            config: Arc::new(config),
        }
    }
}
