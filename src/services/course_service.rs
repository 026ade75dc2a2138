use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Course, CourseOwner, CourseSection, Lesson},
        dto::request::{
            CreateCourseRequest, CreateSectionRequest, UpdateCourseRequest, UpdateSectionRequest,
        },
    },
    repositories::{CourseRepository, LessonRepository, SectionRepository, UserRepository},
};

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    sections: Arc<dyn SectionRepository>,
    lessons: Arc<dyn LessonRepository>,
    users: Arc<dyn UserRepository>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        sections: Arc<dyn SectionRepository>,
        lessons: Arc<dyn LessonRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            courses,
            sections,
            lessons,
            users,
        }
    }

    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.courses.find_all().await
    }

    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    pub async fn create_course(&self, request: CreateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        let mut course = Course::new(&request.title, &request.description);
        course.meta = request.meta;
        course.instructor_id = request.instructor_id;

        self.courses.create(course).await
    }

    pub async fn update_course(&self, id: &str, request: UpdateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        let mut course = self.get_course(id).await?;
        if let Some(title) = request.title {
            course.title = title;
        }
        if let Some(description) = request.description {
            course.description = description;
        }
        if let Some(meta) = request.meta {
            course.meta = Some(meta);
        }
        if let Some(instructor_id) = request.instructor_id {
            course.instructor_id = Some(instructor_id);
        }
        course.updated_at = Utc::now();

        self.courses.update(course).await
    }

    pub async fn delete_course(&self, id: &str) -> AppResult<()> {
        self.courses.delete(id).await
    }

    /// Courses whose instructor is the given user.
    pub async fn list_instructor_courses(&self, user_id: &str) -> AppResult<Vec<Course>> {
        self.courses.find_by_instructor(user_id).await
    }

    pub async fn link_owner(&self, course_id: &str, user_id: &str) -> AppResult<CourseOwner> {
        self.get_course(course_id).await?;
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User with id '{}' not found", user_id)));
        }

        let owner = self
            .courses
            .add_owner(CourseOwner::new(user_id, course_id))
            .await?;

        log::info!("Linked user '{}' as owner of course '{}'", user_id, course_id);
        Ok(owner)
    }

    pub async fn list_sections(&self, course_id: &str) -> AppResult<Vec<CourseSection>> {
        self.sections.find_by_course(course_id).await
    }

    pub async fn get_section(&self, id: &str) -> AppResult<CourseSection> {
        self.sections
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Section with id '{}' not found", id)))
    }

    pub async fn add_sections(
        &self,
        course_id: &str,
        requests: Vec<CreateSectionRequest>,
    ) -> AppResult<Vec<CourseSection>> {
        for request in &requests {
            request.validate()?;
        }
        self.get_course(course_id).await?;

        let sections = requests
            .iter()
            .map(|request| CourseSection::new(course_id, &request.title, request.order))
            .collect();

        self.sections.create_many(sections).await
    }

    pub async fn update_section(
        &self,
        id: &str,
        request: UpdateSectionRequest,
    ) -> AppResult<CourseSection> {
        request.validate()?;

        let mut section = self.get_section(id).await?;
        if let Some(title) = request.title {
            section.title = title;
        }
        if let Some(order) = request.order {
            section.order = order;
        }
        section.updated_at = Utc::now();

        self.sections.update(section).await
    }

    pub async fn delete_section(&self, id: &str) -> AppResult<()> {
        self.sections.delete(id).await
    }

    pub async fn list_section_lessons(&self, section_id: &str) -> AppResult<Vec<Lesson>> {
        self.lessons.find_by_section(section_id).await
    }
}
