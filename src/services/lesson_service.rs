use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Lesson, Quiz},
        dto::{
            request::{CreateLessonRequest, CreateQuizRequest, UpdateLessonRequest},
            response::LessonOverviewDto,
        },
    },
    repositories::{CourseRepository, LessonRepository, QuizRepository, SectionRepository},
};

pub struct LessonService {
    lessons: Arc<dyn LessonRepository>,
    sections: Arc<dyn SectionRepository>,
    courses: Arc<dyn CourseRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl LessonService {
    pub fn new(
        lessons: Arc<dyn LessonRepository>,
        sections: Arc<dyn SectionRepository>,
        courses: Arc<dyn CourseRepository>,
        quizzes: Arc<dyn QuizRepository>,
    ) -> Self {
        Self {
            lessons,
            sections,
            courses,
            quizzes,
        }
    }

    /// Every lesson in every course the user owns, tagged with its course and
    /// section.
    pub async fn list_owned_lessons(&self, user_id: &str) -> AppResult<Vec<LessonOverviewDto>> {
        let course_ids = self.courses.find_owned_course_ids(user_id).await?;
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses: HashMap<String, _> = self
            .courses
            .find_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|course| (course.id.clone(), course))
            .collect();

        let sections: HashMap<String, _> = self
            .sections
            .find_by_courses(&course_ids)
            .await?
            .into_iter()
            .map(|section| (section.id.clone(), section))
            .collect();

        let section_ids: Vec<String> = sections.keys().cloned().collect();
        let lessons = self.lessons.find_by_sections(&section_ids).await?;

        Ok(lessons
            .into_iter()
            .filter_map(|lesson| {
                let section = sections.get(&lesson.section_id)?;
                let course = courses.get(&section.course_id)?;
                Some(LessonOverviewDto::new(lesson, section, course))
            })
            .collect())
    }

    pub async fn get_lesson(&self, id: &str) -> AppResult<Lesson> {
        self.lessons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lesson with id '{}' not found", id)))
    }

    pub async fn create_lesson(&self, request: CreateLessonRequest) -> AppResult<Lesson> {
        request.validate()?;

        if self.sections.find_by_id(&request.section_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Section with id '{}' not found",
                request.section_id
            )));
        }

        let lesson = Lesson::new(
            &request.section_id,
            &request.title,
            &request.content_text,
            request.order,
        );
        self.lessons.create(lesson).await
    }

    pub async fn update_lesson(&self, id: &str, request: UpdateLessonRequest) -> AppResult<Lesson> {
        request.validate()?;

        let mut lesson = self.get_lesson(id).await?;
        if let Some(title) = request.title {
            lesson.title = title;
        }
        if let Some(content_text) = request.content_text {
            lesson.content_text = content_text;
        }
        if let Some(order) = request.order {
            lesson.order = order;
        }
        lesson.updated_at = Utc::now();

        self.lessons.update(lesson).await
    }

    pub async fn delete_lesson(&self, id: &str) -> AppResult<()> {
        self.lessons.delete(id).await
    }

    pub async fn list_quizzes(&self, lesson_id: &str) -> AppResult<Vec<Quiz>> {
        self.quizzes.find_quizzes_by_lesson(lesson_id).await
    }

    pub async fn create_quiz(&self, lesson_id: &str, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;
        self.get_lesson(lesson_id).await?;

        self.quizzes.create_quiz(Quiz::new(lesson_id, &request.title)).await
    }
}
