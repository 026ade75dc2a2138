use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{collections, index, is_duplicate_key_error, Database},
    errors::{AppError, AppResult},
    models::domain::{Course, CourseOwner},
};

/// Courses and the ownership links hanging off them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    async fn find_all(&self) -> AppResult<Vec<Course>>;
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>>;
    async fn find_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>>;
    async fn update(&self, course: Course) -> AppResult<Course>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    /// Fails with `AlreadyExists` when the user already owns the course.
    async fn add_owner(&self, owner: CourseOwner) -> AppResult<CourseOwner>;
    async fn find_owned_course_ids(&self, user_id: &str) -> AppResult<Vec<String>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoCourseRepository {
    courses: Collection<Course>,
    owners: Collection<CourseOwner>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            courses: db.get_collection(collections::COURSES),
            owners: db.get_collection(collections::COURSE_OWNERS),
        }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        self.courses.insert_one(&course).await?;
        Ok(course)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.courses.find_one(doc! { "id": id }).await?;
        Ok(course)
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let courses = self
            .courses
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        let courses = self
            .courses
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn find_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>> {
        let courses = self
            .courses
            .find(doc! { "instructor_id": instructor_id })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn update(&self, course: Course) -> AppResult<Course> {
        let result = self
            .courses
            .replace_one(doc! { "id": &course.id }, &course)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                course.id
            )));
        }

        Ok(course)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.courses.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Course with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn add_owner(&self, owner: CourseOwner) -> AppResult<CourseOwner> {
        match self.owners.insert_one(&owner).await {
            Ok(_) => Ok(owner),
            Err(e) if is_duplicate_key_error(&e) => Err(AppError::AlreadyExists(format!(
                "User '{}' already owns course '{}'",
                owner.user_id, owner.course_id
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_owned_course_ids(&self, user_id: &str) -> AppResult<Vec<String>> {
        let owners: Vec<CourseOwner> = self
            .owners
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(owners.into_iter().map(|o| o.course_id).collect())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        self.courses
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(doc! { "instructor_id": 1 }, "instructor_id", false),
            ])
            .await?;

        self.owners
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(doc! { "user_id": 1, "course_id": 1 }, "user_course_unique", true),
                index(doc! { "course_id": 1 }, "course_id", false),
            ])
            .await?;

        log::info!("Created indexes for courses and course_owners collections");
        Ok(())
    }
}
