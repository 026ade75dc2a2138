use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{collections, index, Database},
    errors::{AppError, AppResult},
    models::domain::CourseSection,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn create_many(&self, sections: Vec<CourseSection>) -> AppResult<Vec<CourseSection>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseSection>>;
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<CourseSection>>;
    async fn find_by_courses(&self, course_ids: &[String]) -> AppResult<Vec<CourseSection>>;
    async fn update(&self, section: CourseSection) -> AppResult<CourseSection>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoSectionRepository {
    collection: Collection<CourseSection>,
}

impl MongoSectionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(collections::COURSE_SECTIONS);
        Self { collection }
    }
}

#[async_trait]
impl SectionRepository for MongoSectionRepository {
    async fn create_many(&self, sections: Vec<CourseSection>) -> AppResult<Vec<CourseSection>> {
        if sections.is_empty() {
            return Ok(sections);
        }
        self.collection.insert_many(&sections).await?;
        Ok(sections)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseSection>> {
        let section = self.collection.find_one(doc! { "id": id }).await?;
        Ok(section)
    }

    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<CourseSection>> {
        let sections = self
            .collection
            .find(doc! { "course_id": course_id })
            .sort(doc! { "order": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(sections)
    }

    async fn find_by_courses(&self, course_ids: &[String]) -> AppResult<Vec<CourseSection>> {
        let sections = self
            .collection
            .find(doc! { "course_id": { "$in": course_ids.to_vec() } })
            .sort(doc! { "order": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(sections)
    }

    async fn update(&self, section: CourseSection) -> AppResult<CourseSection> {
        let result = self
            .collection
            .replace_one(doc! { "id": &section.id }, &section)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Section with id '{}' not found",
                section.id
            )));
        }

        Ok(section)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Section with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        self.collection
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(doc! { "course_id": 1 }, "course_id", false),
            ])
            .await?;
        log::info!("Created indexes for course_sections collection");
        Ok(())
    }
}
