use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{collections, index, Database},
    errors::{AppError, AppResult},
    models::domain::Lesson,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn create(&self, lesson: Lesson) -> AppResult<Lesson>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Lesson>>;
    async fn find_by_section(&self, section_id: &str) -> AppResult<Vec<Lesson>>;
    async fn find_by_sections(&self, section_ids: &[String]) -> AppResult<Vec<Lesson>>;
    async fn update(&self, lesson: Lesson) -> AppResult<Lesson>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoLessonRepository {
    collection: Collection<Lesson>,
}

impl MongoLessonRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(collections::LESSONS);
        Self { collection }
    }
}

#[async_trait]
impl LessonRepository for MongoLessonRepository {
    async fn create(&self, lesson: Lesson) -> AppResult<Lesson> {
        self.collection.insert_one(&lesson).await?;
        Ok(lesson)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Lesson>> {
        let lesson = self.collection.find_one(doc! { "id": id }).await?;
        Ok(lesson)
    }

    async fn find_by_section(&self, section_id: &str) -> AppResult<Vec<Lesson>> {
        let lessons = self
            .collection
            .find(doc! { "section_id": section_id })
            .sort(doc! { "order": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(lessons)
    }

    async fn find_by_sections(&self, section_ids: &[String]) -> AppResult<Vec<Lesson>> {
        let lessons = self
            .collection
            .find(doc! { "section_id": { "$in": section_ids.to_vec() } })
            .sort(doc! { "order": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(lessons)
    }

    async fn update(&self, lesson: Lesson) -> AppResult<Lesson> {
        let result = self
            .collection
            .replace_one(doc! { "id": &lesson.id }, &lesson)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Lesson with id '{}' not found",
                lesson.id
            )));
        }

        Ok(lesson)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Lesson with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        self.collection
            .create_indexes([
                index(doc! { "id": 1 }, "id_unique", true),
                index(doc! { "section_id": 1 }, "section_id", false),
            ])
            .await?;
        log::info!("Created indexes for lessons collection");
        Ok(())
    }
}
