use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    Collection,
};

use crate::{
    db::{collections, Database},
    errors::AppResult,
};

/// Answers "does this user own the course that contains this quiz?".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnershipRepository: Send + Sync {
    /// `false` both when the user owns nothing on the chain and when the quiz
    /// does not exist.
    async fn is_quiz_owner(&self, user_id: &str, quiz_id: &str) -> AppResult<bool>;
}

pub struct MongoOwnershipRepository {
    quizzes: Collection<Document>,
}

impl MongoOwnershipRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            quizzes: db.get_collection(collections::QUIZZES),
        }
    }
}

/// quiz -> lesson -> section -> course -> owners, filtered to one user.
/// A missing link anywhere drops the document, so no output means no access.
pub fn quiz_owner_pipeline(user_id: &str, quiz_id: &str) -> Vec<Document> {
    vec![
        doc! { "$match": { "id": quiz_id } },
        doc! { "$lookup": {
            "from": collections::LESSONS,
            "localField": "lesson_id",
            "foreignField": "id",
            "as": "lesson",
        } },
        doc! { "$unwind": "$lesson" },
        doc! { "$lookup": {
            "from": collections::COURSE_SECTIONS,
            "localField": "lesson.section_id",
            "foreignField": "id",
            "as": "section",
        } },
        doc! { "$unwind": "$section" },
        doc! { "$lookup": {
            "from": collections::COURSES,
            "localField": "section.course_id",
            "foreignField": "id",
            "as": "course",
        } },
        doc! { "$unwind": "$course" },
        doc! { "$lookup": {
            "from": collections::COURSE_OWNERS,
            "localField": "course.id",
            "foreignField": "course_id",
            "as": "owner",
        } },
        doc! { "$unwind": "$owner" },
        doc! { "$match": { "owner.user_id": user_id } },
        doc! { "$limit": 1 },
    ]
}

#[async_trait]
impl OwnershipRepository for MongoOwnershipRepository {
    async fn is_quiz_owner(&self, user_id: &str, quiz_id: &str) -> AppResult<bool> {
        let mut cursor = self
            .quizzes
            .aggregate(quiz_owner_pipeline(user_id, quiz_id))
            .await?;

        Ok(cursor.advance().await?)
    }
}
