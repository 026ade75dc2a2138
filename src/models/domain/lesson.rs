use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: String,
    pub section_id: String,
    pub title: String,
    #[serde(default)]
    pub content_text: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lesson {
    pub fn new(section_id: &str, title: &str, content_text: &str, order: i32) -> Self {
        let now = Utc::now();
        Lesson {
            id: Uuid::new_v4().to_string(),
            section_id: section_id.to_string(),
            title: title.to_string(),
            content_text: content_text.to_string(),
            order,
            created_at: now,
            updated_at: now,
        }
    }
}
