use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub lesson_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(lesson_id: &str, title: &str) -> Self {
        let now = Utc::now();
        Quiz {
            id: Uuid::new_v4().to_string(),
            lesson_id: lesson_id.to_string(),
            title: title.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
