use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Root of the containment chain course -> section -> lesson -> quiz -> question.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub instructor_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn new(title: &str, description: &str) -> Self {
        let now = Utc::now();
        Course {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            meta: None,
            instructor_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Many-to-many link between users and the courses they own.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseOwner {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub created_at: DateTime<Utc>,
}

impl CourseOwner {
    pub fn new(user_id: &str, course_id: &str) -> Self {
        CourseOwner {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseSection {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseSection {
    pub fn new(course_id: &str, title: &str, order: i32) -> Self {
        let now = Utc::now();
        CourseSection {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            order,
            created_at: now,
            updated_at: now,
        }
    }
}
