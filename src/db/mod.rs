use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, Collection, IndexModel,
};
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

/// Collection names shared by the repositories and the ownership pipeline.
pub mod collections {
    pub const USERS: &str = "users";
    pub const COURSES: &str = "courses";
    pub const COURSE_OWNERS: &str = "course_owners";
    pub const COURSE_SECTIONS: &str = "course_sections";
    pub const LESSONS: &str = "lessons";
    pub const QUIZZES: &str = "quizzes";
    pub const QUIZ_QUESTIONS: &str = "quiz_questions";
    pub const QUIZ_ANSWERS: &str = "quiz_answers";
}

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_conn_string).await?;

        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);

        Ok(Self {
            client,
            db_name: config.mongo_db_name.clone(),
        })
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

/// True when a write was rejected by a unique index.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

/// Builds an index model, optionally unique, with an explicit name.
pub fn index(keys: mongodb::bson::Document, name: &str, unique: bool) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .unique(unique)
                .name(name.to_string())
                .build(),
        )
        .build()
}
