pub mod memory;
pub mod repository;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::Config;

pub use memory::InMemoryCourseRepository;
pub use repository::{CourseRepository, SqliteCourseRepository};

pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
}

/// Creates the `courses` table if it does not exist yet.
pub async fn init_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            course_id INTEGER PRIMARY KEY,
            course_name TEXT,
            description TEXT
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}
