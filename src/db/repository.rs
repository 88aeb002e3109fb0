use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::StorageError;
use crate::models::Course;

/// Primary-key access to stored courses.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Every stored course, ordered by id.
    async fn find_all(&self) -> Result<Vec<Course>, StorageError>;

    /// `None` when no course has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, StorageError>;

    /// Inserts the course, or overwrites every field of the one with the same id.
    async fn save(&self, course: &Course) -> Result<(), StorageError>;

    /// Removes the course if present; deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError>;

    async fn ping(&self) -> Result<(), StorageError>;
}

#[derive(Clone)]
pub struct SqliteCourseRepository {
    db: SqlitePool,
}

impl SqliteCourseRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, StorageError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT course_id, course_name, description FROM courses ORDER BY course_id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(courses)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, StorageError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT course_id, course_name, description FROM courses WHERE course_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(course)
    }

    async fn save(&self, course: &Course) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO courses (course_id, course_name, description)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(course_id) DO UPDATE SET
                course_name = excluded.course_name,
                description = excluded.description
            "#,
        )
        .bind(course.course_id)
        .bind(&course.course_name)
        .bind(&course.description)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM courses WHERE course_id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("select 1").execute(&self.db).await?;
        Ok(())
    }
}
