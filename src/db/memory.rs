use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::repository::CourseRepository;
use crate::error::StorageError;
use crate::models::Course;

/// Course storage held in process memory. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<BTreeMap<i64, Course>>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, StorageError> {
        let courses = self.courses.read().await;
        Ok(courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, StorageError> {
        let courses = self.courses.read().await;
        Ok(courses.get(&id).cloned())
    }

    async fn save(&self, course: &Course) -> Result<(), StorageError> {
        let mut courses = self.courses.write().await;
        courses.insert(course.course_id, course.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        let mut courses = self.courses.write().await;
        courses.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
