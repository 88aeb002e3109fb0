use std::sync::Arc;

use tracing::info;

use crate::db::CourseRepository;
use crate::error::StorageError;
use crate::models::Course;

pub fn deletion_message(id: i64) -> String {
    format!("Course with Id = {} was deleted successfully.", id)
}

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn get_all_courses(&self) -> Result<Vec<Course>, StorageError> {
        self.courses.find_all().await
    }

    pub async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>, StorageError> {
        self.courses.find_by_id(id).await
    }

    pub async fn add_new_course(&self, course: &Course) -> Result<(), StorageError> {
        self.courses.save(course).await
    }

    /// Saves without checking whether the id exists, so an unknown id is
    /// created. Returns the submitted course as-is.
    pub async fn update_course(&self, course: Course) -> Result<Course, StorageError> {
        self.courses.save(&course).await?;
        Ok(course)
    }

    /// Returns the confirmation message whether or not a record was removed.
    pub async fn delete_course_by_id(&self, id: i64) -> Result<String, StorageError> {
        self.courses.delete_by_id(id).await?;
        info!("course {} deleted", id);
        Ok(deletion_message(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryCourseRepository;

    fn service() -> CourseService {
        CourseService::new(Arc::new(InMemoryCourseRepository::new()))
    }

    fn algorithms() -> Course {
        Course {
            course_id: 1,
            course_name: Some("Algorithms".to_string()),
            description: Some("CS course".to_string()),
        }
    }

    #[test]
    fn deletion_message_format() {
        assert_eq!(
            deletion_message(1),
            "Course with Id = 1 was deleted successfully."
        );
    }

    #[tokio::test]
    async fn update_of_unknown_id_creates_course() {
        let service = service();

        let returned = service.update_course(algorithms()).await.unwrap();

        assert_eq!(returned, algorithms());
        assert_eq!(service.get_course_by_id(1).await.unwrap(), Some(algorithms()));
    }

    #[tokio::test]
    async fn delete_twice_returns_same_message() {
        let service = service();
        service.add_new_course(&algorithms()).await.unwrap();

        let first = service.delete_course_by_id(1).await.unwrap();
        let second = service.delete_course_by_id(1).await.unwrap();

        assert_eq!(first, second);
        assert!(service.get_all_courses().await.unwrap().is_empty());
    }
}
