use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::Course;
use crate::services::CourseService;
use crate::state::AppState;

pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    info!("fetching all courses");
    let courses = CourseService::new(state.courses.clone())
        .get_all_courses()
        .await?;
    info!("returning {} courses", courses.len());
    Ok(Json(courses))
}

pub async fn get_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Course>, AppError> {
    let Path(id) = path?;
    info!("fetching course {}", id);

    let course = CourseService::new(state.courses.clone())
        .get_course_by_id(id)
        .await?
        .ok_or_else(|| {
            warn!("course {} not found", id);
            AppError::NotFound
        })?;
    Ok(Json(course))
}

pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<Course>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    let Json(course) = payload?;

    CourseService::new(state.courses.clone())
        .add_new_course(&course)
        .await?;
    info!("course {} added", course.course_id);
    Ok(Json(course))
}

pub async fn update_course(
    State(state): State<AppState>,
    payload: Result<Json<Course>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    let Json(course) = payload?;
    info!("updating course {}", course.course_id);

    let course = CourseService::new(state.courses.clone())
        .update_course(course)
        .await?;
    Ok(Json(course))
}

pub async fn delete_course(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<String, AppError> {
    let Path(raw_id) = path?;
    let id = raw_id
        .parse::<i64>()
        .map_err(|e| AppError::BadRequest(format!("Invalid course id '{}': {}", raw_id, e)))?;
    info!("deleting course {}", id);

    let message = CourseService::new(state.courses.clone())
        .delete_course_by_id(id)
        .await?;
    Ok(message)
}
