use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course record. `course_id` is chosen by the client and is the primary key.
/// Name and description may be absent or null and are stored as NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: i64,
    pub course_name: Option<String>,
    pub description: Option<String>,
}
