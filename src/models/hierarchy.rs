// src/models/hierarchy.rs
//
// Subject -> Semester -> Unit -> Lesson. Parent ids are kept as plain
// columns; nothing checks that the parent exists.
//
// Rows go out with column names (`subject_id`) while the admin client posts
// camelCase (`subjectId`). Both spellings are accepted on the way in.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Semester {
    pub id: String,
    #[serde(rename(deserialize = "subjectId"), alias = "subject_id")]
    pub subject_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    #[serde(rename(deserialize = "semesterId"), alias = "semester_id")]
    pub semester_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    #[serde(rename(deserialize = "unitId"), alias = "unit_id")]
    pub unit_id: String,
    pub name: String,
}
