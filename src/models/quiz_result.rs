// src/models/quiz_result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'results' table in the database.
/// Subject and unit are stored by name, not by id.
/// Text columns may be NULL in rows written by older clients.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub subject_name: Option<String>,
    pub unit_name: Option<String>,
    pub score: i64,
    pub total_points: i64,
    pub percentage: f64,
    pub date: Option<String>,
    pub difficulty: Option<String>,
    pub earned_xp: Option<i64>,
}

/// DTO for recording a finished quiz. The owner comes from the request path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResultRequest {
    pub id: String,
    #[serde(alias = "subject_name")]
    pub subject_name: String,
    #[serde(alias = "unit_name")]
    pub unit_name: String,
    pub score: i64,
    #[serde(alias = "total_points")]
    pub total_points: i64,
    pub percentage: f64,
    pub date: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, alias = "earned_xp")]
    pub earned_xp: Option<i64>,
}
