// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: String,

    #[serde(rename(deserialize = "lessonId"), alias = "lesson_id")]
    pub lesson_id: String,

    /// The text content of the question.
    pub text: String,

    /// List of options (e.g., ["Option A", "Option B"]).
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// Zero-based index into `options`.
    #[serde(rename(deserialize = "correctAnswer"), alias = "correct_answer")]
    pub correct_answer: i64,

    /// 'easy', 'medium' or 'hard'. Older questions may have none.
    #[serde(default)]
    pub difficulty: Option<String>,
}
