// src/handlers/data.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    db::fetch_announcement,
    error::AppError,
    models::{
        catalog::GlobalData,
        hierarchy::{Lesson, Semester, Subject, Unit},
        question::Question,
        store_item::StoreItem,
    },
};

/// Returns every subject, semester, unit, lesson, question and store item
/// together with the current announcement.
///
/// Full table scans, no filtering or paging. Question options come back as lists.
pub async fn get_all_data(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let subjects = sqlx::query_as::<_, Subject>("SELECT id, name FROM subjects")
        .fetch_all(&pool)
        .await?;

    let semesters = sqlx::query_as::<_, Semester>("SELECT id, subject_id, name FROM semesters")
        .fetch_all(&pool)
        .await?;

    let units = sqlx::query_as::<_, Unit>("SELECT id, semester_id, name FROM units")
        .fetch_all(&pool)
        .await?;

    let lessons = sqlx::query_as::<_, Lesson>("SELECT id, unit_id, name FROM lessons")
        .fetch_all(&pool)
        .await?;

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, lesson_id, text, options, correct_answer, difficulty
        FROM questions
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let store_items = sqlx::query_as::<_, StoreItem>(
        "SELECT id, name, description, price, type, value FROM store_items",
    )
    .fetch_all(&pool)
    .await?;

    let announcement = fetch_announcement(&pool).await?;

    Ok(Json(GlobalData {
        subjects,
        semesters,
        units,
        lessons,
        questions,
        store_items,
        announcement,
    }))
}
