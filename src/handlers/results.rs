// src/handlers/results.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::quiz_result::{CreateResultRequest, QuizResult},
};

/// Lists every result recorded for the user, in storage order.
pub async fn list_results(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let results = sqlx::query_as::<_, QuizResult>(
        r#"
        SELECT
            id, user_id, subject_name, unit_name, score, total_points,
            percentage, date, difficulty, earned_xp
        FROM results
        WHERE user_id = ?
        "#,
    )
    .bind(&user_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch results for '{}': {:?}", user_id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(results))
}

/// Records a finished quiz for the user named in the path.
pub async fn create_result(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
    Json(payload): Json<CreateResultRequest>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query(
        r#"
        INSERT INTO results
        (id, user_id, subject_name, unit_name, score, total_points,
         percentage, date, difficulty, earned_xp)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.id)
    .bind(&user_id)
    .bind(&payload.subject_name)
    .bind(&payload.unit_name)
    .bind(payload.score)
    .bind(payload.total_points)
    .bind(payload.percentage)
    .bind(&payload.date)
    .bind(&payload.difficulty)
    .bind(payload.earned_xp)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to save result '{}': {:?}", payload.id, e);
        AppError::BadRequest(e.to_string())
    })?;

    Ok(Json(json!({ "status": "success" })))
}
