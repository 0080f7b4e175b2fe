// src/handlers/user.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::{SqlitePool, types::Json as SqlJson};

use crate::{error::AppError, models::user::SyncUserRequest};

/// Overwrites a user's progress: xp, coins, streak, hints, theme,
/// inventory and last activity. Last write wins; values are not checked.
pub async fn sync_user(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
    Json(payload): Json<SyncUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET xp = ?, coins = ?, streak = ?, hints_count = ?,
            selected_theme = ?, inventory = ?, last_active = ?
        WHERE id = ?
        "#,
    )
    .bind(payload.xp)
    .bind(payload.coins)
    .bind(payload.streak)
    .bind(payload.hints_count)
    .bind(&payload.selected_theme)
    .bind(SqlJson(&payload.inventory))
    .bind(&payload.last_active)
    .bind(&user_id)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to sync user '{}': {:?}", user_id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    // The client treats this as fire-and-forget, so an unknown id is not an error.
    if result.rows_affected() == 0 {
        tracing::warn!("Sync for unknown user '{}' matched no rows", user_id);
    }

    Ok(Json(json!({ "status": "success" })))
}
