// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, LoginRequest, User},
};

/// Registers a new user.
///
/// Only identity fields are written; xp, coins, streak, hints, theme and
/// inventory take the column defaults.
/// Returns 201 Created, or 400 with the database message (e.g. duplicate id).
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, role)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.id)
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&payload.password_hash)
    .bind(&payload.role)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::warn!("Failed to register user '{}': {}", payload.id, e);
        AppError::BadRequest(e.to_string())
    })?;

    tracing::info!("Registered user '{}'", payload.id);

    Ok((StatusCode::CREATED, Json(json!({ "status": "success" }))))
}

/// Authenticates a user and returns their full record.
///
/// The identifier may be either the username or the email. The password is
/// compared verbatim against the stored credential material; no token is issued.
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT
            id, username, email, password_hash, role,
            xp, coins, streak, hints_count, selected_theme,
            inventory, last_active
        FROM users
        WHERE (username = ? OR email = ?) AND password_hash = ?
        "#,
    )
    .bind(&payload.username)
    .bind(&payload.username)
    .bind(&payload.password)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let user = user.ok_or(AppError::AuthError("Invalid credentials".to_string()))?;

    Ok(Json(user))
}
