// src/handlers/admin.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{error::AppError, models::catalog::AdminSyncRequest};

/// Tables replaced by a sync, in deletion order.
const REFERENCE_TABLES: [&str; 6] = [
    "subjects",
    "semesters",
    "units",
    "lessons",
    "questions",
    "store_items",
];

/// Replaces all reference data with the posted snapshot.
///
/// * Deletes every row of the six reference tables.
/// * Inserts subjects, semesters, units, lessons, questions and store items
///   in that order, exactly as given.
/// * Overwrites the announcement.
///
/// This is a destructive full replace, not a merge: rows missing from the
/// payload are lost. Everything runs in one transaction, so a rejected
/// insert (e.g. duplicate id in the payload) leaves the old data in place.
pub async fn sync_data(
    State(pool): State<SqlitePool>,
    Json(payload): Json<AdminSyncRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    for table in REFERENCE_TABLES {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to clear {}: {:?}", table, e);
                AppError::InternalServerError(e.to_string())
            })?;
    }

    for s in &payload.subjects {
        sqlx::query("INSERT INTO subjects (id, name) VALUES (?, ?)")
            .bind(&s.id)
            .bind(&s.name)
            .execute(&mut *tx)
            .await
            .map_err(|e| insert_failed("subject", &s.id, e))?;
    }

    for sem in &payload.semesters {
        sqlx::query("INSERT INTO semesters (id, subject_id, name) VALUES (?, ?, ?)")
            .bind(&sem.id)
            .bind(&sem.subject_id)
            .bind(&sem.name)
            .execute(&mut *tx)
            .await
            .map_err(|e| insert_failed("semester", &sem.id, e))?;
    }

    for u in &payload.units {
        sqlx::query("INSERT INTO units (id, semester_id, name) VALUES (?, ?, ?)")
            .bind(&u.id)
            .bind(&u.semester_id)
            .bind(&u.name)
            .execute(&mut *tx)
            .await
            .map_err(|e| insert_failed("unit", &u.id, e))?;
    }

    for l in &payload.lessons {
        sqlx::query("INSERT INTO lessons (id, unit_id, name) VALUES (?, ?, ?)")
            .bind(&l.id)
            .bind(&l.unit_id)
            .bind(&l.name)
            .execute(&mut *tx)
            .await
            .map_err(|e| insert_failed("lesson", &l.id, e))?;
    }

    for q in &payload.questions {
        sqlx::query(
            r#"
            INSERT INTO questions (id, lesson_id, text, options, correct_answer, difficulty)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&q.id)
        .bind(&q.lesson_id)
        .bind(&q.text)
        .bind(&q.options)
        .bind(q.correct_answer)
        .bind(&q.difficulty)
        .execute(&mut *tx)
        .await
        .map_err(|e| insert_failed("question", &q.id, e))?;
    }

    for si in &payload.store_items {
        sqlx::query(
            r#"
            INSERT INTO store_items (id, name, description, price, type, value)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&si.id)
        .bind(&si.name)
        .bind(&si.description)
        .bind(si.price)
        .bind(&si.item_type)
        .bind(&si.value)
        .execute(&mut *tx)
        .await
        .map_err(|e| insert_failed("store item", &si.id, e))?;
    }

    sqlx::query(
        r#"
        INSERT INTO settings (key, value) VALUES ('announcement', ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
    )
    .bind(&payload.announcement)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update announcement: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tx.commit()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    tracing::info!(
        subjects = payload.subjects.len(),
        semesters = payload.semesters.len(),
        units = payload.units.len(),
        lessons = payload.lessons.len(),
        questions = payload.questions.len(),
        store_items = payload.store_items.len(),
        "Reference data replaced"
    );

    Ok(Json(json!({ "status": "success" })))
}

fn insert_failed(kind: &str, id: &str, e: sqlx::Error) -> AppError {
    tracing::error!("Failed to insert {} '{}': {:?}", kind, id, e);
    AppError::BadRequest(e.to_string())
}
