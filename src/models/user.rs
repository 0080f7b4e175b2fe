// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// Represents the 'users' table in the database.
///
/// Serialized with the column names, the same shape the login endpoint has
/// always returned. Text columns are nullable in the schema and come back as
/// `null` rather than an empty string.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    /// Client-generated id.
    pub id: String,

    pub username: Option<String>,

    pub email: Option<String>,

    /// Credential material as sent by the client at registration.
    /// Compared verbatim on login and returned with the rest of the row.
    pub password_hash: Option<String>,

    /// Free-form role label (e.g. "Student", "Admin"). Not enforced.
    pub role: Option<String>,

    pub xp: i64,
    pub coins: i64,
    pub streak: i64,
    pub hints_count: i64,
    pub selected_theme: Option<String>,

    /// Owned store item ids. Stored as a JSON array in the database.
    pub inventory: Json<Vec<String>>,

    /// Client-supplied timestamp of the last activity; unset until the first sync.
    pub last_active: Option<String>,
}

/// DTO for creating a new user (Registration).
/// Progress fields are left to the column defaults.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "passwordHash", alias = "password_hash")]
    pub password_hash: String,
    pub role: String,
}

/// DTO for user login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Matched against either the username or the email column.
    pub username: String,
    pub password: String,
}

/// DTO for overwriting a user's gamification state.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncUserRequest {
    pub xp: i64,
    pub coins: i64,
    pub streak: i64,
    #[serde(alias = "hints_count")]
    pub hints_count: i64,
    #[serde(alias = "selected_theme")]
    pub selected_theme: String,
    pub inventory: Vec<String>,
    #[serde(alias = "last_active")]
    pub last_active: Option<String>,
}
