// src/models/catalog.rs

use serde::{Deserialize, Serialize};

use crate::models::{
    hierarchy::{Lesson, Semester, Subject, Unit},
    question::Question,
    store_item::StoreItem,
};

/// Snapshot of all reference data, as served by `GET /api/data`.
#[derive(Debug, Serialize)]
pub struct GlobalData {
    pub subjects: Vec<Subject>,
    pub semesters: Vec<Semester>,
    pub units: Vec<Unit>,
    pub lessons: Vec<Lesson>,
    pub questions: Vec<Question>,
    pub store_items: Vec<StoreItem>,
    pub announcement: Option<String>,
}

/// Full replacement payload for `POST /api/admin/sync`.
/// Whatever is not listed here is gone after the sync.
#[derive(Debug, Deserialize)]
pub struct AdminSyncRequest {
    pub subjects: Vec<Subject>,
    pub semesters: Vec<Semester>,
    pub units: Vec<Unit>,
    pub lessons: Vec<Lesson>,
    pub questions: Vec<Question>,
    #[serde(alias = "storeItems")]
    pub store_items: Vec<StoreItem>,
    pub announcement: String,
}
