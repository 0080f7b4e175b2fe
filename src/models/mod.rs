// src/models/mod.rs

pub mod catalog;
pub mod hierarchy;
pub mod question;
pub mod quiz_result;
pub mod store_item;
pub mod user;
