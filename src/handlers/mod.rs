// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod data;
pub mod results;
pub mod user;
