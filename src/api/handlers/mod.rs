// src/api/handlers/mod.rs
pub mod generator;
pub mod page;
pub mod state;
