//! # Fuda Core
//!
//! Domain models and seed data for Fuda kanban boards.
//!
//! This crate provides the list and card data shapes shared by the rest of
//! the application, plus the fixed seed dataset a fresh board starts from.
//! It has no dependency on any UI implementation or storage backend.

pub mod domain;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use domain::{
    card::{Card, CardId},
    list::{List, ListId},
};
pub use error::{FudaError, Result};
pub use seed::initial_lists;
