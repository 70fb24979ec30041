//! core application.
//!
//! Holds the demo schema (models with generated columns, storage
//! defaults, cascade foreign keys and choice fields), the basic form
//! and the view that renders it.

pub mod forms;
pub mod models;
pub mod views;
