//! dicas — a small demonstration web application.
//!
//! The interesting part lives in the `core` app schema: models backed
//! by database-computed (generated) columns, storage-layer defaults,
//! cascade foreign keys and choice fields, plus a single form and the
//! view that renders it. Everything heavier than declaration (SQL
//! generation, migration, query execution, templating, HTTP) is
//! delegated to sqlx, tera and hyper.

pub mod apps;
pub mod conf;
pub mod db;
pub mod error;
pub mod forms;
pub mod server;

pub use error::{Error, Result};
