//! Project applications.

pub mod core;
