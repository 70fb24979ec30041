//! core app models.
//!
//! Each model pairs a row struct with a small Django-manager-flavored
//! API (`create`, `all`, `get`, `save`, `delete` as the entity needs).
//! `all` applies the declared default ordering and nothing else.
//! Columns the engine computes itself (generated columns, storage
//! defaults) are never written here: inserts and updates name only
//! the writable columns and the row is re-read afterwards, so the
//! structs always carry what the engine persisted.

mod article;
mod person;
mod product;
mod sale;
mod todo;
mod travel;
mod user;
mod winner;

pub use article::Article;
pub use person::Person;
pub use product::Product;
pub use sale::{Sale, SaleItem};
pub use todo::Todo;
pub use travel::Travel;
pub use user::User;
pub use winner::{Medal, Sport, Winner};
