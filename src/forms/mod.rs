//! Minimal form toolkit.
//!
//! Declarative form fields plus a [`Form`] container that renders
//! through the tera template engine. There is no submission handling:
//! the demo only ever renders an empty form.

pub mod fields;
mod form;

pub use fields::{CharField, FieldMetadata, FormField, IntegerField, Widget};
pub use form::{Form, FormMetadata};
