use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;
use crate::forms::fields::{FieldMetadata, FormField};

/// An ordered collection of form fields.
///
/// # Examples
///
/// ```
/// use dicas::forms::{CharField, Form};
///
/// let mut form = Form::new();
/// form.add_field(Box::new(CharField::new("name")));
/// assert_eq!(form.fields().len(), 1);
/// ```
#[derive(Default)]
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
}

/// Serializable snapshot of a form, used as the template context.
#[derive(Debug, Clone, Serialize)]
pub struct FormMetadata {
	pub fields: Vec<FieldMetadata>,
}

impl Form {
	pub fn new() -> Self {
		Self { fields: vec![] }
	}

	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	/// Mutable access to every field, for post-construction passes
	/// such as applying a shared widget attribute.
	pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn FormField>> {
		self.fields.iter_mut()
	}

	pub fn metadata(&self) -> FormMetadata {
		FormMetadata {
			fields: self.fields.iter().map(|field| field.metadata()).collect(),
		}
	}

	/// Render the form through the given template.
	///
	/// The template receives the form snapshot under the `form` key.
	pub fn render(&self, engine: &Tera, template_name: &str) -> Result<String> {
		let mut context = Context::new();
		context.insert("form", &self.metadata());
		Ok(engine.render(template_name, &context)?)
	}
}
