//! Form field declarations.

use std::collections::BTreeMap;

use serde::Serialize;

/// Widget used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
	TextInput,
	NumberInput,
	HiddenInput,
}

impl Widget {
	/// HTML `type` attribute for the widget.
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::NumberInput => "number",
			Widget::HiddenInput => "hidden",
		}
	}
}

/// Renderable description of a single field.
///
/// This is what the template layer sees; attrs are kept in a
/// [`BTreeMap`] so rendered output is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct FieldMetadata {
	pub name: String,
	pub label: String,
	pub required: bool,
	pub help_text: Option<String>,
	pub input_type: &'static str,
	pub attrs: BTreeMap<String, String>,
}

/// Common behavior of form fields.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	/// Presentation attributes rendered onto the widget element.
	fn attrs_mut(&mut self) -> &mut BTreeMap<String, String>;

	fn metadata(&self) -> FieldMetadata;
}

fn default_label(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		None => String::new(),
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
	}
}

/// Text input field.
///
/// # Examples
///
/// ```
/// use dicas::forms::{CharField, FormField};
///
/// let field = CharField::new("name").with_help_text("Digite o seu nome.");
/// let meta = field.metadata();
/// assert_eq!(meta.label, "Name");
/// assert_eq!(meta.input_type, "text");
/// ```
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub max_length: Option<usize>,
	pub attrs: BTreeMap<String, String>,
}

impl CharField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			help_text: None,
			widget: Widget::TextInput,
			max_length: None,
			attrs: BTreeMap::new(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}
}

impl FormField for CharField {
	fn name(&self) -> &str {
		&self.name
	}

	fn attrs_mut(&mut self) -> &mut BTreeMap<String, String> {
		&mut self.attrs
	}

	fn metadata(&self) -> FieldMetadata {
		let mut attrs = self.attrs.clone();
		if let Some(max_length) = self.max_length {
			attrs.insert("maxlength".to_string(), max_length.to_string());
		}
		FieldMetadata {
			name: self.name.clone(),
			label: self
				.label
				.clone()
				.unwrap_or_else(|| default_label(&self.name)),
			required: self.required,
			help_text: self.help_text.clone(),
			input_type: self.widget.input_type(),
			attrs,
		}
	}
}

/// Whole-number input field.
#[derive(Debug, Clone)]
pub struct IntegerField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub attrs: BTreeMap<String, String>,
}

impl IntegerField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			help_text: None,
			widget: Widget::NumberInput,
			attrs: BTreeMap::new(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}
}

impl FormField for IntegerField {
	fn name(&self) -> &str {
		&self.name
	}

	fn attrs_mut(&mut self) -> &mut BTreeMap<String, String> {
		&mut self.attrs
	}

	fn metadata(&self) -> FieldMetadata {
		FieldMetadata {
			name: self.name.clone(),
			label: self
				.label
				.clone()
				.unwrap_or_else(|| default_label(&self.name)),
			required: self.required,
			help_text: self.help_text.clone(),
			input_type: self.widget.input_type(),
			attrs: self.attrs.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn char_field_defaults() {
		let field = CharField::new("name");
		let meta = field.metadata();
		assert!(meta.required);
		assert_eq!(meta.label, "Name");
		assert_eq!(meta.input_type, "text");
		assert!(meta.attrs.is_empty());
	}

	#[rstest]
	fn char_field_max_length_becomes_an_attr() {
		let meta = CharField::new("task").with_max_length(50).metadata();
		assert_eq!(meta.attrs.get("maxlength").map(String::as_str), Some("50"));
	}

	#[rstest]
	fn integer_field_renders_as_number_input() {
		let meta = IntegerField::new("age").metadata();
		assert_eq!(meta.input_type, "number");
	}

	#[rstest]
	fn explicit_label_wins_over_derived_one() {
		let meta = IntegerField::new("age").with_label("Idade").metadata();
		assert_eq!(meta.label, "Idade");
	}
}
