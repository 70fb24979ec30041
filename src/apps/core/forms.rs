//! core app forms.

use crate::forms::{CharField, Form, IntegerField};

/// Build the basic demo form: a name and an age, both with help text.
///
/// Every field gets the same `form-control` class in a single pass
/// after construction, so the styling stays uniform however many
/// fields the form grows.
pub fn basic_form() -> Form {
	let mut form = Form::new();

	form.add_field(Box::new(
		CharField::new("name").with_help_text("Digite o seu nome."),
	));
	form.add_field(Box::new(
		IntegerField::new("age").with_help_text("Digite a sua idade."),
	));

	for field in form.fields_mut() {
		field
			.attrs_mut()
			.insert("class".to_string(), "form-control".to_string());
	}

	form
}
