//! core app views.

use std::path::Path;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode, header};
use tera::Tera;

use crate::apps::core::forms::basic_form;
use crate::error::Result;

/// Build the template engine for the given template directory.
pub fn engine(template_dir: &Path) -> Result<Tera> {
	let glob = format!("{}/**/*.html", template_dir.display());
	Ok(Tera::new(&glob)?)
}

/// Render the basic form. The form is always rendered empty; no
/// submission handling exists.
pub fn form_view(engine: &Tera) -> Result<Response<Full<Bytes>>> {
	let form = basic_form();
	let html = form.render(engine, "core/form.html")?;
	Ok(html_response(StatusCode::OK, html))
}

pub fn html_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
	let mut response = Response::new(Full::new(body.into()));
	*response.status_mut() = status;
	response.headers_mut().insert(
		header::CONTENT_TYPE,
		header::HeaderValue::from_static("text/html; charset=utf-8"),
	);
	response
}
