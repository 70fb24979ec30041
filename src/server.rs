//! Development HTTP server.
//!
//! A plain hyper HTTP/1 accept loop serving the single demo view.
//! Request handling concurrency belongs to tokio and hyper; this
//! module only wires the route table.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tera::Tera;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::apps::core::views::{engine, form_view, html_response};
use crate::conf::Settings;
use crate::error::Result;

/// Bind and serve until the process is stopped.
pub async fn serve(settings: &Settings) -> Result<()> {
	let engine = Arc::new(engine(&settings.template_dir)?);
	let addr = settings.addr()?;
	let listener = TcpListener::bind(addr).await?;
	info!("listening on http://{addr}/");

	loop {
		let (stream, peer) = listener.accept().await?;
		let engine = engine.clone();
		tokio::spawn(async move {
			let io = TokioIo::new(stream);
			let service = service_fn(move |req| {
				let engine = engine.clone();
				async move { route(req, &engine) }
			});
			if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
				warn!("connection from {peer} failed: {err}");
			}
		});
	}
}

fn route(
	req: Request<Incoming>,
	engine: &Tera,
) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
	info!("{} {}", req.method(), req.uri().path());
	let response = match (req.method(), req.uri().path()) {
		(&Method::GET, "/") | (&Method::GET, "/form/") => {
			form_view(engine).unwrap_or_else(|err| {
				error!("form view failed: {err}");
				html_response(
					StatusCode::INTERNAL_SERVER_ERROR,
					"<h1>Internal Server Error</h1>",
				)
			})
		}
		_ => html_response(StatusCode::NOT_FOUND, "<h1>Not Found</h1>"),
	};
	Ok(response)
}
