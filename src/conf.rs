//! Project settings.
//!
//! Settings are read from the process environment, with a `.env` file
//! loaded first if one exists. Every key has a development default so
//! the demo runs out of the box.

use std::net::SocketAddr;
use std::path::PathBuf;

use rand::Rng;

use crate::error::{Error, Result};

/// Runtime configuration for the demo project.
#[derive(Debug, Clone)]
pub struct Settings {
	pub database_url: String,
	pub secret_key: String,
	pub host: String,
	pub port: u16,
	pub template_dir: PathBuf,
}

impl Settings {
	/// Load settings from the environment.
	///
	/// A `.env` file in the working directory is honored when present
	/// (see the `env-gen` binary, which writes one).
	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();

		let port = match std::env::var("PORT") {
			Ok(raw) => raw
				.parse::<u16>()
				.map_err(|_| Error::Config(format!("PORT is not a valid port number: {raw}")))?,
			Err(_) => 8000,
		};

		Ok(Self {
			database_url: env_or("DATABASE_URL", "sqlite://dicas.db?mode=rwc"),
			secret_key: env_or("SECRET_KEY", "insecure-dev-only-secret-key"),
			host: env_or("HOST", "127.0.0.1"),
			port,
			template_dir: PathBuf::from(env_or("TEMPLATE_DIR", "templates")),
		})
	}

	/// Apply a `runserver`-style address override: either `HOST:PORT`
	/// or a bare port number.
	pub fn apply_addr_override(&mut self, addr: &str) -> Result<()> {
		match addr.rsplit_once(':') {
			Some((host, port)) => {
				self.port = port
					.parse()
					.map_err(|_| Error::Config(format!("invalid port in address {addr}")))?;
				self.host = host.to_string();
			}
			None => {
				self.port = addr
					.parse()
					.map_err(|_| Error::Config(format!("invalid address or port {addr}")))?;
			}
		}
		Ok(())
	}

	/// Socket address the development server binds to.
	pub fn addr(&self) -> Result<SocketAddr> {
		format!("{}:{}", self.host, self.port)
			.parse()
			.map_err(|_| Error::Config(format!("invalid bind address {}:{}", self.host, self.port)))
	}
}

fn env_or(key: &str, default: &str) -> String {
	std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Generate a random 50-character secret key.
pub fn generate_secret_key() -> String {
	const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
	                         ABCDEFGHIJKLMNOPQRSTUVWXYZ\
	                         0123456789\
	                         !?@#$%^&*(-_=+)";
	let mut rng = rand::rng();
	(0..50)
		.map(|_| {
			let idx = rng.random_range(0..CHARSET.len());
			CHARSET[idx] as char
		})
		.collect()
}
