//! Project management CLI (equivalent to Django's manage.py).

use std::process;

use dicas::conf::Settings;
use dicas::{db, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	if let Err(err) = run().await {
		eprintln!("Error: {err}");
		process::exit(1);
	}
}

async fn run() -> dicas::Result<()> {
	let args: Vec<String> = std::env::args().collect();
	let mut settings = Settings::from_env()?;

	match args.get(1).map(String::as_str) {
		Some("migrate") => {
			let pool = db::connect(&settings.database_url).await?;
			db::migrate(&pool).await?;
		}
		Some("runserver") => {
			// optional HOST:PORT or bare-port override, Django style
			if let Some(addr) = args.get(2) {
				settings.apply_addr_override(addr)?;
			}
			let pool = db::connect(&settings.database_url).await?;
			db::migrate(&pool).await?;
			server::serve(&settings).await?;
		}
		_ => {
			eprintln!("Usage: manage <command>");
			eprintln!();
			eprintln!("Commands:");
			eprintln!("  migrate              Apply database migrations");
			eprintln!("  runserver [addr]     Run the development server (default 127.0.0.1:8000)");
		}
	}

	Ok(())
}
