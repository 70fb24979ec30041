//! `.env` generator.
//!
//! Writes a fresh `.env` with a random SECRET_KEY and the development
//! defaults for the database and server settings.

use std::fs;
use std::process;

use dicas::conf::generate_secret_key;

fn main() {
	let contents = format!(
		"SECRET_KEY={}\n\
		 DATABASE_URL=sqlite://dicas.db?mode=rwc\n\
		 HOST=127.0.0.1\n\
		 PORT=8000\n",
		generate_secret_key()
	);

	if let Err(err) = fs::write(".env", contents) {
		eprintln!("Error: could not write .env: {err}");
		process::exit(1);
	}

	println!("Success!");
	println!("Type: cat .env");
}
