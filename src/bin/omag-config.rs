//! Generates a basic OMAG server configuration from a JSON options file.
//!
//! Usage: `omag-config [options.json]`. Reads standard input when no path is
//! given and prints the configuration document to standard output.

use std::env;
use std::fs;
use std::io::{self, Read};

use dotenvy::dotenv;

use egeria_ui::forms::server_config::NewServerForm;
use egeria_ui::services::server_author::generate_server_config;

fn read_options(path: Option<String>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let raw = match read_options(env::args().nth(1)) {
        Ok(raw) => raw,
        Err(err) => {
            log::error!("Failed to read server options: {err}");
            std::process::exit(1);
        }
    };

    let form = match serde_json::from_str::<NewServerForm>(&raw) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse server options: {err}");
            std::process::exit(1);
        }
    };

    let config = match generate_server_config(&form) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize server configuration: {err}");
            std::process::exit(1);
        }
    }
}
