//! ShakeSearch: desktop client for the Shakespeare quote search backend
//!
//! Usage:
//!   shakesearch                     - Open the search window
//!   shakesearch search <query>      - Print matching cards
//!   shakesearch context <quote>     - Print the passage around a quote
//!   shakesearch config              - Print effective configuration
//!   shakesearch help                - Show help

mod app;
mod backend;
mod commands;
mod config;
mod error;
mod highlight;
mod render;
mod sequence;
mod ui;

use std::env;

use app::ShakeSearch;
use backend::BackendClient;
use commands::Command;
use config::Config;
use iced::{window, Size, Task};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::modal::ModalContent;

fn main() -> iced::Result {
    // Use try_init so a second call never panics
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();

    match Command::parse(&args) {
        Command::Gui => start_window(config),
        command => {
            handle_cli_command(command, &config);
            Ok(())
        }
    }
}

fn handle_cli_command(command: Command, config: &Config) {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return;
        }
    };
    let backend = BackendClient::from_config(config);

    match command {
        Command::Search { query } => match rt.block_on(backend.search(&query)) {
            Ok(results) if results.is_empty() => {
                println!("{}", render::modal_markup(&ModalContent::NoResults));
            }
            Ok(results) => {
                println!("{}", render::cards_markup(&results));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                println!("{}", render::modal_markup(&ModalContent::Failure(e.to_string())));
            }
        },
        Command::Context { quote, term } => match rt.block_on(backend.context(&quote)) {
            Ok(results) => {
                let term = term.unwrap_or_else(|| quote.clone());
                println!("{}", render::modal_markup(&app::context_modal(results, &term)));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                println!("{}", render::modal_markup(&ModalContent::Failure(e.to_string())));
            }
        },
        Command::Config => {
            if let Some(path) = Config::config_path() {
                println!("# {}", path.display());
            }
            print!("{}", config.to_toml());
        }
        Command::Help => {
            println!("{}", Command::help_text());
        }
        Command::Invalid { message } => {
            eprintln!("{}", message);
        }
        Command::Gui => {}
    }
}

fn start_window(config: Config) -> iced::Result {
    tracing::info!(backend = %config.base_url, "Starting ShakeSearch");

    iced::application("ShakeSearch", ShakeSearch::update, ShakeSearch::view)
        .subscription(ShakeSearch::subscription)
        .theme(ShakeSearch::theme)
        .window(window::Settings {
            size: Size::new(900.0, 700.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (ShakeSearch::new(&config), Task::none()))
}
