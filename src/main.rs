//! QuoteStream: inspirational quotes by topic
//!
//! Usage:
//!   quotestream                   - Open the window
//!   quotestream lookup <topic>    - Print quotes for a topic
//!   quotestream topics            - List category shortcuts
//!   quotestream config            - Show configuration
//!   quotestream help              - Show help
//!
//! `--config <path>` adds a config file on top of the discovered ones.

use std::env;
use std::path::Path;
use std::process;

use iced::{window, Size, Task};
use quotestream::app::{QuoteStream, TITLE};
use quotestream::commands::{render_lookup, render_topics, Cli, Command};
use quotestream::{Config, QuoteStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    // try_init so a second call (tests, embedding) doesn't panic
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();

    let cli = Cli::parse(&args[..]);
    let config_path = cli.config_path.as_deref();

    match cli.command {
        Command::Launch => start_app(config_path),
        command => {
            let code = handle_cli_command(command, config_path);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Config {
    match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{} (using defaults)", e);
            Config::default()
        }
    }
}

/// Run a one-shot command, returning the process exit code
fn handle_cli_command(command: Command, config_path: Option<&Path>) -> i32 {
    match command {
        Command::Lookup { topic, json } => {
            match render_lookup(QuoteStore::builtin(), &topic, json) {
                Ok((out, found)) => {
                    println!("{}", out);
                    // Unknown topics still print the fallback line but fail
                    if found {
                        0
                    } else {
                        1
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        Command::Topics => {
            println!("{}", render_topics(QuoteStore::builtin()));
            0
        }
        Command::Config => {
            match Config::global_config_path() {
                Some(path) => println!("Global config: {}", path.display()),
                None => println!("Global config: (no config directory)"),
            }
            if let Some(path) = Config::project_config_path() {
                println!("Project config: {}", path.display());
            }
            if let Some(path) = config_path {
                println!("Explicit config: {}", path.display());
            }
            let config = load_config(config_path);
            println!("search delay:      {} ms", config.delays.search_ms);
            println!("category debounce: {} ms", config.delays.category_debounce_ms);
            println!("copied notice:     {} ms", config.delays.copied_flash_ms);
            0
        }
        Command::Help => {
            println!("{}", Command::help_text());
            0
        }
        Command::Invalid { message } => {
            eprintln!("{}", message);
            eprintln!("Run 'quotestream help' for usage");
            2
        }
        Command::Launch => 0,
    }
}

fn start_app(config_path: Option<&Path>) -> iced::Result {
    let config = load_config(config_path);
    tracing::info!("Starting {} ({:?})", TITLE, config.delays);

    iced::application(QuoteStream::title, QuoteStream::update, QuoteStream::view)
        .theme(QuoteStream::theme)
        .window(window::Settings {
            size: Size::new(config.window.width as f32, config.window.height as f32),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (QuoteStream::new(&config), Task::none()))
}
