//! Command line parsing
//!
//! Positional commands like `lookup <topic>`, `topics`, `help`, plus a global
//! `--config <path>` option accepted anywhere.

use std::path::PathBuf;

use crate::quotes::{QuoteStore, CATEGORIES};

/// Full invocation: global options and the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

impl Cli {
    /// Parse arguments following the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let mut config_path = None;
        let mut rest: Vec<&str> = Vec::with_capacity(args.len());
        let mut iter = args.iter().map(AsRef::<str>::as_ref);

        while let Some(arg) = iter.next() {
            if arg == "--config" || arg == "-c" {
                match iter.next() {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        return Self {
                            config_path,
                            command: Command::Invalid {
                                message: "Usage: --config <path>".to_string(),
                            },
                        }
                    }
                }
            } else if let Some(path) = arg.strip_prefix("--config=") {
                config_path = Some(PathBuf::from(path));
            } else {
                rest.push(arg);
            }
        }

        Self {
            config_path,
            command: Command::parse(&rest[..]),
        }
    }
}

/// Parsed command from process arguments (program name excluded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the window: no arguments
    Launch,
    /// Print quotes for a topic: lookup <topic> [--json]
    Lookup { topic: String, json: bool },
    /// List category shortcuts: topics
    Topics,
    /// Show resolved configuration: config
    Config,
    /// Show help: help
    Help,
    /// Anything else, with the reason it was rejected
    Invalid { message: String },
}

impl Command {
    /// Parse arguments following the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(cmd) = args.first() else {
            return Command::Launch;
        };

        let rest: Vec<&str> = args[1..].iter().map(AsRef::as_ref).collect();

        match cmd.as_ref() {
            "lookup" | "l" => {
                let json = rest.contains(&"--json");
                let words: Vec<&str> = rest.iter().copied().filter(|a| *a != "--json").collect();
                if words.is_empty() {
                    Command::Invalid {
                        message: "Usage: quotestream lookup <topic> [--json]".to_string(),
                    }
                } else {
                    Command::Lookup {
                        topic: words.join(" "),
                        json,
                    }
                }
            }
            "topics" | "t" => Command::Topics,
            "config" => Command::Config,
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid {
                message: format!("Unknown command: {}", other),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"QuoteStream - inspirational quotes by topic

Usage: quotestream [--config <path>] [command]

Commands:
  (none)                   Open the QuoteStream window
  lookup <topic> [--json]  Print quotes for a topic (exit 1 if unknown)
  topics                   List category shortcuts
  config                   Show configuration file and delays
  help                     Show this help message

Options:
  -c, --config <path>      Extra config file, above ./quotestream.toml

Environment:
  QUOTESTREAM_DELAYS__SEARCH_MS   Override the search delay (ms)
  RUST_LOG                        Log filter, e.g. quotestream=debug"#
    }
}

/// Printed form of `lookup <topic>`, and whether the topic exists
pub fn render_lookup(
    store: &QuoteStore,
    topic: &str,
    json: bool,
) -> Result<(String, bool), serde_json::Error> {
    let quotes = store.lookup(topic);
    let out = if json {
        serde_json::to_string_pretty(&quotes)?
    } else {
        quotes.join("\n")
    };
    Ok((out, store.contains(topic)))
}

/// One `key  label` line per topic in the store
pub fn render_topics(store: &QuoteStore) -> String {
    store
        .topics()
        .map(|topic| {
            let label = CATEGORIES
                .iter()
                .find(|c| c.key == topic)
                .map(|c| c.label)
                .unwrap_or("");
            format!("{:<10} {}", topic, label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
