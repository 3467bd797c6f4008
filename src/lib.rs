//! QuoteStream: inspirational quotes by topic
//!
//! A fixed quote table, a timer-driven interaction controller and an Iced
//! window on top of them.

pub mod app;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod quotes;
pub mod ui;

pub use config::{Config, Delays};
pub use controller::{Controller, SearchState, Timer, TimerEvent};
pub use error::{ClipboardError, Error, Result};
pub use quotes::{QuoteStore, CATEGORIES, FALLBACK_MESSAGE};
