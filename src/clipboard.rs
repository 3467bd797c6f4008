//! Clipboard writers
//!
//! `SystemClipboard` tries `arboard` first and falls back to piping into
//! wl-copy (Wayland) or xclip (X11).

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};

use crate::error::ClipboardError;

/// Capability the controller uses to publish copied text
pub trait ClipboardWriter {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

impl<W: ClipboardWriter + ?Sized> ClipboardWriter for Box<W> {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }
}

/// Host clipboard
///
/// The arboard handle is opened on first use and kept for the lifetime of the
/// writer: on X11 the copied text is only served while a handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn has_handle(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn write_arboard(&self, text: &str) -> Result<(), ClipboardError> {
        let mut handle = self.handle.lock().unwrap_or_else(PoisonError::into_inner);

        if handle.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *handle = Some(clipboard);
        }

        let result = match handle.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable("no clipboard handle".to_string())),
        };

        // A broken handle is reopened on the next write
        if result.is_err() {
            *handle = None;
        }
        result
    }

    fn write_command(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| ClipboardError::Unavailable(format!("{}: {}", program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Write(format!("{} exited with {}", program, status)))
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let err = match self.write_arboard(text) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        tracing::debug!("arboard failed ({}), trying wl-copy/xclip", err);

        Self::write_command("wl-copy", &[], text)
            .or_else(|_| Self::write_command("xclip", &["-selection", "clipboard", "-i"], text))
            .map_err(|_| err)
    }
}

/// Drops every write
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl ClipboardWriter for NoopClipboard {
    fn write(&self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}
