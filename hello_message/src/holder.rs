use crate::errors::EmitError;
use std::io::{self, Write};

/// A single text message, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageHolder {
    message: String,
}

impl MessageHolder {
    /// Store `message` verbatim. Any string is accepted, including the empty one.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Write the message and a line terminator to standard output.
    ///
    /// Standard output is locked for the duration of the write and flushed before
    /// returning.
    pub fn emit(&self) -> Result<(), EmitError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.emit_to(&mut out)
    }

    /// Write the message and a line terminator to an arbitrary sink.
    pub fn emit_to(&self, out: &mut impl Write) -> Result<(), EmitError> {
        tracing::debug!(len = self.message.len(), "Emitting message");

        writeln!(out, "{}", self.message)
            .and_then(|_| out.flush())
            .map_err(|e| {
                tracing::error!("Couldn't write message: {}", e);
                EmitError::Write(e)
            })
    }
}
