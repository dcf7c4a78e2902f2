//! Line Editor
//!
//! Blocking line input with history.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::Result;

/// Outcome of one blocking read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input, without the trailing newline
    Line(String),

    /// The read was interrupted (Ctrl-C); the caller should re-prompt
    Interrupted,

    /// The input stream ended (Ctrl-D or closed stdin)
    Eof,
}

/// Source of input lines for the command loop
pub trait LineEditor {
    /// Block for one line. Errors are unrecoverable input-stream failures.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;

    /// Record a line in history (and persist it, if configured)
    fn add_history(&mut self, line: &str) -> Result<()>;
}

impl<E: LineEditor + ?Sized> LineEditor for &mut E {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        (**self).read_line(prompt)
    }

    fn add_history(&mut self, line: &str) -> Result<()> {
        (**self).add_history(line)
    }
}

/// Terminal line editor backed by rustyline
pub struct RustylineEditor {
    editor: DefaultEditor,

    /// Where history is loaded from and saved to
    history_file: Option<PathBuf>,
}

impl RustylineEditor {
    /// Create an editor, loading history from `history_file` if it exists
    pub fn new(history_file: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = history_file.as_deref() {
            if path.exists() {
                match editor.load_history(path) {
                    Ok(()) => tracing::debug!("Loaded history from {}", path.display()),
                    Err(e) => tracing::warn!("Could not load history from {}: {}", path.display(), e),
                }
            }
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) -> Result<()> {
        self.editor.add_history_entry(line)?;
        if let Some(path) = self.history_file.as_deref() {
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}
