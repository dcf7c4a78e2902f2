//! Command Loop
//!
//! Reads input lines, turns them into commands, and prints responses.

use std::io::Write;

use crossterm::style::Stylize;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::format::Formatter;
use crate::network::Connection;
use crate::protocol::{Command, STATUS_OK};
use super::{LineEditor, ReadOutcome};

/// Local keyword that ends the session without contacting the server
pub const EXIT_KEYWORD: &str = "exit";

/// Printed when the read is interrupted
pub const INTERRUPT_HINT: &str = "Use 'exit' to close the client.";

/// Where the loop is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Authenticating,
    Interactive,
    Terminating,
}

/// Why the interactive loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed `exit`
    Exit,

    /// The input stream ended
    EndOfInput,
}

impl ExitReason {
    /// Process exit status for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            ExitReason::Exit => 0,
            ExitReason::EndOfInput => 1,
        }
    }
}

/// What to do after one line has been handled
enum Flow {
    Continue,
    Exit,
}

/// Interactive read-eval-print loop over a single connection
///
/// History location and color come from the `Config` given at construction.
/// Exchanges are strictly sequential: one command is sent and its response
/// read before the next line is requested.
pub struct CommandLoop<E, W> {
    editor: E,
    out: W,
    formatter: Formatter,
    color: bool,
    state: LoopState,
}

impl<E: LineEditor, W: Write> CommandLoop<E, W> {
    /// Create a loop reading from `editor` and printing to `out`
    pub fn new(editor: E, out: W, config: &Config) -> Self {
        Self {
            editor,
            out,
            formatter: Formatter::new(config.color),
            color: config.color,
            state: LoopState::Authenticating,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Authenticate, then run the interactive loop until it terminates
    ///
    /// An authentication failure is returned before any input is read. The
    /// connection is closed on every return path.
    pub fn run(&mut self, conn: &mut Connection, username: &str, password: &str) -> Result<ExitReason> {
        self.state = LoopState::Authenticating;

        if let Err(e) = conn.authenticate(username, password) {
            self.state = LoopState::Terminating;
            conn.close();
            return Err(e);
        }

        let greeting = format!("{} {}", self.paint_ok(STATUS_OK), conn.greeting());
        if let Err(e) = writeln!(self.out, "{}", greeting) {
            self.state = LoopState::Terminating;
            conn.close();
            return Err(e.into());
        }

        self.interact(conn)
    }

    /// Run the interactive loop on an authenticated connection
    pub fn interact(&mut self, conn: &mut Connection) -> Result<ExitReason> {
        self.state = LoopState::Interactive;
        let result = self.drive(conn);

        self.state = LoopState::Terminating;
        conn.close();
        let _ = self.out.flush();
        result
    }

    fn drive(&mut self, conn: &mut Connection) -> Result<ExitReason> {
        let prompt = self.prompt(conn.peer_addr());

        loop {
            match self.editor.read_line(&prompt)? {
                ReadOutcome::Line(line) => {
                    if let Flow::Exit = self.handle_line(conn, &line)? {
                        return Ok(ExitReason::Exit);
                    }
                }
                ReadOutcome::Interrupted => {
                    writeln!(self.out, "\n{}", INTERRUPT_HINT)?;
                }
                ReadOutcome::Eof => {
                    tracing::debug!("Input stream ended");
                    return Ok(ExitReason::EndOfInput);
                }
            }
        }
    }

    /// Handle one raw input line
    fn handle_line(&mut self, conn: &mut Connection, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Err(e) = self.editor.add_history(line) {
            writeln!(self.out, "Failed to save history: {}", e)?;
        }

        if line == EXIT_KEYWORD {
            writeln!(self.out, "Exiting client...")?;
            return Ok(Flow::Exit);
        }

        let command = match tokenize(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "Error parsing input: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        if let Err(e) = conn.send(&command) {
            writeln!(self.out, "Failed to send command: {}", e)?;
            return Ok(Flow::Continue);
        }

        match conn.receive() {
            Ok(response) => {
                writeln!(self.out, "\n{}\n", self.formatter.format(&response))?;
            }
            Err(e) => {
                writeln!(self.out, "Failed to read response: {}", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn prompt(&self, peer_addr: &str) -> String {
        let marker = format!("{}>", peer_addr);
        if self.color {
            format!("{} ", marker.cyan().underlined())
        } else {
            format!("{} ", marker)
        }
    }

    fn paint_ok(&self, status: &str) -> String {
        if self.color {
            status.green().to_string()
        } else {
            status.to_string()
        }
    }

    /// Consume the loop, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Split a line with shell-like quoting into a command
///
/// Returns `Ok(None)` when the line holds no tokens (for example a comment).
pub fn tokenize(line: &str) -> Result<Option<Command>> {
    let tokens = shlex::split(line).ok_or_else(|| {
        CliError::Parse("unbalanced quotes or trailing escape".to_string())
    })?;
    Ok(Command::from_tokens(tokens))
}
