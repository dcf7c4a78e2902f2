//! Command Loop Module
//!
//! The interactive read-eval-print cycle.
//!
//! ## States
//! ```text
//! Authenticating ──ok──▶ Interactive ──exit / end of input──▶ Terminating
//!        │                                                         ▲
//!        └──────────────────────auth failure──────────────────────┘
//! ```
//!
//! Line input goes through the [`LineEditor`] trait so the loop can be driven
//! by a real terminal ([`RustylineEditor`]) or by a script.

mod editor;
mod command_loop;

pub use editor::{LineEditor, ReadOutcome, RustylineEditor};
pub use command_loop::{tokenize, CommandLoop, ExitReason, LoopState, INTERRUPT_HINT};
