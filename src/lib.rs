//! # playground-rs
//!
//! Small pure functions and cosmetic animation state machines behind an
//! interactive "functions and animations" teaching page.
//!
//! ## Overview
//!
//! The page wires button clicks to:
//! - **Arithmetic helpers**: sum, product and average of two inputs
//! - **Text helpers**: reverse, uppercase, word and vowel counts
//! - **A scope demo**: a counter that lives as long as the page
//! - **Cosmetic effects**: box pop, color cycle, modal fade and a
//!   simulated progress bar, each modelled as a timer-driven state machine
//! - **Dispatch**: a [`Page`] that maps each action to state changes and
//!   the DOM commands the host should carry out
//!
//! Everything here is DOM-free; the `wasm-ui` crate binds it to the page
//! and the `playground` binary drives it from a terminal.
//!
//! ## Example
//!
//! ```
//! use playground_rs::{CalcReport, Report, parse_number_or_zero};
//!
//! let a = parse_number_or_zero("4");
//! let b = parse_number_or_zero("not a number");
//! let report = CalcReport::new(a, b);
//!
//! assert_eq!(report.sum, 4.0);
//! assert_eq!(report.rows()[3].value, "2.00");
//! ```

pub mod animation;
pub mod arith;
pub mod bindings;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod modal;
pub mod page;
pub mod progress;
pub mod report;
pub mod state;
pub mod text;

pub use animation::{Animator, Effect, Phase, Replay, ResultAnimation, Styling};
pub use arith::{add, average, multiply, parse_number, parse_number_or_zero};
pub use bindings::{Action, BINDINGS, Binding, EventKind, Role, action_for};
pub use config::Timings;
pub use error::PlaygroundError;
pub use modal::{Modal, ModalPhase, ModalTimer};
pub use page::{Command, Host, Page, Timer};
pub use progress::{IncrementSource, Progress, ProgressPhase, ProgressTimer, RandIncrements, Tick};
pub use report::{CalcReport, Plain, Report, Row, ScopeReport, TextReport};
pub use state::UiState;
pub use text::{reverse, uppercase, vowel_count, word_count};
