//! Command-line front end.
//!
//! Mirrors the page's buttons as subcommands so the helpers and state
//! machines can be exercised without a browser.

use std::io::Write;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::arith::{parse_number, parse_number_or_zero};
use crate::bindings::{Action, BINDINGS, Role};
use crate::config::Timings;
use crate::error::PlaygroundError;
use crate::progress::{RandIncrements, simulate};
use crate::report::{CalcReport, Plain, TextReport};
use crate::state::UiState;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Playground(#[from] PlaygroundError),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("progress did not complete within {0} ticks")]
    Incomplete(u32),
}

#[derive(Parser, Debug)]
#[command(name = "playground")]
#[command(about = "Run the functions and animations demo from a terminal")]
pub struct Cli {
    /// Log state transitions at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sum, product and average of two numbers.
    Calc {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Reject unparsable numbers instead of treating them as 0.
        #[arg(long)]
        strict: bool,
    },
    /// Reverse, uppercase and count words and vowels.
    Text {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Run the scope demo repeatedly.
    Scope {
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Simulate the loading bar on a virtual clock.
    Progress {
        /// Seed for the increment generator (random when omitted).
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 15.0)]
        max_increment: f64,
        #[arg(long, default_value_t = 200)]
        tick_ms: u32,
        #[arg(long, default_value_t = 1000)]
        max_ticks: u32,
    },
    /// Print the event-binding table.
    Bindings {
        /// Only show rows for this action.
        #[arg(long)]
        action: Option<Action>,
        /// Only show rows for this element role.
        #[arg(long)]
        role: Option<Role>,
    },
}

/// Wall-clock time as the page shows it.
pub fn current_time() -> String {
    chrono::Local::now().format("%-I:%M:%S %p").to_string()
}

pub fn run(command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Calc { a, b, strict } => {
            let (a, b) = if *strict {
                (parse_number(a)?, parse_number(b)?)
            } else {
                (parse_number_or_zero(a), parse_number_or_zero(b))
            };
            write!(out, "{}", Plain(&CalcReport::new(a, b)))?;
        }
        Command::Text { text } => {
            write!(out, "{}", Plain(&TextReport::new(text)))?;
        }
        Command::Scope { times } => {
            let mut state = UiState::new();
            for i in 0..*times {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", Plain(&state.show_scope_demo(current_time())))?;
            }
        }
        Command::Progress {
            seed,
            max_increment,
            tick_ms,
            max_ticks,
        } => {
            let timings = Timings::default()
                .with_progress_tick(*tick_ms)
                .with_max_increment(*max_increment);
            let seed = seed.unwrap_or_else(|| {
                chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
            });
            tracing::debug!(seed, "starting progress simulation");
            let mut source = RandIncrements(StdRng::seed_from_u64(seed));
            let frames = simulate(&mut source, &timings, *max_ticks);
            for frame in &frames {
                let marker = if frame.animating { "*" } else { " " };
                writeln!(out, "{:>6}ms {} {}", frame.at_ms, marker, frame.label)?;
            }
            if frames.iter().all(|f| f.value < crate::progress::COMPLETE) {
                return Err(CliError::Incomplete(*max_ticks));
            }
        }
        Command::Bindings { action, role } => {
            for binding in BINDINGS.iter().filter(|b| {
                action.is_none_or(|a| a == b.action) && role.is_none_or(|r| r == b.role)
            }) {
                writeln!(
                    out,
                    "{:<6} {:<22} {:<18} -> {}",
                    binding.event,
                    binding.role.selector(),
                    binding.role,
                    binding.action
                )?;
            }
        }
    }
    Ok(())
}
