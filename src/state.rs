//! Page-lifetime UI state.

use crate::arith::add;
use crate::report::{LOCAL_VARIABLE, ScopeReport};

/// State that lives for as long as the page does.
///
/// Created once at startup. The scope counter is only ever advanced by
/// [`UiState::show_scope_demo`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    scope_counter: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scope-demo invocations so far.
    pub fn scope_counter(&self) -> u64 {
        self.scope_counter
    }

    /// Run the scope demo: bump the counter and build its report.
    pub fn show_scope_demo(&mut self, current_time: impl Into<String>) -> ScopeReport {
        self.scope_counter += 1;
        tracing::debug!(counter = self.scope_counter, "scope demo invoked");
        ScopeReport {
            local_variable: LOCAL_VARIABLE,
            counter: self.scope_counter,
            current_time: current_time.into(),
            add_example: add(5.0, 3.0),
        }
    }
}
