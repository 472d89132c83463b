//! Errors raised while walking a state chart.

use crate::guard::GuardError;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors that can occur when aggregating or validating a chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A transition's guard string failed to lex or parse.
    #[error("invalid guard {guard:?} on event {event:?} in state {}: {source}", state_label(.state))]
    Guard {
        state: Option<String>,
        event: String,
        guard: String,
        #[source]
        source: GuardError,
    },

    /// A transition declares both `action` and `actions`.
    #[error("transition on event {event:?} in state {} declares both action and actions", state_label(.state))]
    InvalidTransition { state: Option<String>, event: String },

    /// The traversal's cancellation token was triggered.
    #[error("traversal cancelled")]
    Cancelled,

    /// The traversal ran past its configured timeout.
    #[error("traversal timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    DeadlineExceeded { timeout: Duration, elapsed: Duration },
}

impl ChartError {
    /// Attach the owning state's name to a transition-level error that does
    /// not carry one yet.
    pub fn in_state(self, name: Option<&str>) -> Self {
        match self {
            Self::Guard {
                state: None,
                event,
                guard,
                source,
            } => Self::Guard {
                state: name.map(str::to_string),
                event,
                guard,
                source,
            },
            Self::InvalidTransition { state: None, event } => Self::InvalidTransition {
                state: name.map(str::to_string),
                event,
            },
            other => other,
        }
    }
}

fn state_label(state: &Option<String>) -> &str {
    state.as_deref().unwrap_or("<unnamed>")
}
