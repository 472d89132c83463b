//! Builder API for ergonomic chart construction.
//!
//! This module provides fluent builders for assembling chart definitions in
//! code, as an alternative to deserializing a chart document.

pub mod chart;
pub mod error;
pub mod state;
pub mod transition;

pub use chart::StateChartBuilder;
pub use error::BuildError;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::chart::TransitionDef;

/// Create an unguarded transition to `target`.
///
/// # Example
///
/// ```
/// use statechart::builder::simple_transition;
///
/// let transition = simple_transition("start", "Running");
/// assert!(transition.is_outgoing());
/// ```
pub fn simple_transition(event: impl Into<String>, target: impl Into<String>) -> TransitionDef {
    TransitionDef {
        event: event.into(),
        target: Some(target.into()),
        ..Default::default()
    }
}

/// Create a guarded transition to `target`.
///
/// # Example
///
/// ```
/// use statechart::builder::guarded_transition;
///
/// let transition = guarded_transition("start", "ready and not paused", "Running");
/// let guard = transition.parse_guard().unwrap().unwrap();
/// assert_eq!(guard.to_string(), "ready and not paused");
/// ```
pub fn guarded_transition(
    event: impl Into<String>,
    guard: impl Into<String>,
    target: impl Into<String>,
) -> TransitionDef {
    TransitionDef {
        guard: Some(guard.into()),
        ..simple_transition(event, target)
    }
}
