//! Build errors for chart, state and transition builders.

use thiserror::Error;

/// Errors that can occur when building chart definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Transition event not specified. Call .event(name) before .build()")]
    MissingEvent,

    #[error("Root state not specified. Call .root(state) before .build()")]
    MissingRootState,
}
