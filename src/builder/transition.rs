//! Builder for constructing transition definitions.

use crate::builder::error::BuildError;
use crate::chart::TransitionDef;

/// Builder for constructing transitions with a fluent API.
///
/// The guard is stored as written and only parsed when the transition is
/// inspected. Setting both `action` and `actions` is accepted here and
/// reported when the action list is normalized.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    event: Option<String>,
    description: Option<String>,
    guard: Option<String>,
    action: Option<String>,
    actions: Option<Vec<String>>,
    target: Option<String>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the triggering event (required).
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the guard expression (optional).
    pub fn guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    /// Set a single action (optional).
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set an ordered action list (optional).
    pub fn actions<I, A>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.actions = Some(actions.into_iter().map(Into::into).collect());
        self
    }

    /// Set the target state, making this an outgoing transition.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionDef, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        Ok(TransitionDef {
            description: self.description,
            event,
            guard: self.guard,
            action: self.action,
            actions: self.actions,
            target: self.target,
        })
    }
}
