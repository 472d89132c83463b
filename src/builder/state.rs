//! Builder for constructing state trees.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::chart::{StateDef, TransitionDef};

/// Builder for constructing states with a fluent API.
#[derive(Debug, Default)]
pub struct StateBuilder {
    name: Option<String>,
    description: Option<String>,
    children: Vec<StateDef>,
    transitions: Vec<TransitionDef>,
}

impl StateBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a child state. Children keep the order they are added in.
    pub fn state(mut self, child: StateDef) -> Self {
        self.children.push(child);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: TransitionDef) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<TransitionDef>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    pub fn build(self) -> StateDef {
        StateDef {
            name: self.name,
            description: self.description,
            children: self.children,
            transitions: self.transitions,
        }
    }
}
