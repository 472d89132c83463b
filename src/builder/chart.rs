//! Builder for constructing complete chart definitions.

use crate::builder::error::BuildError;
use crate::chart::{DescriptionMap, StateChartDef, StateDef};

/// Builder for constructing charts with a fluent API.
///
/// Declared names keep the order they are added in. Declaring the same name
/// twice keeps its first position and replaces its description.
#[derive(Debug, Default)]
pub struct StateChartBuilder {
    name: Option<String>,
    description: Option<String>,
    events: DescriptionMap,
    conditions: DescriptionMap,
    actions: DescriptionMap,
    root: Option<StateDef>,
}

impl StateChartBuilder {
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

    /// Declare an event, with or without a description.
    pub fn event(mut self, name: impl Into<String>, description: Option<&str>) -> Self {
        self.events
            .insert(name.into(), description.map(str::to_string));
        self
    }

    /// Declare a condition, with or without a description.
    pub fn condition(mut self, name: impl Into<String>, description: Option<&str>) -> Self {
        self.conditions
            .insert(name.into(), description.map(str::to_string));
        self
    }

    /// Declare an action, with or without a description.
    pub fn action(mut self, name: impl Into<String>, description: Option<&str>) -> Self {
        self.actions
            .insert(name.into(), description.map(str::to_string));
        self
    }

    /// Set the root state (required).
    pub fn root(mut self, root: StateDef) -> Self {
        self.root = Some(root);
        self
    }

    /// Build the chart.
    /// Returns an error if the root state is missing.
    pub fn build(self) -> Result<StateChartDef, BuildError> {
        let root = self.root.ok_or(BuildError::MissingRootState)?;

        Ok(StateChartDef {
            name: self.name,
            description: self.description,
            events: self.events,
            conditions: self.conditions,
            actions: self.actions,
            root,
        })
    }
}
