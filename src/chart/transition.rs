//! Transition records.

use crate::chart::error::{ChartError, ChartResult};
use crate::guard::{parse_guard, GuardExpr};
use serde::{Deserialize, Serialize};

/// A transition as written in a chart definition.
///
/// The guard stays an unparsed string; [`TransitionDef::parse_guard`] builds a
/// fresh expression on every call. `action` and `actions` are mutually
/// exclusive, which is checked when [`TransitionDef::actions`] normalizes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub event: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// An event paired with one condition its guard references.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventCondition {
    pub event: String,
    pub condition: String,
}

/// An event paired with its parsed guard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventGuard {
    pub event: String,
    pub guard: GuardExpr,
}

impl TransitionDef {
    /// A transition without a target fires without leaving the state.
    pub fn is_internal(&self) -> bool {
        self.target.is_none()
    }

    pub fn is_outgoing(&self) -> bool {
        self.target.is_some()
    }

    /// Normalized action list: the single `action`, the `actions` list, or
    /// nothing.
    ///
    /// Fails with [`ChartError::InvalidTransition`] when both are present.
    pub fn actions(&self) -> ChartResult<Vec<&str>> {
        match (&self.action, &self.actions) {
            (Some(_), Some(_)) => Err(ChartError::InvalidTransition {
                state: None,
                event: self.event.clone(),
            }),
            (Some(action), None) => Ok(vec![action.as_str()]),
            (None, Some(actions)) => Ok(actions.iter().map(String::as_str).collect()),
            (None, None) => Ok(Vec::new()),
        }
    }

    /// Parse the guard, if any.
    ///
    /// Errors carry the event and the guard text so callers can point at the
    /// offending transition.
    pub fn parse_guard(&self) -> ChartResult<Option<GuardExpr>> {
        self.guard
            .as_deref()
            .map(|guard| self.parse(guard))
            .transpose()
    }

    pub(crate) fn parse(&self, guard: &str) -> ChartResult<GuardExpr> {
        parse_guard(guard).map_err(|source| ChartError::Guard {
            state: None,
            event: self.event.clone(),
            guard: guard.to_string(),
            source,
        })
    }

    pub fn event_guard(&self) -> ChartResult<Option<EventGuard>> {
        Ok(self.parse_guard()?.map(|guard| EventGuard {
            event: self.event.clone(),
            guard,
        }))
    }

    /// One pair per distinct condition in the guard; empty without a guard.
    pub fn event_conditions(&self) -> ChartResult<Vec<EventCondition>> {
        let Some(guard) = self.parse_guard()? else {
            return Ok(Vec::new());
        };
        Ok(guard
            .condition_names()
            .into_iter()
            .map(|condition| EventCondition {
                event: self.event.clone(),
                condition,
            })
            .collect())
    }
}
