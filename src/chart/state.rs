//! State nodes of a chart's state tree.

use crate::chart::error::ChartResult;
use crate::chart::transition::{EventCondition, EventGuard, TransitionDef};
use crate::collect::Traversal;
use crate::guard::GuardExpr;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A state, possibly containing child states.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "states")]
    pub children: Vec<StateDef>,

    #[serde(default)]
    pub transitions: Vec<TransitionDef>,
}

impl StateDef {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Transitions without a target, in declared order.
    pub fn internal_transitions(&self) -> impl Iterator<Item = &TransitionDef> {
        self.transitions.iter().filter(|t| t.is_internal())
    }

    /// Transitions with a target, in declared order.
    pub fn outgoing_transitions(&self) -> impl Iterator<Item = &TransitionDef> {
        self.transitions.iter().filter(|t| t.is_outgoing())
    }

    /// Internal transitions followed by outgoing ones: the order every
    /// collector visits them in.
    pub fn visit_order(&self) -> impl Iterator<Item = &TransitionDef> {
        self.internal_transitions().chain(self.outgoing_transitions())
    }

    /// All descendant states in pre-order, excluding `self`.
    pub fn descendants(&self) -> Vec<&StateDef> {
        fn walk<'a>(state: &'a StateDef, out: &mut Vec<&'a StateDef>) {
            for child in &state.children {
                out.push(child);
                walk(child, out);
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    pub fn event_names(&self) -> ChartResult<IndexSet<String>> {
        Traversal::unbounded().event_names(self)
    }

    pub fn condition_names(&self) -> ChartResult<IndexSet<String>> {
        Traversal::unbounded().condition_names(self)
    }

    pub fn action_names(&self) -> ChartResult<IndexSet<String>> {
        Traversal::unbounded().action_names(self)
    }

    pub fn guard_expressions(&self) -> ChartResult<IndexSet<GuardExpr>> {
        Traversal::unbounded().guard_expressions(self)
    }

    pub fn event_conditions(&self) -> ChartResult<Vec<EventCondition>> {
        Traversal::unbounded().event_conditions(self)
    }

    pub fn event_guards(&self) -> ChartResult<Vec<EventGuard>> {
        Traversal::unbounded().event_guards(self)
    }
}
