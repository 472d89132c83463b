//! Name aggregation over a state tree.
//!
//! Every collector is a single depth-first, pre-order fold over the subtree:
//! a state's internal transitions, then its outgoing transitions, then its
//! children in declared order. Results are new ordered sets holding names in
//! order of first occurrence.
//!
//! Collectors fail fast. A malformed guard or an invalid action declaration
//! anywhere in the subtree aborts the whole traversal, since a partial name set
//! would silently produce wrong artifacts downstream.
//!
//! # Example
//!
//! ```rust
//! use statechart::builder::{StateBuilder, TransitionBuilder};
//! use statechart::collect::Traversal;
//!
//! let root = StateBuilder::new()
//!     .name("root")
//!     .transition(TransitionBuilder::new().event("tick").guard("ready and not paused"))
//!     .unwrap()
//!     .state(
//!         StateBuilder::new()
//!             .name("child")
//!             .transition(TransitionBuilder::new().event("stop").guard("ready").target("root"))
//!             .unwrap()
//!             .build(),
//!     )
//!     .build();
//!
//! let traversal = Traversal::unbounded();
//! let events: Vec<String> = traversal.event_names(&root).unwrap().into_iter().collect();
//! assert_eq!(events, ["tick", "stop"]);
//! let conditions: Vec<String> = traversal.condition_names(&root).unwrap().into_iter().collect();
//! assert_eq!(conditions, ["ready", "paused"]);
//! ```

mod config;

pub use config::{TraversalBuilder, TraversalConfig};
pub use tokio_util::sync::CancellationToken;

use crate::chart::{ChartError, ChartResult, EventCondition, EventGuard, StateDef, TransitionDef};
use crate::guard::GuardExpr;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// One pass over a state tree, bounded by a [`TraversalConfig`].
///
/// The deadline is measured from construction, so build a new traversal for
/// each generation pass.
#[derive(Clone, Debug)]
pub struct Traversal {
    config: TraversalConfig,
    started_at: Instant,
}

impl Traversal {
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }

    /// A traversal with no timeout and no cancellation.
    pub fn unbounded() -> Self {
        Self::new(TraversalConfig::default())
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Checked before each state is visited.
    fn checkpoint(&self) -> ChartResult<()> {
        if let Some(token) = &self.config.cancellation {
            if token.is_cancelled() {
                warn!("traversal_cancelled");
                return Err(ChartError::Cancelled);
            }
        }
        if let Some(timeout) = self.config.timeout {
            let elapsed = self.elapsed();
            if elapsed > timeout {
                warn!(?timeout, ?elapsed, "traversal_deadline_exceeded");
                return Err(ChartError::DeadlineExceeded { timeout, elapsed });
            }
        }
        Ok(())
    }

    /// Thread an accumulator through every transition of the subtree in
    /// visit order.
    fn fold<'a, T, F>(&self, state: &'a StateDef, acc: T, f: &mut F) -> ChartResult<T>
    where
        F: FnMut(T, &'a StateDef, &'a TransitionDef) -> ChartResult<T>,
    {
        self.checkpoint()?;
        let mut acc = acc;
        for transition in state.visit_order() {
            acc = f(acc, state, transition)?;
        }
        for child in &state.children {
            acc = self.fold(child, acc, f)?;
        }
        Ok(acc)
    }

    /// Every event referenced by a transition in the subtree.
    pub fn event_names(&self, root: &StateDef) -> ChartResult<IndexSet<String>> {
        debug!(collector = "events", root = ?root.name(), "traversal_start");
        let names = self.fold(root, IndexSet::<String>::new(), &mut |mut names, _, transition| {
            names.insert(transition.event.clone());
            Ok(names)
        })?;
        debug!(collector = "events", count = names.len(), "traversal_complete");
        Ok(names)
    }

    /// Every action named by a transition in the subtree, after normalizing
    /// `action` and `actions`.
    pub fn action_names(&self, root: &StateDef) -> ChartResult<IndexSet<String>> {
        debug!(collector = "actions", root = ?root.name(), "traversal_start");
        let names = self.fold(
            root,
            IndexSet::<String>::new(),
            &mut |mut names, state, transition| {
                let actions = transition
                    .actions()
                    .map_err(|e| e.in_state(state.name()))?;
                names.extend(actions.into_iter().map(str::to_string));
                Ok(names)
            },
        )?;
        debug!(collector = "actions", count = names.len(), "traversal_complete");
        Ok(names)
    }

    /// Distinct parsed guards in the subtree.
    ///
    /// A guard string already seen in this traversal is not parsed again;
    /// different strings that parse to the same tree are kept once.
    pub fn guard_expressions(&self, root: &StateDef) -> ChartResult<IndexSet<GuardExpr>> {
        debug!(collector = "guards", root = ?root.name(), "traversal_start");
        let init: (HashSet<&str>, IndexSet<GuardExpr>) = (HashSet::new(), IndexSet::new());
        let (_, guards) = self.fold(
            root,
            init,
            &mut |(mut seen, mut guards), state, transition| {
                if let Some(guard) = transition.guard.as_deref() {
                    if seen.insert(guard) {
                        let expr = transition
                            .parse(guard)
                            .map_err(|e| e.in_state(state.name()))?;
                        guards.insert(expr);
                    } else {
                        trace!(guard, "guard_cache_hit");
                    }
                }
                Ok((seen, guards))
            },
        )?;
        debug!(collector = "guards", count = guards.len(), "traversal_complete");
        Ok(guards)
    }

    /// Every condition referenced by a guard in the subtree.
    pub fn condition_names(&self, root: &StateDef) -> ChartResult<IndexSet<String>> {
        let names: IndexSet<String> = self
            .guard_expressions(root)?
            .iter()
            .flat_map(GuardExpr::condition_names)
            .collect();
        debug!(collector = "conditions", count = names.len(), "traversal_complete");
        Ok(names)
    }

    /// `(event, condition)` pairs, one per distinct condition of each guarded
    /// transition, in visit order.
    pub fn event_conditions(&self, root: &StateDef) -> ChartResult<Vec<EventCondition>> {
        let guards = self.event_guards(root)?;
        let pairs: Vec<EventCondition> = guards
            .into_iter()
            .flat_map(|EventGuard { event, guard }| {
                guard
                    .condition_names()
                    .into_iter()
                    .map(move |condition| EventCondition {
                        event: event.clone(),
                        condition,
                    })
            })
            .collect();
        debug!(collector = "event_conditions", count = pairs.len(), "traversal_complete");
        Ok(pairs)
    }

    /// `(event, guard)` pairs for each guarded transition, in visit order.
    pub fn event_guards(&self, root: &StateDef) -> ChartResult<Vec<EventGuard>> {
        debug!(collector = "event_guards", root = ?root.name(), "traversal_start");
        let init: (HashMap<&str, GuardExpr>, Vec<EventGuard>) = (HashMap::new(), Vec::new());
        let (_, pairs) = self.fold(
            root,
            init,
            &mut |(mut cache, mut pairs), state, transition| {
                if let Some(guard) = transition.guard.as_deref() {
                    let expr = match cache.get(guard) {
                        Some(expr) => {
                            trace!(guard, "guard_cache_hit");
                            expr.clone()
                        }
                        None => {
                            let expr = transition
                                .parse(guard)
                                .map_err(|e| e.in_state(state.name()))?;
                            cache.insert(guard, expr.clone());
                            expr
                        }
                    };
                    pairs.push(EventGuard {
                        event: transition.event.clone(),
                        guard: expr,
                    });
                }
                Ok((cache, pairs))
            },
        )?;
        debug!(collector = "event_guards", count = pairs.len(), "traversal_complete");
        Ok(pairs)
    }
}

impl Default for Traversal {
    fn default() -> Self {
        Self::unbounded()
    }
}
