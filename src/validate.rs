//! Whole-chart validation that reports every problem at once.
//!
//! The collectors in [`crate::collect`] stop at the first malformed guard.
//! Validation instead visits every transition and accumulates all failures
//! with Stillwater's `Validation`, so an editor or loader can show the full
//! list in one pass.
//!
//! # Example
//!
//! ```rust
//! use statechart::builder::{StateBuilder, TransitionBuilder};
//! use statechart::validate::validate_state;
//! use stillwater::validation::Validation;
//!
//! let root = StateBuilder::new()
//!     .name("root")
//!     .transition(TransitionBuilder::new().event("a").guard("x and"))
//!     .unwrap()
//!     .transition(TransitionBuilder::new().event("b").guard("(y"))
//!     .unwrap()
//!     .build();
//!
//! match validate_state(&root) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("expected failures"),
//! }
//! ```

use crate::chart::{ChartError, StateChartDef, StateDef, TransitionDef};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of validating a chart or subtree.
pub type ChartValidation = Validation<(), NonEmptyVec<ChartError>>;

/// Validate every transition of the chart's state tree.
pub fn validate_chart(chart: &StateChartDef) -> ChartValidation {
    validate_state(&chart.root)
}

/// Validate every transition of `root` and its descendants.
///
/// Each transition is checked for a parseable guard and for declaring at most
/// one of `action` and `actions`.
pub fn validate_state(root: &StateDef) -> ChartValidation {
    let mut states = vec![root];
    states.extend(root.descendants());

    let mut checks: Vec<ChartValidation> = Vec::new();
    for state in states {
        for transition in state.visit_order() {
            checks.push(check_guard(state, transition));
            checks.push(check_actions(state, transition));
        }
    }

    let result = Validation::all_vec(checks).map(|_| ());
    let failures = match &result {
        Validation::Failure(errors) => errors.len(),
        Validation::Success(_) => 0,
    };
    debug!(root = ?root.name(), failures, "validation_complete");
    result
}

fn check_guard(state: &StateDef, transition: &TransitionDef) -> ChartValidation {
    match transition.parse_guard() {
        Ok(_) => Validation::success(()),
        Err(e) => Validation::fail(e.in_state(state.name())),
    }
}

fn check_actions(state: &StateDef, transition: &TransitionDef) -> ChartValidation {
    match transition.actions() {
        Ok(_) => Validation::success(()),
        Err(e) => Validation::fail(e.in_state(state.name())),
    }
}
