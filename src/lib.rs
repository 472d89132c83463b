//! Statechart: guard parsing and name aggregation for state chart definitions
//!
//! A state chart definition is a tree of states whose transitions carry an
//! event, an optional guard string, optional actions and an optional target.
//! This crate is the pure core that artifact generators (interface code,
//! diagrams, documentation) build on:
//!
//! - **Guards**: a small boolean language (`and`, `or`, `not`, parentheses,
//!   condition names) parsed into an AST that renders back to canonical text
//! - **Collection**: depth-first folds over the state tree producing ordered,
//!   deduplicated event, condition and action names
//! - **Descriptions**: reconciliation of collected names against the chart's
//!   declared name tables
//!
//! Everything here is free of I/O and shared state; independent charts can be
//! processed on independent threads.
//!
//! # Example
//!
//! ```rust
//! use statechart::builder::{StateBuilder, StateChartBuilder, TransitionBuilder};
//!
//! let chart = StateChartBuilder::new()
//!     .name("door")
//!     .condition("unlocked", Some("The lock is open"))
//!     .condition("jammed", None)
//!     .root(
//!         StateBuilder::new()
//!             .name("Closed")
//!             .transition(
//!                 TransitionBuilder::new()
//!                     .event("push")
//!                     .guard("unlocked and not blocked")
//!                     .target("Open"),
//!             )
//!             .unwrap()
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let conditions = chart.condition_descriptions().unwrap();
//! let used: Vec<String> = conditions.all_used().into_keys().collect();
//! assert_eq!(used, ["unlocked", "blocked"]);
//! assert_eq!(conditions.undeclared().len(), 1);
//! assert!(conditions.all_unused().contains_key("jammed"));
//! ```

pub mod builder;
pub mod chart;
pub mod collect;
pub mod guard;
pub mod validate;

// Re-export commonly used types
pub use chart::{
    ChartError, ChartResult, Descriptions, NameKind, StateChartDef, StateDef, TransitionDef,
};
pub use collect::Traversal;
pub use guard::{parse_guard, GuardError, GuardExpr};
