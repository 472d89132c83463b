//! State chart definition model.
//!
//! These types mirror the chart document: a root state with nested child
//! states, transitions carrying events, guard strings and actions, and three
//! declared name tables. They hold no parsed state; guards are parsed on
//! request by [`TransitionDef::parse_guard`] and by the collectors in
//! [`crate::collect`].

mod definition;
mod descriptions;
mod error;
mod state;
mod transition;

pub use definition::{NameKind, StateChartDef};
pub use descriptions::{DescriptionMap, Descriptions};
pub use error::{ChartError, ChartResult};
pub use state::StateDef;
pub use transition::{EventCondition, EventGuard, TransitionDef};
