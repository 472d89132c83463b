//! Top-level chart definition.

use crate::chart::descriptions::{DescriptionMap, Descriptions};
use crate::chart::error::ChartResult;
use crate::chart::state::StateDef;
use crate::collect::Traversal;
use serde::{Deserialize, Serialize};

/// Which declared table a [`Descriptions`] view is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameKind {
    Event,
    Condition,
    Action,
}

/// A complete state chart: declared name tables plus the state tree.
///
/// Field names follow the chart document format, so an external loader can
/// deserialize straight into this type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChartDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub events: DescriptionMap,

    #[serde(default)]
    pub conditions: DescriptionMap,

    #[serde(default)]
    pub actions: DescriptionMap,

    #[serde(rename = "root state")]
    pub root: StateDef,
}

impl StateChartDef {
    /// The root state followed by all its descendants in pre-order.
    pub fn all_states(&self) -> Vec<&StateDef> {
        let mut states = vec![&self.root];
        states.extend(self.root.descendants());
        states
    }

    pub fn declared(&self, kind: NameKind) -> &DescriptionMap {
        match kind {
            NameKind::Event => &self.events,
            NameKind::Condition => &self.conditions,
            NameKind::Action => &self.actions,
        }
    }

    pub fn descriptions(&self, kind: NameKind) -> ChartResult<Descriptions> {
        self.descriptions_within(kind, &Traversal::unbounded())
    }

    /// Pair a declared table with the names collected by `traversal`.
    pub fn descriptions_within(
        &self,
        kind: NameKind,
        traversal: &Traversal,
    ) -> ChartResult<Descriptions> {
        let used = match kind {
            NameKind::Event => traversal.event_names(&self.root)?,
            NameKind::Condition => traversal.condition_names(&self.root)?,
            NameKind::Action => traversal.action_names(&self.root)?,
        };
        Ok(Descriptions::new(self.declared(kind).clone(), used))
    }

    pub fn event_descriptions(&self) -> ChartResult<Descriptions> {
        self.descriptions(NameKind::Event)
    }

    pub fn condition_descriptions(&self) -> ChartResult<Descriptions> {
        self.descriptions(NameKind::Condition)
    }

    pub fn action_descriptions(&self) -> ChartResult<Descriptions> {
        self.descriptions(NameKind::Action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::transition::TransitionDef;
    use crate::chart::ChartError;

    fn internal(event: &str) -> TransitionDef {
        TransitionDef {
            event: event.to_string(),
            ..Default::default()
        }
    }

    fn named(name: &str) -> StateDef {
        StateDef {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn chart() -> StateChartDef {
        let s1 = StateDef {
            transitions: vec![internal("e2")],
            ..named("S1")
        };
        let s2 = StateDef {
            transitions: vec![internal("e1")],
            ..named("S2")
        };
        let mut events = DescriptionMap::new();
        events.insert("e1".to_string(), Some("first".to_string()));
        events.insert("e9".to_string(), None);
        StateChartDef {
            name: Some("test".to_string()),
            events,
            root: StateDef {
                children: vec![s1, s2],
                ..named("root")
            },
            ..Default::default()
        }
    }

    #[test]
    fn all_states_starts_with_root() {
        let chart = chart();
        let names: Vec<&str> = chart.all_states().iter().filter_map(|s| s.name()).collect();
        assert_eq!(names, vec!["root", "S1", "S2"]);
    }

    #[test]
    fn event_descriptions_reconcile_declared_and_used() {
        let descriptions = chart().event_descriptions().unwrap();
        let used: Vec<&str> = descriptions.used_names().iter().map(String::as_str).collect();
        assert_eq!(used, vec!["e2", "e1"]);

        let all_used = descriptions.all_used();
        let keys: Vec<&str> = all_used.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["e1", "e2"]);

        let unused = descriptions.all_unused();
        assert_eq!(unused.len(), 1);
        assert!(unused.contains_key("e9"));
    }

    #[test]
    fn empty_tables_give_only_used_names() {
        let descriptions = chart().action_descriptions().unwrap();
        assert!(descriptions.all().is_empty());
        let conditions = chart().condition_descriptions().unwrap();
        assert!(conditions.used_names().is_empty());
    }

    #[test]
    fn malformed_guard_fails_condition_descriptions() {
        let mut chart = chart();
        chart.root.children[1].transitions[0].guard = Some("(x".to_string());
        let err = chart.condition_descriptions().unwrap_err();
        assert!(matches!(
            err,
            ChartError::Guard { state: Some(ref s), .. } if s == "S2"
        ));
    }

    #[test]
    fn declared_selects_table_by_kind() {
        let chart = chart();
        assert_eq!(chart.declared(NameKind::Event).len(), 2);
        assert!(chart.declared(NameKind::Condition).is_empty());
        assert!(chart.declared(NameKind::Action).is_empty());
    }

    #[test]
    fn deserializes_document_with_null_descriptions() {
        let chart: StateChartDef = serde_json::from_str(
            r#"{
                "name": "door",
                "events": {"open": "Open the door", "close": null},
                "root state": {"name": "root"}
            }"#,
        )
        .unwrap();
        let keys: Vec<&str> = chart.events.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["open", "close"]);
        assert_eq!(chart.events["close"], None);
        assert!(chart.conditions.is_empty());
    }
}
