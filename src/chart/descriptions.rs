//! Reconciliation of declared names against names used in the state tree.

use indexmap::{IndexMap, IndexSet};

/// Ordered map from a name to its optional description.
pub type DescriptionMap = IndexMap<String, Option<String>>;

/// Declared name table paired with the names a traversal found in use.
///
/// Both halves keep insertion order: declarations in the order they were
/// written, used names in order of first occurrence. All views are derived on
/// demand and preserve that order.
///
/// # Example
///
/// ```rust
/// use statechart::chart::{DescriptionMap, Descriptions};
/// use indexmap::IndexSet;
///
/// let mut declared = DescriptionMap::new();
/// declared.insert("e1".to_string(), Some("desc".to_string()));
/// declared.insert("e2".to_string(), None);
/// let used: IndexSet<String> = ["e2", "e3"].into_iter().map(String::from).collect();
///
/// let descriptions = Descriptions::new(declared, used);
/// let all_used = descriptions.all_used();
/// let used_names: Vec<&str> = all_used.keys().map(String::as_str).collect();
/// assert_eq!(used_names, ["e2", "e3"]);
/// assert!(descriptions.all_unused().contains_key("e1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Descriptions {
    declared: DescriptionMap,
    used: IndexSet<String>,
}

impl Descriptions {
    pub fn new(declared: DescriptionMap, used: IndexSet<String>) -> Self {
        Self { declared, used }
    }

    pub fn declared(&self) -> &DescriptionMap {
        &self.declared
    }

    pub fn used_names(&self) -> &IndexSet<String> {
        &self.used
    }

    /// Every declared entry, then every used name that was never declared.
    pub fn all(&self) -> DescriptionMap {
        let mut result = self.declared.clone();
        for name in &self.used {
            result.entry(name.clone()).or_insert(None);
        }
        result
    }

    /// Declared entries that are used, then used names that were never
    /// declared.
    pub fn all_used(&self) -> DescriptionMap {
        let mut result: DescriptionMap = self
            .declared
            .iter()
            .filter(|(name, _)| self.used.contains(*name))
            .map(|(name, desc)| (name.clone(), desc.clone()))
            .collect();
        for name in &self.used {
            result.entry(name.clone()).or_insert(None);
        }
        result
    }

    /// Declared entries that no transition references.
    pub fn all_unused(&self) -> DescriptionMap {
        self.declared
            .iter()
            .filter(|(name, _)| !self.used.contains(*name))
            .map(|(name, desc)| (name.clone(), desc.clone()))
            .collect()
    }

    /// Used names missing from the declared table, in first-use order.
    pub fn undeclared(&self) -> IndexSet<String> {
        self.used
            .iter()
            .filter(|name| !self.declared.contains_key(*name))
            .cloned()
            .collect()
    }
}
