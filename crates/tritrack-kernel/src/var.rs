//! Variable identifiers and the closed catalog.
//!
//! Identifiers are opaque strings fixed at startup. Deployments typically
//! group them with dotted prefixes (`tools.Hammer`, `rooms.Cellar`), which
//! the catalog exploits for default display names, but the kernel attaches
//! no meaning to the dots.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Opaque identifier for a catalog variable.
///
/// Drawn from a closed, enumerable set known at startup. Identifiers are
/// never created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarId(pub String);

impl VarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VarId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The closed set of variable identifiers, with optional display names.
///
/// Iteration order is canonical: lexicographic by identifier. The
/// persistence codec and every deterministic report rely on this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    ids: BTreeSet<VarId>,
    display_names: BTreeMap<VarId, String>,
}

impl Catalog {
    /// Build a catalog from identifiers. Duplicates collapse.
    pub fn new(ids: impl IntoIterator<Item = VarId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            display_names: BTreeMap::new(),
        }
    }

    /// Attach explicit display names for a subset of identifiers.
    ///
    /// Names for identifiers outside the catalog are dropped.
    pub fn with_display_names(mut self, names: BTreeMap<VarId, String>) -> Self {
        self.display_names = names
            .into_iter()
            .filter(|(id, _)| self.ids.contains(id))
            .collect();
        self
    }

    /// Total number of catalog variables.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the catalog has zero variables.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` belongs to the catalog.
    pub fn contains(&self, id: &VarId) -> bool {
        self.ids.contains(id)
    }

    /// Iterate identifiers in canonical lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &VarId> {
        self.ids.iter()
    }

    /// Human-facing name for a variable.
    ///
    /// Falls back to the identifier with any dotted group prefix stripped
    /// (`tools.Hammer` → `Hammer`).
    pub fn display_name(&self, id: &VarId) -> String {
        if let Some(name) = self.display_names.get(id) {
            return name.clone();
        }
        match id.as_str().rsplit_once('.') {
            Some((_, short)) => short.to_string(),
            None => id.as_str().to_string(),
        }
    }
}
