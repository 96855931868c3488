//! Total trit assignments over one catalog.
//!
//! Two states exist side by side at runtime:
//!
//! - the *user state*: exactly what the user asserted, `Unknown` elsewhere;
//!   the only state that is ever persisted
//! - the *overall state*: user state plus everything derivable from it
//!
//! Both are plain `State` values here. The derivation relating them lives
//! in `tritrack-engine`; the kernel only guarantees totality — every
//! catalog identifier always has a value.

use crate::error::KernelError;
use crate::trit::Trit;
use crate::var::{Catalog, VarId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A total mapping from every catalog identifier to a [`Trit`].
///
/// Constructed blank over a catalog; identifiers cannot be added or removed
/// afterwards. Reads of identifiers outside the catalog yield `Unknown`,
/// writes reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    values: BTreeMap<VarId, Trit>,
}

impl State {
    /// The blank state: every catalog variable `Unknown`.
    pub fn blank(catalog: &Catalog) -> Self {
        Self {
            values: catalog
                .iter()
                .map(|id| (id.clone(), Trit::Unknown))
                .collect(),
        }
    }

    /// Current value of `id`, `Unknown` for identifiers outside the catalog.
    pub fn get(&self, id: &VarId) -> Trit {
        self.values.get(id).copied().unwrap_or_default()
    }

    /// Assign `value` to `id`.
    ///
    /// Rejects identifiers the state was not built over — the catalog is
    /// closed and assignments must stay total.
    pub fn set(&mut self, id: &VarId, value: Trit) -> Result<(), KernelError> {
        match self.values.get_mut(id) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(KernelError::UnknownVariable(id.clone())),
        }
    }

    /// Number of catalog variables covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the state covers zero variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every variable is `Unknown`.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|trit| !trit.is_known())
    }

    /// Iterate `(identifier, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&VarId, Trit)> {
        self.values.iter().map(|(id, trit)| (id, *trit))
    }

    /// Identifiers currently holding a definite value, in canonical order.
    pub fn known_ids(&self) -> impl Iterator<Item = &VarId> {
        self.values
            .iter()
            .filter(|(_, trit)| trit.is_known())
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(["a", "b", "c"].map(VarId::from))
    }

    #[test]
    fn blank_state_is_total_and_unknown() {
        let state = State::blank(&catalog());
        assert_eq!(state.len(), 3);
        assert!(state.is_blank());
        assert_eq!(state.get(&VarId::from("b")), Trit::Unknown);
    }

    #[test]
    fn set_updates_only_catalog_variables() {
        let mut state = State::blank(&catalog());
        state.set(&VarId::from("a"), Trit::True).expect("a is in the catalog");
        assert_eq!(state.get(&VarId::from("a")), Trit::True);
        assert!(!state.is_blank());

        let err = state
            .set(&VarId::from("zz"), Trit::True)
            .expect_err("zz is outside the catalog");
        assert!(matches!(err, KernelError::UnknownVariable(id) if id.as_str() == "zz"));
    }

    #[test]
    fn state_serializes_as_flat_map() {
        let mut state = State::blank(&Catalog::new(["a", "b"].map(VarId::from)));
        state.set(&VarId::from("a"), Trit::True).expect("a is in the catalog");

        insta::assert_json_snapshot!(state, @r###"
        {
          "values": {
            "a": "true",
            "b": "unknown"
          }
        }
        "###);
    }

    #[test]
    fn known_ids_skips_unknowns() {
        let mut state = State::blank(&catalog());
        state.set(&VarId::from("c"), Trit::False).expect("c is in the catalog");
        let known: Vec<&str> = state.known_ids().map(VarId::as_str).collect();
        assert_eq!(known, vec!["c"]);
    }
}
