//! Propagation: the pure `bind` cycle.
//!
//! `Engine::bind` consumes a user state and produces a [`Binding`]: the
//! fully propagated overall state plus the lock map recording, for every
//! inferred variable, the user-asserted variable that ultimately forced it.
//!
//! Two passes over the topological order suffice:
//!
//! - forward (sources before sinks): a `False` requirement forces every
//!   direct dependent `False`
//! - backward (sinks before sources): a `True` dependent forces every
//!   direct requirement `True`
//!
//! Each pass visits nodes in an order consistent with the DAG, so a value
//! forced at one node is visible to its own successors (or predecessors)
//! later in the same pass — multi-hop inference without iteration to a
//! fixed point. A step that would flip an already-definite value is a
//! contradiction and aborts the whole bind.

use crate::config::EngineConfig;
use crate::graph::{CycleError, RequirementGraph};
use std::collections::BTreeMap;
use tritrack_kernel::{KernelError, State, Trit, VarId};

/// Errors raised by a propagation cycle.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A propagation step demanded a variable hold two incompatible
    /// definite values. Broken input state, not a recoverable user error.
    #[error(
        "state logic contradiction: {cause} forces {variable} to be {forced}, but it already holds the opposite"
    )]
    Contradiction {
        variable: VarId,
        cause: VarId,
        forced: Trit,
    },

    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// The result of one full propagation cycle.
///
/// A pure function of `(configuration, user state)`; holds no identity of
/// its own and is rebuilt from scratch on every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    user: State,
    overall: State,
    locks: BTreeMap<VarId, VarId>,
}

impl Binding {
    /// A binding with nothing derived. Equals `bind` over a state that
    /// triggers no propagation, such as the blank state.
    pub(crate) fn fresh(user: State) -> Self {
        Self {
            overall: user.clone(),
            user,
            locks: BTreeMap::new(),
        }
    }

    /// The user state, with alias values mirrored from their ground truths.
    pub fn user(&self) -> &State {
        &self.user
    }

    /// The overall state: user assertions plus everything derived.
    pub fn overall(&self) -> &State {
        &self.overall
    }

    /// Lock provenance: inferred variable → the variable that forced it.
    pub fn locks(&self) -> &BTreeMap<VarId, VarId> {
        &self.locks
    }

    pub fn locked_by(&self, id: &VarId) -> Option<&VarId> {
        self.locks.get(id)
    }

    /// Whether `id`'s overall value is derived rather than directly
    /// settable. Expects an alias-resolved identifier.
    pub fn is_locked(&self, id: &VarId) -> bool {
        self.locks.contains_key(id)
    }
}

/// The inference engine: immutable configuration plus the validated graph.
///
/// Construction fails on a cyclic requirement table. After that the engine
/// is read-only and freely shareable; `bind` is a pure function.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    graph: RequirementGraph,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, CycleError> {
        let graph = RequirementGraph::build(&config.resolved_requirements())?;
        Ok(Self { config, graph })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn graph(&self) -> &RequirementGraph {
        &self.graph
    }

    pub fn blank_state(&self) -> State {
        State::blank(self.config.catalog())
    }

    /// Run one full propagation cycle over `user`.
    ///
    /// Returns the new binding, or a [`BindError::Contradiction`] naming
    /// the forced variable and its ultimate cause. The input is not
    /// mutated; callers decide whether to adopt the result.
    pub fn bind(&self, user: &State) -> Result<Binding, BindError> {
        let mut user = user.clone();
        let mut overall = user.clone();
        let mut locks: BTreeMap<VarId, VarId> = BTreeMap::new();

        // Forward pass: false requirements force their dependents false.
        for v in self.graph.topo_order() {
            if overall.get(v) != Trit::False {
                continue;
            }
            // Provenance is transitive: chains of inference all point back
            // to the same ultimate cause.
            let cause = locks.get(v).cloned().unwrap_or_else(|| v.clone());
            for w in self.graph.outgoing(v) {
                if overall.get(w) == Trit::True {
                    return Err(BindError::Contradiction {
                        variable: w.clone(),
                        cause,
                        forced: Trit::False,
                    });
                }
                overall.set(w, Trit::False)?;
                locks.insert(w.clone(), cause.clone());
            }
        }

        // Backward pass: true dependents force their requirements true.
        for v in self.graph.topo_order().iter().rev() {
            if overall.get(v) != Trit::True {
                continue;
            }
            let cause = locks.get(v).cloned().unwrap_or_else(|| v.clone());
            for u in self.graph.incoming(v) {
                if overall.get(u) == Trit::False {
                    return Err(BindError::Contradiction {
                        variable: u.clone(),
                        cause,
                        forced: Trit::True,
                    });
                }
                overall.set(u, Trit::True)?;
                locks.insert(u.clone(), cause.clone());
            }
        }

        // Aliases are reflections, never independent facts: copy each
        // ground truth's value onto its alias in both states.
        for (alias, truth) in self.config.aliases() {
            let derived = overall.get(truth);
            overall.set(alias, derived)?;
            let asserted = user.get(truth);
            user.set(alias, asserted)?;
        }

        Ok(Binding {
            user,
            overall,
            locks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AliasDef, Requirement};
    use tritrack_kernel::Catalog;

    fn engine(edges: &[(&str, &str)], aliases: &[(&str, &str)]) -> Engine {
        let catalog = Catalog::new(["A", "B", "C", "D", "E"].map(VarId::from));
        let config = EngineConfig::new(
            catalog,
            edges
                .iter()
                .map(|(requirement, dependent)| Requirement::new(*requirement, *dependent))
                .collect(),
            aliases
                .iter()
                .map(|(alias, truth)| AliasDef::new(*alias, *truth))
                .collect(),
        )
        .expect("test config must validate");
        Engine::new(config).expect("test graph must be acyclic")
    }

    fn set(engine: &Engine, pairs: &[(&str, Trit)]) -> State {
        let mut state = engine.blank_state();
        for (id, value) in pairs {
            state.set(&VarId::from(*id), *value).expect("catalog variable");
        }
        state
    }

    #[test]
    fn false_requirement_forces_dependents_false() {
        let engine = engine(&[("A", "B"), ("B", "C")], &[]);
        let binding = engine
            .bind(&set(&engine, &[("A", Trit::False)]))
            .expect("no contradiction");

        assert_eq!(binding.overall().get(&VarId::from("B")), Trit::False);
        assert_eq!(binding.overall().get(&VarId::from("C")), Trit::False);
        // Both hops point back to the original cause.
        assert_eq!(binding.locked_by(&VarId::from("B")), Some(&VarId::from("A")));
        assert_eq!(binding.locked_by(&VarId::from("C")), Some(&VarId::from("A")));
        assert!(!binding.is_locked(&VarId::from("A")));
    }

    #[test]
    fn true_dependent_forces_requirements_true() {
        let engine = engine(&[("A", "B"), ("B", "C")], &[]);
        let binding = engine
            .bind(&set(&engine, &[("C", Trit::True)]))
            .expect("no contradiction");

        assert_eq!(binding.overall().get(&VarId::from("A")), Trit::True);
        assert_eq!(binding.overall().get(&VarId::from("B")), Trit::True);
        assert_eq!(binding.locked_by(&VarId::from("A")), Some(&VarId::from("C")));
        assert_eq!(binding.locked_by(&VarId::from("B")), Some(&VarId::from("C")));
    }

    #[test]
    fn user_assertions_survive_into_overall() {
        let engine = engine(&[("A", "B")], &[]);
        let binding = engine
            .bind(&set(&engine, &[("A", Trit::True), ("E", Trit::False)]))
            .expect("no contradiction");

        assert_eq!(binding.overall().get(&VarId::from("A")), Trit::True);
        assert_eq!(binding.overall().get(&VarId::from("E")), Trit::False);
    }

    #[test]
    fn contradiction_on_forced_false() {
        let engine = engine(&[("A", "B")], &[]);
        let err = engine
            .bind(&set(&engine, &[("A", Trit::False), ("B", Trit::True)]))
            .expect_err("A=false forces B=false, but B is asserted true");
        assert!(matches!(
            err,
            BindError::Contradiction { variable, cause, forced: Trit::False }
                if variable.as_str() == "B" && cause.as_str() == "A"
        ));
    }

    #[test]
    fn contradiction_reports_ultimate_cause() {
        // A=false ripples through B; the clash at C blames A, not B.
        let engine = engine(&[("A", "B"), ("B", "C")], &[]);
        let err = engine
            .bind(&set(&engine, &[("A", Trit::False), ("C", Trit::True)]))
            .expect_err("forced chain clashes at C");
        assert!(matches!(
            err,
            BindError::Contradiction { variable, cause, .. }
                if variable.as_str() == "C" && cause.as_str() == "A"
        ));
    }

    #[test]
    fn aliases_mirror_ground_truth_in_both_states() {
        let engine = engine(&[("A", "B")], &[("D", "A")]);
        let binding = engine
            .bind(&set(&engine, &[("B", Trit::True)]))
            .expect("no contradiction");

        // B=true forces A=true; D mirrors A in the overall state but the
        // user never asserted A, so the user-state mirror stays unknown.
        assert_eq!(binding.overall().get(&VarId::from("D")), Trit::True);
        assert_eq!(binding.user().get(&VarId::from("D")), Trit::Unknown);
    }

    #[test]
    fn bind_is_idempotent() {
        let engine = engine(&[("A", "B"), ("B", "C")], &[("D", "A")]);
        let user = set(&engine, &[("C", Trit::True)]);

        let first = engine.bind(&user).expect("no contradiction");
        let second = engine.bind(&user).expect("no contradiction");
        assert_eq!(first, second);

        // Rebinding the already-mirrored user state changes nothing either.
        let third = engine.bind(first.user()).expect("no contradiction");
        assert_eq!(first.overall(), third.overall());
        assert_eq!(first.locks(), third.locks());
    }

    #[test]
    fn blank_state_derives_nothing() {
        let engine = engine(&[("A", "B")], &[("D", "A")]);
        let binding = engine.bind(&engine.blank_state()).expect("blank cannot contradict");
        assert!(binding.overall().is_blank());
        assert!(binding.locks().is_empty());
        assert_eq!(binding, Binding::fresh(engine.blank_state()));
    }
}
