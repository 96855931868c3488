//! # Tritrack Engine
//!
//! State inference over a closed trit-valued catalog: the host supplies a
//! static table of requirement edges ("the dependent cannot be true unless
//! the requirement is true") and alias pairs ("the alias always mirrors its
//! ground truth"), and the engine derives everything those tables imply
//! from the user's direct assertions.
//!
//! ## Architecture
//!
//! ```text
//! EngineConfig        ← catalog + requirement edges + aliases, validated once
//!     │
//! RequirementGraph    ← alias-resolved DAG with a topological order
//!     │
//! Engine::bind        ← pure propagation: user state → Binding
//!     │
//! Binding             ← overall state + lock provenance map
//!     │
//! Session / VarRef    ← the mutation contract and the read capability
//!                       handed to presentation code
//! ```
//!
//! `Engine::bind` is a pure, total function of `(config, user state)`:
//! no ambient singleton, no partial recomputation. Every mutation reruns
//! the full cycle; the DAG invariant guarantees termination.
//!
//! Two failure modes are fatal configuration/logic errors (a cyclic
//! requirement graph, a propagation contradiction); one is recoverable and
//! user-facing (setting a locked variable to a conflicting value).

pub mod config;
pub mod engine;
pub mod graph;
pub mod reference;
pub mod session;

pub use config::{AliasDef, ConfigError, ConfigFile, EngineConfig, Requirement, load_config};
pub use engine::{BindError, Binding, Engine};
pub use graph::{CycleError, RequirementGraph};
pub use reference::{VarLabeler, VarRef};
pub use session::{Session, SessionError};
