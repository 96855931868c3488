//! # Tritrack Kernel
//!
//! The vocabulary layer for three-valued progress tracking: a fact is a
//! named variable holding `unknown`, `true`, or `false`, drawn from a
//! closed catalog fixed at startup.
//!
//! This crate is **configuration-agnostic**: it does not know which facts
//! exist in a given deployment or how they imply each other. It only
//! prescribes how a closed set of trit-valued facts is stored, named, and
//! serialized for persistence.
//!
//! ## Architecture
//!
//! ```text
//! Trit            ← the three-valued primitive
//!     │
//! VarId           ← opaque identifier drawn from a closed catalog
//!     │
//! Catalog         ← the closed identifier set + display names
//!     │
//! State           ← a total VarId → Trit assignment over one catalog
//!     │
//! codec           ← canonical "1"/"0"/"" sequence for persistence
//! ```
//!
//! Inference (requirement edges, aliases, propagation, locks) lives in
//! `tritrack-engine`, layered on top of this vocabulary.

pub mod codec;
pub mod error;
pub mod state;
pub mod trit;
pub mod var;

pub use codec::{decode, encode, fingerprint};
pub use error::KernelError;
pub use state::State;
pub use trit::Trit;
pub use var::{Catalog, VarId};
