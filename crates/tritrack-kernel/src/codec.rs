//! Persistence codec for user states.
//!
//! A state is serialized as one single-character code per catalog
//! identifier, in canonical lexicographic order: `"1"` true, `"0"` false,
//! `""` unknown. The sequence is the unit exchanged with external storage
//! and share links; compression and transport are outside kernel scope.
//!
//! Decoding is strict: a sequence of the wrong length, or any code outside
//! the three-value alphabet, is rejected rather than coerced.

use crate::error::KernelError;
use crate::state::State;
use crate::trit::Trit;
use crate::var::Catalog;
use sha2::{Digest, Sha256};

/// Encode a state as its canonical code sequence.
pub fn encode(state: &State, catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|id| state.get(id).as_code().to_string())
        .collect()
}

/// Decode a code sequence back into a state over `catalog`.
///
/// The sequence must contain exactly one code per catalog identifier.
pub fn decode(codes: &[String], catalog: &Catalog) -> Result<State, KernelError> {
    if codes.len() != catalog.len() {
        return Err(KernelError::CodeLength {
            expected: catalog.len(),
            actual: codes.len(),
        });
    }

    let mut state = State::blank(catalog);
    for (index, (id, code)) in catalog.iter().zip(codes).enumerate() {
        let trit = Trit::from_code(code).ok_or_else(|| KernelError::InvalidCode {
            index,
            code: code.clone(),
        })?;
        state.set(id, trit)?;
    }
    Ok(state)
}

/// Stable identity for an encoded sequence.
///
/// Feeds codes newline-delimited in sequence order; the alphabet contains
/// no newlines, so the framing is unambiguous. Used by share links to
/// detect that two snapshots carry the same user state.
pub fn fingerprint(codes: &[String]) -> String {
    let mut hasher = Sha256::new();
    for code in codes {
        hasher.update(code.as_bytes());
        hasher.update(b"\n");
    }
    let hash = hasher.finalize();
    format!("{hash:x}")
}
