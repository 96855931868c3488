//! The three-valued primitive.
//!
//! Every tracked fact holds one of three values:
//!
//! - **Unknown**: the user has not asserted anything and nothing was derived
//! - **True**: asserted or derived to hold
//! - **False**: asserted or derived not to hold
//!
//! `Unknown` carries strictly less information than either definite value;
//! `True` and `False` are incomparable and mutually exclusive. There are no
//! connectives — the only operation on trits is equality.

use serde::{Deserialize, Serialize};

/// A three-valued boolean.
///
/// The value type of every catalog variable. `Unknown` is the default and
/// the blank-state value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trit {
    /// No assertion and no derivation.
    #[default]
    Unknown,

    /// The fact holds.
    True,

    /// The fact does not hold.
    False,
}

impl Trit {
    /// Whether this is a definite value (`True` or `False`).
    pub fn is_known(self) -> bool {
        !matches!(self, Trit::Unknown)
    }

    /// The single-character persistence code: `"1"`, `"0"`, or `""`.
    pub fn as_code(self) -> &'static str {
        match self {
            Trit::True => "1",
            Trit::False => "0",
            Trit::Unknown => "",
        }
    }

    /// Parse a persistence code.
    ///
    /// Strict: anything outside `{"1", "0", ""}` is rejected rather than
    /// coerced to `Unknown`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Trit::True),
            "0" => Some(Trit::False),
            "" => Some(Trit::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Trit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trit::Unknown => write!(f, "unknown"),
            Trit::True => write!(f, "true"),
            Trit::False => write!(f, "false"),
        }
    }
}

impl std::str::FromStr for Trit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Trit::True),
            "false" | "no" | "0" => Ok(Trit::False),
            "unknown" | "unset" | "" => Ok(Trit::Unknown),
            _ => Err(format!("unknown trit value: {s}")),
        }
    }
}
