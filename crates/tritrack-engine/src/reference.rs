//! The presentation boundary: read capabilities and the label seam.
//!
//! Hosts read variables only through [`VarRef`] and never touch the raw
//! state maps — this is what keeps UI code ignorant of alias and lock
//! mechanics. Mutation goes through [`crate::session::Session::set`],
//! which enforces the lock contract.

use crate::session::{Session, SessionError};
use std::collections::BTreeMap;
use tritrack_kernel::{Trit, VarId};

/// Host-injected lookup from a lock-cause variable to the wording of the
/// prompt that owns it (a quiz question title, a todo entry, ...).
///
/// The engine never knows the wording; it only hands over the cause
/// identifier.
pub trait VarLabeler {
    fn label(&self, id: &VarId) -> Option<String>;
}

impl VarLabeler for BTreeMap<VarId, String> {
    fn label(&self, id: &VarId) -> Option<String> {
        self.get(id).cloned()
    }
}

/// Read-only view of one variable through the session's current binding.
///
/// Cheap to create and short-lived: presentation code asks for fresh
/// references after every mutation rather than caching them.
#[derive(Clone)]
pub struct VarRef<'a> {
    session: &'a Session,
    id: VarId,
}

impl<'a> VarRef<'a> {
    pub(crate) fn new(session: &'a Session, id: VarId) -> Self {
        Self { session, id }
    }

    /// The identifier this reference was created for, aliases unresolved.
    pub fn id(&self) -> &VarId {
        &self.id
    }

    /// Overall (derived) value.
    pub fn get(&self) -> Trit {
        self.session.get(&self.id)
    }

    /// Raw user assertion, aliases unresolved.
    pub fn user_choice(&self) -> Trit {
        self.session.user_choice(&self.id)
    }

    pub fn is_locked(&self) -> bool {
        self.session.is_locked(&self.id)
    }

    /// The variable that ultimately forced this one.
    pub fn locked_by(&self) -> Result<&'a VarId, SessionError> {
        self.session.locked_by(&self.id)
    }

    /// Human-facing wording for the lock cause.
    pub fn locked_reason_label(&self, labeler: &dyn VarLabeler) -> Result<String, SessionError> {
        self.session.locked_reason_label(&self.id, labeler)
    }

    pub fn is_alias(&self) -> bool {
        self.session.is_alias(&self.id)
    }

    /// Identity through aliases: whether this reference and `other` name
    /// the same ground truth.
    pub fn is(&self, other: &VarId) -> bool {
        let config = self.session.engine().config();
        config.resolve_alias(&self.id) == config.resolve_alias(other)
    }

    /// Display name from the catalog (explicit entry or stripped prefix).
    pub fn display_name(&self) -> String {
        self.session
            .engine()
            .config()
            .catalog()
            .display_name(&self.id)
    }
}
