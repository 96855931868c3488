//! The stateful surface: one user state of record plus its binding.
//!
//! A `Session` owns the engine and the current [`Binding`] and re-runs the
//! full bind cycle on every mutation. Mutations are strictly serialized:
//! one `set`/`import`/`reset` fully resolves, including the derived
//! rebind, before the next is accepted (enforced by `&mut self`).
//!
//! Failed mutations never leave a half-updated state behind — the old
//! binding stays in place unless the new one was produced cleanly.

use crate::engine::{BindError, Binding, Engine};
use crate::reference::{VarLabeler, VarRef};
use tritrack_kernel::{KernelError, State, Trit, VarId, codec};

/// Errors raised by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The one recoverable class: the user tried to assert a value that
    /// contradicts an already-derived one. The host should surface the
    /// cause so the user can revisit the variable that created the lock.
    #[error("variable {variable} is locked by {cause} and cannot be set to a conflicting value")]
    Locked { variable: VarId, cause: VarId },

    /// `locked_by` / `locked_reason_label` on a variable that is not
    /// locked. A caller bug, not a user error.
    #[error("variable {0} is not locked")]
    NotLocked(VarId),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// A user state of record bound to an engine.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    binding: Binding,
}

impl Session {
    /// Start blank. A blank state derives nothing, so no bind can fail.
    pub fn new(engine: Engine) -> Self {
        let binding = Binding::fresh(engine.blank_state());
        Self { engine, binding }
    }

    /// Resume from a persisted user state.
    ///
    /// A state inconsistent with the current requirement table surfaces as
    /// the same contradiction it would have raised when first entered.
    pub fn restore(engine: Engine, user: &State) -> Result<Self, BindError> {
        let binding = engine.bind(user)?;
        Ok(Self { engine, binding })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Overall value of `id`, alias-resolved.
    pub fn get(&self, id: &VarId) -> Trit {
        self.binding
            .overall()
            .get(self.engine.config().resolve_alias(id))
    }

    /// Raw user assertion for `id`.
    ///
    /// Deliberately not alias-resolved: hosts need to tell whether the
    /// alias itself, as opposed to its ground truth, was ever touched.
    pub fn user_choice(&self, id: &VarId) -> Trit {
        self.binding.user().get(id)
    }

    /// Whether `id`'s value is derived rather than directly settable.
    pub fn is_locked(&self, id: &VarId) -> bool {
        self.binding
            .is_locked(self.engine.config().resolve_alias(id))
    }

    /// The variable that ultimately forced `id`'s value.
    pub fn locked_by(&self, id: &VarId) -> Result<&VarId, SessionError> {
        let resolved = self.engine.config().resolve_alias(id);
        self.binding
            .locked_by(resolved)
            .ok_or_else(|| SessionError::NotLocked(resolved.clone()))
    }

    /// Human-facing label for the lock cause, for "revisit this answer"
    /// messages. The host-supplied labeler wins; the catalog display name
    /// is the fallback.
    pub fn locked_reason_label(
        &self,
        id: &VarId,
        labeler: &dyn VarLabeler,
    ) -> Result<String, SessionError> {
        let cause = self.locked_by(id)?;
        Ok(labeler
            .label(cause)
            .unwrap_or_else(|| self.engine.config().catalog().display_name(cause)))
    }

    pub fn is_alias(&self, id: &VarId) -> bool {
        self.engine.config().is_alias(id)
    }

    /// Assert a value for `id` (alias-resolved) and rebind.
    ///
    /// Fails without mutating if `id` is locked and `value` is definite
    /// and differs from the current derived value. Re-asserting the
    /// derived value, or clearing to `Unknown`, is always permitted — that
    /// is how a host expresses "undo this choice".
    pub fn set(&mut self, id: &VarId, value: Trit) -> Result<(), SessionError> {
        let resolved = self.engine.config().resolve_alias(id).clone();
        if value.is_known() && value != self.binding.overall().get(&resolved) {
            if let Some(cause) = self.binding.locked_by(&resolved) {
                return Err(SessionError::Locked {
                    variable: resolved.clone(),
                    cause: cause.clone(),
                });
            }
        }

        let mut user = self.binding.user().clone();
        user.set(&resolved, value)?;
        self.binding = self.engine.bind(&user)?;
        Ok(())
    }

    /// Drop every assertion and return to the blank state.
    pub fn reset(&mut self) {
        self.binding = Binding::fresh(self.engine.blank_state());
    }

    /// Replace the user state wholesale from its persisted code sequence.
    pub fn import(&mut self, codes: &[String]) -> Result<(), SessionError> {
        let user = codec::decode(codes, self.engine.config().catalog())?;
        self.binding = self.engine.bind(&user)?;
        Ok(())
    }

    /// Encode the user state of record for persistence.
    pub fn export(&self) -> Vec<String> {
        codec::encode(self.binding.user(), self.engine.config().catalog())
    }

    /// The read capability for one variable.
    pub fn var(&self, id: &VarId) -> VarRef<'_> {
        VarRef::new(self, id.clone())
    }
}
