use std::{any::type_name, fmt};

mod ownership;

/// Runs the wrapped action once, when dropped.
///
/// The guard is armed from construction until it is dropped, cancelled or has
/// its obligation moved elsewhere. Dropping an armed guard calls the action;
/// dropping a disarmed one does nothing.
///
/// There is no `Clone`: exactly one guard owns the obligation at a time.
/// Assigning over an existing guard drops it first, so its pending action
/// runs at the assignment instead of being lost.
///
/// A panic inside the action propagates out of `drop`. If the scope is
/// already unwinding, that second panic aborts the process.
#[must_use = "an unbound guard is dropped at once and runs its action immediately"]
pub struct ScopeGuard<F: FnOnce()> {
    // `None` once fired, cancelled or transferred
    action: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    pub fn new(action: F) -> Self {
        Self { action: Some(action) }
    }

    /// Build a guard from a copy of `action`, leaving the caller's callable untouched.
    pub fn from_ref(action: &F) -> Self
    where
        F: Clone,
    {
        Self::new(action.clone())
    }

    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        // take before calling so a second pass finds nothing to run
        if let Some(action) = self.action.take() {
            trace!(action = type_name::<F>(), "scope guard fired");
            action();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for ScopeGuard<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// Create an armed [`ScopeGuard`] without naming its closure type.
///
/// Bind the result to a named local such as `_guard`. `let _ = make_scope_guard(..)`
/// drops the guard on the spot and the action runs right away.
#[must_use = "an unbound guard is dropped at once and runs its action immediately"]
pub fn make_scope_guard<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    ScopeGuard::new(action)
}
