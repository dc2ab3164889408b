//! Moving the obligation between guards, or giving it up.

use std::any::type_name;

use super::ScopeGuard;

impl<F: FnOnce()> ScopeGuard<F> {
    /// Move the obligation into a new guard, leaving `self` disarmed.
    ///
    /// Plain moves already do this for owned guards. Use this one when the
    /// guard is only reachable through `&mut`, e.g. as a struct field.
    pub fn transfer(&mut self) -> Self {
        let action = self.action.take();
        if action.is_some() {
            trace!(action = type_name::<F>(), "scope guard transferred");
        }
        Self { action }
    }

    /// Disarm the guard. The action is dropped without being called.
    pub fn cancel(&mut self) {
        if self.action.take().is_some() {
            debug!(action = type_name::<F>(), "scope guard cancelled");
        }
    }

    /// Disarm the guard and hand back the action it would have run.
    pub fn into_inner(mut self) -> Option<F> {
        let action = self.action.take();
        if action.is_some() {
            trace!(action = type_name::<F>(), "scope guard action extracted");
        }
        action
    }
}
