//! Live state machine executions bound to a shared [`Definition`].

mod dispatch;

use crate::core::{EventName, State};
use crate::definition::Definition;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::debug;

/// One running state machine.
///
/// Reads (`current`, `is`, `can`, `available_transitions`) only take the
/// state read lock and may run concurrently, even while a transition is in
/// flight. Transition requests are serialized by a second lock which also
/// owns the payload, so callbacks get `&mut P` without extra synchronization.
///
/// Callbacks must not call [`Instance::request_event`],
/// [`Instance::set_state`] or [`Instance::with_payload`] on the instance that
/// is dispatching them; the transition lock is not reentrant and the call
/// deadlocks.
pub struct Instance<S, E, P = (), A = ()> {
    definition: Arc<Definition<S, E, P, A>>,
    current: RwLock<S>,
    payload: Mutex<P>,
}

impl<S: State, E: EventName, P, A> Instance<S, E, P, A> {
    pub(crate) fn from_parts(definition: Arc<Definition<S, E, P, A>>, state: S, payload: P) -> Self {
        Self {
            definition,
            current: RwLock::new(state),
            payload: Mutex::new(payload),
        }
    }

    pub fn definition(&self) -> &Arc<Definition<S, E, P, A>> {
        &self.definition
    }

    /// The state the machine is currently in.
    pub fn current(&self) -> S {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True if `state` is the current state.
    pub fn is(&self, state: &S) -> bool {
        *self.current.read().unwrap_or_else(PoisonError::into_inner) == *state
    }

    /// True if `event` can occur in the current state.
    pub fn can(&self, event: &E) -> bool {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        self.definition.can_transition(&current, event)
    }

    pub fn cannot(&self, event: &E) -> bool {
        !self.can(event)
    }

    /// Events available in the current state. Order is unspecified.
    pub fn available_transitions(&self) -> Vec<E> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        self.definition.available_transitions(&current)
    }

    /// Move to `state` directly, bypassing the table and every callback.
    ///
    /// Waits for any in-flight transition to finish first.
    pub fn set_state(&self, state: S) {
        let _transition = self.lock_transition();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let from = &*current;
        debug!(from = %from, to = %state, "state overridden");
        *current = state;
    }

    /// Run `f` against the payload.
    ///
    /// Waits for any in-flight transition to finish first.
    pub fn with_payload<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        f(&mut self.lock_transition())
    }

    pub fn into_payload(self) -> P {
        self.payload
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_transition(&self) -> MutexGuard<'_, P> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn commit(&self, state: S) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = state;
    }
}
