//! Shared transition table and callback registry.
//!
//! A [`Definition`] is built once with a fluent API, wrapped in an [`Arc`],
//! and then shared read-only by every [`Instance`] created from it.
//!
//! Callbacks fire in this order for every committed transition:
//!
//! 1. `before(event)` - called before the named event
//! 2. `before_any` - called before all events
//! 3. `on_leave(state)` - called before leaving the source state
//! 4. `on_leave_any` - called before leaving any state
//! 5. `on_enter(state)` - called after entering the destination state
//! 6. `on_enter_any` - called after entering any state
//! 7. `after(event)` - called after the named event
//! 8. `after_any` - called after all events

mod callbacks;
mod table;

pub use callbacks::{Callback, EventCallbacks, PayloadFactory, StateCallbacks};
pub use table::{EventDesc, TransitionEdge, TransitionKey, TransitionTable};

use crate::core::{Event, EventName, FsmError, State};
use crate::instance::Instance;
use std::collections::HashMap;
use std::sync::Arc;

/// The state machine model: transitions plus callbacks.
///
/// `S` is the state type, `E` the event name type, `P` the per-instance
/// payload handed to callbacks and `A` the argument type carried by
/// [`Event::args`].
///
/// # Example
///
/// ```rust
/// use fsmkit::Definition;
/// use std::sync::Arc;
///
/// let door: Arc<Definition<&str, &str>> = Arc::new(
///     Definition::new("closed")
///         .transition("open", ["closed"], "open")
///         .transition("close", ["open"], "closed"),
/// );
///
/// let instance = door.new_instance();
/// instance.request_event("open").unwrap();
/// assert_eq!(instance.current(), "open");
/// ```
pub struct Definition<S, E, P = (), A = ()> {
    initial: S,
    transitions: TransitionTable<S, E>,
    state_callbacks: HashMap<S, StateCallbacks<S, E, P, A>>,
    event_callbacks: HashMap<E, EventCallbacks<S, E, P, A>>,
    any_state: StateCallbacks<S, E, P, A>,
    any_event: EventCallbacks<S, E, P, A>,
    payload_factory: PayloadFactory<P>,
}

impl<S: State, E: EventName, P: Default + 'static, A> Definition<S, E, P, A> {
    /// Create an empty definition whose instances start with `P::default()`.
    pub fn new(initial: S) -> Self {
        Self::with_payload_factory(initial, P::default)
    }

    /// Create a definition from a list of event descriptions.
    pub fn from_events(initial: S, events: impl IntoIterator<Item = EventDesc<S, E>>) -> Self {
        events
            .into_iter()
            .fold(Self::new(initial), |definition, desc| {
                definition.transition(desc.name, desc.src, desc.dst)
            })
    }
}

impl<S: State, E: EventName, P, A> Definition<S, E, P, A> {
    /// Create an empty definition whose instances build their payload with
    /// `factory`.
    pub fn with_payload_factory<F>(initial: S, factory: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
    {
        Self {
            initial,
            transitions: TransitionTable::new(),
            state_callbacks: HashMap::new(),
            event_callbacks: HashMap::new(),
            any_state: StateCallbacks::default(),
            any_event: EventCallbacks::default(),
            payload_factory: Box::new(factory),
        }
    }

    /// Register `event` as leading from each of `sources` to `dst`.
    pub fn transition(mut self, event: E, sources: impl IntoIterator<Item = S>, dst: S) -> Self {
        self.transitions.insert(event, sources, dst);
        self
    }

    /// Replace the payload constructor used by [`Definition::new_instance`].
    pub fn payload_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
    {
        self.payload_factory = Box::new(factory);
        self
    }

    pub fn on_enter<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.state_callbacks.entry(state).or_default().enter = Some(Box::new(callback));
        self
    }

    pub fn on_leave<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.state_callbacks.entry(state).or_default().leave = Some(Box::new(callback));
        self
    }

    pub fn before<F>(mut self, event: E, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.event_callbacks.entry(event).or_default().before = Some(Box::new(callback));
        self
    }

    pub fn after<F>(mut self, event: E, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.event_callbacks.entry(event).or_default().after = Some(Box::new(callback));
        self
    }

    pub fn on_enter_any<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.any_state.enter = Some(Box::new(callback));
        self
    }

    pub fn on_leave_any<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.any_state.leave = Some(Box::new(callback));
        self
    }

    pub fn before_any<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.any_event.before = Some(Box::new(callback));
        self
    }

    pub fn after_any<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut P, &mut Event<S, E, A>) + Send + Sync + 'static,
    {
        self.any_event.after = Some(Box::new(callback));
        self
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn transitions(&self) -> &TransitionTable<S, E> {
        &self.transitions
    }

    /// True if `event` has a transition leaving `state`.
    pub fn can_transition(&self, state: &S, event: &E) -> bool {
        self.transitions.destination(state, event).is_some()
    }

    /// Events available from `state`. Order is unspecified.
    pub fn available_transitions(&self, state: &S) -> Vec<E> {
        self.transitions.events_from(state)
    }

    /// Build an instance at the initial state with a freshly made payload.
    pub fn new_instance(self: &Arc<Self>) -> Instance<S, E, P, A> {
        self.new_instance_at(self.initial.clone())
    }

    /// Build an instance at `state` instead of the declared initial state.
    pub fn new_instance_at(self: &Arc<Self>, state: S) -> Instance<S, E, P, A> {
        Instance::from_parts(Arc::clone(self), state, (self.payload_factory)())
    }

    /// Build an instance at the initial state around a caller-made payload.
    pub fn new_instance_with(self: &Arc<Self>, payload: P) -> Instance<S, E, P, A> {
        Instance::from_parts(Arc::clone(self), self.initial.clone(), payload)
    }

    /// Destination for `event` from `current`, or the reason there is none.
    pub(crate) fn resolve(&self, current: &S, event: &E) -> Result<S, FsmError<S, E>> {
        match self.transitions.destination(current, event) {
            Some(dst) => Ok(dst.clone()),
            None if self.transitions.contains_event(event) => Err(FsmError::InvalidEvent {
                event: event.clone(),
                state: current.clone(),
            }),
            None => Err(FsmError::UnknownEvent {
                event: event.clone(),
            }),
        }
    }

    pub(crate) fn state_callbacks(&self, state: &S) -> Option<&StateCallbacks<S, E, P, A>> {
        self.state_callbacks.get(state)
    }

    pub(crate) fn event_callbacks(&self, event: &E) -> Option<&EventCallbacks<S, E, P, A>> {
        self.event_callbacks.get(event)
    }

    pub(crate) fn any_state(&self) -> &StateCallbacks<S, E, P, A> {
        &self.any_state
    }

    pub(crate) fn any_event(&self) -> &EventCallbacks<S, E, P, A> {
        &self.any_event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> Definition<&'static str, &'static str> {
        Definition::new("closed")
            .transition("open", ["closed"], "open")
            .transition("close", ["open"], "closed")
    }

    #[test]
    fn can_transition_checks_table() {
        let definition = door();

        assert!(definition.can_transition(&"closed", &"open"));
        assert!(!definition.can_transition(&"closed", &"close"));
        assert!(!definition.can_transition(&"closed", &"lock"));
    }

    #[test]
    fn available_transitions_lists_events_from_state() {
        let definition = door().transition("slam", ["open"], "closed");

        let mut events = definition.available_transitions(&"open");
        events.sort();
        assert_eq!(events, vec!["close", "slam"]);
    }

    #[test]
    fn resolve_classifies_missing_transitions() {
        let definition = door();

        assert_eq!(definition.resolve(&"closed", &"open").unwrap(), "open");
        assert!(matches!(
            definition.resolve(&"open", &"open"),
            Err(FsmError::InvalidEvent {
                event: "open",
                state: "open"
            })
        ));
        assert!(matches!(
            definition.resolve(&"open", &"lock"),
            Err(FsmError::UnknownEvent { event: "lock" })
        ));
    }

    #[test]
    fn from_events_expands_descriptions() {
        let definition: Definition<&str, &str> = Definition::from_events(
            "idle",
            vec![
                EventDesc::new("scan", ["idle"], "scanning"),
                EventDesc::new("finish", ["scanning"], "idle"),
                EventDesc::new("situation", ["idle", "scanning"], "idle"),
            ],
        );

        assert_eq!(definition.initial(), &"idle");
        assert_eq!(definition.transitions().len(), 4);
        assert!(definition.can_transition(&"scanning", &"situation"));
    }

    #[test]
    fn callback_registration_overwrites_slot() {
        let definition: Definition<&str, &str, Vec<u8>> = Definition::new("closed")
            .transition("open", ["closed"], "open")
            .before("open", |log: &mut Vec<u8>, _| log.push(1))
            .before("open", |log: &mut Vec<u8>, _| log.push(2));

        let slot = definition.event_callbacks(&"open").unwrap();
        let mut log = Vec::new();
        let mut event = Event::new("open", "closed", "open", Vec::new());
        (slot.before.as_ref().unwrap())(&mut log, &mut event);

        assert_eq!(log, vec![2]);
        assert!(slot.after.is_none());
    }

    #[test]
    fn new_instance_uses_payload_factory() {
        let definition = Arc::new(
            Definition::<&str, &str, Vec<u8>>::with_payload_factory("closed", || vec![9])
                .transition("open", ["closed"], "open"),
        );

        let instance = definition.new_instance();
        assert_eq!(instance.with_payload(|p| p.clone()), vec![9]);

        let custom = definition.new_instance_with(vec![1, 2]);
        assert_eq!(custom.into_payload(), vec![1, 2]);
    }

    #[test]
    fn new_instance_at_overrides_initial_state() {
        let definition = Arc::new(door());

        assert_eq!(definition.new_instance().current(), "closed");
        assert_eq!(definition.new_instance_at("open").current(), "open");
    }
}
