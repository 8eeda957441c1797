//! Callback slots registered on a definition.

use crate::core::Event;

/// A lifecycle callback.
///
/// Receives the instance payload and the in-flight transition record.
pub type Callback<S, E, P, A> = Box<dyn Fn(&mut P, &mut Event<S, E, A>) + Send + Sync>;

/// Type alias for payload constructors.
pub type PayloadFactory<P> = Box<dyn Fn() -> P + Send + Sync>;

/// Enter and leave callbacks for one state, or the catch-all pair.
pub struct StateCallbacks<S, E, P, A> {
    pub enter: Option<Callback<S, E, P, A>>,
    pub leave: Option<Callback<S, E, P, A>>,
}

/// Before and after callbacks for one event, or the catch-all pair.
pub struct EventCallbacks<S, E, P, A> {
    pub before: Option<Callback<S, E, P, A>>,
    pub after: Option<Callback<S, E, P, A>>,
}

impl<S, E, P, A> Default for StateCallbacks<S, E, P, A> {
    fn default() -> Self {
        Self {
            enter: None,
            leave: None,
        }
    }
}

impl<S, E, P, A> Default for EventCallbacks<S, E, P, A> {
    fn default() -> Self {
        Self {
            before: None,
            after: None,
        }
    }
}
