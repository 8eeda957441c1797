//! Errors returned by [`Instance::request_event`](crate::Instance::request_event).

use thiserror::Error;

/// Error value a callback may attach to the [`Event`](super::Event) record.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of a transition request that was not a clean state change.
///
/// `UnknownEvent`, `InvalidEvent` and `Canceled` leave the current state
/// untouched. `NoTransition` is informational: the event was valid but its
/// destination equals its source. `Callback` means the state change was
/// committed and a callback attached an error along the way.
#[derive(Debug, Error)]
pub enum FsmError<S, E> {
    #[error("event {event} does not exist")]
    UnknownEvent { event: E },

    #[error("event {event} inappropriate in current state {state}")]
    InvalidEvent { event: E, state: S },

    #[error("transition canceled")]
    Canceled { source: Option<CallbackError> },

    #[error("no transition")]
    NoTransition { source: Option<CallbackError> },

    #[error("transition to {state} committed with a callback error")]
    Callback { state: S, source: CallbackError },
}

impl<S, E> FsmError<S, E> {
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled { .. })
    }

    pub fn is_no_transition(&self) -> bool {
        matches!(self, Self::NoTransition { .. })
    }

    /// True when the state change happened despite the error.
    pub fn committed(&self) -> bool {
        matches!(self, Self::Callback { .. })
    }

    /// The error a callback attached to the record, if any.
    pub fn callback_error(&self) -> Option<&CallbackError> {
        match self {
            Self::Canceled { source } | Self::NoTransition { source } => source.as_ref(),
            Self::Callback { source, .. } => Some(source),
            Self::UnknownEvent { .. } | Self::InvalidEvent { .. } => None,
        }
    }
}
