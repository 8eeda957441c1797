//! The record passed by reference through every callback of one transition
//! attempt.

use super::error::CallbackError;

/// Info about the transition currently being dispatched.
///
/// One record is created per call to
/// [`Instance::request_event`](crate::Instance::request_event) and dropped
/// when that call returns. Callbacks may attach an error to it or cancel the
/// transition; everything else is read-only by convention.
///
/// # Example
///
/// ```rust
/// use fsmkit::Event;
///
/// let mut event: Event<&str, &str, u32> = Event::new("open", "closed", "open", vec![7]);
/// assert!(!event.is_canceled());
///
/// event.cancel_with("door is locked");
/// assert!(event.is_canceled());
/// assert_eq!(event.error().unwrap().to_string(), "door is locked");
/// ```
#[derive(Debug)]
pub struct Event<S, E, A> {
    /// The event name that was requested.
    pub event: E,
    /// The state before the transition.
    pub src: S,
    /// The state after the transition.
    pub dst: S,
    /// Arguments supplied by the caller of `request_event_with`.
    pub args: Vec<A>,
    /// Optional error attached by a callback.
    pub err: Option<CallbackError>,
    canceled: bool,
}

impl<S, E, A> Event<S, E, A> {
    /// Create a fresh, uncanceled record with no error attached.
    pub fn new(event: E, src: S, dst: S, args: Vec<A>) -> Self {
        Self {
            event,
            src,
            dst,
            args,
            err: None,
            canceled: false,
        }
    }

    /// Cancel the transition.
    ///
    /// Only honoured from `before` and `leave` callbacks. Once the state has
    /// been committed the flag no longer affects control flow.
    pub fn cancel(&mut self) {
        self.canceled = true;
    }

    /// Cancel the transition and attach `err`, overwriting any earlier error.
    pub fn cancel_with(&mut self, err: impl Into<CallbackError>) {
        self.canceled = true;
        self.err = Some(err.into());
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Attach an error without canceling.
    ///
    /// On a committed transition the error is returned to the caller while
    /// the state change stands.
    pub fn set_error(&mut self, err: impl Into<CallbackError>) {
        self.err = Some(err.into());
    }

    pub fn error(&self) -> Option<&CallbackError> {
        self.err.as_ref()
    }

    pub fn take_error(&mut self) -> Option<CallbackError> {
        self.err.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Event<&'static str, &'static str, String> {
        Event::new("open", "closed", "open", vec!["front".to_string()])
    }

    #[test]
    fn new_record_is_clean() {
        let event = record();

        assert_eq!(event.event, "open");
        assert_eq!(event.src, "closed");
        assert_eq!(event.dst, "open");
        assert_eq!(event.args, vec!["front".to_string()]);
        assert!(event.error().is_none());
        assert!(!event.is_canceled());
    }

    #[test]
    fn cancel_without_error_keeps_existing_error() {
        let mut event = record();
        event.set_error("soft failure");
        event.cancel();

        assert!(event.is_canceled());
        assert_eq!(event.error().unwrap().to_string(), "soft failure");
    }

    #[test]
    fn cancel_with_overwrites_error() {
        let mut event = record();
        event.set_error("first");
        event.cancel_with("second");

        assert!(event.is_canceled());
        assert_eq!(event.take_error().unwrap().to_string(), "second");
        assert!(event.error().is_none());
    }

    #[test]
    fn set_error_does_not_cancel() {
        let mut event = record();
        event.set_error("noted");

        assert!(!event.is_canceled());
        assert!(event.error().is_some());
    }
}
