//! The event dispatch protocol.

use super::Instance;
use crate::core::{Event, EventName, FsmError, State};
use crate::definition::Callback;
use tracing::{debug, trace};

/// Stage of the callback pipeline, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Before,
    Leave,
    Enter,
    After,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::Leave => "leave",
            Self::Enter => "enter",
            Self::After => "after",
        }
    }
}

type Pair<'a, S, E, P, A> = [Option<&'a Callback<S, E, P, A>>; 2];

impl<S: State, E: EventName, P, A> Instance<S, E, P, A> {
    /// Request a transition with `event` and no arguments.
    ///
    /// See [`Instance::request_event_with`].
    pub fn request_event(&self, event: E) -> Result<(), FsmError<S, E>> {
        self.request_event_with(event, Vec::new())
    }

    /// Request a transition with `event`, handing `args` to every callback.
    ///
    /// Returns `Ok(())` for a clean state change, otherwise:
    ///
    /// - [`FsmError::UnknownEvent`] if no transition uses `event` at all
    /// - [`FsmError::InvalidEvent`] if `event` exists but not from the current state
    /// - [`FsmError::Canceled`] if a `before` or `leave` callback canceled
    /// - [`FsmError::NoTransition`] if the destination equals the current state
    /// - [`FsmError::Callback`] if the state changed but a callback attached an error
    ///
    /// Only the first three leave the current state untouched for certain;
    /// `NoTransition` never changes it and `Callback` always has.
    pub fn request_event_with(&self, event: E, args: Vec<A>) -> Result<(), FsmError<S, E>> {
        let mut guard = self.lock_transition();
        let payload = &mut *guard;

        let src = self.current();
        let dst = match self.definition.resolve(&src, &event) {
            Ok(dst) => dst,
            Err(err) => {
                debug!(event = %event, state = %src, error = %err, "event rejected");
                return Err(err);
            }
        };

        let definition = &*self.definition;
        let named_event = definition.event_callbacks(&event);
        // callbacks may rewrite the record; control flow uses the resolved values
        let mut record = Event::new(event.clone(), src.clone(), dst.clone(), args);

        run_cancelable(
            Phase::Before,
            [
                named_event.and_then(|slot| slot.before.as_ref()),
                definition.any_event().before.as_ref(),
            ],
            payload,
            &mut record,
        )?;

        let after = [
            named_event.and_then(|slot| slot.after.as_ref()),
            definition.any_event().after.as_ref(),
        ];

        if src == dst {
            run(Phase::After, after, payload, &mut record);
            debug!(event = %event, state = %src, "self transition");
            return Err(FsmError::NoTransition {
                source: record.take_error(),
            });
        }

        run_cancelable(
            Phase::Leave,
            [
                definition
                    .state_callbacks(&src)
                    .and_then(|slot| slot.leave.as_ref()),
                definition.any_state().leave.as_ref(),
            ],
            payload,
            &mut record,
        )?;

        self.commit(dst.clone());
        debug!(event = %event, from = %src, to = %dst, "transition committed");

        run(
            Phase::Enter,
            [
                definition
                    .state_callbacks(&dst)
                    .and_then(|slot| slot.enter.as_ref()),
                definition.any_state().enter.as_ref(),
            ],
            payload,
            &mut record,
        );
        run(Phase::After, after, payload, &mut record);

        match record.take_error() {
            None => Ok(()),
            Some(source) => Err(FsmError::Callback { state: dst, source }),
        }
    }
}

/// Invoke the pair in order, stopping as soon as the record is canceled.
fn run_cancelable<S: State, E: EventName, P, A>(
    phase: Phase,
    callbacks: Pair<'_, S, E, P, A>,
    payload: &mut P,
    record: &mut Event<S, E, A>,
) -> Result<(), FsmError<S, E>> {
    for callback in callbacks.into_iter().flatten() {
        trace!(phase = phase.as_str(), event = %record.event, "dispatching callback");
        callback(payload, record);
        if record.is_canceled() {
            debug!(
                phase = phase.as_str(),
                event = %record.event,
                state = %record.src,
                "transition canceled"
            );
            return Err(FsmError::Canceled {
                source: record.take_error(),
            });
        }
    }
    Ok(())
}

/// Invoke the pair in order. Cancellation has no effect past the commit.
fn run<S: State, E: EventName, P, A>(
    phase: Phase,
    callbacks: Pair<'_, S, E, P, A>,
    payload: &mut P,
    record: &mut Event<S, E, A>,
) {
    for callback in callbacks.into_iter().flatten() {
        trace!(phase = phase.as_str(), event = %record.event, "dispatching callback");
        callback(payload, record);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, FsmError};
    use crate::definition::Definition;
    use std::sync::Arc;

    type Log = Vec<String>;
    type DoorEvent = Event<&'static str, &'static str, u32>;
    type Door = Definition<&'static str, &'static str, Log, u32>;

    fn record(label: &'static str) -> impl Fn(&mut Log, &mut DoorEvent) + Send + Sync {
        move |log: &mut Log, _event: &mut DoorEvent| log.push(label.to_string())
    }

    fn instrumented() -> Door {
        Definition::new("closed")
            .transition("open", ["closed"], "open")
            .transition("close", ["open"], "closed")
            .transition("knock", ["closed"], "closed")
            .before("open", record("before_open"))
            .before_any(record("before_any"))
            .on_leave("closed", record("leave_closed"))
            .on_leave_any(record("leave_any"))
            .on_enter("open", record("enter_open"))
            .on_enter_any(record("enter_any"))
            .after("open", record("after_open"))
            .after_any(record("after_any"))
    }

    #[test]
    fn callbacks_run_in_protocol_order() {
        let instance = Arc::new(instrumented()).new_instance();

        instance.request_event("open").unwrap();

        assert_eq!(instance.current(), "open");
        assert_eq!(
            instance.into_payload(),
            vec![
                "before_open",
                "before_any",
                "leave_closed",
                "leave_any",
                "enter_open",
                "enter_any",
                "after_open",
                "after_any",
            ]
        );
    }

    #[test]
    fn self_transition_skips_leave_and_enter() {
        let instance = Arc::new(instrumented()).new_instance();

        let err = instance.request_event("knock").unwrap_err();

        assert!(matches!(err, FsmError::NoTransition { source: None }));
        assert_eq!(instance.current(), "closed");
        assert_eq!(instance.into_payload(), vec!["before_any", "after_any"]);
    }

    #[test]
    fn before_cancel_stops_pipeline() {
        let definition = instrumented().before("open", |log: &mut Log, event| {
            log.push("before_open".to_string());
            event.cancel_with("locked");
        });
        let instance = Arc::new(definition).new_instance();

        let err = instance.request_event("open").unwrap_err();

        assert!(err.is_canceled());
        assert_eq!(err.callback_error().unwrap().to_string(), "locked");
        assert_eq!(instance.current(), "closed");
        assert_eq!(instance.into_payload(), vec!["before_open"]);
    }

    #[test]
    fn leave_any_cancel_keeps_state() {
        let definition = instrumented().on_leave_any(|log: &mut Log, event| {
            log.push("leave_any".to_string());
            event.cancel();
        });
        let instance = Arc::new(definition).new_instance();

        let err = instance.request_event("open").unwrap_err();

        assert!(matches!(err, FsmError::Canceled { source: None }));
        assert_eq!(instance.current(), "closed");
        assert_eq!(
            instance.into_payload(),
            vec!["before_open", "before_any", "leave_closed", "leave_any"]
        );
    }

    #[test]
    fn enter_cancel_cannot_veto_commit() {
        let definition = instrumented().on_enter("open", |log: &mut Log, event| {
            log.push("enter_open".to_string());
            event.cancel_with("too late");
        });
        let instance = Arc::new(definition).new_instance();

        let err = instance.request_event("open").unwrap_err();

        assert!(err.committed());
        assert!(matches!(err, FsmError::Callback { state: "open", .. }));
        assert_eq!(err.callback_error().unwrap().to_string(), "too late");
        assert_eq!(instance.current(), "open");
        assert_eq!(instance.with_payload(|log| log.len()), 8);
    }

    #[test]
    fn soft_error_from_before_is_reported_after_commit() {
        let definition = instrumented().before("open", |_: &mut Log, event| {
            event.set_error("audit log unavailable");
        });
        let instance = Arc::new(definition).new_instance();

        let err = instance.request_event("open").unwrap_err();

        assert!(err.committed());
        assert_eq!(instance.current(), "open");
    }

    #[test]
    fn rewritten_record_does_not_redirect_commit() {
        let definition = instrumented()
            .before("open", |_: &mut Log, event| event.dst = "vault")
            .on_leave_any(|_: &mut Log, event| event.src = "open");
        let instance = Arc::new(definition).new_instance();

        instance.request_event("open").unwrap();

        assert_eq!(instance.current(), "open");
        assert_eq!(
            instance.into_payload(),
            vec![
                "before_any",
                "leave_closed",
                "enter_open",
                "enter_any",
                "after_open",
                "after_any",
            ]
        );
    }

    #[test]
    fn bare_cancel_after_commit_is_ignored() {
        let definition = instrumented()
            .on_enter_any(|log: &mut Log, event| {
                log.push("enter_any".to_string());
                event.cancel();
            })
            .after_any(|log: &mut Log, event| {
                log.push("after_any".to_string());
                event.cancel();
            });
        let instance = Arc::new(definition).new_instance();

        instance.request_event("open").unwrap();

        assert_eq!(instance.current(), "open");
        assert_eq!(instance.with_payload(|log| log.len()), 8);
    }

    #[test]
    fn args_reach_callbacks() {
        let definition: Door = Definition::new("closed")
            .transition("open", ["closed"], "open")
            .on_enter_any(|log: &mut Log, event| {
                log.push(format!("{}:{:?}", event.dst, event.args));
            });
        let instance = Arc::new(definition).new_instance();

        instance.request_event_with("open", vec![1, 2]).unwrap();

        assert_eq!(instance.into_payload(), vec!["open:[1, 2]"]);
    }

    #[test]
    fn rejected_events_run_no_callbacks() {
        let instance = Arc::new(instrumented()).new_instance();

        assert!(matches!(
            instance.request_event("close"),
            Err(FsmError::InvalidEvent {
                event: "close",
                state: "closed"
            })
        ));
        assert!(matches!(
            instance.request_event("lock"),
            Err(FsmError::UnknownEvent { event: "lock" })
        ));
        assert_eq!(instance.current(), "closed");
        assert!(instance.into_payload().is_empty());
    }
}
