//! Resolution of string callback names such as `before_open` or
//! `enter_state` into typed registration slots.

use std::collections::HashSet;

/// Where a named legacy callback is registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hook {
    BeforeAny,
    Before(String),
    LeaveAny,
    Leave(String),
    EnterAny,
    Enter(String),
    AfterAny,
    After(String),
}

/// Resolve `name` against the declared states and events.
///
/// Prefixed names (`before_`, `leave_`, `enter_`, `after_`) must name a
/// declared event or state, except for the catch-all targets `event` and
/// `state`. A bare name means "enter this state" if it is a state, otherwise
/// "after this event" if it is an event. Returns `None` for anything else.
pub fn resolve_hook(name: &str, states: &HashSet<String>, events: &HashSet<String>) -> Option<Hook> {
    if let Some(target) = name.strip_prefix("before_") {
        if target == "event" {
            return Some(Hook::BeforeAny);
        }
        return declared(events, target).map(Hook::Before);
    }
    if let Some(target) = name.strip_prefix("leave_") {
        if target == "state" {
            return Some(Hook::LeaveAny);
        }
        return declared(states, target).map(Hook::Leave);
    }
    if let Some(target) = name.strip_prefix("enter_") {
        if target == "state" {
            return Some(Hook::EnterAny);
        }
        return declared(states, target).map(Hook::Enter);
    }
    if let Some(target) = name.strip_prefix("after_") {
        if target == "event" {
            return Some(Hook::AfterAny);
        }
        return declared(events, target).map(Hook::After);
    }

    declared(states, name)
        .map(Hook::Enter)
        .or_else(|| declared(events, name).map(Hook::After))
}

fn declared(set: &HashSet<String>, target: &str) -> Option<String> {
    set.contains(target).then(|| target.to_string())
}
