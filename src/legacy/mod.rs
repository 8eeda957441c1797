//! String-keyed compatibility layer.
//!
//! Builds a `String`/`String` state machine from an event list plus a map
//! of callbacks named by convention (`before_<event>`, `leave_<state>`,
//! `enter_<state>`, `after_<event>`, the catch-alls `before_event`,
//! `leave_state`, `enter_state`, `after_event`, or a bare state/event name).
//! Callbacks share data through the [`Metadata`] payload.
//!
//! # Example
//!
//! ```rust
//! use fsmkit::legacy::{self, Callbacks, LegacyCallback, LegacyEvent, Metadata};
//! use fsmkit::EventDesc;
//! use serde_json::json;
//!
//! let mut callbacks = Callbacks::new();
//! let produce: LegacyCallback = Box::new(|metadata: &mut Metadata, _event: &mut LegacyEvent| {
//!     metadata.set_metadata("message", json!("hii"));
//! });
//! callbacks.insert("produce".to_string(), produce);
//!
//! let fsm = legacy::new_fsm(
//!     "idle",
//!     vec![EventDesc::new("produce".to_string(), ["idle".to_string()], "idle".to_string())],
//!     callbacks,
//! );
//!
//! assert!(fsm.request_event("produce".to_string()).unwrap_err().is_no_transition());
//! assert_eq!(
//!     fsm.with_payload(|m| m.metadata("message").cloned()),
//!     Some(json!("hii"))
//! );
//! ```

mod naming;

pub use naming::{resolve_hook, Hook};

use crate::core::Event;
use crate::definition::{Definition, EventDesc};
use crate::instance::Instance;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::warn;

pub type LegacyEvent = Event<String, String, Value>;
pub type LegacyFsm = Instance<String, String, Metadata, Value>;
pub type LegacyCallback = Box<dyn Fn(&mut Metadata, &mut LegacyEvent) + Send + Sync>;
pub type Callbacks = HashMap<String, LegacyCallback>;
pub type Events = Vec<EventDesc<String, String>>;

/// Key-value store shared by the callbacks of one legacy instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    values: HashMap<String, Value>,
}

impl Metadata {
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn remove_metadata(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }
}

/// Build a legacy state machine instance.
///
/// Callback names that match no declared state or event are ignored.
pub fn new_fsm(initial: impl Into<String>, events: Events, callbacks: Callbacks) -> LegacyFsm {
    let mut states = HashSet::new();
    let mut names = HashSet::new();
    for desc in &events {
        states.extend(desc.src.iter().cloned());
        states.insert(desc.dst.clone());
        names.insert(desc.name.clone());
    }

    let definition = callbacks.into_iter().fold(
        Definition::from_events(initial.into(), events),
        |definition, (name, callback)| match resolve_hook(&name, &states, &names) {
            Some(Hook::BeforeAny) => definition.before_any(callback),
            Some(Hook::Before(event)) => definition.before(event, callback),
            Some(Hook::LeaveAny) => definition.on_leave_any(callback),
            Some(Hook::Leave(state)) => definition.on_leave(state, callback),
            Some(Hook::EnterAny) => definition.on_enter_any(callback),
            Some(Hook::Enter(state)) => definition.on_enter(state, callback),
            Some(Hook::AfterAny) => definition.after_any(callback),
            Some(Hook::After(event)) => definition.after(event, callback),
            None => {
                warn!(callback = %name, "ignoring callback with no matching state or event");
                definition
            }
        },
    );

    Arc::new(definition).new_instance()
}
