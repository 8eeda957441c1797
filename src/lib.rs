//! Fsmkit: a generic finite state machine runtime
//!
//! A [`Definition`] declares which events move which states where and which
//! callbacks run along the way. It is shared read-only by any number of
//! [`Instance`]s, each tracking its own current state and payload.
//!
//! # Core Concepts
//!
//! - **Definition**: transition table plus callback registry, built once
//! - **Instance**: one live execution; transitions are serialized per instance
//! - **Event**: the record every callback receives, able to cancel or attach errors
//!
//! # Callback order
//!
//! `before(event)`, `before_any`, `on_leave(src)`, `on_leave_any`, then the
//! state is committed, then `on_enter(dst)`, `on_enter_any`, `after(event)`,
//! `after_any`. Only `before` and `leave` callbacks can cancel. A transition
//! whose destination equals its source skips leave and enter callbacks and
//! reports [`FsmError::NoTransition`].
//!
//! # Example
//!
//! ```rust
//! use fsmkit::{Definition, FsmError};
//! use std::sync::Arc;
//!
//! let door: Arc<Definition<&str, &str, Vec<String>>> = Arc::new(
//!     Definition::new("closed")
//!         .transition("open", ["closed"], "open")
//!         .transition("close", ["open"], "closed")
//!         .on_enter_any(|log: &mut Vec<String>, event| {
//!             log.push(format!("{} -> {}", event.src, event.dst));
//!         }),
//! );
//!
//! let instance = door.new_instance();
//! instance.request_event("open").unwrap();
//! assert_eq!(instance.current(), "open");
//!
//! let err = instance.request_event("open").unwrap_err();
//! assert!(matches!(err, FsmError::InvalidEvent { event: "open", state: "open" }));
//! assert_eq!(instance.into_payload(), vec!["closed -> open"]);
//! ```

pub mod core;
pub mod definition;
pub mod instance;
pub mod legacy;
mod macros;
pub mod visualize;

// Re-export commonly used types
pub use crate::core::{CallbackError, Event, EventName, FsmError, State};
pub use definition::{Definition, EventDesc, TransitionEdge, TransitionKey};
pub use instance::Instance;
pub use visualize::{VisualizeError, VisualizeType};
