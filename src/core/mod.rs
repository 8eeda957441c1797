//! Core types shared by definitions and instances.
//!
//! This module contains the data that flows through a transition:
//! - State and event name bounds via the `State` and `EventName` traits
//! - The per-attempt `Event` record handed to callbacks
//! - The `FsmError` taxonomy returned to callers

mod error;
mod event;
mod state;

pub use error::{CallbackError, FsmError};
pub use event::Event;
pub use state::{EventName, State};
