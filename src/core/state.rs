//! Marker traits for the types that parametrize a state machine.
//!
//! The engine never looks inside a state or an event name. It only needs to
//! compare them, hash them into the transition table, clone them into the
//! [`Event`](super::Event) record, and print them in errors and diagrams.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for state machine states.
///
/// Implemented automatically for every type with the required bounds, so
/// `&'static str`, `String`, integers and fieldless enums (see
/// [`fsm_enum!`](crate::fsm_enum)) all work out of the box.
///
/// # Required Traits
///
/// - `Clone`: states are copied into each transition record
/// - `Eq` + `Hash`: states key the transition table and callback slots
/// - `Debug` + `Display`: states are named in errors and diagrams
/// - `Send` + `Sync`: definitions are shared across threads
///
/// # Example
///
/// ```rust
/// use fsmkit::State;
///
/// fn assert_state<S: State>() {}
///
/// assert_state::<&'static str>();
/// assert_state::<String>();
/// assert_state::<u8>();
/// ```
pub trait State: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

/// Trait for the names of events that drive transitions.
///
/// Same bounds as [`State`]; kept separate so signatures read clearly and
/// the two type parameters can't be swapped silently.
pub trait EventName: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

impl<T> EventName for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}
