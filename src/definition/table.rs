//! Transition table mapping (event, source) pairs to destination states.

use crate::core::{EventName, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key into the transition table.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TransitionKey<S, E> {
    pub event: E,
    pub src: S,
}

/// Declarative description of one event and the states it leaves from.
///
/// Every source in `src` becomes its own table entry pointing at `dst`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EventDesc<S, E> {
    pub name: E,
    pub src: Vec<S>,
    pub dst: S,
}

impl<S, E> EventDesc<S, E> {
    pub fn new(name: E, src: impl IntoIterator<Item = S>, dst: S) -> Self {
        Self {
            name,
            src: src.into_iter().collect(),
            dst,
        }
    }
}

/// One edge of the table, owned, as handed to diagram renderers.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionEdge<S, E> {
    pub src: S,
    pub event: E,
    pub dst: S,
}

/// Mapping from [`TransitionKey`] to destination state.
///
/// Iteration order is unspecified.
#[derive(Clone, Debug)]
pub struct TransitionTable<S, E> {
    entries: HashMap<TransitionKey<S, E>, S>,
}

impl<S: State, E: EventName> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: EventName> TransitionTable<S, E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert one entry per source. A repeated key keeps the last destination.
    pub fn insert(&mut self, event: E, sources: impl IntoIterator<Item = S>, dst: S) {
        for src in sources {
            self.entries.insert(
                TransitionKey {
                    event: event.clone(),
                    src,
                },
                dst.clone(),
            );
        }
    }

    pub fn destination(&self, src: &S, event: &E) -> Option<&S> {
        self.entries.get(&TransitionKey {
            event: event.clone(),
            src: src.clone(),
        })
    }

    /// True if `event` is registered from any source state.
    pub fn contains_event(&self, event: &E) -> bool {
        self.entries.keys().any(|key| key.event == *event)
    }

    /// Events with an entry leaving `src`, in table order.
    pub fn events_from(&self, src: &S) -> Vec<E> {
        self.entries
            .keys()
            .filter(|key| key.src == *src)
            .map(|key| key.event.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TransitionKey<S, E>, &S)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
