//! Textual diagrams of a transition table.
//!
//! All output is deterministic: transitions are sorted by source then event,
//! states lexically, both by their `Display` text.

mod graphviz;
mod mermaid;

use crate::core::{EventName, State};
use crate::definition::{Definition, TransitionEdge};
use crate::instance::Instance;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

/// Color used to highlight the current state in mermaid flow charts.
pub const HIGHLIGHT_COLOR: &str = "#00AA00";

/// Diagram flavour to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualizeType {
    /// Graphviz `digraph` output.
    Graphviz,
    /// Mermaid state diagram (alias of `MermaidStateDiagram`).
    Mermaid,
    MermaidStateDiagram,
    MermaidFlowChart,
}

impl VisualizeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Graphviz => "graphviz",
            Self::Mermaid => "mermaid",
            Self::MermaidStateDiagram => "mermaid-state-diagram",
            Self::MermaidFlowChart => "mermaid-flow-chart",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VisualizeError {
    #[error("unknown visualize type: {0}")]
    UnknownType(String),
}

impl FromStr for VisualizeType {
    type Err = VisualizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graphviz" => Ok(Self::Graphviz),
            "mermaid" => Ok(Self::Mermaid),
            "mermaid-state-diagram" => Ok(Self::MermaidStateDiagram),
            "mermaid-flow-chart" => Ok(Self::MermaidFlowChart),
            other => Err(VisualizeError::UnknownType(other.to_string())),
        }
    }
}

impl<S: State, E: EventName, P, A> Definition<S, E, P, A> {
    /// Every transition, sorted by source then event.
    pub fn sorted_transitions(&self) -> Vec<TransitionEdge<S, E>> {
        let mut edges: Vec<(String, String, TransitionEdge<S, E>)> = self
            .transitions()
            .iter()
            .map(|(key, dst)| {
                (
                    key.src.to_string(),
                    key.event.to_string(),
                    TransitionEdge {
                        src: key.src.clone(),
                        event: key.event.clone(),
                        dst: dst.clone(),
                    },
                )
            })
            .collect();
        edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        edges.into_iter().map(|(_, _, edge)| edge).collect()
    }

    /// Every state that appears as a source or destination, sorted.
    pub fn sorted_states(&self) -> Vec<S> {
        let mut seen = HashSet::new();
        let mut states: Vec<(String, S)> = Vec::new();
        for (key, dst) in self.transitions().iter() {
            for state in [&key.src, dst] {
                if seen.insert(state.clone()) {
                    states.push((state.to_string(), state.clone()));
                }
            }
        }
        states.sort_by(|a, b| a.0.cmp(&b.0));
        states.into_iter().map(|(_, state)| state).collect()
    }

    /// Render the table as `kind`, highlighting `current` where the format
    /// supports it.
    pub fn visualize(&self, kind: VisualizeType, current: &S) -> String {
        match kind {
            VisualizeType::Graphviz => graphviz::render(self, current),
            VisualizeType::Mermaid | VisualizeType::MermaidStateDiagram => {
                mermaid::state_diagram(self, current)
            }
            VisualizeType::MermaidFlowChart => mermaid::flow_chart(self, current),
        }
    }
}

impl<S: State, E: EventName, P, A> Instance<S, E, P, A> {
    /// Render the definition with this instance's current state.
    pub fn visualize(&self, kind: VisualizeType) -> String {
        self.definition().visualize(kind, &self.current())
    }
}
