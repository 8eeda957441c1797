//! Graphviz output (<http://www.webgraphviz.com/>).

use crate::core::{EventName, State};
use crate::definition::Definition;
use std::fmt::Write;

pub(super) fn render<S: State, E: EventName, P, A>(
    definition: &Definition<S, E, P, A>,
    current: &S,
) -> String {
    let edges = definition.sorted_transitions();
    let mut buf = String::from("digraph fsm {\n");

    // edges leaving the current state go first
    let (from_current, rest): (Vec<_>, Vec<_>) =
        edges.iter().partition(|edge| edge.src == *current);
    for edge in from_current.into_iter().chain(rest) {
        let _ = writeln!(
            buf,
            "    \"{}\" -> \"{}\" [ label = \"{}\" ];",
            edge.src, edge.dst, edge.event
        );
    }

    buf.push('\n');
    for state in definition.sorted_states() {
        let _ = writeln!(buf, "    \"{state}\";");
    }
    buf.push_str("}\n");
    buf
}
