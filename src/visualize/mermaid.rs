//! Mermaid output, as a state diagram or a flow chart
//! (<https://mermaid-js.github.io/mermaid/>).

use super::HIGHLIGHT_COLOR;
use crate::core::{EventName, State};
use crate::definition::Definition;
use std::collections::HashMap;
use std::fmt::Write;

pub(super) fn state_diagram<S: State, E: EventName, P, A>(
    definition: &Definition<S, E, P, A>,
    current: &S,
) -> String {
    let mut buf = String::from("stateDiagram-v2\n");
    let _ = writeln!(buf, "    [*] --> {current}");
    for edge in definition.sorted_transitions() {
        let _ = writeln!(buf, "    {} --> {}: {}", edge.src, edge.dst, edge.event);
    }
    buf
}

pub(super) fn flow_chart<S: State, E: EventName, P, A>(
    definition: &Definition<S, E, P, A>,
    current: &S,
) -> String {
    let states = definition.sorted_states();
    let ids: HashMap<&S, String> = states
        .iter()
        .enumerate()
        .map(|(i, state)| (state, format!("id{i}")))
        .collect();

    let mut buf = String::from("graph LR\n");
    for state in &states {
        let _ = writeln!(buf, "    {}[{}]", ids[state], state);
    }
    buf.push('\n');

    for edge in definition.sorted_transitions() {
        let _ = writeln!(
            buf,
            "    {} --> |{}| {}",
            ids[&edge.src], edge.event, ids[&edge.dst]
        );
    }
    buf.push('\n');

    if let Some(id) = ids.get(current) {
        let _ = writeln!(buf, "    style {id} fill:{HIGHLIGHT_COLOR}");
    }
    buf
}
