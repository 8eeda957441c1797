//! Self transitions mixed with real ones, printing a diagram at the end.

use fsmkit::{Definition, EventDesc, VisualizeType};
use std::sync::Arc;

fn main() {
    let definition: Arc<Definition<&str, &str>> = Arc::new(
        Definition::from_events(
            "idle",
            vec![
                EventDesc::new("scan", ["idle"], "scanning"),
                EventDesc::new("working", ["scanning"], "scanning"),
                EventDesc::new("situation", ["scanning"], "scanning"),
                EventDesc::new("situation", ["idle"], "idle"),
                EventDesc::new("finish", ["scanning"], "idle"),
            ],
        )
        .after_any(|_, event| println!("after_{}: {}", event.event, event.dst)),
    );

    let fsm = definition.new_instance();
    println!("{}", fsm.current());

    for (step, event) in ["scan", "working", "situation", "finish"].into_iter().enumerate() {
        if let Err(err) = fsm.request_event(event) {
            println!("{err}");
        }
        println!("{}:{}", step + 1, fsm.current());
    }

    println!("{}", fsm.visualize(VisualizeType::Graphviz));
}
