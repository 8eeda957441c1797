//! Passing data between callbacks through legacy metadata.

use fsmkit::legacy::{self, Callbacks, LegacyEvent, Metadata};
use fsmkit::EventDesc;
use serde_json::json;

fn main() {
    let mut callbacks = Callbacks::new();
    callbacks.insert(
        "produce".to_string(),
        Box::new(|metadata: &mut Metadata, _event: &mut LegacyEvent| {
            metadata.set_metadata("message", json!("hii"));
            println!("produced data");
        }),
    );
    callbacks.insert(
        "consume".to_string(),
        Box::new(|metadata: &mut Metadata, _event: &mut LegacyEvent| {
            if let Some(message) = metadata.metadata("message").and_then(|v| v.as_str()) {
                println!("message = {message}");
            }
        }),
    );

    let fsm = legacy::new_fsm(
        "idle",
        vec![
            EventDesc::new("produce".to_string(), ["idle".to_string()], "idle".to_string()),
            EventDesc::new("consume".to_string(), ["idle".to_string()], "idle".to_string()),
        ],
        callbacks,
    );

    println!("{}", fsm.current());
    for event in ["produce", "consume"] {
        if let Err(err) = fsm.request_event(event.to_string()) {
            println!("{err}");
        }
        println!("{}", fsm.current());
    }
}
