//! A door whose payload describes where it leads, driven by typed events.

use fsmkit::{fsm_enum, Definition, Event};
use std::sync::Arc;

fsm_enum! {
    enum DoorState {
        Closed = "closed",
        Open = "open",
    }
}

fsm_enum! {
    enum DoorEvent {
        Open = "open",
        Close = "close",
    }
}

struct Door {
    to: String,
}

impl Door {
    fn enter_state(&mut self, event: &mut Event<DoorState, DoorEvent, String>) {
        println!(
            "The door to {} is {} args:{}",
            self.to,
            event.dst,
            event.args.join(",")
        );
    }
}

fn main() {
    let definition = Arc::new(
        Definition::with_payload_factory(DoorState::Closed, || Door {
            to: "nowhere".to_string(),
        })
        .transition(DoorEvent::Open, [DoorState::Closed], DoorState::Open)
        .transition(DoorEvent::Close, [DoorState::Open], DoorState::Closed)
        .on_enter_any(Door::enter_state),
    );

    let door = definition.new_instance_with(Door {
        to: "homeland".to_string(),
    });

    let args = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    if let Err(err) = door.request_event_with(DoorEvent::Open, args(&["args1", "args2"])) {
        println!("{err}");
    }
    if let Err(err) = door.request_event_with(DoorEvent::Close, args(&["args3", "args4", "args5"])) {
        println!("{err}");
    }
}
