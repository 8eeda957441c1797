//! Macros for ergonomic state and event declarations.

/// Declare a fieldless enum usable as a [`State`](crate::State) or
/// [`EventName`](crate::EventName).
///
/// Derives `Clone, Copy, PartialEq, Eq, Hash, Debug` and implements
/// `Display` plus a `name()` accessor returning the variant identifier.
/// A variant may override its display name with `= "text"`.
///
/// # Example
///
/// ```
/// use fsmkit::fsm_enum;
///
/// fsm_enum! {
///     pub enum DoorState {
///         Closed = "closed",
///         Open = "open",
///     }
/// }
///
/// fsm_enum! {
///     pub enum DoorEvent {
///         Open,
///         Close,
///     }
/// }
///
/// assert_eq!(DoorState::Closed.to_string(), "closed");
/// assert_eq!(DoorEvent::Close.name(), "Close");
/// ```
#[macro_export]
macro_rules! fsm_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Display name of this variant.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::fsm_enum!(@label $variant $($label)?)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EventName, State};

    fsm_enum! {
        enum TestState {
            Initial,
            Processing = "processing",
            Complete,
        }
    }

    fn assert_state<S: State>(_: S) {}
    fn assert_event<E: EventName>(_: E) {}

    #[test]
    fn fsm_enum_names_variants() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "processing");
        assert_eq!(TestState::Complete.to_string(), "Complete");
    }

    #[test]
    fn fsm_enum_satisfies_bounds() {
        assert_state(TestState::Initial);
        assert_event(TestState::Complete);
    }

    #[test]
    fn fsm_enum_supports_visibility() {
        fsm_enum! {
            pub enum PublicEvent {
                Go,
                Stop,
            }
        }

        assert_ne!(PublicEvent::Go, PublicEvent::Stop);
    }
}
