use bevy_ecs::prelude::Component;

/// End-of-level message. `name` is shown in the status readout.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub name: &'static str,
}
