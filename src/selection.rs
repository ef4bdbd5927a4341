//! Body selection events
//!
//! The picker writes a [`SelectionChanged`] message after every click; UI
//! surfaces subscribe by reading it.

use bevy::prelude::*;

use crate::bodies::CelestialBody;

/// Plugin registering the selection message
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SelectionChanged>()
            .add_systems(Update, log_selection_changes);
    }
}

/// Payload describing the body a click resolved to
#[derive(Clone, Debug, PartialEq)]
pub struct BodySelected {
    pub name: String,
    pub radius: f32,
    pub orbit_distance: f32,
    pub description: String,
}

impl From<&CelestialBody> for BodySelected {
    fn from(body: &CelestialBody) -> Self {
        Self {
            name: body.name.to_string(),
            radius: body.radius,
            orbit_distance: body.orbit_distance,
            description: body.description.to_string(),
        }
    }
}

/// Outcome of a click: a body was selected, or the click hit nothing
#[derive(Message, Clone, Debug, PartialEq)]
pub enum SelectionChanged {
    Selected(BodySelected),
    Cleared,
}

fn log_selection_changes(mut events: MessageReader<SelectionChanged>) {
    for event in events.read() {
        match event {
            SelectionChanged::Selected(body) => info!(
                "Selected {} (radius {}, distance {})",
                body.name, body.radius, body.orbit_distance
            ),
            SelectionChanged::Cleared => debug!("Selection cleared"),
        }
    }
}
