//! Pointer picking module
//!
//! Turns left clicks into body selections by casting a camera ray against
//! the registered body spheres.

use bevy::prelude::*;

pub mod picker;
pub mod ray;
pub mod systems;

pub use picker::{pick, pick_along_ray};
pub use ray::{CameraView, to_device_coords};
pub use systems::pick_on_click;

use crate::bodies::advance_bodies;

/// Plugin for click-to-select on body meshes
pub struct BodyPickingPlugin;

impl Plugin for BodyPickingPlugin {
    fn build(&self, app: &mut App) {
        // Clicks hit-test the positions drawn last frame, before this frame's tick.
        app.add_systems(Update, pick_on_click.before(advance_bodies));
    }
}
