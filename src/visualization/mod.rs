//! Visualization module
//!
//! This module handles scene dressing that is not a selectable body:
//! sun lighting and the background starfield.

use bevy::prelude::*;

pub mod lighting;
pub mod starfield;

pub use lighting::{SunLight, spawn_sun_light};
pub use starfield::{Starfield, generate_starfield, spawn_starfield};

/// Plugin for lighting and background visuals
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_sun_light, spawn_starfield));
    }
}
