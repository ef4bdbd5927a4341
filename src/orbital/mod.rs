//! Orbital geometry module
//!
//! This module handles circular orbit paths, body positions along an orbit,
//! and the orbit guide lines drawn for visual reference.

use bevy::prelude::*;

pub mod guides;
pub mod path;

pub use guides::{OrbitGuideLine, spawn_orbit_guides, toggle_orbit_guides};
pub use path::{ORBIT_PATH_SEGMENTS, generate_orbit_path, orbital_offset};

/// Plugin for orbit guide rendering
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_orbit_guides)
            .add_systems(Update, toggle_orbit_guides);
    }
}
