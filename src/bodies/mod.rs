//! Celestial bodies module
//!
//! This module owns the body registry, the static body table, and the
//! systems that spawn bodies into the scene and advance them every frame.

use bevy::prelude::*;

pub mod catalog;
pub mod components;
pub mod registry;
pub mod systems;

pub use catalog::{BodyConfig, RingSpec, SOLAR_SYSTEM, TextureRef};
pub use components::{BodyMesh, OrbitPivot, PendingTexture};
pub use registry::{BodyHandle, BodyRegistry, CelestialBody, RegistryError};
pub use systems::{
    advance_bodies, apply_loaded_textures, spawn_bodies, spawn_sun, sync_body_transforms,
};

use crate::config::AppSettings;
use crate::orbital::ORBIT_PATH_SEGMENTS;

/// Plugin for the body registry and the frame updater
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        let segments = app
            .world()
            .get_resource::<AppSettings>()
            .map(|settings| settings.orbit_path_segments)
            .unwrap_or(ORBIT_PATH_SEGMENTS);

        let registry = match BodyRegistry::from_catalog(&SOLAR_SYSTEM, segments) {
            Ok(registry) => {
                info!("Registered {} bodies", registry.len());
                registry
            }
            Err(err) => {
                error!("Invalid body table, no bodies will be spawned: {err}");
                BodyRegistry::new(segments)
            }
        };

        app.insert_resource(registry)
            .add_systems(Startup, (spawn_sun, spawn_bodies))
            .add_systems(
                Update,
                (
                    advance_bodies,
                    sync_body_transforms.after(advance_bodies),
                    apply_loaded_textures,
                ),
            );
    }
}
