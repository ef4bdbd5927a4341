//! UI state management

use bevy::prelude::*;

/// Main UI state resource
#[derive(Resource, Debug)]
pub struct UIState {
    pub show_overview: bool,
    pub show_orbit_guides: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            show_overview: false,
            show_orbit_guides: true,
        }
    }
}

impl UIState {
    pub fn toggle_overview(&mut self) {
        self.show_overview = !self.show_overview;
    }
}

/// Marker for the camera used for rendering and picking
#[derive(Component)]
pub struct MainCamera;

/// UI nodes that swallow clicks so they don't select bodies behind them
#[derive(Component)]
pub struct BlocksPicking;

/// Orbit camera placement around its focus point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    /// Pose that puts the camera at `offset` from its focus
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        let direction = offset.normalize_or(Vec3::Z);
        Self {
            radius,
            yaw: direction.x.atan2(direction.z),
            pitch: direction.y.asin(),
        }
    }

    /// Inverse of [`CameraPose::from_offset`]
    pub fn offset(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        )
    }
}
