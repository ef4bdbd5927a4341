//! Camera rays from screen positions
//!
//! Screen coordinates are logical pixels with the origin at the top-left of
//! the viewport. Device coordinates span [-1, 1] on both axes with +y up.

use bevy::prelude::*;

/// Map a screen position to device space
pub fn to_device_coords(screen: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * screen.x / viewport.x - 1.0,
        1.0 - 2.0 * screen.y / viewport.y,
    )
}

/// Map a device-space position back to the screen
pub fn to_screen_coords(device: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (device.x + 1.0) * 0.5 * viewport.x,
        (1.0 - device.y) * 0.5 * viewport.y,
    )
}

/// Pose and vertical field of view of a perspective camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub fov_y: f32,
}

impl CameraView {
    pub fn new(position: Vec3, rotation: Quat, fov_y: f32) -> Self {
        Self {
            position,
            rotation,
            fov_y,
        }
    }

    /// Camera at `position` facing `target`
    #[allow(dead_code)]
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3, fov_y: f32) -> Self {
        let transform = Transform::from_translation(position).looking_at(target, up);
        Self::new(transform.translation, transform.rotation, fov_y)
    }

    pub fn from_global_transform(transform: &GlobalTransform, fov_y: f32) -> Self {
        Self::new(transform.translation(), transform.rotation(), fov_y)
    }

    /// Ray from the camera through a device-space point.
    ///
    /// `aspect` is viewport width over height. Returns `None` for a degenerate
    /// direction (zero field of view, non-finite input).
    pub fn ray(&self, device: Vec2, aspect: f32) -> Option<Ray3d> {
        let half_height = (self.fov_y * 0.5).tan();
        // View space looks down -Z with +Y up.
        let view_dir = Vec3::new(device.x * half_height * aspect, device.y * half_height, -1.0);
        let direction = Dir3::new(self.rotation * view_dir).ok()?;
        Some(Ray3d::new(self.position, direction))
    }

    /// Project a world point to screen coordinates; `None` if it is behind the camera
    #[allow(dead_code)]
    pub fn world_to_screen(&self, point: Vec3, viewport: Vec2) -> Option<Vec2> {
        let local = self.rotation.inverse() * (point - self.position);
        if local.z >= 0.0 {
            return None;
        }
        let half_height = (self.fov_y * 0.5).tan();
        let aspect = viewport.x / viewport.y;
        let depth = -local.z;
        let device = Vec2::new(
            local.x / (depth * half_height * aspect),
            local.y / (depth * half_height),
        );
        Some(to_screen_coords(device, viewport))
    }
}
