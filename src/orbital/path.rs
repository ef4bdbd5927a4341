//! Circular orbit geometry

use bevy::prelude::*;
use std::f32::consts::TAU;

/// Default number of segments in an orbit guide
pub const ORBIT_PATH_SEGMENTS: usize = 100;

const MIN_SEGMENTS: usize = 3;

/// Points on a circle of `radius` in the orbital (x, z) plane.
///
/// Returns `segment_count + 1` points evenly spaced by angle; the last point
/// repeats the first so the strip closes. Counts below 3 are raised to 3.
pub fn generate_orbit_path(radius: f32, segment_count: usize) -> Vec<Vec2> {
    let segments = segment_count.max(MIN_SEGMENTS);
    (0..=segments)
        .map(|i| {
            // Wrap the final index so the closing point is bit-identical to the first.
            let angle = (i % segments) as f32 / segments as f32 * TAU;
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// World position of a body at `distance` once its pivot is rotated by `angle` about +Y
pub fn orbital_offset(distance: f32, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * Vec3::new(distance, 0.0, 0.0)
}
