//! Pointer picker
//!
//! Resolves a click to the nearest body sphere under the cursor. Only body
//! meshes are candidates: rings, orbit guides, the sun and the starfield
//! never produce a selection.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::bodies::{BodyHandle, BodyRegistry};
use crate::picking::ray::{CameraView, to_device_coords};

/// Find the body nearest the camera under `screen`, if any
#[allow(dead_code)]
pub fn pick(
    screen: Vec2,
    viewport: Vec2,
    camera: &CameraView,
    registry: &BodyRegistry,
) -> Option<BodyHandle> {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return None;
    }

    let device = to_device_coords(screen, viewport);
    let ray = camera.ray(device, viewport.x / viewport.y)?;
    pick_along_ray(ray, registry)
}

/// Nearest body sphere hit by `ray`
pub fn pick_along_ray(ray: Ray3d, registry: &BodyRegistry) -> Option<BodyHandle> {
    let cast = RayCast3d::from_ray(ray, f32::MAX);

    registry
        .iter()
        .filter_map(|(handle, body)| {
            let sphere = BoundingSphere::new(body.center(), body.radius);
            cast.sphere_intersection_at(&sphere)
                .map(|distance| (handle, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(handle, _)| handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyConfig, RingSpec, SOLAR_SYSTEM, TextureRef};
    use crate::config::AppSettings;
    use crate::orbital::ORBIT_PATH_SEGMENTS;
    use crate::selection::BodySelected;

    const VIEWPORT: Vec2 = Vec2::new(1000.0, 1000.0);

    fn body(name: &'static str, radius: f32, distance: f32) -> BodyConfig {
        BodyConfig {
            name,
            radius,
            texture: TextureRef("textures/test.png"),
            orbit_distance: distance,
            ring: None,
            description: "test body",
            orbital_angular_speed: 0.01,
            axial_angular_speed: 0.02,
        }
    }

    /// Camera on the orbital plane's normal looking straight down at the sun
    fn top_down_camera() -> CameraView {
        CameraView::looking_at(
            Vec3::new(0.0, 300.0, 0.0),
            Vec3::ZERO,
            Vec3::NEG_Z,
            75f32.to_radians(),
        )
    }

    fn screen_of(camera: &CameraView, point: Vec3) -> Vec2 {
        camera.world_to_screen(point, VIEWPORT).unwrap()
    }

    #[test]
    fn test_click_on_each_body_center_selects_it() {
        let mut registry = BodyRegistry::new(ORBIT_PATH_SEGMENTS);
        let inner = registry.create_body(&body("Inner", 3.0, 30.0)).unwrap();
        let outer = registry.create_body(&body("Outer", 5.0, 80.0)).unwrap();
        let camera = top_down_camera();

        let inner_center = registry.get(inner).unwrap().center();
        let outer_center = registry.get(outer).unwrap().center();

        let inner_screen = screen_of(&camera, inner_center);
        let outer_screen = screen_of(&camera, outer_center);
        assert!(inner_screen.distance(outer_screen) > 10.0);

        assert_eq!(pick(inner_screen, VIEWPORT, &camera, &registry), Some(inner));
        assert_eq!(pick(outer_screen, VIEWPORT, &camera, &registry), Some(outer));
    }

    #[test]
    fn test_click_between_bodies_selects_nothing() {
        let mut registry = BodyRegistry::new(ORBIT_PATH_SEGMENTS);
        registry.create_body(&body("Inner", 3.0, 30.0)).unwrap();
        registry.create_body(&body("Outer", 5.0, 80.0)).unwrap();
        let camera = top_down_camera();

        let between = screen_of(&camera, Vec3::new(55.0, 0.0, 0.0));
        assert_eq!(pick(between, VIEWPORT, &camera, &registry), None);
    }

    #[test]
    fn test_picks_follow_orbital_motion() {
        let mut registry = BodyRegistry::new(ORBIT_PATH_SEGMENTS);
        let handle = registry.create_body(&body("Mover", 3.0, 50.0)).unwrap();
        let camera = top_down_camera();
        let start = screen_of(&camera, Vec3::new(50.0, 0.0, 0.0));

        for _ in 0..100 {
            registry.tick();
        }
        // One radian later the body has left its starting point.
        assert_eq!(pick(start, VIEWPORT, &camera, &registry), None);
        let moved = screen_of(&camera, registry.get(handle).unwrap().center());
        assert_eq!(pick(moved, VIEWPORT, &camera, &registry), Some(handle));
    }

    #[test]
    fn test_ring_annulus_is_not_a_candidate() {
        let mut registry = BodyRegistry::new(ORBIT_PATH_SEGMENTS);
        let mut ringed = body("Ringed", 10.0, 138.0);
        ringed.ring = Some(RingSpec {
            inner_radius: 10.0,
            outer_radius: 20.0,
            texture: TextureRef("textures/ring.png"),
        });
        let handle = registry.create_body(&ringed).unwrap();
        let camera = top_down_camera();

        // Middle of the ring band, well clear of the sphere.
        let on_ring = screen_of(&camera, Vec3::new(153.0, 0.0, 0.0));
        assert_eq!(pick(on_ring, VIEWPORT, &camera, &registry), None);

        let on_body = screen_of(&camera, Vec3::new(138.0, 0.0, 0.0));
        assert_eq!(pick(on_body, VIEWPORT, &camera, &registry), Some(handle));
    }

    #[test]
    fn test_nearest_of_overlapping_bodies_wins() {
        let mut registry = BodyRegistry::new(ORBIT_PATH_SEGMENTS);
        let far = registry.create_body(&body("Far", 8.0, 60.0)).unwrap();
        let camera = CameraView::looking_at(
            Vec3::new(200.0, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
            75f32.to_radians(),
        );
        let near = registry.create_body(&body("Near", 4.0, 120.0)).unwrap();

        let center = Vec2::new(VIEWPORT.x / 2.0, VIEWPORT.y / 2.0);
        assert_eq!(pick(center, VIEWPORT, &camera, &registry), Some(near));
        assert_ne!(pick(center, VIEWPORT, &camera, &registry), Some(far));
    }

    #[test]
    fn test_empty_registry_selects_nothing() {
        let registry = BodyRegistry::new(ORBIT_PATH_SEGMENTS);
        let camera = top_down_camera();
        assert_eq!(pick(Vec2::new(500.0, 500.0), VIEWPORT, &camera, &registry), None);
    }

    #[test]
    fn test_zero_sized_viewport_selects_nothing() {
        let mut registry = BodyRegistry::new(ORBIT_PATH_SEGMENTS);
        registry.create_body(&body("Any", 3.0, 30.0)).unwrap();
        let camera = top_down_camera();
        assert_eq!(pick(Vec2::ZERO, Vec2::ZERO, &camera, &registry), None);
    }

    #[test]
    fn test_clicking_earth_from_the_start_view_selects_earth() {
        let registry = BodyRegistry::from_catalog(&SOLAR_SYSTEM, ORBIT_PATH_SEGMENTS).unwrap();
        let settings = AppSettings::default();
        let camera = CameraView::looking_at(
            settings.camera_translation(),
            Vec3::ZERO,
            Vec3::Y,
            settings.camera_fov(),
        );
        let viewport = Vec2::new(1280.0, 720.0);

        let (_, earth) = registry.iter().find(|(_, b)| b.name == "Earth").unwrap();
        let click = camera.world_to_screen(earth.center(), viewport).unwrap();
        assert!(click.x > 0.0 && click.x < viewport.x);
        assert!(click.y > 0.0 && click.y < viewport.y);

        let handle = pick(click, viewport, &camera, &registry).unwrap();
        let selected = BodySelected::from(registry.get(handle).unwrap());
        assert_eq!(
            selected,
            BodySelected {
                name: "Earth".to_string(),
                radius: 6.0,
                orbit_distance: 62.0,
                description: "Earth is the only planet known to support life.".to_string(),
            }
        );
    }

    #[test]
    fn test_click_through_ring_in_front_of_body_selects_body() {
        let registry = BodyRegistry::from_catalog(&SOLAR_SYSTEM, ORBIT_PATH_SEGMENTS).unwrap();
        let (saturn, body) = registry.iter().find(|(_, b)| b.name == "Saturn").unwrap();
        let ring = body.ring.unwrap();
        let center = body.center();

        // Above and in front of the ring plane, aiming below the equator so the
        // ray passes through the annulus on its way to the sphere.
        let camera = CameraView::looking_at(
            center + Vec3::new(0.0, 40.0, 100.0),
            center,
            Vec3::Y,
            75f32.to_radians(),
        );
        let viewport = Vec2::new(1280.0, 720.0);
        let click = camera
            .world_to_screen(center + Vec3::new(0.0, -8.0, 0.0), viewport)
            .unwrap();
        let ray = camera
            .ray(to_device_coords(click, viewport), viewport.x / viewport.y)
            .unwrap();

        let ring_distance = (center.y - ray.origin.y) / ray.direction.y;
        let ring_hit = ray.get_point(ring_distance);
        let from_center = ring_hit.distance(center);
        assert!(from_center > ring.inner_radius && from_center < ring.outer_radius);

        let sphere_distance = RayCast3d::from_ray(ray, f32::MAX)
            .sphere_intersection_at(&BoundingSphere::new(center, body.radius))
            .unwrap();
        assert!(ring_distance < sphere_distance);

        assert_eq!(pick(click, viewport, &camera, &registry), Some(saturn));
    }
}
