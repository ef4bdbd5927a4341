//! Static body table
//!
//! Sizes and distances are scene units, speeds are radians per frame.

/// Asset path of a texture, resolved by the asset server at spawn time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureRef(pub &'static str);

/// Flat annulus attached to a body's orbit pivot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: TextureRef,
}

/// Configuration record for one orbiting body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyConfig {
    pub name: &'static str,
    pub radius: f32,
    pub texture: TextureRef,
    pub orbit_distance: f32,
    pub ring: Option<RingSpec>,
    pub description: &'static str,
    pub orbital_angular_speed: f32,
    pub axial_angular_speed: f32,
}

pub const SUN_RADIUS: f32 = 15.0;
pub const SUN_TEXTURE: TextureRef = TextureRef("textures/sun.jpg");
pub const STARS_TEXTURE: TextureRef = TextureRef("textures/stars.jpg");

/// The eight planets and Pluto, innermost first
pub const SOLAR_SYSTEM: [BodyConfig; 9] = [
    BodyConfig {
        name: "Mercury",
        radius: 3.2,
        texture: TextureRef("textures/mercury.jpg"),
        orbit_distance: 28.0,
        ring: None,
        description: "Mercury is the closest planet to the Sun and has no atmosphere.",
        orbital_angular_speed: 0.004,
        axial_angular_speed: 0.004,
    },
    BodyConfig {
        name: "Venus",
        radius: 5.8,
        texture: TextureRef("textures/venus.jpg"),
        orbit_distance: 44.0,
        ring: None,
        description: "Venus is known as the Earth's twin, with a thick atmosphere.",
        orbital_angular_speed: 0.015,
        axial_angular_speed: 0.002,
    },
    BodyConfig {
        name: "Earth",
        radius: 6.0,
        texture: TextureRef("textures/earth.jpg"),
        orbit_distance: 62.0,
        ring: None,
        description: "Earth is the only planet known to support life.",
        orbital_angular_speed: 0.01,
        axial_angular_speed: 0.02,
    },
    BodyConfig {
        name: "Mars",
        radius: 4.0,
        texture: TextureRef("textures/mars.jpg"),
        orbit_distance: 78.0,
        ring: None,
        description: "Mars is often called the Red Planet and has polar ice caps.",
        orbital_angular_speed: 0.008,
        axial_angular_speed: 0.018,
    },
    BodyConfig {
        name: "Jupiter",
        radius: 12.0,
        texture: TextureRef("textures/jupiter.jpg"),
        orbit_distance: 100.0,
        ring: None,
        description: "Jupiter is the largest planet in the Solar System with a Great Red Spot.",
        orbital_angular_speed: 0.002,
        axial_angular_speed: 0.04,
    },
    BodyConfig {
        name: "Saturn",
        radius: 10.0,
        texture: TextureRef("textures/saturn.jpg"),
        orbit_distance: 138.0,
        ring: Some(RingSpec {
            inner_radius: 10.0,
            outer_radius: 20.0,
            texture: TextureRef("textures/saturn_ring.png"),
        }),
        description: "Saturn is known for its stunning rings and many moons.",
        orbital_angular_speed: 0.0009,
        axial_angular_speed: 0.038,
    },
    BodyConfig {
        name: "Uranus",
        radius: 7.0,
        texture: TextureRef("textures/uranus.jpg"),
        orbit_distance: 176.0,
        ring: Some(RingSpec {
            inner_radius: 7.0,
            outer_radius: 12.0,
            texture: TextureRef("textures/uranus_ring.png"),
        }),
        description: "Uranus is unique for its sideways rotation and blue-green color.",
        orbital_angular_speed: 0.0004,
        axial_angular_speed: 0.03,
    },
    BodyConfig {
        name: "Neptune",
        radius: 7.0,
        texture: TextureRef("textures/neptune.jpg"),
        orbit_distance: 200.0,
        ring: None,
        description: "Neptune is the farthest planet from the Sun and has a dynamic atmosphere.",
        orbital_angular_speed: 0.0001,
        axial_angular_speed: 0.032,
    },
    BodyConfig {
        name: "Pluto",
        radius: 2.8,
        texture: TextureRef("textures/pluto.jpg"),
        orbit_distance: 216.0,
        ring: None,
        description: "Pluto is classified as a dwarf planet and features mountains made of ice.",
        orbital_angular_speed: 0.0007,
        axial_angular_speed: 0.008,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_saturn_and_uranus_have_rings() {
        let ringed: Vec<&str> = SOLAR_SYSTEM
            .iter()
            .filter(|b| b.ring.is_some())
            .map(|b| b.name)
            .collect();
        assert_eq!(ringed, vec!["Saturn", "Uranus"]);
    }

    #[test]
    fn test_bodies_are_outside_the_sun_and_ordered() {
        for pair in SOLAR_SYSTEM.windows(2) {
            assert!(pair[0].orbit_distance < pair[1].orbit_distance);
        }
        for body in &SOLAR_SYSTEM {
            assert!(body.orbit_distance - body.radius > SUN_RADIUS, "{}", body.name);
        }
    }
}
