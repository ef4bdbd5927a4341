//! Celestial body registry
//!
//! The registry owns every orbiting body for the lifetime of the app. Bodies
//! are added once at startup and never removed, so a [`BodyHandle`] is just
//! the creation index.

use bevy::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

use crate::bodies::catalog::{BodyConfig, RingSpec, TextureRef};
use crate::orbital::{generate_orbit_path, orbital_offset};

/// Stable reference to a registered body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u32);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Rejected body configurations
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("{name}: radius must be positive (got {radius})")]
    NonPositiveRadius { name: String, radius: f32 },

    #[error("{name}: orbit distance must be positive (got {distance})")]
    NonPositiveOrbitDistance { name: String, distance: f32 },

    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("{name}: ring needs 0 < inner < outer (got {inner}..{outer})")]
    InvalidRing { name: String, inner: f32, outer: f32 },

    #[error("{name}: angular speeds must be finite")]
    NonFiniteSpeed { name: String },
}

/// One orbiting body and its animation state
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: &'static str,
    pub radius: f32,
    pub texture: TextureRef,
    pub orbit_distance: f32,
    pub description: &'static str,
    pub orbital_angular_speed: f32,
    pub axial_angular_speed: f32,
    pub ring: Option<RingSpec>,
    /// Rotation of the orbit pivot about +Y, radians. Grows without bound.
    pub orbital_angle: f32,
    /// Rotation of the body mesh about +Y, radians. Grows without bound.
    pub axial_angle: f32,
}

impl CelestialBody {
    /// Body centre in world space for the current orbital angle
    pub fn center(&self) -> Vec3 {
        orbital_offset(self.orbit_distance, self.orbital_angle)
    }
}

/// Closed polyline drawn at a body's orbit radius
#[derive(Debug, Clone)]
pub struct OrbitGuide {
    pub body: BodyHandle,
    pub radius: f32,
    pub points: Vec<Vec2>,
}

/// Every registered body, in creation order
#[derive(Resource, Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
    guides: Vec<OrbitGuide>,
    names: HashSet<&'static str>,
    guide_segments: usize,
}

impl BodyRegistry {
    pub fn new(guide_segments: usize) -> Self {
        Self {
            guide_segments,
            ..Default::default()
        }
    }

    /// Build a registry from a table of configs, stopping at the first bad record
    pub fn from_catalog(
        configs: &[BodyConfig],
        guide_segments: usize,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(guide_segments);
        for config in configs {
            registry.create_body(config)?;
        }
        Ok(registry)
    }

    /// Validate and register a body along with its orbit guide
    pub fn create_body(&mut self, config: &BodyConfig) -> Result<BodyHandle, RegistryError> {
        validate(config)?;
        if self.names.contains(config.name) {
            return Err(RegistryError::DuplicateName(config.name.to_string()));
        }

        let handle = BodyHandle(self.bodies.len() as u32);
        self.names.insert(config.name);
        self.bodies.push(CelestialBody {
            name: config.name,
            radius: config.radius,
            texture: config.texture,
            orbit_distance: config.orbit_distance,
            description: config.description,
            orbital_angular_speed: config.orbital_angular_speed,
            axial_angular_speed: config.axial_angular_speed,
            ring: config.ring,
            orbital_angle: 0.0,
            axial_angle: 0.0,
        });
        self.guides.push(OrbitGuide {
            body: handle,
            radius: config.orbit_distance,
            points: generate_orbit_path(config.orbit_distance, self.guide_segments),
        });

        debug!("Registered {} as {:?}", config.name, handle);
        Ok(handle)
    }

    /// Handles of all bodies in creation order
    #[allow(dead_code)]
    pub fn all_bodies(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        (0..self.bodies.len() as u32).map(BodyHandle)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&CelestialBody> {
        self.bodies.get(handle.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &CelestialBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyHandle(i as u32), body))
    }

    pub fn orbit_guides(&self) -> &[OrbitGuide] {
        &self.guides
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance every body by one frame.
    ///
    /// The increment is fixed per body and independent of elapsed time, so
    /// animation speed follows the display refresh rate.
    pub fn tick(&mut self) {
        for body in &mut self.bodies {
            body.orbital_angle += body.orbital_angular_speed;
            body.axial_angle += body.axial_angular_speed;
        }
    }
}

fn validate(config: &BodyConfig) -> Result<(), RegistryError> {
    let name = config.name.to_string();
    if !(config.radius > 0.0) {
        return Err(RegistryError::NonPositiveRadius {
            name,
            radius: config.radius,
        });
    }
    if !(config.orbit_distance > 0.0) {
        return Err(RegistryError::NonPositiveOrbitDistance {
            name,
            distance: config.orbit_distance,
        });
    }
    if !config.orbital_angular_speed.is_finite() || !config.axial_angular_speed.is_finite() {
        return Err(RegistryError::NonFiniteSpeed { name });
    }
    if let Some(ring) = config.ring
        && !(ring.inner_radius > 0.0 && ring.inner_radius < ring.outer_radius)
    {
        return Err(RegistryError::InvalidRing {
            name,
            inner: ring.inner_radius,
            outer: ring.outer_radius,
        });
    }
    Ok(())
}
