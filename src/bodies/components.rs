//! Components wiring registered bodies into the scene graph

use bevy::prelude::*;

use crate::bodies::registry::BodyHandle;

/// Transform node at the origin whose Y rotation is the body's orbital angle
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitPivot(pub BodyHandle);

/// Sphere mesh offset along +X inside its pivot; spins with the axial angle
#[derive(Component, Copy, Clone, Debug)]
pub struct BodyMesh(pub BodyHandle);

/// Texture still loading for this entity's material.
///
/// The material is spawned untextured and stays that way until the image is
/// available; a failed load keeps the plain material.
#[derive(Component, Clone, Debug)]
pub struct PendingTexture(pub Handle<Image>);
