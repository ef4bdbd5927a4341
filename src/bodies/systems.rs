//! Body spawning and per-frame update systems

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::bodies::catalog::{SUN_RADIUS, SUN_TEXTURE};
use crate::bodies::components::{BodyMesh, OrbitPivot, PendingTexture};
use crate::bodies::registry::BodyRegistry;

const SPHERE_SECTORS: u32 = 50;
const SPHERE_STACKS: u32 = 50;
const RING_RESOLUTION: u32 = 32;

/// Spawn the sun at the origin. Its light lives in the visualization module.
pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mesh = meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        PendingTexture(asset_server.load(SUN_TEXTURE.0)),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Visibility::Visible,
        Name::new("Sun"),
    ));
}

/// Spawn a pivot, a body mesh and (when present) a ring for every registered body.
///
/// Materials start untextured; [`apply_loaded_textures`] fills them in.
pub fn spawn_bodies(
    mut commands: Commands,
    registry: Res<BodyRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    for (handle, body) in registry.iter() {
        let sphere = meshes.add(Sphere::new(body.radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
        let surface = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        });
        let surface_texture = asset_server.load(body.texture.0);

        let ring = body.ring.map(|ring| {
            let mesh = meshes.add(
                Annulus::new(ring.inner_radius, ring.outer_radius)
                    .mesh()
                    .resolution(RING_RESOLUTION),
            );
            let material = materials.add(StandardMaterial {
                base_color: Color::WHITE,
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                unlit: true,
                ..default()
            });
            (mesh, material, asset_server.load(ring.texture.0))
        });

        commands
            .spawn((
                Transform::from_rotation(Quat::from_rotation_y(body.orbital_angle)),
                Visibility::Visible,
                OrbitPivot(handle),
                Name::new(format!("{} orbit", body.name)),
            ))
            .with_children(|pivot| {
                pivot.spawn((
                    Mesh3d(sphere),
                    MeshMaterial3d(surface),
                    PendingTexture(surface_texture),
                    Transform::from_xyz(body.orbit_distance, 0.0, 0.0)
                        .with_rotation(Quat::from_rotation_y(body.axial_angle)),
                    BodyMesh(handle),
                    Name::new(body.name),
                ));

                if let Some((mesh, material, texture)) = ring {
                    // Annulus is built in the XY plane; lay it flat in the orbital plane.
                    pivot.spawn((
                        Mesh3d(mesh),
                        MeshMaterial3d(material),
                        PendingTexture(texture),
                        Transform::from_xyz(body.orbit_distance, 0.0, 0.0)
                            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                        Name::new(format!("{} ring", body.name)),
                    ));
                }
            });

        debug!("Spawned {} at distance {}", body.name, body.orbit_distance);
    }
}

/// Attach each texture to its material once the image is in memory.
///
/// Until then the mesh draws with the plain material. A failed load is
/// logged once and the plain material is kept.
pub fn apply_loaded_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &PendingTexture, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (entity, texture, material) in &pending {
        if images.contains(&texture.0) {
            if let Some(material) = materials.get_mut(&material.0) {
                material.base_color_texture = Some(texture.0.clone());
            }
            commands.entity(entity).remove::<PendingTexture>();
        } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(texture.0.id()) {
            warn!("Texture failed to load, keeping plain material: {err}");
            commands.entity(entity).remove::<PendingTexture>();
        }
    }
}

/// Frame updater: advance every body by its fixed per-frame increments
pub fn advance_bodies(mut registry: ResMut<BodyRegistry>) {
    registry.tick();
}

/// Copy the registry angles onto pivot and body mesh rotations.
///
/// Rotations are assigned, not composed, so transforms always equal the
/// angle state in the registry.
pub fn sync_body_transforms(
    registry: Res<BodyRegistry>,
    mut pivots: Query<(&OrbitPivot, &mut Transform), Without<BodyMesh>>,
    mut bodies: Query<(&BodyMesh, &mut Transform), Without<OrbitPivot>>,
) {
    for (pivot, mut transform) in &mut pivots {
        if let Some(body) = registry.get(pivot.0) {
            transform.rotation = Quat::from_rotation_y(body.orbital_angle);
        }
    }
    for (mesh, mut transform) in &mut bodies {
        if let Some(body) = registry.get(mesh.0) {
            transform.rotation = Quat::from_rotation_y(body.axial_angle);
        }
    }
}
