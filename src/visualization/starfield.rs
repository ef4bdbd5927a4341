//! Background starfield
//!
//! Stars are scattered uniformly in a slab behind the solar system:
//! x and y in [-1000, 1000], z in [-2000, 0]. Positions come from a seeded
//! generator so the sky is the same on every launch.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::AppSettings;

const HALF_WIDTH: f32 = 1000.0;
const DEPTH: f32 = 2000.0;

#[derive(Component)]
pub struct Starfield;

/// Deterministic star positions for `seed`
pub fn generate_starfield(count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = (rng.random::<f32>() * 2.0 - 1.0) * HALF_WIDTH;
            let y = (rng.random::<f32>() * 2.0 - 1.0) * HALF_WIDTH;
            let z = -rng.random::<f32>() * DEPTH;
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Point-list mesh with one vertex per star
pub fn starfield_mesh(stars: &[Vec3]) -> Mesh {
    let positions: Vec<[f32; 3]> = stars.iter().map(|p| p.to_array()).collect();
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

pub fn spawn_starfield(
    mut commands: Commands,
    settings: Res<AppSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let stars = generate_starfield(settings.star_count as usize, settings.star_seed);
    debug!("Generated {} stars", stars.len());

    commands.spawn((
        Mesh3d(meshes.add(starfield_mesh(&stars))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Starfield,
        Name::new("Starfield"),
    ));
}
