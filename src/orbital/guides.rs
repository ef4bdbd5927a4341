//! Orbit guide lines
//!
//! Guides are purely cosmetic; nothing reads them back for motion or picking.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::bodies::{BodyHandle, BodyRegistry};
use crate::ui::UIState;

/// Marker for the line strip tracing one body's orbit
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitGuideLine(pub BodyHandle);

/// Build a closed line strip in the orbital plane from (x, z) points
pub fn orbit_guide_mesh(points: &[Vec2]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| [p.x, 0.0, p.y]).collect();
    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];

    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

/// Spawn one guide per orbit registered alongside the bodies
pub fn spawn_orbit_guides(
    mut commands: Commands,
    registry: Res<BodyRegistry>,
    state: Res<UIState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });
    let visibility = guide_visibility(state.show_orbit_guides);

    for guide in registry.orbit_guides() {
        commands.spawn((
            Mesh3d(meshes.add(orbit_guide_mesh(&guide.points))),
            MeshMaterial3d(material.clone()),
            Transform::default(),
            visibility,
            OrbitGuideLine(guide.body),
            Name::new(format!("Orbit guide r={}", guide.radius)),
        ));
    }
}

/// Show or hide every orbit guide with the O key
pub fn toggle_orbit_guides(
    input: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<UIState>,
    mut guides: Query<&mut Visibility, With<OrbitGuideLine>>,
) {
    if !input.just_pressed(KeyCode::KeyO) {
        return;
    }

    state.show_orbit_guides = !state.show_orbit_guides;
    let visibility = guide_visibility(state.show_orbit_guides);
    for mut v in &mut guides {
        *v = visibility;
    }
    info!(
        "Orbit guides {} (press O)",
        if state.show_orbit_guides { "ON" } else { "OFF" }
    );
}

fn guide_visibility(show: bool) -> Visibility {
    if show {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}
