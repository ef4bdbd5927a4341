//! Sun point light and ambient fill

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::config::AppSettings;

/// Marker component for the light emitted from the sun
#[derive(Component)]
pub struct SunLight;

/// Point light at the sun's center plus the global ambient term
pub fn spawn_sun_light(mut commands: Commands, settings: Res<AppSettings>) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: settings.ambient_brightness,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: settings.sun_light_intensity,
            range: settings.sun_light_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
        SunLight,
        Name::new("Sun light"),
    ));
}
