use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod config;
mod orbital;
mod picking;
mod selection;
mod ui;
mod visualization;

use bodies::BodiesPlugin;
use config::{AppSettings, SettingsPlugin};
use orbital::OrbitalPlugin;
use picking::BodyPickingPlugin;
use selection::SelectionPlugin;
use ui::{CameraPose, MainCamera, SkyboxPlugin, UiPlugin};
use visualization::VisualizationPlugin;

/// Spawn the orbit camera looking at the sun
pub fn setup(mut commands: Commands, settings: Res<AppSettings>) {
    let position = settings.camera_translation();
    let pose = CameraPose::from_offset(position);

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(pose.radius),
        yaw: Some(pose.yaw),
        pitch: Some(pose.pitch),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.camera_fov(),
            near: settings.camera_near,
            far: settings.camera_far,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Solar System 3D".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Settings first: later plugins read them while building.
    app.add_plugins(SettingsPlugin);

    // Feathers initializes `UiTheme` but does not populate it by default.
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    app.insert_resource(theme);
    app.add_plugins(FeathersPlugins);

    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(BodiesPlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(SelectionPlugin);
    app.add_plugins(BodyPickingPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(SkyboxPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
