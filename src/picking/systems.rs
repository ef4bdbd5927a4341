//! Click detection and selection dispatch

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bodies::BodyRegistry;
use crate::config::AppSettings;
use crate::picking::picker::pick_along_ray;
use crate::picking::ray::{CameraView, to_device_coords};
use crate::selection::{BodySelected, SelectionChanged};
use crate::ui::{BlocksPicking, MainCamera};

/// A release counts as a click only if the cursor stayed near where it was pressed.
/// Anything further is a camera drag.
pub fn is_click(pressed_at: Vec2, released_at: Vec2, tolerance_px: f32) -> bool {
    pressed_at.distance(released_at) <= tolerance_px
}

/// System that picks a body on left click and publishes the result
pub fn pick_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<(Option<&Camera>, &GlobalTransform, &Projection), With<MainCamera>>,
    ui_nodes: Query<&Interaction, With<BlocksPicking>>,
    settings: Res<AppSettings>,
    registry: Res<BodyRegistry>,
    mut pressed_at: Local<Option<Vec2>>,
    mut writer: MessageWriter<SelectionChanged>,
) {
    let cursor = window.cursor_position();

    if mouse.just_pressed(MouseButton::Left) {
        *pressed_at = cursor;
    }
    if !mouse.just_released(MouseButton::Left) {
        return;
    }

    let (Some(press), Some(release)) = (pressed_at.take(), cursor) else {
        return;
    };
    if !is_click(press, release, settings.click_drag_tolerance_px) {
        return;
    }
    if ui_nodes.iter().any(|i| *i != Interaction::None) {
        return;
    }

    let (render_camera, transform, projection) = *camera;
    // The engine's ray respects sub-viewports; it is unavailable until the
    // camera has rendered once, so fall back to the window-sized projection.
    let ray = render_camera
        .and_then(|c| c.viewport_to_world(transform, release).ok())
        .or_else(|| window_ray(release, &window, transform, projection));
    let Some(ray) = ray else {
        debug!("pick_on_click: no camera ray for cursor {release}");
        return;
    };

    match pick_along_ray(ray, &registry).and_then(|handle| registry.get(handle)) {
        Some(body) => {
            writer.write(SelectionChanged::Selected(BodySelected::from(body)));
        }
        None => {
            writer.write(SelectionChanged::Cleared);
        }
    }
}

fn window_ray(
    cursor: Vec2,
    window: &Window,
    transform: &GlobalTransform,
    projection: &Projection,
) -> Option<Ray3d> {
    let Projection::Perspective(perspective) = projection else {
        return None;
    };
    let viewport = Vec2::new(window.width(), window.height());
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return None;
    }
    CameraView::from_global_transform(transform, perspective.fov)
        .ray(to_device_coords(cursor, viewport), viewport.x / viewport.y)
}
