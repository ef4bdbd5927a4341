//! User interface module
//!
//! This module handles UI state, the selection sidebar, the overview box,
//! the clock banner, and the skybox backdrop.

use bevy::prelude::*;

pub mod clock;
pub mod overview;
pub mod sidebar;
pub mod skybox;
pub mod state;

pub use clock::{ClockTimer, format_banner};
pub use sidebar::SidebarText;
pub use skybox::SkyboxPlugin;
pub use state::{BlocksPicking, CameraPose, MainCamera, UIState};

use crate::config::AppSettings;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        let show_orbit_guides = app
            .world()
            .get_resource::<AppSettings>()
            .is_none_or(|settings| settings.show_orbit_guides);

        app.insert_resource(UIState {
            show_orbit_guides,
            ..default()
        })
        .init_resource::<ClockTimer>()
        .add_systems(
            Startup,
            (
                sidebar::spawn_sidebar,
                overview::spawn_overview,
                clock::spawn_clock,
            ),
        )
        .add_systems(
            Update,
            (
                sidebar::update_sidebar,
                overview::apply_overview_visibility,
                clock::update_clock,
            ),
        );
    }
}
