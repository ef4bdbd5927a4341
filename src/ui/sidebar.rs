//! Left sidebar describing the selected body

use bevy::prelude::*;
use bevy_feathers::palette;

use crate::selection::{BodySelected, SelectionChanged};
use crate::ui::state::BlocksPicking;

const SIDEBAR_WIDTH_PX: f32 = 300.0;

#[derive(Component)]
pub struct Sidebar;

#[derive(Component)]
pub struct SidebarTitle;

#[derive(Component)]
pub struct SidebarBody;

/// Text shown in the sidebar for one selection
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarText {
    pub title: String,
    pub body: String,
}

impl From<&BodySelected> for SidebarText {
    fn from(body: &BodySelected) -> Self {
        Self {
            title: body.name.clone(),
            body: format!(
                "Description: {}\n\n\
                 - Size: {} km\n\
                 - Distance from Sun: {} million km\n\
                 - Fact: Fascinating information about {}",
                body.description, body.radius, body.orbit_distance, body.name
            ),
        }
    }
}

/// Spawn the sidebar, hidden until something is selected
pub fn spawn_sidebar(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Px(SIDEBAR_WIDTH_PX),
                height: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(20.0)),
                border: UiRect::right(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(20.0),
                overflow: Overflow::scroll_y(),
                display: Display::None,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.9)),
            BorderColor::all(Color::WHITE),
            Interaction::default(),
            BlocksPicking,
            Sidebar,
            Name::new("Sidebar"),
        ))
        .with_children(|sidebar| {
            sidebar.spawn((
                Text::new(""),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                SidebarTitle,
            ));
            sidebar.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(palette::LIGHT_GRAY_1),
                SidebarBody,
            ));
        });
}

/// Show the selected body in the sidebar, or hide it when the click missed
pub fn update_sidebar(
    mut events: MessageReader<SelectionChanged>,
    mut sidebar: Query<&mut Node, With<Sidebar>>,
    mut title: Query<&mut Text, (With<SidebarTitle>, Without<SidebarBody>)>,
    mut body: Query<&mut Text, (With<SidebarBody>, Without<SidebarTitle>)>,
) {
    let Some(latest) = events.read().last() else {
        return;
    };
    let Ok(mut node) = sidebar.single_mut() else {
        return;
    };

    match latest {
        SelectionChanged::Selected(selected) => {
            let text = SidebarText::from(selected);
            if let Ok(mut title) = title.single_mut() {
                title.0 = text.title;
            }
            if let Ok(mut body) = body.single_mut() {
                body.0 = text.body;
            }
            node.display = Display::Flex;
        }
        SelectionChanged::Cleared => {
            node.display = Display::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_text_for_earth() {
        let selected = BodySelected {
            name: "Earth".to_string(),
            radius: 6.0,
            orbit_distance: 62.0,
            description: "Earth is the only planet known to support life.".to_string(),
        };
        let text = SidebarText::from(&selected);
        assert_eq!(text.title, "Earth");
        assert!(
            text.body
                .starts_with("Description: Earth is the only planet known to support life.")
        );
        assert!(text.body.contains("Size: 6 km"));
        assert!(text.body.contains("Distance from Sun: 62 million km"));
        assert!(text.body.contains("about Earth"));
    }

    #[test]
    fn test_fractional_sizes_are_kept() {
        let selected = BodySelected {
            name: "Mercury".to_string(),
            radius: 3.2,
            orbit_distance: 28.0,
            description: String::new(),
        };
        assert!(SidebarText::from(&selected).body.contains("Size: 3.2 km"));
    }

    fn sidebar_app() -> App {
        let mut app = App::new();
        app.add_message::<SelectionChanged>()
            .add_systems(Startup, spawn_sidebar)
            .add_systems(Update, update_sidebar);
        app.update();
        app
    }

    fn sidebar_display(app: &mut App) -> Display {
        let world = app.world_mut();
        world
            .query_filtered::<&Node, With<Sidebar>>()
            .single(world)
            .unwrap()
            .display
    }

    fn sidebar_title(app: &mut App) -> String {
        let world = app.world_mut();
        world
            .query_filtered::<&Text, With<SidebarTitle>>()
            .single(world)
            .unwrap()
            .0
            .clone()
    }

    #[test]
    fn test_sidebar_shows_selection_then_hides_on_clear() {
        let mut app = sidebar_app();
        assert_eq!(sidebar_display(&mut app), Display::None);

        app.world_mut()
            .write_message(SelectionChanged::Selected(BodySelected {
                name: "Mars".to_string(),
                radius: 4.0,
                orbit_distance: 78.0,
                description: "Mars is known as the Red Planet.".to_string(),
            }));
        app.update();
        assert_eq!(sidebar_display(&mut app), Display::Flex);
        assert_eq!(sidebar_title(&mut app), "Mars");

        app.world_mut().write_message(SelectionChanged::Cleared);
        app.update();
        assert_eq!(sidebar_display(&mut app), Display::None);
    }

    #[test]
    fn test_sidebar_untouched_without_messages() {
        let mut app = sidebar_app();
        app.update();
        assert_eq!(sidebar_display(&mut app), Display::None);
        assert_eq!(sidebar_title(&mut app), "");
    }
}
