//! "i" button and the solar system overview box it toggles

use bevy::prelude::*;
use bevy_feathers::palette;
use bevy_ui_widgets::{Activate, Button as WidgetButton};

use crate::ui::state::{BlocksPicking, UIState};

const OVERVIEW_TEXT: &str = "\
Our solar system consists of the Sun and the celestial bodies that are bound to it by gravity. This includes:

- 8 Major Planets: Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune
- Dwarf Planets: Pluto, Eris, Haumea, Makemake, and others
- Moons: Hundreds of natural satellites orbiting planets
- Asteroids and Comets: Small bodies made of rock and ice";

const PREDICTIONS_TEXT: &str = "\
- The Sun is expected to enter its red giant phase in about 5 billion years.
- In about 4 billion years, Earth may be engulfed by the Sun.
- The Andromeda Galaxy is predicted to collide with the Milky Way in about 4.5 billion years.
- Life on Earth may adapt or face challenges due to climate change over the coming decades.";

const HINTS_TEXT: &str = "\
Click a planet to learn more. Drag to orbit, scroll to zoom, O toggles orbit paths.";

#[derive(Component)]
pub struct InfoButton;

#[derive(Component)]
pub struct OverviewBox;

#[derive(Component)]
pub struct OverviewCloseButton;

/// Spawn the "i" button (top right) and the hidden overview box beneath it
pub fn spawn_overview(mut commands: Commands) {
    commands
        .spawn((
            WidgetButton,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                right: Val::Px(10.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
            Interaction::default(),
            BlocksPicking,
            InfoButton,
            Name::new("Info button"),
            children![(
                Text::new("i"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            )],
        ))
        .observe(on_info_button);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(50.0),
                right: Val::Px(10.0),
                width: Val::Px(300.0),
                padding: UiRect::all(Val::Px(20.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                display: Display::None,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            BorderColor::all(Color::WHITE),
            GlobalZIndex(1000),
            Interaction::default(),
            BlocksPicking,
            OverviewBox,
            Name::new("Overview box"),
        ))
        .with_children(|overview| {
            overview.spawn(heading("Solar System Overview", 20.0));
            overview.spawn(paragraph(OVERVIEW_TEXT));
            overview.spawn(heading("Future Predictions", 16.0));
            overview.spawn(paragraph(PREDICTIONS_TEXT));
            overview.spawn(paragraph(HINTS_TEXT));
            overview
                .spawn((
                    WidgetButton,
                    Node {
                        align_self: AlignSelf::FlexStart,
                        ..default()
                    },
                    Interaction::default(),
                    OverviewCloseButton,
                    children![(
                        Text::new("Close"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(palette::ACCENT),
                    )],
                ))
                .observe(on_close_button);
        });
}

fn heading(text: &'static str, size: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(Color::WHITE),
    )
}

fn paragraph(text: &'static str) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(palette::LIGHT_GRAY_1),
    )
}

fn on_info_button(_activate: On<Activate>, mut state: ResMut<UIState>) {
    state.toggle_overview();
}

fn on_close_button(_activate: On<Activate>, mut state: ResMut<UIState>) {
    state.show_overview = false;
}

/// Mirror `UIState::show_overview` onto the overview box
pub fn apply_overview_visibility(
    state: Res<UIState>,
    mut overview: Query<&mut Node, With<OverviewBox>>,
) {
    if !state.is_changed() {
        return;
    }
    let display = if state.show_overview {
        Display::Flex
    } else {
        Display::None
    };
    for mut node in &mut overview {
        if node.display != display {
            node.display = display;
        }
    }
}
