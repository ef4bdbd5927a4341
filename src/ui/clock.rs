//! Date and time banner

use bevy::picking::Pickable;
use bevy::prelude::*;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

#[derive(Component)]
pub struct ClockBanner;

/// Refresh cadence for the banner
#[derive(Resource, Deref, DerefMut)]
pub struct ClockTimer(pub Timer);

impl Default for ClockTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

/// "MONDAY, 3:04:05 PM"
pub fn format_banner<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "{}, {}",
        now.format("%A").to_string().to_uppercase(),
        now.format("%-I:%M:%S %p")
    )
}

pub fn spawn_clock(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Pickable::IGNORE,
            Name::new("Clock"),
        ))
        .with_children(|row| {
            row.spawn((
                Text::new(format_banner(&Local::now())),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Pickable::IGNORE,
                ClockBanner,
            ));
        });
}

pub fn update_clock(
    time: Res<Time>,
    mut timer: ResMut<ClockTimer>,
    mut banner: Query<&mut Text, With<ClockBanner>>,
) {
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    let text = format_banner(&Local::now());
    for mut banner in &mut banner {
        banner.0.clone_from(&text);
    }
}
