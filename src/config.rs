//! Application settings
//!
//! Settings live in `settings.json` inside the platform config directory:
//! - macOS: ~/Library/Application Support/solarsystem3d/
//! - Linux: ~/.config/solarsystem3d/
//! - Windows: %APPDATA%\solarsystem3d\config\
//!
//! Every field has a default, so a missing or partial file is fine.

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

/// Plugin that loads [`AppSettings`] and inserts them as a resource
pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings = match AppSettings::load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!("Failed to load settings, using defaults: {err:#}");
                AppSettings::default()
            }
        };
        app.insert_resource(settings);
    }
}

/// User-tunable settings for the scene, camera and input
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub camera_position: [f32; 3],
    pub camera_fov_degrees: f32,
    pub camera_near: f32,
    // The starfield reaches 2000 units out, so the far plane sits well past it.
    pub camera_far: f32,
    pub star_count: u32,
    pub star_seed: u64,
    pub orbit_path_segments: usize,
    pub show_orbit_guides: bool,
    pub sun_light_intensity: f32,
    pub sun_light_range: f32,
    pub ambient_brightness: f32,
    pub skybox_brightness: f32,
    /// Max cursor travel between press and release for the release to count as a click
    pub click_drag_tolerance_px: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            camera_position: [-50.0, 90.0, 150.0],
            camera_fov_degrees: 75.0,
            camera_near: 0.1,
            camera_far: 4000.0,
            star_count: 10_000,
            star_seed: 0x5EED_2024,
            orbit_path_segments: 100,
            show_orbit_guides: true,
            sun_light_intensity: 40_000_000.0,
            sun_light_range: 300.0,
            ambient_brightness: 0.0,
            skybox_brightness: 1000.0,
            click_drag_tolerance_px: 4.0,
        }
    }
}

impl AppSettings {
    /// Load settings from the platform config directory
    pub fn load() -> Result<Self, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "solarsystem3d")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Self::load_from_dir(proj_dirs.config_dir())
    }

    /// Load settings from `dir`, falling back to defaults when no file exists
    pub fn load_from_dir(dir: &Path) -> Result<Self, anyhow::Error> {
        let path = settings_path(dir);
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: AppSettings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to `dir`, creating it if needed
    #[allow(dead_code)]
    pub fn save_to_dir(&self, dir: &Path) -> Result<(), anyhow::Error> {
        fs::create_dir_all(dir)?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(settings_path(dir), contents)?;
        Ok(())
    }

    pub fn camera_translation(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }

    pub fn camera_fov(&self) -> f32 {
        self.camera_fov_degrees.to_radians()
    }
}

fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "solarsystem3d-settings-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = unique_temp_dir("missing");
        let settings = AppSettings::load_from_dir(&dir).expect("load should succeed");
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = unique_temp_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(SETTINGS_FILE),
            r#"{ "star_count": 250, "show_orbit_guides": false }"#,
        )
        .unwrap();

        let settings = AppSettings::load_from_dir(&dir).unwrap();
        assert_eq!(settings.star_count, 250);
        assert!(!settings.show_orbit_guides);
        assert_eq!(settings.camera_position, [-50.0, 90.0, 150.0]);
        assert_eq!(settings.orbit_path_segments, 100);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_then_load() {
        let dir = unique_temp_dir("save");
        let settings = AppSettings {
            camera_fov_degrees: 60.0,
            star_seed: 7,
            ..Default::default()
        };
        settings.save_to_dir(&dir).unwrap();

        let loaded = AppSettings::load_from_dir(&dir).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = unique_temp_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SETTINGS_FILE), "{ not json").unwrap();

        let err = AppSettings::load_from_dir(&dir).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));

        let _ = fs::remove_dir_all(&dir);
    }
}
