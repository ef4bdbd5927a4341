use bevy::core_pipeline::Skybox;
use bevy::prelude::Plugin;
use bevy::{
    asset::LoadState,
    prelude::*,
    render::render_resource::{TextureViewDescriptor, TextureViewDimension},
};

use crate::bodies::catalog::STARS_TEXTURE;
use crate::config::AppSettings;
use crate::ui::state::MainCamera;

const CUBE_FACES: u32 = 6;

pub struct SkyboxPlugin;

impl Plugin for SkyboxPlugin {
    fn build(&self, app: &mut bevy::prelude::App) {
        app.add_systems(Startup, load_skybox)
            .add_systems(Update, asset_loaded);
    }
}

#[derive(Resource)]
pub struct Cubemap {
    pub activated: bool,
    pub is_loaded: bool,
    pub image_handle: Handle<Image>,
}

/// How a loaded 2D image becomes six cube faces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeLayout {
    /// Faces already stacked vertically (height = 6 * width)
    Stacked,
    /// One square face reused on all six sides
    Replicated,
    Unsupported,
}

pub fn cube_layout(width: u32, height: u32) -> CubeLayout {
    if width == 0 {
        CubeLayout::Unsupported
    } else if height == width * CUBE_FACES {
        CubeLayout::Stacked
    } else if height == width {
        CubeLayout::Replicated
    } else {
        CubeLayout::Unsupported
    }
}

fn load_skybox(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(Cubemap {
        is_loaded: false,
        image_handle: asset_server.load(STARS_TEXTURE.0),
        activated: true,
    });
}

fn asset_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<AppSettings>,
    mut images: ResMut<Assets<Image>>,
    mut cubemap: ResMut<Cubemap>,
    mut camera_query: Query<(Entity, Option<&Skybox>), With<MainCamera>>,
) {
    if cubemap.activated
        && !cubemap.is_loaded
        && asset_server
            .get_load_state(cubemap.image_handle.id())
            .unwrap_or(LoadState::NotLoaded)
            .is_loaded()
    {
        let Some(image) = images.get_mut(&cubemap.image_handle) else {
            return;
        };

        if image.texture_descriptor.array_layer_count() == 1 {
            let converted = match cube_layout(image.width(), image.height()) {
                CubeLayout::Stacked => image
                    .reinterpret_stacked_2d_as_array(CUBE_FACES)
                    .map_err(|err| err.to_string()),
                CubeLayout::Replicated => replicate_faces(image),
                CubeLayout::Unsupported => Err(format!(
                    "{}x{} is neither square nor a 1x6 strip",
                    image.width(),
                    image.height()
                )),
            };
            if let Err(err) = converted {
                // Stars still render as points; only the backdrop is lost.
                warn!("Skybox disabled, cannot build cubemap: {}", err);
                cubemap.activated = false;
                return;
            }
            image.texture_view_descriptor = Some(TextureViewDescriptor {
                dimension: Some(TextureViewDimension::Cube),
                ..default()
            });
        }

        info!("Skybox cubemap ready");
        cubemap.is_loaded = true;
    }

    if cubemap.activated
        && cubemap.is_loaded
        && let Ok((camera_entity, skybox)) = camera_query.single_mut()
        && skybox.is_none()
    {
        commands.entity(camera_entity).insert(Skybox {
            image: cubemap.image_handle.clone(),
            brightness: settings.skybox_brightness,
            ..default()
        });
    }
}

/// Copy a single square image onto all six layers
fn replicate_faces(image: &mut Image) -> Result<(), String> {
    let Some(face) = image.data.as_ref() else {
        return Err("image has no CPU-side pixel data".to_string());
    };
    let faces = face.repeat(CUBE_FACES as usize);
    image.data = Some(faces);
    image.texture_descriptor.size.depth_or_array_layers = CUBE_FACES;
    Ok(())
}
