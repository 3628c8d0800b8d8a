//! Demo scene: two ants on a small isometric field.
//!
//! Asset loading needs a live raylib window and lives in [`load_assets`].
//! Everything after that is plain ECS setup in [`build_demo`], which only
//! needs the texture sizes and can run headless.
//!
//! # Scene
//!
//! - a 4×4 map of water with two dirt tiles at (1, 1) and (1, 2)
//! - an idle ant at (64, 64)
//! - a walking ant at (96, 64), drawn above the idle one with an outline
//!
//! Both ants share the outline shader; only the walking one turns it on.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::entityshader::EntityShader;
use crate::components::mapposition::MapPosition;
use crate::components::spriteanimation::SpriteAnimation;
use crate::components::walker::Walker;
use crate::components::zindex::ZIndex;
use crate::error::Result;
use crate::resources::fontstore::FontStore;
use crate::resources::shaderstore::{ShaderStore, UniformValue};
use crate::resources::spritesheet::{FrameCoord, FrameSize, SpriteSheet, SpriteSheetStore};
use crate::resources::texturestore::TextureStore;
use crate::resources::tileatlas::TileAtlas;
use crate::resources::tilemap::{TileKind, TileMap};
use crate::systems::render::HUD_FONT_KEY;

pub const ANT_TEXTURE: &str = "ant";
pub const TILES_TEXTURE: &str = "tiles";
pub const OUTLINE_SHADER: &str = "outline";

const ANT_PATH: &str = "./assets/textures/ant.png";
const TILES_PATH: &str = "./assets/textures/tiles.png";
const HUD_FONT_PATH: &str = "./assets/fonts/hack.ttf";
const OUTLINE_PATH: &str = "./assets/shaders/outline.fs";
const HUD_FONT_SIZE: u32 = 10;

const MAP_WIDTH: u32 = 4;

/// Pixel sizes of the loaded demo textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAssets {
    pub ant_size: (u32, u32),
    pub tiles_size: (u32, u32),
}

/// Load the demo's textures, HUD font and outline shader into the stores.
pub fn load_assets(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    textures: &mut TextureStore,
    fonts: &mut FontStore,
    shaders: &mut ShaderStore,
) -> Result<DemoAssets> {
    let ant_size = textures.load(rl, th, ANT_TEXTURE, ANT_PATH)?;
    let tiles_size = textures.load(rl, th, TILES_TEXTURE, TILES_PATH)?;
    fonts.load(rl, th, HUD_FONT_KEY, HUD_FONT_PATH, HUD_FONT_SIZE)?;

    // The outline samples neighbouring texels, so it needs the texel size of
    // the sheet it draws from. Only ants use it.
    shaders.load(OUTLINE_SHADER, OUTLINE_PATH)?;
    shaders.set_uniform(
        OUTLINE_SHADER,
        "texture_size",
        UniformValue::Vec2 {
            x: ant_size.0 as f32,
            y: ant_size.1 as f32,
        },
    )?;

    Ok(DemoAssets {
        ant_size,
        tiles_size,
    })
}

/// Register sheets, build the map and spawn the ants.
///
/// Inserts [`SpriteSheetStore`], [`TileAtlas`] and [`TileMap`] resources.
pub fn build_demo(world: &mut World, assets: &DemoAssets) -> Result<()> {
    let mut sheets = SpriteSheetStore::new();

    let mut ant_sheet = SpriteSheet::new(
        ANT_TEXTURE,
        assets.ant_size.0,
        assets.ant_size.1,
        FrameSize::Count {
            hframes: 13,
            vframes: 3,
        },
    )?;
    let idle = ant_sheet.register_animation(3.0, &[FrameCoord::new(1, 1), FrameCoord::new(2, 1)])?;
    let walk = ant_sheet.register_animation(
        10.0,
        &[
            FrameCoord::new(3, 1),
            FrameCoord::new(4, 1),
            FrameCoord::new(5, 1),
            FrameCoord::new(6, 1),
        ],
    )?;
    let ant_sheet = sheets.insert(ANT_TEXTURE, ant_sheet);

    let tiles_sheet = SpriteSheet::new(
        TILES_TEXTURE,
        assets.tiles_size.0,
        assets.tiles_size.1,
        FrameSize::Pixels {
            width: 32,
            height: 32,
        },
    )?;
    let tiles_sheet = sheets.insert(TILES_TEXTURE, tiles_sheet);
    let atlas = TileAtlas::new(tiles_sheet)
        .with_frame(TileKind::Dirt, FrameCoord::new(14, 1))?
        .with_frame(TileKind::Water, FrameCoord::new(15, 1))?;

    let mut map = TileMap::new(MAP_WIDTH, TileKind::Water);
    map.set(1, 1, TileKind::Dirt)?;
    map.set(1, 2, TileKind::Dirt)?;

    world.spawn((
        MapPosition::new(64.0, 64.0),
        SpriteAnimation::new(ant_sheet.clone(), idle)?,
        Walker::new(idle, walk, false),
        ZIndex(0),
        EntityShader::outline(OUTLINE_SHADER, false),
    ));
    world.spawn((
        MapPosition::new(96.0, 64.0),
        SpriteAnimation::new(ant_sheet, walk)?,
        Walker::new(idle, walk, true),
        ZIndex(1),
        EntityShader::outline(OUTLINE_SHADER, true),
    ));

    info!(
        "Demo scene ready: {}x{} map, {} sprite sheets",
        map.width(),
        map.width(),
        sheets.len()
    );

    world.insert_resource(sheets);
    world.insert_resource(atlas);
    world.insert_resource(map);
    Ok(())
}
