//! Scene rendering.
//!
//! The scene is drawn in two layers through a [`RenderBackend`]:
//!
//! 1. the isometric tile map, diagonal by diagonal in
//!    [`TileMap::visible_tiles`] order so nearer tiles overdraw farther ones;
//! 2. animated sprites, sorted by [`ZIndex`] (missing index counts as 0, ties
//!    keep query order), each through its [`EntityShader`] if it has one.
//!
//! [`render_system`] paints both layers plus the HUD into the fixed-resolution
//! [`RenderTarget`], then scales that texture into the window with
//! letterboxing. The drawing helpers take plain references so they can run
//! against a [`RecordingBackend`](crate::backend::RecordingBackend) without a
//! window.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::*;
use smallvec::SmallVec;

use crate::backend::RenderBackend;
use crate::backend::raylibbackend::RaylibBackend;
use crate::components::entityshader::EntityShader;
use crate::components::mapposition::MapPosition;
use crate::components::spriteanimation::SpriteAnimation;
use crate::components::zindex::ZIndex;
use crate::resources::camera::Camera;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::shaderstore::ShaderStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::tileatlas::TileAtlas;
use crate::resources::tilemap::TileMap;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

/// Font key the HUD is drawn with.
pub const HUD_FONT_KEY: &str = "hack";

const HUD_COLOR: Color = Color::WHITE;
const FALLBACK_LINE_HEIGHT: f32 = 10.0;

/// What the sprite pass reads from each entity.
pub type SpriteItem<'a> = (
    &'a SpriteAnimation,
    &'a MapPosition,
    Option<&'a ZIndex>,
    Option<&'a EntityShader>,
);

/// Draw every non-empty tile of `map`, back to front.
///
/// `origin` is the world position of tile (0, 0); the camera offset is applied
/// on top. Kinds without a frame in `atlas` are skipped.
pub fn draw_tilemap<B: RenderBackend>(
    backend: &mut B,
    map: &TileMap,
    atlas: &TileAtlas,
    origin: Vector2,
    camera: &Camera,
) {
    for (col, row, kind) in map.visible_tiles() {
        let Some(source) = atlas.source_rect(kind) else {
            debug!("draw_tilemap: no atlas frame for {:?}", kind);
            continue;
        };
        let offset = TileMap::to_screen(col, row);
        let world = Vector2 {
            x: origin.x + offset.x,
            y: origin.y + offset.y,
        };
        backend.draw_sprite(
            atlas.tex_key(),
            camera.world_to_screen(world),
            source,
            false,
            false,
            None,
        );
    }
}

/// Draw animated sprites at their current frame, lowest [`ZIndex`] first.
pub fn draw_sprites<'a, B, I>(backend: &mut B, camera: &Camera, sprites: I)
where
    B: RenderBackend,
    I: IntoIterator<Item = SpriteItem<'a>>,
{
    let mut to_draw: Vec<(&SpriteAnimation, Vector2, ZIndex, Option<&EntityShader>)> = sprites
        .into_iter()
        .map(|(anim, pos, z, shader)| (anim, pos.pos, z.copied().unwrap_or_default(), shader))
        .collect();

    to_draw.sort_by_key(|(_, _, z, _)| *z);

    for (anim, pos, _z, shader) in to_draw {
        backend.draw_sprite(
            &anim.sheet().tex_key,
            camera.world_to_screen(pos),
            anim.source_rect(),
            anim.flip_h,
            anim.flip_v,
            shader,
        );
    }
}

/// Tile layer first, sprites over it.
pub fn draw_scene<'a, B, I>(
    backend: &mut B,
    map: &TileMap,
    atlas: &TileAtlas,
    origin: Vector2,
    camera: &Camera,
    sprites: I,
) where
    B: RenderBackend,
    I: IntoIterator<Item = SpriteItem<'a>>,
{
    draw_tilemap(backend, map, atlas, origin, camera);
    draw_sprites(backend, camera, sprites);
}

/// Text lines shown in the top-left corner.
///
/// Always the FPS counter; debug mode adds frame, clock and camera details.
pub fn hud_lines(time: &WorldTime, camera: &Camera, debug: bool) -> SmallVec<[String; 4]> {
    let mut lines = SmallVec::new();
    lines.push(format!("FPS: {}", time.fps));
    if debug {
        lines.push(format!(
            "frame: {} t: {:.2}s x{:.2}",
            time.frame_count, time.elapsed, time.time_scale
        ));
        lines.push(format!(
            "camera: ({:.1}, {:.1})",
            camera.offset.x, camera.offset.y
        ));
    }
    lines
}

/// Draw `lines` one below the other starting at the top-left corner.
pub fn draw_hud<B: RenderBackend>(
    backend: &mut B,
    font_key: &str,
    line_height: f32,
    lines: &[String],
) {
    for (i, line) in lines.iter().enumerate() {
        let position = Vector2 {
            x: 0.0,
            y: i as f32 * line_height,
        };
        backend.draw_text(font_key, line, position, HUD_COLOR);
    }
}

/// Render the frame.
///
/// Draws the scene and HUD into the [`RenderTarget`] at the game's internal
/// resolution, then blits it letterboxed into the window.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    fonts: NonSend<FontStore>,
    mut shaders: NonSendMut<ShaderStore>,
    map: Res<TileMap>,
    atlas: Res<TileAtlas>,
    camera: Res<Camera>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    window: Res<WindowSize>,
    debug_mode: Option<Res<DebugMode>>,
    sprites: Query<SpriteItem<'static>>,
) {
    let lines = hud_lines(&time, &camera, debug_mode.is_some());
    let line_height = fonts
        .get(HUD_FONT_KEY)
        .map(|f| f.metrics.glyph_height)
        .unwrap_or(FALLBACK_LINE_HEIGHT);
    let dest = window.calculate_letterbox(target.game_width, target.game_height);
    let source = target.source_rect();

    let mut d = rl.begin_drawing(&th);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(Color::BLACK);

        let mut backend = RaylibBackend::new(&mut t, &textures, &fonts, &mut shaders);
        draw_scene(
            &mut backend,
            &map,
            &atlas,
            config.map_origin(),
            &camera,
            sprites.iter(),
        );
        draw_hud(&mut backend, HUD_FONT_KEY, line_height, &lines);
    }

    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        target.texture.texture(),
        source,
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::resources::spritesheet::{FrameCoord, FrameSize, SpriteSheet};
    use crate::resources::tilemap::TileKind;
    use std::sync::Arc;

    fn tileset() -> Arc<SpriteSheet> {
        Arc::new(
            SpriteSheet::new(
                "tiles",
                512,
                64,
                FrameSize::Pixels {
                    width: 32,
                    height: 32,
                },
            )
            .unwrap(),
        )
    }

    fn atlas() -> TileAtlas {
        TileAtlas::new(tileset())
            .with_frame(TileKind::Dirt, FrameCoord::new(14, 1))
            .unwrap()
            .with_frame(TileKind::Water, FrameCoord::new(15, 1))
            .unwrap()
    }

    fn ant(flip_h: bool) -> SpriteAnimation {
        let mut sheet = SpriteSheet::new(
            "ant",
            416,
            96,
            FrameSize::Count {
                hframes: 13,
                vframes: 3,
            },
        )
        .unwrap();
        let idle = sheet
            .register_animation(3.0, &[FrameCoord::new(1, 1), FrameCoord::new(2, 1)])
            .unwrap();
        SpriteAnimation::new(Arc::new(sheet), idle)
            .unwrap()
            .with_flip(flip_h, false)
    }

    #[test]
    fn test_tilemap_drawn_at_origin_plus_projection() {
        let mut map = TileMap::new(2, TileKind::None);
        map.set_tile(0, 0, TileKind::Water);
        map.set_tile(1, 1, TileKind::Dirt);

        let mut backend = RecordingBackend::new();
        let origin = Vector2 { x: 100.0, y: 50.0 };
        draw_tilemap(&mut backend, &map, &atlas(), origin, &Camera::default());
        assert!(backend.sprite_shaders().all(|s| s.is_none()));

        let drawn: Vec<_> = backend
            .sprites()
            .map(|(key, pos, src)| (key.to_string(), pos.x, pos.y, src.x))
            .collect();
        assert_eq!(
            drawn,
            vec![
                ("tiles".to_string(), 100.0, 50.0, 480.0),
                ("tiles".to_string(), 100.0, 66.0, 448.0),
            ]
        );
    }

    #[test]
    fn test_tiles_without_atlas_frame_are_skipped() {
        let map = TileMap::new(3, TileKind::Dirt);
        let atlas = TileAtlas::new(tileset());
        let mut backend = RecordingBackend::new();
        draw_tilemap(
            &mut backend,
            &map,
            &atlas,
            Vector2 { x: 0.0, y: 0.0 },
            &Camera::default(),
        );
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn test_sprites_sorted_by_zindex_and_camera_applied() {
        let back = ant(false);
        let front = ant(true);
        let back_pos = MapPosition::new(10.0, 10.0);
        let front_pos = MapPosition::new(20.0, 20.0);
        let outline = EntityShader::outline("outline", true);
        let mut camera = Camera::default();
        camera.pan(5.0, 5.0);

        let mut backend = RecordingBackend::new();
        draw_sprites(
            &mut backend,
            &camera,
            [
                (&front, &front_pos, Some(&ZIndex(2)), Some(&outline)),
                (&back, &back_pos, None, None),
            ],
        );

        let positions: Vec<_> = backend.sprites().map(|(_, p, _)| (p.x, p.y)).collect();
        assert_eq!(positions, vec![(5.0, 5.0), (15.0, 15.0)]);

        match &backend.calls[1] {
            crate::backend::DrawCall::Sprite {
                flip_h,
                flip_v,
                shader,
                ..
            } => {
                assert!(*flip_h);
                assert!(!*flip_v);
                assert_eq!(shader.as_ref(), Some(&outline));
            }
            other => panic!("expected sprite call, got {:?}", other),
        }
    }

    #[test]
    fn test_hud_lines_depend_on_debug() {
        let mut time = WorldTime::default();
        time.fps = 58;
        let camera = Camera::default();

        let plain = hud_lines(&time, &camera, false);
        assert_eq!(plain.as_slice(), ["FPS: 58".to_string()]);

        let debug = hud_lines(&time, &camera, true);
        assert_eq!(debug.len(), 3);
        assert_eq!(debug[0], "FPS: 58");
        assert!(debug[2].starts_with("camera:"));
    }

    #[test]
    fn test_hud_drawn_top_left_in_white() {
        let mut backend = RecordingBackend::new();
        let lines = ["FPS: 60".to_string(), "second".to_string()];
        draw_hud(&mut backend, HUD_FONT_KEY, 12.0, &lines);

        assert_eq!(backend.texts().collect::<Vec<_>>(), vec!["FPS: 60", "second"]);

        let placed: Vec<_> = backend
            .calls
            .iter()
            .map(|call| match call {
                crate::backend::DrawCall::Text {
                    font_key,
                    position,
                    color,
                    ..
                } => (font_key.as_str(), position.x, position.y, *color),
                other => panic!("expected text call, got {:?}", other),
            })
            .collect();
        assert_eq!(
            placed,
            vec![("hack", 0.0, 0.0, Color::WHITE), ("hack", 0.0, 12.0, Color::WHITE)]
        );
    }
}
