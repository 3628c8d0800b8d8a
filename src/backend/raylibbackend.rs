//! Raylib implementation of [`RenderBackend`].
//!
//! Wraps any raylib drawing scope (the window's draw handle, or a texture
//! mode scope drawing into the [`RenderTarget`](crate::resources::rendertarget::RenderTarget))
//! together with the texture, font and shader stores it resolves keys against.

use raylib::prelude::*;

use crate::backend::{RenderBackend, flip_source};
use crate::components::entityshader::EntityShader;
use crate::resources::fontstore::FontStore;
use crate::resources::shaderstore::ShaderStore;
use crate::resources::texturestore::TextureStore;

pub struct RaylibBackend<'a, D: RaylibDraw> {
    d: &'a mut D,
    textures: &'a TextureStore,
    fonts: &'a FontStore,
    shaders: &'a mut ShaderStore,
}

impl<'a, D: RaylibDraw> RaylibBackend<'a, D> {
    pub fn new(
        d: &'a mut D,
        textures: &'a TextureStore,
        fonts: &'a FontStore,
        shaders: &'a mut ShaderStore,
    ) -> Self {
        Self {
            d,
            textures,
            fonts,
            shaders,
        }
    }
}

impl<D: RaylibDraw> RenderBackend for RaylibBackend<'_, D> {
    fn draw_sprite(
        &mut self,
        tex_key: &str,
        position: Vector2,
        source: Rectangle,
        flip_h: bool,
        flip_v: bool,
        shader: Option<&EntityShader>,
    ) {
        let Some(texture) = self.textures.get(tex_key) else {
            log::debug!("draw_sprite: no texture '{}'", tex_key);
            return;
        };

        let dest = Rectangle {
            x: position.x,
            y: position.y,
            width: source.width.abs(),
            height: source.height.abs(),
        };
        // Shader mode flushes the batch on entry and exit.
        let shaded = shader.is_some_and(|s| self.shaders.begin(s));
        self.d.draw_texture_pro(
            texture,
            flip_source(source, flip_h, flip_v),
            dest,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
        if shaded {
            self.shaders.end();
        }
    }

    fn draw_text(&mut self, font_key: &str, text: &str, position: Vector2, color: Color) {
        let Some(loaded) = self.fonts.get(font_key) else {
            log::debug!("draw_text: no font '{}'", font_key);
            return;
        };

        let mut buf = [0u8; 4];
        for (ch, pen) in loaded.metrics.glyph_layout(text, position) {
            let glyph = ch.encode_utf8(&mut buf);
            self.d
                .draw_text_ex(&loaded.font, glyph, pen, loaded.metrics.size, 0.0, color);
        }
    }
}
