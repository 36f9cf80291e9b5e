//! GPU textures for the decoded spell icons

use std::collections::HashMap;

use eframe::egui;

use super::constants::*;
use crate::assets::IconSet;
use crate::spells::Spell;

pub struct SpellTexture {
    pub normal: egui::TextureHandle,
    pub desaturated: egui::TextureHandle,
    pub placeholder: bool,
}

pub struct SpellTextures {
    textures: HashMap<Spell, SpellTexture>,
    icon_size: f32,
}

impl SpellTextures {
    /// Upload every icon of `icons` to the renderer
    pub fn upload(ctx: &egui::Context, icons: IconSet, icon_size: u32) -> Self {
        let textures = icons
            .into_icons()
            .map(|(spell, icon)| {
                let name = spell.icon_file();
                let texture = SpellTexture {
                    normal: ctx.load_texture(
                        format!("{name}-normal"),
                        icon.normal,
                        egui::TextureOptions::LINEAR,
                    ),
                    desaturated: ctx.load_texture(
                        format!("{name}-desaturated"),
                        icon.desaturated,
                        egui::TextureOptions::LINEAR,
                    ),
                    placeholder: icon.placeholder,
                };
                (spell, texture)
            })
            .collect();

        Self {
            textures,
            icon_size: icon_size as f32,
        }
    }

    pub fn icon_size(&self) -> egui::Vec2 {
        egui::vec2(self.icon_size, self.icon_size)
    }

    /// Draw a clickable spell icon
    pub fn show(&self, ui: &mut egui::Ui, spell: Spell, desaturated: bool) -> egui::Response {
        let Some(texture) = self.textures.get(&spell) else {
            // Every spell is uploaded at startup; keep the layout stable regardless
            let (_, response) = ui.allocate_exact_size(self.icon_size(), egui::Sense::click());
            return response;
        };

        let handle = if desaturated { &texture.desaturated } else { &texture.normal };
        let response = ui.add(
            egui::Image::new(handle)
                .fit_to_exact_size(self.icon_size())
                .sense(egui::Sense::click()),
        );

        if texture.placeholder {
            ui.painter().text(
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                spell.display_name(),
                egui::FontId::proportional(PLACEHOLDER_LABEL_SIZE),
                PLACEHOLDER_TEXT,
            );
        }
        response
    }
}
