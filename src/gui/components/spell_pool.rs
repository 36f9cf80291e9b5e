use eframe::egui;

use crate::gui::constants::*;
use crate::gui::textures::SpellTextures;
use crate::spells::Spell;

/// Draw every spell in a fixed grid. Returns the spell that was left-clicked.
pub fn ui(ui: &mut egui::Ui, textures: &SpellTextures) -> Option<Spell> {
    let mut selected = None;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Spells").strong());
        ui.add_space(ITEM_SPACING);

        egui::Grid::new("spell_pool")
            .spacing([ICON_SPACING, ICON_SPACING])
            .show(ui, |ui| {
                for (i, spell) in Spell::ALL.into_iter().enumerate() {
                    let response = textures
                        .show(ui, spell, false)
                        .on_hover_text(format!("{} ({}s)", spell.display_name(), spell.cooldown_secs()));
                    if response.clicked() {
                        selected = Some(spell);
                    }
                    if (i + 1) % POOL_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    selected
}
