use eframe::egui;

use crate::constants::slots::SPELLS_PER_ROLE;
use crate::gui::constants::*;
use crate::gui::textures::SpellTextures;
use crate::readout::ReadoutFormat;
use crate::tracker::Tracker;
use crate::types::{ClickButton, Role, SlotId};

/// Click registered on an assigned board icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardClick {
    pub slot: SlotId,
    pub button: ClickButton,
}

/// Draw the five role rows with their two icons and countdown readouts.
/// Empty icons only sense hover, so clicks on them never reach the tracker.
pub fn ui(
    ui: &mut egui::Ui,
    tracker: &Tracker,
    textures: &SpellTextures,
    readout_format: ReadoutFormat,
) -> Option<BoardClick> {
    let mut click = None;

    egui::Grid::new("role_board")
        .spacing([ICON_SPACING * 2.0, ITEM_SPACING])
        .show(ui, |ui| {
            for role in Role::ALL {
                ui.label(egui::RichText::new(format!("{role} |")).size(ROLE_LABEL_SIZE));

                for index in 0..SPELLS_PER_ROLE {
                    let slot = SlotId::new(role, index);
                    ui.vertical_centered(|ui| {
                        if let Some(button) = slot_icon(ui, tracker, textures, readout_format, slot) {
                            click = Some(BoardClick { slot, button });
                        }
                    });
                }
                ui.end_row();
            }
        });

    click
}

fn slot_icon(
    ui: &mut egui::Ui,
    tracker: &Tracker,
    textures: &SpellTextures,
    readout_format: ReadoutFormat,
    slot: SlotId,
) -> Option<ClickButton> {
    let icon = tracker.icon(slot);

    let button = match icon.spell {
        Some(spell) => {
            let response = textures
                .show(ui, spell, icon.is_desaturated())
                .on_hover_text(format!("{} ({}s)", spell.display_name(), spell.cooldown_secs()));
            pressed_button(&response)
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(textures.icon_size(), egui::Sense::hover());
            ui.painter().rect_stroke(
                rect,
                4.0,
                egui::Stroke::new(1.0, EMPTY_SLOT_STROKE),
                egui::StrokeKind::Inside,
            );
            None
        }
    };

    // Always reserve the readout row so icons don't jump when a countdown starts
    let text = icon.readout(readout_format).unwrap_or_default();
    ui.label(egui::RichText::new(text).size(READOUT_SIZE));

    button
}

fn pressed_button(response: &egui::Response) -> Option<ClickButton> {
    if response.clicked() {
        Some(ClickButton::Left)
    } else if response.secondary_clicked() {
        Some(ClickButton::Right)
    } else if response.middle_clicked() {
        Some(ClickButton::Middle)
    } else {
        None
    }
}
