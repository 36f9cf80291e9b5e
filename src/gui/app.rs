//! Tracker window implemented with egui/eframe

use std::time::Instant;

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{debug, info};

use super::components::{role_board, spell_pool};
use super::constants::*;
use super::textures::SpellTextures;
use crate::assets::IconSet;
use crate::config::AppConfig;
use crate::fonts;
use crate::readout::ReadoutFormat;
use crate::tracker::{ClickOutcome, Tracker};

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct SpellTimerApp {
    tracker: Tracker,
    textures: SpellTextures,
    readout_format: ReadoutFormat,
    status_messages: Vec<StatusMessage>,
}

impl SpellTimerApp {
    fn new(cc: &CreationContext<'_>, config: &AppConfig, icons: IconSet) -> Self {
        info!("Initializing spell tracker window");

        fonts::install_hangul_font(&cc.egui_ctx);

        let status_messages = icons
            .errors
            .iter()
            .map(|err| StatusMessage {
                text: err.clone(),
                color: ERROR_COLOR,
            })
            .collect();
        let textures = SpellTextures::upload(&cc.egui_ctx, icons, config.icon_size);

        Self {
            tracker: Tracker::new(),
            textures,
            readout_format: config.readout_format,
            status_messages,
        }
    }

    fn error_banner(&mut self, ctx: &egui::Context) {
        if self.status_messages.is_empty() {
            return;
        }

        egui::TopBottomPanel::top("status_messages").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            for message in &self.status_messages {
                ui.colored_label(message.color, &message.text);
            }
            if ui.small_button("Dismiss").clicked() {
                self.status_messages.clear();
            }
            ui.add_space(ITEM_SPACING);
        });
    }
}

impl eframe::App for SpellTimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let expired = self.tracker.advance(Instant::now());
        if !expired.is_empty() {
            debug!(count = expired.len(), "Countdowns finished this frame");
        }

        self.error_banner(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);

            if let Some(click) = role_board::ui(ui, &self.tracker, &self.textures, self.readout_format) {
                let outcome = self.tracker.handle_click(click.slot, click.button, Instant::now());
                if outcome == ClickOutcome::Ignored {
                    debug!(slot = ?click.slot, button = ?click.button, "Board click ignored");
                }
            }

            ui.add_space(SECTION_SPACING);
            ui.separator();
            ui.add_space(SECTION_SPACING);

            if let Some(spell) = spell_pool::ui(ui, &self.textures)
                && self.tracker.select_spell(spell).is_none()
            {
                debug!(spell = %spell, "All roles full, assignment ignored");
            }
        });

        if let Some(deadline) = self.tracker.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(running = self.tracker.running_count(), "Spell tracker exiting");
    }
}

pub fn run_gui(config: AppConfig) -> Result<()> {
    let icons = IconSet::load(&config.assets_dir, config.icon_size);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
        .with_title(WINDOW_TITLE);
    if config.always_on_top {
        viewport = viewport.with_window_level(egui::WindowLevel::AlwaysOnTop);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(SpellTimerApp::new(cc, &config, icons)))),
    )
    .map_err(|err| anyhow!("Failed to launch spell tracker window: {err}"))
}
