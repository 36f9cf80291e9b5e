//! GUI-specific constants for layout, colors and text sizes

use eframe::egui;

/// Tracker window dimensions
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 640.0;
pub const WINDOW_MIN_WIDTH: f32 = 320.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

pub const WINDOW_TITLE: &str = "롤 스펠 계산기";

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const ICON_SPACING: f32 = 5.0;

/// Spell pool grid width
pub const POOL_COLUMNS: usize = 5;

/// Text sizes
pub const ROLE_LABEL_SIZE: f32 = 14.0;
pub const READOUT_SIZE: f32 = 14.0;
pub const PLACEHOLDER_LABEL_SIZE: f32 = 11.0;

/// Colors
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const EMPTY_SLOT_STROKE: egui::Color32 = egui::Color32::from_gray(90);
pub const PLACEHOLDER_TEXT: egui::Color32 = egui::Color32::WHITE;
