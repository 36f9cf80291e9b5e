//! Hangul font discovery via fontconfig
//!
//! egui's bundled fonts carry no Hangul glyphs, so role labels and spell names
//! would render as boxes. Resolve an installed Korean-capable family and
//! register it as a fallback for both egui families.

use anyhow::{Context, Result};
use eframe::egui;
use fontconfig::{Fontconfig, Pattern};
use std::ffi::CString;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::constants::fonts::{EGUI_FONT_NAME, HANGUL_FAMILIES};

/// Resolve the file path of an installed font family.
/// Fails when fontconfig substitutes a different family.
pub fn find_font_path(family: &str) -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    let mut pattern = Pattern::new(&fc);
    let family_cstr = CString::new(family)
        .with_context(|| format!("Invalid family name: {}", family))?;
    pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);

    let matched = pattern.font_match();

    // fontconfig always returns its closest match, even an unrelated family
    let matched_family = matched
        .get_string(fontconfig::FC_FAMILY)
        .with_context(|| format!("Fontconfig match for '{}' has no family", family))?;
    if !matched_family.eq_ignore_ascii_case(family) {
        return Err(anyhow::anyhow!(
            "Font '{}' not found - fontconfig returned family '{}' instead",
            family,
            matched_family
        ));
    }

    let file_path = matched
        .filename()
        .with_context(|| format!("No font file found for '{}'", family))?;

    let path = PathBuf::from(file_path);
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Font file path '{}' does not exist",
            path.display()
        ));
    }

    debug!(family = family, path = %path.display(), "Resolved font path");
    Ok(path)
}

/// First Hangul-capable family that is actually installed
pub fn find_hangul_font() -> Option<PathBuf> {
    HANGUL_FAMILIES.iter().find_map(|family| match find_font_path(family) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!(family = family, error = %e, "Hangul font candidate unavailable");
            None
        }
    })
}

/// Register a Hangul fallback font with egui. Leaves the defaults in place
/// when no suitable font is installed.
pub fn install_hangul_font(ctx: &egui::Context) {
    let Some(path) = find_hangul_font() else {
        warn!(candidates = ?HANGUL_FAMILIES, "No Hangul font found, Korean labels may not render");
        return;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read Hangul font");
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        EGUI_FONT_NAME.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(EGUI_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    info!(path = %path.display(), "Installed Hangul font");
}
