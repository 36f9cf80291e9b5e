//! Spell icon loading
//!
//! Icons are decoded once at startup, resized to a square with Lanczos3 and
//! paired with a desaturated copy for running countdowns. A spell whose image
//! cannot be loaded gets a flat placeholder instead of aborting startup; the
//! error is kept so the GUI can show it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::ColorImage;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::{error, info};

use crate::spells::Spell;

/// Placeholder fill for spells without a loadable image
const PLACEHOLDER_RGBA: [u8; 4] = [70, 70, 80, 255];

/// Decoded normal + desaturated renderings of one spell icon
pub struct SpellIcon {
    pub normal: ColorImage,
    pub desaturated: ColorImage,
    pub placeholder: bool,
}

impl SpellIcon {
    fn from_image(image: &DynamicImage, size: u32) -> Self {
        let resized = image.resize_exact(size, size, FilterType::Lanczos3);
        let normal = resized.to_rgba8();
        let desaturated = resized.grayscale().to_rgba8();

        Self {
            normal: to_color_image(&normal),
            desaturated: to_color_image(&desaturated),
            placeholder: false,
        }
    }

    fn placeholder(size: u32) -> Self {
        let image = RgbaImage::from_pixel(size, size, image::Rgba(PLACEHOLDER_RGBA));
        let color = to_color_image(&image);
        Self {
            normal: color.clone(),
            desaturated: color,
            placeholder: true,
        }
    }
}

fn to_color_image(image: &RgbaImage) -> ColorImage {
    let (w, h) = image.dimensions();
    ColorImage::from_rgba_unmultiplied([w as usize, h as usize], image.as_raw())
}

/// Load and resize a single icon file
pub fn load_icon(path: &Path, size: u32) -> Result<SpellIcon> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read spell icon {}", path.display()))?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode spell icon {}", path.display()))?;
    Ok(SpellIcon::from_image(&image, size))
}

/// Every spell icon, plus the errors hit while loading them
pub struct IconSet {
    icons: HashMap<Spell, SpellIcon>,
    pub errors: Vec<String>,
}

impl IconSet {
    pub fn load(assets_dir: &Path, size: u32) -> Self {
        let mut icons = HashMap::new();
        let mut errors = Vec::new();

        for spell in Spell::ALL {
            let path = icon_path(assets_dir, spell);
            let icon = match load_icon(&path, size) {
                Ok(icon) => icon,
                Err(err) => {
                    error!(spell = %spell, path = %path.display(), error = ?err, "Failed to load spell icon, using placeholder");
                    errors.push(format!("{err:#}"));
                    SpellIcon::placeholder(size)
                }
            };
            icons.insert(spell, icon);
        }

        info!(
            loaded = Spell::ALL.len() - errors.len(),
            failed = errors.len(),
            dir = %assets_dir.display(),
            "Loaded spell icons"
        );
        Self { icons, errors }
    }

    /// Consume the set, yielding icons in pool order
    pub fn into_icons(mut self) -> impl Iterator<Item = (Spell, SpellIcon)> {
        Spell::ALL
            .into_iter()
            .filter_map(move |spell| self.icons.remove(&spell).map(|icon| (spell, icon)))
    }
}

pub fn icon_path(assets_dir: &Path, spell: Spell) -> PathBuf {
    assets_dir.join(spell.icon_file())
}
