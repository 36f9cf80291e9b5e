//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Slot layout constants
pub mod slots {
    /// Number of spells a single role can hold
    pub const SPELLS_PER_ROLE: usize = 2;

    /// Number of roles on the board
    pub const ROLE_COUNT: usize = 5;
}

/// Countdown timing constants
pub mod countdown {
    use std::time::Duration;

    /// Interval between countdown ticks
    pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
}

/// Spell icon constants
pub mod icons {
    /// Default edge length of a rendered spell icon, in pixels
    pub const DEFAULT_SIZE: u32 = 50;

    /// Smallest accepted icon size
    pub const MIN_SIZE: u32 = 16;

    /// Largest accepted icon size
    pub const MAX_SIZE: u32 = 256;

    /// Default directory holding the spell images (relative to working dir)
    pub const DEFAULT_ASSETS_DIR: &str = "./spell_img";
}

/// Configuration file locations
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "spell-timer";

    /// Settings file name
    pub const FILENAME: &str = "config.json";
}

/// Hangul-capable font families probed via fontconfig, in preference order
pub mod fonts {
    pub const HANGUL_FAMILIES: &[&str] = &[
        "Noto Sans CJK KR",
        "Noto Sans KR",
        "NanumGothic",
        "Malgun Gothic",
        "UnDotum",
        "Baekmuk Gulim",
    ];

    /// Name the discovered font is registered under in egui
    pub const EGUI_FONT_NAME: &str = "hangul";
}
