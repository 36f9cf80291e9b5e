//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::readout::ReadoutFormat;

#[derive(Debug, Default, Parser)]
#[command(name = "spell-timer", version, about = "Summoner spell cooldown tracker")]
pub struct Cli {
    /// Directory containing the spell icon images
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Edge length of spell icons in pixels
    #[arg(long, value_name = "PX")]
    pub icon_size: Option<u32>,

    /// Countdown readout style
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub readout: Option<ReadoutFormat>,

    /// Keep the tracker window above other windows
    #[arg(long)]
    pub always_on_top: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides LOG_LEVEL
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "spell-timer",
            "--assets-dir",
            "/tmp/icons",
            "--icon-size",
            "64",
            "--readout",
            "mmss",
            "--always-on-top",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.assets_dir, Some(PathBuf::from("/tmp/icons")));
        assert_eq!(cli.icon_size, Some(64));
        assert_eq!(cli.readout, Some(ReadoutFormat::MinutesSeconds));
        assert!(cli.always_on_top);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_rejects_unknown_readout() {
        assert!(Cli::try_parse_from(["spell-timer", "--readout", "hours"]).is_err());
    }
}
