//! Countdown readout text

use std::fmt;

use serde::{Deserialize, Serialize};

/// How remaining cooldown time is rendered under a running icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReadoutFormat {
    /// Plain seconds, e.g. `180s`
    #[default]
    #[value(name = "seconds")]
    Seconds,
    /// Zero-padded minutes and seconds, e.g. `03:00`
    #[value(name = "mmss")]
    MinutesSeconds,
}

impl ReadoutFormat {
    pub fn render(self, remaining_secs: u32) -> String {
        match self {
            ReadoutFormat::Seconds => format!("{remaining_secs}s"),
            ReadoutFormat::MinutesSeconds => {
                format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
            }
        }
    }
}

impl fmt::Display for ReadoutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadoutFormat::Seconds => f.write_str("seconds"),
            ReadoutFormat::MinutesSeconds => f.write_str("mmss"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_format() {
        assert_eq!(ReadoutFormat::Seconds.render(180), "180s");
        assert_eq!(ReadoutFormat::Seconds.render(1), "1s");
    }

    #[test]
    fn test_minutes_seconds_format() {
        assert_eq!(ReadoutFormat::MinutesSeconds.render(300), "05:00");
        assert_eq!(ReadoutFormat::MinutesSeconds.render(75), "01:15");
        assert_eq!(ReadoutFormat::MinutesSeconds.render(9), "00:09");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ReadoutFormat::MinutesSeconds).unwrap();
        assert_eq!(json, "\"minutes_seconds\"");
        let parsed: ReadoutFormat = serde_json::from_str("\"seconds\"").unwrap();
        assert_eq!(parsed, ReadoutFormat::Seconds);
    }
}
