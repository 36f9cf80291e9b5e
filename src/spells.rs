//! Static spell table
//!
//! The ten summoner spells, their cooldowns and icon files. The table is fixed
//! at compile time; there is no runtime creation or deletion of spells.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Spell {
    Barrier,
    Cleanse,
    Clarity,
    Exhaust,
    Flash,
    Ignite,
    Smite,
    Teleport,
    Ghost,
    Heal,
}

impl Spell {
    /// All spells in pool display order
    pub const ALL: [Spell; 10] = [
        Spell::Barrier,
        Spell::Cleanse,
        Spell::Clarity,
        Spell::Exhaust,
        Spell::Flash,
        Spell::Ignite,
        Spell::Smite,
        Spell::Teleport,
        Spell::Ghost,
        Spell::Heal,
    ];

    /// Cooldown in whole seconds
    pub fn cooldown_secs(self) -> u32 {
        match self {
            Spell::Barrier => 180,
            Spell::Cleanse => 210,
            Spell::Clarity => 240,
            Spell::Exhaust => 180,
            Spell::Flash => 300,
            Spell::Ignite => 180,
            Spell::Smite => 15,
            Spell::Teleport => 360,
            Spell::Ghost => 210,
            Spell::Heal => 240,
        }
    }

    /// Name shown in the UI
    pub fn display_name(self) -> &'static str {
        match self {
            Spell::Barrier => "베리어",
            Spell::Cleanse => "정화",
            Spell::Clarity => "총명",
            Spell::Exhaust => "탈진",
            Spell::Flash => "점멸",
            Spell::Ignite => "점화",
            Spell::Smite => "강타",
            Spell::Teleport => "텔레포트",
            Spell::Ghost => "유체화",
            Spell::Heal => "회복",
        }
    }

    /// Icon file name inside the assets directory
    pub fn icon_file(self) -> &'static str {
        match self {
            Spell::Barrier => "barrier.webp",
            Spell::Cleanse => "cleanse.webp",
            Spell::Clarity => "clarity.webp",
            Spell::Exhaust => "exhaust.webp",
            Spell::Flash => "flash.webp",
            Spell::Ignite => "ignite.webp",
            Spell::Smite => "smite.webp",
            Spell::Teleport => "teleport.webp",
            Spell::Ghost => "ghost.webp",
            Spell::Heal => "heal.webp",
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_ten_distinct_spells() {
        let unique: HashSet<_> = Spell::ALL.iter().collect();
        assert_eq!(unique.len(), 10);

        let files: HashSet<_> = Spell::ALL.iter().map(|s| s.icon_file()).collect();
        assert_eq!(files.len(), 10, "every spell needs its own icon file");
    }

    #[test]
    fn test_known_cooldowns() {
        assert_eq!(Spell::Flash.cooldown_secs(), 300);
        assert_eq!(Spell::Smite.cooldown_secs(), 15);
        assert_eq!(Spell::Teleport.cooldown_secs(), 360);
        assert!(Spell::ALL.iter().all(|s| s.cooldown_secs() > 0));
    }
}
