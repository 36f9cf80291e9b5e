//! Shared value types for the role board

use std::fmt;

use crate::constants::slots::SPELLS_PER_ROLE;

/// One of the five fixed lines, in board order (top to bottom)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    pub fn label(self) -> &'static str {
        match self {
            Role::Top => "탑",
            Role::Jungle => "정글",
            Role::Mid => "미드",
            Role::Bot => "원딜",
            Role::Support => "서폿",
        }
    }

    /// Position in `Role::ALL`
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of a single icon widget on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    pub role: Role,
    pub index: usize,
}

impl SlotId {
    pub fn new(role: Role, index: usize) -> Self {
        debug_assert!(index < SPELLS_PER_ROLE, "slot index out of range: {index}");
        Self { role, index }
    }

    /// Every slot on the board, row by row
    pub fn all() -> impl Iterator<Item = SlotId> {
        Role::ALL
            .into_iter()
            .flat_map(|role| (0..SPELLS_PER_ROLE).map(move |index| SlotId { role, index }))
    }
}

/// Mouse button that produced a click on a slot icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    Left,
    Middle,
    Right,
}
