//! Role board state and the per-icon cooldown state machine
//!
//! Each role owns two icon records. An icon moves through
//! `Empty -> Assigned -> Running -> Assigned` and can be cleared back to
//! `Empty` from any assigned state. All clicks on the board go through
//! [`Tracker::handle_click`], which dispatches on slot identity and button.

use std::time::Instant;

use tracing::{debug, info};

use crate::constants::slots::{ROLE_COUNT, SPELLS_PER_ROLE};
use crate::countdown::{CountdownScheduler, Tick};
use crate::readout::ReadoutFormat;
use crate::spells::Spell;
use crate::types::{ClickButton, Role, SlotId};

/// State of one icon widget on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotIcon {
    pub spell: Option<Spell>,
    pub running: bool,
    pub remaining: Option<u32>,
}

impl SlotIcon {
    pub fn is_empty(&self) -> bool {
        self.spell.is_none()
    }

    /// Running icons are drawn desaturated
    pub fn is_desaturated(&self) -> bool {
        self.running
    }

    /// Readout text, present only while a countdown runs
    pub fn readout(&self, format: ReadoutFormat) -> Option<String> {
        if !self.running {
            return None;
        }
        self.remaining.map(|secs| format.render(secs))
    }

    fn restore(&mut self) {
        self.running = false;
        self.remaining = None;
    }
}

/// What a click on the board ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Started { spell: Spell, cooldown: u32 },
    Removed { spell: Spell, cancelled: bool },
    Ignored,
}

#[derive(Debug)]
pub struct Tracker {
    roles: [[SlotIcon; SPELLS_PER_ROLE]; ROLE_COUNT],
    scheduler: CountdownScheduler,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            roles: [[SlotIcon::default(); SPELLS_PER_ROLE]; ROLE_COUNT],
            scheduler: CountdownScheduler::new(),
        }
    }

    pub fn icon(&self, slot: SlotId) -> &SlotIcon {
        &self.roles[slot.role.index()][slot.index]
    }

    fn icon_mut(&mut self, slot: SlotId) -> &mut SlotIcon {
        &mut self.roles[slot.role.index()][slot.index]
    }

    /// Spells currently assigned to `role`, in icon order
    pub fn role_spells(&self, role: Role) -> Vec<Spell> {
        self.roles[role.index()]
            .iter()
            .filter_map(|icon| icon.spell)
            .collect()
    }

    /// Assign `spell` to the first role (top to bottom) with a free icon.
    ///
    /// Returns the slot that received the spell, or `None` when every role
    /// already holds two spells; the board is left untouched in that case.
    pub fn select_spell(&mut self, spell: Spell) -> Option<SlotId> {
        let slot = SlotId::all().find(|&slot| self.icon(slot).is_empty())?;

        *self.icon_mut(slot) = SlotIcon {
            spell: Some(spell),
            running: false,
            remaining: None,
        };
        info!(role = %slot.role, index = slot.index, spell = %spell, "Assigned spell");
        Some(slot)
    }

    /// Single entry point for clicks on board icons
    pub fn handle_click(&mut self, slot: SlotId, button: ClickButton, now: Instant) -> ClickOutcome {
        match button {
            ClickButton::Left => self.start_cooldown(slot, now),
            ClickButton::Right => self.remove_spell(slot),
            ClickButton::Middle => ClickOutcome::Ignored,
        }
    }

    /// Start the countdown on an assigned, idle icon. Clicks on empty or
    /// already-running icons are ignored.
    pub fn start_cooldown(&mut self, slot: SlotId, now: Instant) -> ClickOutcome {
        let icon = *self.icon(slot);
        let Some(spell) = icon.spell else {
            return ClickOutcome::Ignored;
        };
        if icon.running {
            debug!(role = %slot.role, index = slot.index, spell = %spell, "Countdown already running, ignoring click");
            return ClickOutcome::Ignored;
        }

        let cooldown = spell.cooldown_secs();
        let icon = self.icon_mut(slot);
        icon.running = true;
        icon.remaining = Some(cooldown);
        self.scheduler.schedule(slot, now);

        info!(role = %slot.role, index = slot.index, spell = %spell, cooldown, "Started cooldown");
        ClickOutcome::Started { spell, cooldown }
    }

    /// Clear the icon, cancelling its countdown if one is running
    pub fn remove_spell(&mut self, slot: SlotId) -> ClickOutcome {
        let Some(spell) = self.icon(slot).spell else {
            return ClickOutcome::Ignored;
        };

        let cancelled = self.scheduler.cancel(slot);
        *self.icon_mut(slot) = SlotIcon::default();

        info!(role = %slot.role, index = slot.index, spell = %spell, cancelled, "Removed spell");
        ClickOutcome::Removed { spell, cancelled }
    }

    /// Apply every countdown tick due at `now`.
    /// Returns the slots whose countdown finished during this call.
    pub fn advance(&mut self, now: Instant) -> Vec<SlotId> {
        let mut expired = Vec::new();
        for tick in self.scheduler.due(now) {
            if self.apply_tick(tick) {
                expired.push(tick.slot);
            }
        }
        expired
    }

    fn apply_tick(&mut self, tick: Tick) -> bool {
        if !self.scheduler.is_current(&tick) {
            debug!(role = %tick.slot.role, index = tick.slot.index, generation = tick.generation, "Dropping stale tick");
            return false;
        }

        let slot = tick.slot;
        let icon = self.icon_mut(slot);
        let remaining = match (icon.running, icon.remaining) {
            (true, Some(secs)) => secs.saturating_sub(1),
            _ => 0,
        };

        if remaining > 0 {
            icon.remaining = Some(remaining);
            return false;
        }

        icon.restore();
        let spell = icon.spell;
        self.scheduler.cancel(slot);
        info!(role = %slot.role, index = slot.index, spell = ?spell, "Cooldown finished");
        true
    }

    /// Instant of the next pending tick, if any countdown is running
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn running_count(&self) -> usize {
        self.scheduler.active_count()
    }
}
