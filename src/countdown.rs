//! Cancellable one-second countdown tasks keyed by slot identity
//!
//! The egui event loop has no deferred callbacks, so every running countdown is
//! a small record holding the instant of its next tick. Each frame the GUI
//! drains the ticks that are due and hands them to the tracker. Cancelling a
//! task removes its record, so a cancelled countdown can never produce another
//! tick. Every tick also carries the generation of the task that produced it;
//! a slot that was removed and restarted gets a fresh generation, so a stale
//! tick is recognisable and dropped.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::constants::countdown::TICK_INTERVAL;
use crate::types::SlotId;

/// One elapsed interval for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub slot: SlotId,
    pub generation: u64,
}

#[derive(Debug)]
struct Task {
    generation: u64,
    next_deadline: Instant,
}

#[derive(Debug)]
pub struct CountdownScheduler {
    tasks: HashMap<SlotId, Task>,
    next_generation: u64,
    interval: Duration,
}

impl Default for CountdownScheduler {
    fn default() -> Self {
        Self::with_interval(TICK_INTERVAL)
    }
}

impl CountdownScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            tasks: HashMap::new(),
            next_generation: 1,
            interval,
        }
    }

    /// Arm a task for `slot`, replacing any task already armed there.
    /// Returns the generation of the new task.
    pub fn schedule(&mut self, slot: SlotId, now: Instant) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;

        let replaced = self.tasks.insert(
            slot,
            Task {
                generation,
                next_deadline: now + self.interval,
            },
        );
        if let Some(old) = replaced {
            debug!(role = %slot.role, index = slot.index, old = old.generation, new = generation, "Replaced countdown task");
        }
        generation
    }

    /// Drop the task for `slot`. Returns whether a task was armed.
    pub fn cancel(&mut self, slot: SlotId) -> bool {
        self.tasks.remove(&slot).is_some()
    }

    /// Whether `tick` was produced by the task currently armed for its slot
    pub fn is_current(&self, tick: &Tick) -> bool {
        self.tasks
            .get(&tick.slot)
            .is_some_and(|task| task.generation == tick.generation)
    }

    /// Collect every tick owed up to `now`.
    ///
    /// A late frame yields one tick per whole interval missed, so the countdown
    /// stays aligned with wall-clock seconds. Ticks come out grouped by slot in
    /// board order.
    pub fn due(&mut self, now: Instant) -> Vec<Tick> {
        let mut ticks = Vec::new();
        for (&slot, task) in self.tasks.iter_mut() {
            while task.next_deadline <= now {
                ticks.push(Tick {
                    slot,
                    generation: task.generation,
                });
                task.next_deadline += self.interval;
            }
        }
        ticks.sort_by_key(|tick| tick.slot);
        ticks
    }

    /// Earliest pending deadline, used to schedule the next repaint
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.values().map(|task| task.next_deadline).min()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_nothing_due_before_first_interval() {
        let mut scheduler = CountdownScheduler::new();
        let t0 = Instant::now();
        scheduler.schedule(SlotId::new(Role::Top, 0), t0);

        assert!(scheduler.due(t0).is_empty());
        assert!(scheduler.due(t0 + Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.due(t0 + secs(1)).len(), 1);
    }

    #[test]
    fn test_late_frame_catches_up() {
        let mut scheduler = CountdownScheduler::new();
        let t0 = Instant::now();
        let slot = SlotId::new(Role::Mid, 1);
        scheduler.schedule(slot, t0);

        let ticks = scheduler.due(t0 + Duration::from_millis(3500));
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|t| t.slot == slot));

        // Next deadline stays on the whole-second grid
        assert_eq!(scheduler.next_deadline(), Some(t0 + secs(4)));
    }

    #[test]
    fn test_cancelled_task_never_ticks() {
        let mut scheduler = CountdownScheduler::new();
        let t0 = Instant::now();
        let slot = SlotId::new(Role::Bot, 0);
        scheduler.schedule(slot, t0);

        assert!(scheduler.cancel(slot));
        assert!(!scheduler.cancel(slot));
        assert!(scheduler.due(t0 + secs(10)).is_empty());
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn test_stale_tick_is_not_current() {
        let mut scheduler = CountdownScheduler::new();
        let t0 = Instant::now();
        let slot = SlotId::new(Role::Support, 1);

        let first = scheduler.schedule(slot, t0);
        let stale = Tick { slot, generation: first };
        scheduler.cancel(slot);
        assert!(!scheduler.is_current(&stale));

        let second = scheduler.schedule(slot, t0);
        assert_ne!(first, second);
        assert!(!scheduler.is_current(&stale));
        assert!(scheduler.is_current(&Tick { slot, generation: second }));
    }

    #[test]
    fn test_ticks_sorted_by_slot() {
        let mut scheduler = CountdownScheduler::new();
        let t0 = Instant::now();
        scheduler.schedule(SlotId::new(Role::Support, 0), t0);
        scheduler.schedule(SlotId::new(Role::Top, 1), t0);
        scheduler.schedule(SlotId::new(Role::Jungle, 0), t0);

        let roles: Vec<Role> = scheduler
            .due(t0 + secs(1))
            .into_iter()
            .map(|t| t.slot.role)
            .collect();
        assert_eq!(roles, vec![Role::Top, Role::Jungle, Role::Support]);
        assert_eq!(scheduler.active_count(), 3);
    }
}
