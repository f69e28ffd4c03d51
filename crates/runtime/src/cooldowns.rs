//! Ability cooldown bookkeeping.
//!
//! The game exposes which abilities a unit may use right now, but for a set
//! of abilities that availability lags behind the real cooldown. The tracker
//! records the frame at which each cast ability becomes ready again, using
//! [`AbilityId::base_cooldown_frames`].
use std::collections::HashMap;

use game_core::{AbilityId, UnitTag};
use tracing::trace;

/// Per-unit map of ability to the first frame at which it is ready again.
#[derive(Clone, Debug, Default)]
pub struct AbilityCooldownTracker {
    ready_at: HashMap<UnitTag, HashMap<AbilityId, u64>>,
}

impl AbilityCooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `unit` may cast `ability` at `frame`. Untracked pairs are ready.
    pub fn is_ready(&self, unit: UnitTag, ability: AbilityId, frame: u64) -> bool {
        self.ready_frame(unit, ability)
            .is_none_or(|ready| frame >= ready)
    }

    pub fn ready_frame(&self, unit: UnitTag, ability: AbilityId) -> Option<u64> {
        self.ready_at.get(&unit)?.get(&ability).copied()
    }

    /// Records a cast at `frame` and returns the frame it becomes ready again.
    ///
    /// Abilities without a base cooldown are not tracked and return `None`.
    pub fn record_cast(&mut self, unit: UnitTag, ability: AbilityId, frame: u64) -> Option<u64> {
        let cooldown = ability.base_cooldown_frames()?;
        let ready = frame + u64::from(cooldown);
        self.ready_at.entry(unit).or_default().insert(ability, ready);
        trace!(%unit, %ability, frame, ready, "ability cast recorded");
        Some(ready)
    }

    /// Drops every record for a unit that left the game.
    pub fn forget_unit(&mut self, unit: UnitTag) {
        self.ready_at.remove(&unit);
    }

    /// Drops records that are already ready at `frame`.
    pub fn prune(&mut self, frame: u64) {
        self.ready_at.retain(|_, abilities| {
            abilities.retain(|_, ready| *ready > frame);
            !abilities.is_empty()
        });
    }

    pub fn len(&self) -> usize {
        self.ready_at.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ready_at.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: UnitTag = UnitTag(7);

    #[test]
    fn cast_blocks_until_base_cooldown_elapses() {
        let ability = AbilityId::EffectBlinkStalker;
        let cooldown = u64::from(ability.base_cooldown_frames().unwrap());
        let cast_at = 1_000;

        let mut tracker = AbilityCooldownTracker::new();
        assert!(tracker.is_ready(UNIT, ability, cast_at));
        assert_eq!(tracker.record_cast(UNIT, ability, cast_at), Some(cast_at + cooldown));

        for frame in cast_at..cast_at + cooldown {
            assert!(!tracker.is_ready(UNIT, ability, frame), "ready early at {frame}");
        }
        assert!(tracker.is_ready(UNIT, ability, cast_at + cooldown));
    }

    #[test]
    fn records_are_per_unit_and_per_ability() {
        let mut tracker = AbilityCooldownTracker::new();
        tracker.record_cast(UNIT, AbilityId::AdeptPhaseShift, 0);

        assert!(tracker.is_ready(UnitTag(8), AbilityId::AdeptPhaseShift, 1));
        assert!(tracker.is_ready(UNIT, AbilityId::EffectBlinkStalker, 1));
        assert!(!tracker.is_ready(UNIT, AbilityId::AdeptPhaseShift, 1));
    }

    #[test]
    fn untracked_abilities_are_ignored() {
        let mut tracker = AbilityCooldownTracker::new();
        assert_eq!(tracker.record_cast(UNIT, AbilityId::Attack, 10), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn prune_and_forget_remove_records() {
        let mut tracker = AbilityCooldownTracker::new();
        tracker.record_cast(UNIT, AbilityId::LockOn, 0);
        tracker.record_cast(UNIT, AbilityId::YamatoGun, 0);
        tracker.record_cast(UnitTag(9), AbilityId::LockOn, 0);
        assert_eq!(tracker.len(), 3);

        let lock_on_ready = tracker.ready_frame(UNIT, AbilityId::LockOn).unwrap();
        tracker.prune(lock_on_ready);
        assert_eq!(tracker.len(), 1);

        tracker.forget_unit(UNIT);
        assert!(tracker.is_empty());
    }
}
