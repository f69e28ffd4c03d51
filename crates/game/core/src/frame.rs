//! Immutable world snapshot for one agent step.
use std::collections::{BTreeSet, HashMap};

use crate::ability::AbilityId;
use crate::geometry::Point2;
use crate::ids::{Race, UnitTag};
use crate::unit::Unit;
use crate::unit_type::{Cost, UnitTypeId};
use crate::upgrade::UpgradeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

impl MapSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
    }

    /// Pulls `point` inside the playable area.
    pub fn clamp(&self, point: Point2) -> Point2 {
        let max_x = (self.width as f32 - 1.0).max(0.0);
        let max_y = (self.height as f32 - 1.0).max(0.0);
        Point2::new(point.x.clamp(0.0, max_x), point.y.clamp(0.0, max_y))
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Economy {
    pub minerals: u32,
    pub vespene: u32,
    pub supply_used: u32,
    pub supply_cap: u32,
    pub supply_workers: u32,
}

impl Economy {
    pub fn supply_left(&self) -> u32 {
        self.supply_cap.saturating_sub(self.supply_used)
    }

    pub fn can_afford(&self, cost: Cost) -> bool {
        self.minerals >= cost.minerals
            && self.vespene >= cost.vespene
            && (cost.supply <= 0.0 || self.supply_left() as f32 >= cost.supply)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Own,
    Enemy,
    Neutral,
}

/// Everything the decision layer may read during one step.
///
/// Unit collections are private so that the tag index stays consistent; build
/// frames with [`Frame::builder`].
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub game_loop: u64,
    /// Frames simulated between two agent steps.
    pub game_step: u32,
    pub race: Race,
    pub map_size: MapSize,
    pub start_location: Point2,
    pub enemy_start_location: Point2,
    pub economy: Economy,
    pub upgrades: BTreeSet<UpgradeId>,
    units: Vec<Unit>,
    enemy_units: Vec<Unit>,
    mineral_fields: Vec<Unit>,
    index: HashMap<UnitTag, (Side, usize)>,
}

impl Frame {
    pub fn builder() -> FrameBuilder {
        FrameBuilder::default()
    }

    /// Own eggs currently morphing through `ability`.
    pub fn eggs_morphing(&self, ability: AbilityId) -> usize {
        self.units_of_type(UnitTypeId::Egg)
            .filter(|egg| egg.current_order().is_some_and(|order| order.ability == ability))
            .count()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn enemy_units(&self) -> &[Unit] {
        &self.enemy_units
    }

    pub fn mineral_fields(&self) -> &[Unit] {
        &self.mineral_fields
    }

    /// Own unit by tag.
    pub fn unit(&self, tag: UnitTag) -> Option<&Unit> {
        match self.index.get(&tag) {
            Some((Side::Own, idx)) => self.units.get(*idx),
            _ => None,
        }
    }

    pub fn enemy(&self, tag: UnitTag) -> Option<&Unit> {
        match self.index.get(&tag) {
            Some((Side::Enemy, idx)) => self.enemy_units.get(*idx),
            _ => None,
        }
    }

    /// Any unit by tag regardless of owner.
    pub fn find(&self, tag: UnitTag) -> Option<&Unit> {
        let (side, idx) = self.index.get(&tag)?;
        match side {
            Side::Own => self.units.get(*idx),
            Side::Enemy => self.enemy_units.get(*idx),
            Side::Neutral => self.mineral_fields.get(*idx),
        }
    }

    /// Own units for `tags`, silently skipping tags that are gone.
    pub fn units_by_tag<'a>(&'a self, tags: &'a [UnitTag]) -> impl Iterator<Item = &'a Unit> + 'a {
        tags.iter().filter_map(|tag| self.unit(*tag))
    }

    pub fn units_of_type(&self, type_id: UnitTypeId) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.type_id == type_id)
    }

    pub fn workers(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.type_id.is_worker())
    }

    pub fn townhalls(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.type_id.is_townhall())
    }

    /// Complete, idle own units of any of the given types.
    pub fn idle_producers<'a>(
        &'a self,
        types: &'a [UnitTypeId],
    ) -> impl Iterator<Item = &'a Unit> + 'a {
        self.units
            .iter()
            .filter(move |u| types.contains(&u.type_id) && u.is_ready() && u.is_idle())
    }

    /// Own units of `type_id` that are complete or under construction.
    pub fn count_of(&self, type_id: UnitTypeId) -> usize {
        self.units_of_type(type_id).count()
    }

    /// Own structures of `type_id` still under construction.
    pub fn pending_count(&self, type_id: UnitTypeId) -> usize {
        self.units_of_type(type_id).filter(|u| !u.is_ready()).count()
    }

    pub fn can_afford(&self, cost: Cost) -> bool {
        self.economy.can_afford(cost)
    }

    pub fn has_upgrade(&self, upgrade: UpgradeId) -> bool {
        self.upgrades.contains(&upgrade)
    }

    /// Real-time seconds covered by one agent step.
    pub fn step_seconds(&self) -> f32 {
        self.game_step as f32 / crate::ability::FRAMES_PER_SECOND
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameBuilder {
    frame: Frame,
}

impl FrameBuilder {
    pub fn game_loop(mut self, game_loop: u64) -> Self {
        self.frame.game_loop = game_loop;
        self
    }

    pub fn game_step(mut self, game_step: u32) -> Self {
        self.frame.game_step = game_step;
        self
    }

    pub fn race(mut self, race: Race) -> Self {
        self.frame.race = race;
        self
    }

    pub fn map_size(mut self, width: u32, height: u32) -> Self {
        self.frame.map_size = MapSize::new(width, height);
        self
    }

    pub fn start_location(mut self, position: Point2) -> Self {
        self.frame.start_location = position;
        self
    }

    pub fn enemy_start_location(mut self, position: Point2) -> Self {
        self.frame.enemy_start_location = position;
        self
    }

    pub fn economy(mut self, economy: Economy) -> Self {
        self.frame.economy = economy;
        self
    }

    pub fn upgrade(mut self, upgrade: UpgradeId) -> Self {
        self.frame.upgrades.insert(upgrade);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.frame.units.push(unit);
        self
    }

    pub fn units(mut self, units: impl IntoIterator<Item = Unit>) -> Self {
        self.frame.units.extend(units);
        self
    }

    pub fn enemy(mut self, unit: Unit) -> Self {
        self.frame.enemy_units.push(unit);
        self
    }

    pub fn enemies(mut self, units: impl IntoIterator<Item = Unit>) -> Self {
        self.frame.enemy_units.extend(units);
        self
    }

    pub fn mineral_field(mut self, unit: Unit) -> Self {
        self.frame.mineral_fields.push(unit);
        self
    }

    /// Finalizes the tag index. A tag present in several collections resolves
    /// to the last one inserted (own, then enemy, then neutral).
    pub fn build(mut self) -> Frame {
        let mut index = HashMap::with_capacity(
            self.frame.units.len() + self.frame.enemy_units.len() + self.frame.mineral_fields.len(),
        );
        for (side, units) in [
            (Side::Own, &self.frame.units),
            (Side::Enemy, &self.frame.enemy_units),
            (Side::Neutral, &self.frame.mineral_fields),
        ] {
            for (idx, unit) in units.iter().enumerate() {
                index.insert(unit.tag, (side, idx));
            }
        }
        self.frame.index = index;
        self.frame
    }
}
