use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::ability::AbilityId;
use crate::geometry::Point2;
use crate::ids::UnitTag;
use crate::unit_type::UnitTypeId;

/// Maximum number of queued orders retained per unit snapshot.
pub const MAX_ORDERS: usize = 8;

/// Target of a command or order: a map location or another unit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Point(Point2),
    Unit(UnitTag),
}

impl From<Point2> for Target {
    fn from(point: Point2) -> Self {
        Target::Point(point)
    }
}

impl From<UnitTag> for Target {
    fn from(tag: UnitTag) -> Self {
        Target::Unit(tag)
    }
}

/// An order currently queued on a unit, as reported by the game.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitOrder {
    pub ability: AbilityId,
    pub target: Option<Target>,
}

impl UnitOrder {
    pub fn new(ability: AbilityId, target: impl Into<Option<Target>>) -> Self {
        Self {
            ability,
            target: target.into(),
        }
    }
}

/// Read-only snapshot of one unit for the current frame.
///
/// `weapon_cooldown` is in frames and is zero when the weapon can fire.
/// `movement_speed` is in distance units per real-time second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub tag: UnitTag,
    pub type_id: UnitTypeId,
    pub position: Point2,
    /// Heading in radians.
    pub facing: f32,
    pub radius: f32,
    pub health: f32,
    pub health_max: f32,
    pub shield: f32,
    pub shield_max: f32,
    pub energy: f32,
    pub is_flying: bool,
    /// Last-known snapshot of a unit no longer in vision.
    pub is_memory: bool,
    pub is_cloaked: bool,
    pub is_revealed: bool,
    pub build_progress: f32,
    pub weapon_cooldown: f32,
    pub ground_range: Option<f32>,
    pub air_range: Option<f32>,
    pub movement_speed: f32,
    pub abilities: BTreeSet<AbilityId>,
    pub cargo_used: u32,
    pub cargo_max: u32,
    pub passengers: Vec<UnitTag>,
    pub orders: ArrayVec<UnitOrder, MAX_ORDERS>,
}

impl Unit {
    /// A complete, idle, full-health ground unit with no weapon.
    pub fn new(tag: UnitTag, type_id: UnitTypeId, position: Point2) -> Self {
        Self {
            tag,
            type_id,
            position,
            facing: 0.0,
            radius: 0.5,
            health: 100.0,
            health_max: 100.0,
            shield: 0.0,
            shield_max: 0.0,
            energy: 0.0,
            is_flying: false,
            is_memory: false,
            is_cloaked: false,
            is_revealed: false,
            build_progress: 1.0,
            weapon_cooldown: 0.0,
            ground_range: None,
            air_range: None,
            movement_speed: 3.15,
            abilities: BTreeSet::new(),
            cargo_used: 0,
            cargo_max: 0,
            passengers: Vec::new(),
            orders: ArrayVec::new(),
        }
    }

    pub fn distance_to(&self, point: Point2) -> f32 {
        self.position.distance_to(point)
    }

    pub fn total_health(&self) -> f32 {
        self.health + self.shield
    }

    pub fn is_idle(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        self.build_progress >= 1.0
    }

    pub fn is_structure(&self) -> bool {
        self.type_id.is_structure()
    }

    pub fn has_ability(&self, ability: AbilityId) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn has_cargo(&self) -> bool {
        self.cargo_used > 0
    }

    /// Cloaked and not revealed by detection: cannot be targeted.
    pub fn is_untargetable(&self) -> bool {
        self.is_cloaked && !self.is_revealed
    }

    /// Weapon range against `target`, `None` when this unit cannot hit it.
    pub fn range_against(&self, target: &Unit) -> Option<f32> {
        if target.is_flying {
            self.air_range
        } else {
            self.ground_range
        }
    }

    pub fn can_attack(&self, target: &Unit) -> bool {
        self.range_against(target).is_some()
    }

    /// Whether `target` is inside weapon range, edge to edge, plus `extra_range`.
    pub fn in_attack_range_of(&self, target: &Unit, extra_range: f32) -> bool {
        match self.range_against(target) {
            Some(range) => {
                let reach = self.radius + target.radius + range + extra_range;
                self.position.distance_squared(target.position) <= reach * reach
            }
            None => false,
        }
    }

    pub fn current_order(&self) -> Option<&UnitOrder> {
        self.orders.first()
    }

    pub fn order_target(&self) -> Option<Target> {
        self.current_order().and_then(|order| order.target)
    }
}
