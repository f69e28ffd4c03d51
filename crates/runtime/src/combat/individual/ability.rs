//! Ability casts for a single unit.
use game_core::{AbilityId, Command, CommandKind, Point2, Target, UnitTag};
use maneuver::{Behavior, Outcome};
use tracing::{debug, warn};

use crate::combat::prediction::{PredictionInput, predict_enemy_position};
use crate::context::BotContext;
use crate::services::UnitQuery;

/// Cast `ability`, with or without a target.
///
/// Declines when the game does not list the ability as available or the
/// cooldown tracker still has it on cooldown. The cast is recorded in the
/// tracker.
pub struct UseAbility {
    unit: UnitTag,
    ability: AbilityId,
    target: Option<Target>,
}

impl UseAbility {
    pub fn new(unit: UnitTag, ability: AbilityId) -> Self {
        Self {
            unit,
            ability,
            target: None,
        }
    }

    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.target = Some(target.into());
        self
    }
}

impl Behavior<BotContext> for UseAbility {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let Some(unit) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        if !unit.has_ability(self.ability) || !ctx.is_ability_ready(self.unit, self.ability) {
            return Outcome::Declined;
        }
        cast(ctx, self.unit, self.ability, self.target);
        Outcome::Acted
    }
}

/// Cast an area-effect ability where it covers the most targets.
///
/// Every target position is a candidate center. A candidate scores one per
/// target inside the effect radius and one more for each bonus target. The
/// best candidate must cover at least `min_targets` and, when requested,
/// no own units.
pub struct UseAoeAbility {
    unit: UnitTag,
    ability: AbilityId,
    targets: Vec<UnitTag>,
    min_targets: usize,
    bonus_tags: Vec<UnitTag>,
    avoid_own_ground: bool,
    avoid_own_flying: bool,
}

impl UseAoeAbility {
    pub fn new(unit: UnitTag, ability: AbilityId, targets: Vec<UnitTag>) -> Self {
        Self {
            unit,
            ability,
            targets,
            min_targets: 1,
            bonus_tags: Vec::new(),
            avoid_own_ground: false,
            avoid_own_flying: false,
        }
    }

    pub fn min_targets(mut self, min_targets: usize) -> Self {
        assert!(min_targets > 0, "an area ability needs at least one target");
        self.min_targets = min_targets;
        self
    }

    pub fn bonus_tags(mut self, bonus_tags: Vec<UnitTag>) -> Self {
        self.bonus_tags = bonus_tags;
        self
    }

    pub fn avoid_own_ground(mut self, avoid: bool) -> Self {
        self.avoid_own_ground = avoid;
        self
    }

    pub fn avoid_own_flying(mut self, avoid: bool) -> Self {
        self.avoid_own_flying = avoid;
        self
    }

    fn own_filter(&self) -> Option<UnitQuery> {
        match (self.avoid_own_ground, self.avoid_own_flying) {
            (true, true) => Some(UnitQuery::OwnAll),
            (true, false) => Some(UnitQuery::OwnGround),
            (false, true) => Some(UnitQuery::OwnFlying),
            (false, false) => None,
        }
    }
}

impl Behavior<BotContext> for UseAoeAbility {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let Some(radius) = self.ability.effect_radius() else {
            warn!(ability = %self.ability, "area ability without a known radius");
            return Outcome::Declined;
        };
        let frame = ctx.frame();
        let Some(unit) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        if !unit.has_ability(self.ability) || !ctx.is_ability_ready(self.unit, self.ability) {
            return Outcome::Declined;
        }

        let targets: Vec<_> = self
            .targets
            .iter()
            .filter_map(|tag| frame.find(*tag))
            .filter(|target| !target.is_untargetable())
            .collect();
        if targets.len() < self.min_targets {
            return Outcome::Declined;
        }

        let centers: Vec<Point2> = targets.iter().map(|t| t.position).collect();
        let blocked: Vec<bool> = match self.own_filter() {
            Some(query) => ctx
                .spatial()
                .units_in_range(&centers, radius, query)
                .into_iter()
                .map(|tags| tags.iter().any(|tag| *tag != self.unit))
                .collect(),
            None => vec![false; centers.len()],
        };

        let mut best: Option<(Point2, usize)> = None;
        for (center, blocked) in centers.iter().zip(blocked) {
            if blocked {
                continue;
            }
            let covered: Vec<_> = targets
                .iter()
                .filter(|t| t.position.distance_to(*center) <= radius + t.radius)
                .collect();
            if covered.len() < self.min_targets {
                continue;
            }
            let bonus = covered
                .iter()
                .filter(|t| self.bonus_tags.contains(&t.tag))
                .count();
            let score = covered.len() + bonus;
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((*center, score));
            }
        }

        let Some((center, score)) = best else {
            return Outcome::Declined;
        };
        debug!(unit = %self.unit, ability = %self.ability, score, "area cast");
        cast(ctx, self.unit, self.ability, Some(Target::Point(center)));
        Outcome::Acted
    }
}

/// Lead an area-effect ability onto a chasing enemy.
///
/// The caster is assumed to keep following `path`; the enemy is assumed to
/// chase it. Declines when the ability is unavailable or the predicted point
/// is not visible.
pub struct PlacePredictiveAoe {
    unit: UnitTag,
    path: Vec<Point2>,
    enemy: UnitTag,
    ability: AbilityId,
    delay_frames: u32,
}

impl PlacePredictiveAoe {
    pub fn new(unit: UnitTag, path: Vec<Point2>, enemy: UnitTag, ability: AbilityId) -> Self {
        Self {
            unit,
            path,
            enemy,
            ability,
            delay_frames: 0,
        }
    }

    /// Frames between the cast order and the effect landing.
    pub fn delay_frames(mut self, delay_frames: u32) -> Self {
        self.delay_frames = delay_frames;
        self
    }
}

impl Behavior<BotContext> for PlacePredictiveAoe {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let (Some(unit), Some(enemy)) = (frame.unit(self.unit), frame.find(self.enemy)) else {
            return Outcome::Declined;
        };
        if !unit.has_ability(self.ability) || !ctx.is_ability_ready(self.unit, self.ability) {
            return Outcome::Declined;
        }

        let step_seconds = frame.step_seconds();
        let predicted = predict_enemy_position(&PredictionInput {
            caster_start: unit.position,
            caster_path: &self.path,
            caster_step: unit.movement_speed * step_seconds,
            enemy_start: enemy.position,
            enemy_step: enemy.movement_speed * step_seconds,
            ability_delay_frames: self.delay_frames,
            game_step: frame.game_step,
        });
        if !ctx.spatial().is_position_visible(predicted) {
            return Outcome::Declined;
        }

        cast(ctx, self.unit, self.ability, Some(Target::Point(predicted)));
        Outcome::Acted
    }
}

fn cast(ctx: &mut BotContext, unit: UnitTag, ability: AbilityId, target: Option<Target>) {
    ctx.issue(Command::new(unit, CommandKind::UseAbility { ability, target }));
    ctx.record_cast(unit, ability);
}
