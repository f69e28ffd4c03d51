//! Scripted opening execution.
use game_content::OpeningSpec;
use game_core::{
    AbilityId, BuildTarget, Command, CommandKind, Frame, Point2, Race, Target, UnitRole, UnitTag, UnitTypeId,
};
use maneuver::Behavior;
use tracing::{debug, info};

use crate::build_order::parser::CHRONO_ENERGY;
use crate::build_order::{BuildCommand, BuildOrderParser, BuildOrderStep};
use crate::context::BotContext;
use crate::economy::BuildWorkers;
use crate::error::Result;

/// Minerals above which a stuck step lets a later step run first.
const LOOK_AHEAD_MINERALS: u32 = 470;

/// Walks a build order one step at a time.
///
/// Each tick the current step is started once its start condition holds and
/// finished once its end condition holds; finishing advances to the next
/// step. Passing the last step completes the build order for the rest of the
/// game.
///
/// While the current step cannot start and minerals pile up, the first later
/// step that can start is run in its place and dropped from the order once
/// it finishes.
#[derive(Debug)]
pub struct BuildOrderRunner {
    opening: String,
    steps: Vec<BuildOrderStep>,
    index: usize,
    started: bool,
    completed: bool,
    looked_ahead: Option<usize>,
    constant_worker_production_till: u32,
    persistent_worker: bool,
    build_position: Option<Point2>,
}

impl BuildOrderRunner {
    pub fn new(opening: impl Into<String>, steps: Vec<BuildOrderStep>) -> Self {
        Self {
            opening: opening.into(),
            steps,
            index: 0,
            started: false,
            completed: false,
            looked_ahead: None,
            constant_worker_production_till: 0,
            persistent_worker: true,
            build_position: None,
        }
    }

    /// Builds a runner from an authored opening for `race`.
    pub fn from_opening(name: &str, opening: &OpeningSpec, race: Race) -> Result<Self> {
        let steps = BuildOrderParser::new(race).parse_opening(opening)?;
        Ok(Self::new(name, steps)
            .constant_worker_production_till(opening.constant_worker_production_till)
            .persistent_worker(opening.persistent_worker))
    }

    pub fn constant_worker_production_till(mut self, count: u32) -> Self {
        self.constant_worker_production_till = count;
        self
    }

    pub fn persistent_worker(mut self, enabled: bool) -> Self {
        self.persistent_worker = enabled;
        self
    }

    pub fn opening(&self) -> &str {
        &self.opening
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The step being worked on, a looked-ahead one if any.
    pub fn current_step(&self) -> Option<&BuildOrderStep> {
        self.steps.get(self.active_index())
    }

    pub fn is_looking_ahead(&self) -> bool {
        self.looked_ahead.is_some()
    }

    fn active_index(&self) -> usize {
        self.looked_ahead.unwrap_or(self.index)
    }

    /// Where the last accepted structure was placed; later structures are
    /// searched for around it.
    pub fn build_position(&self) -> Option<Point2> {
        self.build_position
    }

    pub fn is_step_started(&self) -> bool {
        self.started
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Advances the build order by one agent step.
    pub fn run(&mut self, ctx: &mut BotContext) {
        if self.completed {
            return;
        }
        let frame = ctx.frame();

        if let Some(index) = self.looked_ahead
            && !self.started
            && self.steps.get(index).is_none_or(|step| !step.can_start(&frame))
        {
            self.looked_ahead = None;
        }
        if let Some(step) = self.steps.get(self.active_index()).cloned() {
            self.run_step(ctx, &frame, &step);
        }
        self.look_ahead(&frame);

        if self.index >= self.steps.len() {
            self.completed = true;
            info!(opening = %self.opening, supply = frame.economy.supply_used, "Build order completed");
            return;
        }

        if frame.economy.supply_workers < self.constant_worker_production_till {
            BuildWorkers::new(self.constant_worker_production_till).execute(ctx);
        }
    }

    fn run_step(&mut self, ctx: &mut BotContext, frame: &Frame, step: &BuildOrderStep) {
        if !self.started && step.can_start(frame) {
            self.started = self.issue(ctx, frame, step.command);
            if self.started {
                debug!(index = self.active_index(), command = ?step.command, "build step started");
            }
        }

        if !self.started {
            return;
        }
        if step.is_finished(frame) {
            self.complete_step(frame, step);
        } else if let BuildCommand::AddOn(add_on) = step.command {
            order_add_on(ctx, frame, add_on);
        }
    }

    fn complete_step(&mut self, frame: &Frame, step: &BuildOrderStep) {
        info!(
            opening = %self.opening,
            supply = frame.economy.supply_used,
            command = ?step.command,
            "build step completed"
        );
        match self.looked_ahead.take() {
            Some(index) => {
                self.steps.remove(index);
            }
            None => self.index += 1,
        }
        self.started = false;
    }

    /// Swaps a later startable step in while the current one is stuck.
    fn look_ahead(&mut self, frame: &Frame) {
        if self.started
            || self.looked_ahead.is_some()
            || frame.economy.minerals <= LOOK_AHEAD_MINERALS
        {
            return;
        }
        let stuck = self
            .steps
            .get(self.index)
            .is_some_and(|step| !step.can_start(frame));
        if !stuck {
            return;
        }
        let next = self
            .steps
            .iter()
            .enumerate()
            .skip(self.index + 1)
            .find(|(_, step)| step.can_start(frame))
            .map(|(index, _)| index);
        if let Some(index) = next {
            debug!(
                stuck = self.index,
                looked_ahead = index,
                minerals = frame.economy.minerals,
                "looking ahead in build order"
            );
            self.looked_ahead = Some(index);
        }
    }

    /// Issues the step's command; `true` if it was accepted.
    fn issue(&mut self, ctx: &mut BotContext, frame: &Frame, command: BuildCommand) -> bool {
        match command {
            BuildCommand::Structure { structure, target } => {
                self.start_structure(ctx, frame, structure, target)
            }
            BuildCommand::AddOn(_) => true,
            BuildCommand::Train(unit) => {
                let Some(producer) = frame.idle_producers(unit.trained_from()).next() else {
                    return false;
                };
                ctx.issue(Command::new(producer.tag, CommandKind::Train(unit)));
                true
            }
            BuildCommand::Research(upgrade) => {
                let researcher = [upgrade.researched_from()];
                let Some(producer) = frame.idle_producers(&researcher).next() else {
                    return false;
                };
                ctx.issue(Command::new(producer.tag, CommandKind::Research(upgrade)));
                true
            }
            BuildCommand::Chrono(structure) => {
                let Some(target) = frame.units_of_type(structure).find(|s| s.is_ready()) else {
                    return false;
                };
                let Some(caster) = frame.townhalls().find(|t| t.energy >= CHRONO_ENERGY) else {
                    return false;
                };
                ctx.issue(Command::new(
                    caster.tag,
                    CommandKind::UseAbility {
                        ability: AbilityId::EffectChronoBoostEnergyCost,
                        target: Some(Target::Unit(target.tag)),
                    },
                ));
                true
            }
            BuildCommand::Orbital => {
                let Some(cc) = frame.idle_producers(&[UnitTypeId::CommandCenter]).next() else {
                    return false;
                };
                ctx.issue(Command::new(
                    cc.tag,
                    CommandKind::UseAbility {
                        ability: AbilityId::UpgradeToOrbitalOrbitalCommand,
                        target: None,
                    },
                ));
                true
            }
            BuildCommand::WorkerScout => {
                let scout_target = frame.enemy_start_location;
                let Some(worker) = ctx.workers().select_worker(scout_target, false) else {
                    return false;
                };
                ctx.issue(Command::new(
                    worker,
                    CommandKind::Move(Target::Point(scout_target)),
                ));
                true
            }
            BuildCommand::OverlordScout => {
                let Some(overlord) = frame.units_of_type(UnitTypeId::Overlord).next() else {
                    return false;
                };
                ctx.issue(Command::new(
                    overlord.tag,
                    CommandKind::Move(Target::Point(frame.enemy_start_location)),
                ));
                true
            }
        }
    }

    fn start_structure(
        &mut self,
        ctx: &mut BotContext,
        frame: &Frame,
        structure: UnitTypeId,
        target: Option<BuildTarget>,
    ) -> bool {
        let near = self.build_position.unwrap_or(frame.start_location);
        let Some(position) = ctx.spatial().find_placement(structure, target, near) else {
            return false;
        };
        let worker = self
            .persistent_builder(ctx, frame, structure)
            .or_else(|| ctx.workers().select_worker(position, true));
        let Some(worker) = worker else {
            return false;
        };

        let accepted = ctx.workers().build_with_worker(worker, structure, position);
        if accepted {
            self.build_position = Some(position);
        }
        accepted
    }

    /// Live persistent builder, unless disabled or placing a gas building.
    fn persistent_builder(
        &self,
        ctx: &BotContext,
        frame: &Frame,
        structure: UnitTypeId,
    ) -> Option<UnitTag> {
        if !self.persistent_worker || structure.is_gas_building() {
            return None;
        }
        ctx.roles()
            .tags_with_role(UnitRole::PersistentBuilder)
            .into_iter()
            .find(|tag| frame.unit(*tag).is_some())
    }
}

/// Orders the first idle finished base structure to build `add_on`.
fn order_add_on(ctx: &mut BotContext, frame: &Frame, add_on: UnitTypeId) {
    let Some(base) = add_on.add_on_base() else {
        return;
    };
    if !frame.can_afford(add_on.cost()) {
        return;
    }
    let bases = [base];
    let Some(structure) = frame.idle_producers(&bases).next() else {
        return;
    };
    let ability = if add_on.is_reactor() {
        AbilityId::BuildReactor
    } else {
        AbilityId::BuildTechLab
    };
    ctx.issue(Command::new(
        structure.tag,
        CommandKind::UseAbility {
            ability,
            target: None,
        },
    ));
}
