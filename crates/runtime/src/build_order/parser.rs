//! Expands parsed step specs into executable steps for one race.
use game_content::{BuildOption, BuildStepSpec, OpeningSpec, StepCommand, StepTarget};
use game_core::{BuildTarget, Frame, Race, UnitTypeId, UpgradeId};

use crate::build_order::{BuildCommand, BuildOrderStep};
use crate::error::Result;

/// Build progress below which a structure counts as just placed.
const JUST_STARTED: f32 = 0.05;

pub(crate) const CHRONO_ENERGY: f32 = 50.0;
const ORBITAL_MINERALS: u32 = 150;

/// Race-aware translation of [`BuildStepSpec`]s.
#[derive(Clone, Copy, Debug)]
pub struct BuildOrderParser {
    race: Race,
}

impl BuildOrderParser {
    pub fn new(race: Race) -> Self {
        Self { race }
    }

    /// Parses and expands a whole opening.
    pub fn parse_opening(&self, opening: &OpeningSpec) -> Result<Vec<BuildOrderStep>> {
        Ok(self.expand(&opening.parse()?))
    }

    pub fn expand(&self, specs: &[BuildStepSpec]) -> Vec<BuildOrderStep> {
        specs.iter().map(|spec| self.expand_one(spec)).collect()
    }

    pub fn expand_one(&self, spec: &BuildStepSpec) -> BuildOrderStep {
        let location = match spec.target {
            Some(StepTarget::Location(target)) => Some(target),
            _ => None,
        };
        let step = match spec.command {
            StepCommand::Option(option) => self.option_step(option, spec.target, location),
            StepCommand::Unit(unit) if unit.add_on_base().is_some() => add_on_step(unit),
            StepCommand::Unit(unit) if unit.is_structure() => structure_step(unit, location),
            StepCommand::Unit(unit) => train_step(unit),
            StepCommand::Upgrade(upgrade) => research_step(upgrade),
        };
        step.start_at_supply(spec.supply)
    }

    fn option_step(
        &self,
        option: BuildOption,
        target: Option<StepTarget>,
        location: Option<BuildTarget>,
    ) -> BuildOrderStep {
        let race = self.race;
        match option {
            BuildOption::Chrono => {
                let structure = match target {
                    Some(StepTarget::Structure(structure)) => structure,
                    _ => UnitTypeId::Nexus,
                };
                BuildOrderStep::new(
                    BuildCommand::Chrono(structure),
                    |frame: &Frame| frame.townhalls().any(|t| t.energy >= CHRONO_ENERGY),
                    |_: &Frame| true,
                )
            }
            BuildOption::Core => structure_step(UnitTypeId::CyberneticsCore, location),
            BuildOption::Gate => structure_step(UnitTypeId::Gateway, location),
            BuildOption::Gas => structure_step(UnitTypeId::gas_for(race), location),
            BuildOption::Expand => {
                let townhall = UnitTypeId::townhall_for(race);
                let minerals = if race == Race::Zerg { 185 } else { 285 };
                BuildOrderStep::new(
                    BuildCommand::Structure {
                        structure: townhall,
                        target: Some(location.unwrap_or(BuildTarget::Nat)),
                    },
                    move |frame: &Frame| frame.economy.minerals >= minerals,
                    move |frame: &Frame| just_started(frame, townhall),
                )
            }
            BuildOption::Orbital => BuildOrderStep::new(
                BuildCommand::Orbital,
                |frame: &Frame| {
                    frame.economy.minerals >= ORBITAL_MINERALS
                        && frame.units_of_type(UnitTypeId::Barracks).any(|b| b.is_ready())
                        && frame
                            .idle_producers(&[UnitTypeId::CommandCenter])
                            .next()
                            .is_some()
                },
                |_: &Frame| true,
            ),
            BuildOption::OverlordScout => BuildOrderStep::new(
                BuildCommand::OverlordScout,
                |frame: &Frame| frame.count_of(UnitTypeId::Overlord) > 0,
                |_: &Frame| true,
            ),
            BuildOption::Supply if race == Race::Zerg => train_step(UnitTypeId::Overlord),
            BuildOption::Supply => {
                let supply = UnitTypeId::supply_for(race);
                BuildOrderStep::new(
                    BuildCommand::Structure {
                        structure: supply,
                        target: location,
                    },
                    |frame: &Frame| frame.economy.minerals >= 25,
                    move |frame: &Frame| just_started(frame, supply),
                )
            }
            BuildOption::Worker => train_step(UnitTypeId::worker_for(race)),
            BuildOption::WorkerScout => BuildOrderStep::new(
                BuildCommand::WorkerScout,
                |frame: &Frame| frame.workers().next().is_some(),
                |_: &Frame| true,
            ),
        }
    }
}

/// Starts slightly before the structure is affordable so the worker can
/// walk there; ends once the structure has been placed.
fn structure_step(structure: UnitTypeId, target: Option<BuildTarget>) -> BuildOrderStep {
    let cost = structure.cost();
    BuildOrderStep::new(
        BuildCommand::Structure { structure, target },
        move |frame: &Frame| {
            frame.economy.minerals + 75 >= cost.minerals
                && frame.economy.vespene + 25 >= cost.vespene
        },
        move |frame: &Frame| just_started(frame, structure),
    )
}

/// Started as soon as it is nearly affordable; the runner keeps ordering the
/// add-on until one exists.
fn add_on_step(add_on: UnitTypeId) -> BuildOrderStep {
    let cost = add_on.cost();
    BuildOrderStep::new(
        BuildCommand::AddOn(add_on),
        move |frame: &Frame| {
            frame.economy.minerals + 75 >= cost.minerals
                && frame.economy.vespene + 25 >= cost.vespene
        },
        move |frame: &Frame| frame.count_of(add_on) > 0,
    )
}

/// A train order completes the step as soon as it is issued.
fn train_step(unit: UnitTypeId) -> BuildOrderStep {
    BuildOrderStep::new(
        BuildCommand::Train(unit),
        move |frame: &Frame| {
            frame.can_afford(unit.cost()) && frame.idle_producers(unit.trained_from()).next().is_some()
        },
        |_: &Frame| true,
    )
}

fn research_step(upgrade: UpgradeId) -> BuildOrderStep {
    BuildOrderStep::new(
        BuildCommand::Research(upgrade),
        move |frame: &Frame| {
            frame.can_afford(upgrade.cost())
                && !frame.has_upgrade(upgrade)
                && frame
                    .idle_producers(&[upgrade.researched_from()])
                    .next()
                    .is_some()
        },
        |_: &Frame| true,
    )
}

fn just_started(frame: &Frame, structure: UnitTypeId) -> bool {
    frame
        .units_of_type(structure)
        .any(|s| s.build_progress > 0.0 && s.build_progress < JUST_STARTED)
}
