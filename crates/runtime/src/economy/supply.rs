use game_core::{AbilityId, Command, CommandKind, Frame, Point2, Race, UnitTypeId};
use maneuver::{Behavior, Outcome};
use tracing::debug;

use crate::context::BotContext;
use crate::economy::BuildStructure;

/// Supply cap at which no more supply is ever needed.
const MAX_SUPPLY: u32 = 200;

/// Keep supply ahead of consumption.
///
/// Zerg trains overlords from larva; other races place their supply
/// structure near `base_location`. While supply is needed the behavior acts
/// even if nothing could be started this frame, so lower-priority spending
/// in the same plan waits; disable that with
/// [`AutoSupply::return_true_if_supply_required`].
pub struct AutoSupply {
    base_location: Point2,
    return_true_if_supply_required: bool,
}

impl AutoSupply {
    pub fn new(base_location: Point2) -> Self {
        Self {
            base_location,
            return_true_if_supply_required: true,
        }
    }

    pub fn return_true_if_supply_required(mut self, value: bool) -> Self {
        self.return_true_if_supply_required = value;
        self
    }
}

impl Behavior<BotContext> for AutoSupply {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let required = supply_required(&frame);
        if required == 0 {
            return Outcome::Declined;
        }
        debug!(required, "supply required");

        let supply = UnitTypeId::supply_for(frame.race);
        if frame.race == Race::Zerg {
            if let Some(larva) = frame.units_of_type(UnitTypeId::Larva).next()
                && frame.can_afford(supply.cost())
            {
                ctx.issue(Command::new(larva.tag, CommandKind::Train(supply)));
                return Outcome::Acted;
            }
        } else if BuildStructure::new(self.base_location, supply)
            .execute(ctx)
            .is_acted()
        {
            return Outcome::Acted;
        }
        Outcome::from(self.return_true_if_supply_required)
    }
}

/// Number of supply providers to start now.
///
/// Zerg scales overlords with its townhalls and is held back early on;
/// other races scale with finished production structures.
pub fn supply_required(frame: &Frame) -> u32 {
    let economy = frame.economy;
    if economy.supply_cap >= MAX_SUPPLY {
        return 0;
    }
    let supply_left = economy.supply_left();
    let supply_used = economy.supply_used;
    let supply = UnitTypeId::supply_for(frame.race);
    let mut pending = frame.pending_count(supply) as u32;
    if frame.race == Race::Zerg {
        pending += frame.eggs_morphing(AbilityId::LarvaTrainOverlord) as u32;
    }

    if frame.race == Race::Zerg {
        let townhalls = frame.townhalls().filter(|t| t.is_ready()).count() as u32;
        if supply_left == 0 && pending < townhalls + 1 {
            let wanted = if supply_used < 72 { townhalls } else { townhalls + 1 };
            return wanted.saturating_sub(pending);
        }
        if (13..60).contains(&supply_used) {
            let threshold = if supply_used <= 36 { 5 } else { 6 };
            let building = if supply_left > 0 || supply_used < 29 { 1 } else { 2 };
            if supply_left <= threshold && pending < building {
                return building - pending;
            }
        } else if supply_left < 4 * townhalls && pending < townhalls {
            return (townhalls - pending).min(6);
        }
        return 0;
    }

    let production = frame
        .units()
        .iter()
        .filter(|u| u.type_id.is_production() && u.is_ready())
        .count() as u32;
    let wanted = production.div_ceil(2);
    if supply_left <= (2 * production).max(5) && pending < wanted {
        return (wanted - pending).min(6);
    }
    if production == 0 && supply_left <= 2 && pending == 0 {
        return 1;
    }
    0
}
