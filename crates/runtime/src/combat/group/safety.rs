use game_core::{GridKind, UnitTag};
use maneuver::{Behavior, Outcome};

use crate::combat::individual::{KeepUnitSafe, ShootTargetInRange};
use crate::context::BotContext;

/// Keep every member safe, letting members with a ready shot fire first.
///
/// Members are handled one by one; acts if any member acted.
pub struct KeepGroupSafe {
    group: Vec<UnitTag>,
    close_enemies: Vec<UnitTag>,
    grid: GridKind,
    attack_in_range: bool,
}

impl KeepGroupSafe {
    pub fn new(group: Vec<UnitTag>, close_enemies: Vec<UnitTag>, grid: GridKind) -> Self {
        Self {
            group,
            close_enemies,
            grid,
            attack_in_range: true,
        }
    }

    pub fn attack_in_range(mut self, attack: bool) -> Self {
        self.attack_in_range = attack;
        self
    }
}

impl Behavior<BotContext> for KeepGroupSafe {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let mut outcome = Outcome::Declined;
        for unit in frame.units_by_tag(&self.group) {
            if self.attack_in_range
                && ShootTargetInRange::new(unit.tag, self.close_enemies.clone())
                    .execute(ctx)
                    .is_acted()
            {
                outcome = Outcome::Acted;
                continue;
            }
            outcome = outcome.or(KeepUnitSafe::new(unit.tag, self.grid).execute(ctx));
        }
        outcome
    }
}
