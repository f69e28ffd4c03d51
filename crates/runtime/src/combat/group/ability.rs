use game_core::{AbilityId, Command, CommandKind, Target, UnitTag};
use maneuver::{Behavior, Outcome};

use crate::context::BotContext;

/// One shared ability command for the whole group.
///
/// With `sync` every member must have the ability ready; otherwise a single
/// ready member is enough. Tracked cooldowns are recorded for every member
/// that could cast.
pub struct GroupUseAbility {
    ability: AbilityId,
    group: Vec<UnitTag>,
    target: Option<Target>,
    sync: bool,
}

impl GroupUseAbility {
    pub fn new(ability: AbilityId, group: Vec<UnitTag>) -> Self {
        Self {
            ability,
            group,
            target: None,
            sync: true,
        }
    }

    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
}

impl Behavior<BotContext> for GroupUseAbility {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let units: Vec<_> = frame.units_by_tag(&self.group).collect();
        if units.is_empty() {
            return Outcome::Declined;
        }

        let ready: Vec<UnitTag> = units
            .iter()
            .filter(|u| u.has_ability(self.ability) && ctx.is_ability_ready(u.tag, self.ability))
            .map(|u| u.tag)
            .collect();
        let quorum = if self.sync {
            ready.len() == units.len()
        } else {
            !ready.is_empty()
        };
        if !quorum {
            return Outcome::Declined;
        }

        ctx.issue(Command::group(
            units.iter().map(|u| u.tag),
            CommandKind::UseAbility {
                ability: self.ability,
                target: self.target,
            },
        ));
        for tag in ready {
            ctx.record_cast(tag, self.ability);
        }
        Outcome::Acted
    }
}
