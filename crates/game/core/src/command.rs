use crate::ability::AbilityId;
use crate::ids::UnitTag;
use crate::unit::Target;
use crate::unit_type::UnitTypeId;
use crate::upgrade::UpgradeId;

/// Closed set of orders the agent can emit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// Attack a unit, or attack-move to a point.
    Attack(Target),
    Move(Target),
    Gather(UnitTag),
    UseAbility {
        ability: AbilityId,
        target: Option<Target>,
    },
    /// Load a passenger into the commanded transport.
    Load(UnitTag),
    UnloadAll,
    Train(UnitTypeId),
    Research(UpgradeId),
}

impl CommandKind {
    /// The game ability this order resolves to once issued.
    pub fn ability(&self) -> AbilityId {
        match self {
            Self::Attack(_) => AbilityId::Attack,
            Self::Move(_) => AbilityId::Move,
            Self::Gather(_) => AbilityId::HarvestGather,
            Self::UseAbility { ability, .. } => *ability,
            Self::Load(_) => AbilityId::Smart,
            Self::UnloadAll => AbilityId::UnloadAllAt,
            Self::Train(UnitTypeId::Overlord) => AbilityId::LarvaTrainOverlord,
            Self::Train(_) | Self::Research(_) => AbilityId::Smart,
        }
    }

    pub fn target(&self) -> Option<Target> {
        match self {
            Self::Attack(target) | Self::Move(target) => Some(*target),
            Self::Gather(tag) | Self::Load(tag) => Some(Target::Unit(*tag)),
            Self::UseAbility { target, .. } => *target,
            Self::UnloadAll | Self::Train(_) | Self::Research(_) => None,
        }
    }
}

/// One order addressed to one or more units.
///
/// Group behaviors emit a single command carrying every member tag so that the
/// group receives the order in the same frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    pub units: Vec<UnitTag>,
    pub kind: CommandKind,
    pub queued: bool,
}

impl Command {
    pub fn new(unit: UnitTag, kind: CommandKind) -> Self {
        Self {
            units: vec![unit],
            kind,
            queued: false,
        }
    }

    pub fn group<I>(units: I, kind: CommandKind) -> Self
    where
        I: IntoIterator<Item = UnitTag>,
    {
        Self {
            units: units.into_iter().collect(),
            kind,
            queued: false,
        }
    }

    pub fn queued(mut self) -> Self {
        self.queued = true;
        self
    }

    pub fn is_for(&self, unit: UnitTag) -> bool {
        self.units.contains(&unit)
    }
}
