use crate::unit_type::{Cost, UnitTypeId};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeId {
    Stimpack,
    ShieldWall,
    PunisherGrenades,
    TerranInfantryWeaponsLevel1,
    WarpGateResearch,
    Charge,
    BlinkTech,
    ProtossGroundWeaponsLevel1,
    ZerglingMovementSpeed,
    GlialReconstitution,
    ZergMissileWeaponsLevel1,
}

impl UpgradeId {
    pub const fn researched_from(self) -> UnitTypeId {
        match self {
            Self::Stimpack | Self::ShieldWall | Self::PunisherGrenades => UnitTypeId::Barracks,
            Self::TerranInfantryWeaponsLevel1 => UnitTypeId::EngineeringBay,
            Self::WarpGateResearch => UnitTypeId::CyberneticsCore,
            Self::Charge | Self::BlinkTech => UnitTypeId::TwilightCouncil,
            Self::ProtossGroundWeaponsLevel1 => UnitTypeId::Forge,
            Self::ZerglingMovementSpeed => UnitTypeId::SpawningPool,
            Self::GlialReconstitution => UnitTypeId::RoachWarren,
            Self::ZergMissileWeaponsLevel1 => UnitTypeId::EvolutionChamber,
        }
    }

    pub const fn cost(self) -> Cost {
        match self {
            Self::Stimpack | Self::Charge => Cost::new(100, 100, 0.0),
            Self::ShieldWall | Self::PunisherGrenades => Cost::new(100, 100, 0.0),
            Self::TerranInfantryWeaponsLevel1 | Self::ProtossGroundWeaponsLevel1 => {
                Cost::new(100, 100, 0.0)
            }
            Self::ZergMissileWeaponsLevel1 => Cost::new(100, 100, 0.0),
            Self::WarpGateResearch => Cost::new(50, 50, 0.0),
            Self::BlinkTech => Cost::new(150, 150, 0.0),
            Self::ZerglingMovementSpeed | Self::GlialReconstitution => Cost::new(100, 100, 0.0),
        }
    }
}
