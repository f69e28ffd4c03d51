//! Unit type identifiers and the static per-type data the agent relies on.
use crate::ids::Race;

/// Resource and supply price of a unit or structure.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    pub minerals: u32,
    pub vespene: u32,
    pub supply: f32,
}

impl Cost {
    pub const fn new(minerals: u32, vespene: u32, supply: f32) -> Self {
        Self {
            minerals,
            vespene,
            supply,
        }
    }
}

/// Turn rate used for every type without a listed exception, degrees/second.
pub const DEFAULT_TURN_RATE: f32 = 999.8437;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitTypeId {
    // ===== terran =====
    Scv,
    CommandCenter,
    OrbitalCommand,
    PlanetaryFortress,
    SupplyDepot,
    Refinery,
    Barracks,
    EngineeringBay,
    Bunker,
    Factory,
    Starport,
    BarracksReactor,
    BarracksTechLab,
    FactoryReactor,
    FactoryTechLab,
    StarportReactor,
    StarportTechLab,
    Marine,
    Marauder,
    Reaper,
    Ghost,
    Hellion,
    WidowMine,
    SiegeTank,
    Cyclone,
    Medivac,
    VikingFighter,
    Raven,
    Battlecruiser,

    // ===== protoss =====
    Probe,
    Nexus,
    Pylon,
    Assimilator,
    Gateway,
    WarpGate,
    Forge,
    CyberneticsCore,
    TwilightCouncil,
    RoboticsFacility,
    Stargate,
    Zealot,
    Stalker,
    Adept,
    Sentry,
    HighTemplar,
    Immortal,
    Colossus,
    Disruptor,
    Observer,
    WarpPrism,
    Oracle,
    VoidRay,

    // ===== zerg =====
    Drone,
    Hatchery,
    Lair,
    Extractor,
    SpawningPool,
    EvolutionChamber,
    RoachWarren,
    BanelingNest,
    Larva,
    Egg,
    Overlord,
    OverlordTransport,
    Overseer,
    Queen,
    Zergling,
    Baneling,
    Roach,
    Ravager,
    Hydralisk,
    Infestor,
    CreepTumor,
    CreepTumorBurrowed,
    CreepTumorQueen,

    // ===== neutral =====
    MineralField,
    VespeneGeyser,
}

impl UnitTypeId {
    pub const fn race(self) -> Option<Race> {
        use UnitTypeId::*;
        match self {
            Scv | CommandCenter | OrbitalCommand | PlanetaryFortress | SupplyDepot | Refinery
            | Barracks | EngineeringBay | Bunker | Factory | Starport | BarracksReactor
            | BarracksTechLab | FactoryReactor | FactoryTechLab | StarportReactor
            | StarportTechLab | Marine | Marauder
            | Reaper | Ghost | Hellion | WidowMine | SiegeTank | Cyclone | Medivac
            | VikingFighter | Raven | Battlecruiser => Some(Race::Terran),
            Probe | Nexus | Pylon | Assimilator | Gateway | WarpGate | Forge | CyberneticsCore
            | TwilightCouncil | RoboticsFacility | Stargate | Zealot | Stalker | Adept | Sentry
            | HighTemplar | Immortal | Colossus | Disruptor | Observer | WarpPrism | Oracle
            | VoidRay => Some(Race::Protoss),
            MineralField | VespeneGeyser => None,
            _ => Some(Race::Zerg),
        }
    }

    pub const fn is_structure(self) -> bool {
        use UnitTypeId::*;
        matches!(
            self,
            CommandCenter
                | OrbitalCommand
                | PlanetaryFortress
                | SupplyDepot
                | Refinery
                | Barracks
                | EngineeringBay
                | Bunker
                | Factory
                | Starport
                | BarracksReactor
                | BarracksTechLab
                | FactoryReactor
                | FactoryTechLab
                | StarportReactor
                | StarportTechLab
                | Nexus
                | Pylon
                | Assimilator
                | Gateway
                | WarpGate
                | Forge
                | CyberneticsCore
                | TwilightCouncil
                | RoboticsFacility
                | Stargate
                | Hatchery
                | Lair
                | Extractor
                | SpawningPool
                | EvolutionChamber
                | RoachWarren
                | BanelingNest
                | CreepTumor
                | CreepTumorBurrowed
                | CreepTumorQueen
        )
    }

    pub const fn is_worker(self) -> bool {
        matches!(self, Self::Scv | Self::Probe | Self::Drone)
    }

    pub const fn is_townhall(self) -> bool {
        matches!(
            self,
            Self::CommandCenter
                | Self::OrbitalCommand
                | Self::PlanetaryFortress
                | Self::Nexus
                | Self::Hatchery
                | Self::Lair
        )
    }

    pub const fn is_gas_building(self) -> bool {
        matches!(self, Self::Refinery | Self::Assimilator | Self::Extractor)
    }

    /// Structures that produce army units or workers.
    pub const fn is_production(self) -> bool {
        self.is_townhall()
            || matches!(
                self,
                Self::Barracks
                    | Self::Factory
                    | Self::Starport
                    | Self::Gateway
                    | Self::WarpGate
                    | Self::RoboticsFacility
                    | Self::Stargate
            )
    }

    pub const fn cost(self) -> Cost {
        use UnitTypeId::*;
        match self {
            Scv | Probe | Drone => Cost::new(50, 0, 1.0),
            CommandCenter | Nexus => Cost::new(400, 0, 0.0),
            OrbitalCommand => Cost::new(150, 0, 0.0),
            PlanetaryFortress => Cost::new(150, 150, 0.0),
            SupplyDepot | Pylon | Overlord => Cost::new(100, 0, 0.0),
            Refinery | Assimilator => Cost::new(75, 0, 0.0),
            Barracks | Gateway | Forge | CyberneticsCore => Cost::new(150, 0, 0.0),
            EngineeringBay => Cost::new(125, 0, 0.0),
            Bunker => Cost::new(100, 0, 0.0),
            Factory | Starport | RoboticsFacility => Cost::new(150, 100, 0.0),
            TwilightCouncil => Cost::new(150, 100, 0.0),
            Stargate => Cost::new(150, 150, 0.0),
            BarracksReactor | FactoryReactor | StarportReactor => Cost::new(50, 50, 0.0),
            BarracksTechLab | FactoryTechLab | StarportTechLab => Cost::new(50, 25, 0.0),
            Marine => Cost::new(50, 0, 1.0),
            Marauder => Cost::new(100, 25, 2.0),
            Reaper => Cost::new(50, 50, 1.0),
            Ghost => Cost::new(150, 125, 2.0),
            Hellion => Cost::new(100, 0, 2.0),
            WidowMine => Cost::new(75, 25, 2.0),
            SiegeTank => Cost::new(150, 125, 3.0),
            Cyclone => Cost::new(150, 100, 3.0),
            Medivac => Cost::new(100, 100, 2.0),
            VikingFighter => Cost::new(150, 75, 2.0),
            Raven => Cost::new(100, 200, 2.0),
            Battlecruiser => Cost::new(400, 300, 6.0),
            Zealot => Cost::new(100, 0, 2.0),
            Stalker => Cost::new(125, 50, 2.0),
            Adept => Cost::new(100, 25, 2.0),
            Sentry => Cost::new(50, 100, 2.0),
            HighTemplar => Cost::new(50, 150, 2.0),
            Immortal => Cost::new(275, 100, 4.0),
            Colossus => Cost::new(300, 200, 6.0),
            Disruptor => Cost::new(150, 150, 3.0),
            Observer => Cost::new(25, 75, 1.0),
            WarpPrism => Cost::new(250, 0, 2.0),
            Oracle => Cost::new(150, 150, 3.0),
            VoidRay => Cost::new(250, 150, 4.0),
            Hatchery => Cost::new(300, 0, 0.0),
            Lair => Cost::new(150, 100, 0.0),
            Extractor => Cost::new(25, 0, 0.0),
            SpawningPool => Cost::new(200, 0, 0.0),
            EvolutionChamber => Cost::new(75, 0, 0.0),
            RoachWarren => Cost::new(150, 0, 0.0),
            BanelingNest => Cost::new(100, 50, 0.0),
            OverlordTransport => Cost::new(25, 25, 0.0),
            Overseer => Cost::new(50, 50, 0.0),
            Queen => Cost::new(150, 0, 2.0),
            Zergling => Cost::new(50, 0, 1.0),
            Baneling => Cost::new(25, 25, 0.0),
            Roach => Cost::new(75, 25, 2.0),
            Ravager => Cost::new(25, 75, 1.0),
            Hydralisk => Cost::new(100, 50, 2.0),
            Infestor => Cost::new(100, 150, 2.0),
            WarpGate | Larva | Egg | CreepTumor | CreepTumorBurrowed | CreepTumorQueen
            | MineralField | VespeneGeyser => Cost::new(0, 0, 0.0),
        }
    }

    /// Supply provided once the unit or structure is complete.
    pub const fn supply_provided(self) -> u32 {
        match self {
            Self::CommandCenter | Self::OrbitalCommand | Self::PlanetaryFortress => 15,
            Self::Nexus => 15,
            Self::Hatchery | Self::Lair => 6,
            Self::SupplyDepot | Self::Pylon | Self::Overlord => 8,
            Self::OverlordTransport | Self::Overseer => 8,
            _ => 0,
        }
    }

    /// Types able to produce this one. Structures list the race's worker.
    pub const fn trained_from(self) -> &'static [UnitTypeId] {
        use UnitTypeId::*;
        match self {
            Scv => &[CommandCenter, OrbitalCommand, PlanetaryFortress],
            Probe => &[Nexus],
            Marine | Marauder | Reaper | Ghost => &[Barracks],
            Hellion | WidowMine | SiegeTank | Cyclone => &[Factory],
            Medivac | VikingFighter | Raven | Battlecruiser => &[Starport],
            Zealot | Stalker | Adept | Sentry | HighTemplar => &[Gateway, WarpGate],
            Immortal | Colossus | Disruptor | Observer | WarpPrism => &[RoboticsFacility],
            Oracle | VoidRay => &[Stargate],
            OrbitalCommand | PlanetaryFortress => &[CommandCenter],
            BarracksReactor | BarracksTechLab => &[Barracks],
            FactoryReactor | FactoryTechLab => &[Factory],
            StarportReactor | StarportTechLab => &[Starport],
            Lair => &[Hatchery],
            Queen => &[Hatchery, Lair],
            Drone | Overlord | Zergling | Roach | Hydralisk | Infestor => &[Larva],
            Ravager => &[Roach],
            Baneling => &[Zergling],
            Overseer | OverlordTransport => &[Overlord],
            CommandCenter | SupplyDepot | Refinery | Barracks | EngineeringBay | Bunker
            | Factory | Starport => &[Scv],
            Nexus | Pylon | Assimilator | Gateway | Forge | CyberneticsCore
            | TwilightCouncil | RoboticsFacility | Stargate => &[Probe],
            Hatchery | Extractor | SpawningPool | EvolutionChamber | RoachWarren
            | BanelingNest => &[Drone],
            CreepTumor | CreepTumorBurrowed => &[CreepTumorBurrowed],
            CreepTumorQueen => &[Queen],
            WarpGate => &[Gateway],
            Larva | Egg | MineralField | VespeneGeyser => &[],
        }
    }

    /// Structure an add-on attaches to, `None` for anything else.
    pub const fn add_on_base(self) -> Option<UnitTypeId> {
        use UnitTypeId::*;
        match self {
            BarracksReactor | BarracksTechLab => Some(Barracks),
            FactoryReactor | FactoryTechLab => Some(Factory),
            StarportReactor | StarportTechLab => Some(Starport),
            _ => None,
        }
    }

    pub const fn is_reactor(self) -> bool {
        matches!(
            self,
            Self::BarracksReactor | Self::FactoryReactor | Self::StarportReactor
        )
    }

    /// Distance at which a transport can load this passenger-carrier's cargo.
    pub const fn pickup_range(self) -> Option<f32> {
        match self {
            Self::Medivac => Some(1.0),
            Self::WarpPrism => Some(5.0),
            Self::OverlordTransport => Some(1.0),
            _ => None,
        }
    }

    /// Turn rate in degrees per second.
    pub const fn turn_rate(self) -> f32 {
        match self {
            Self::Battlecruiser => 720.0,
            Self::SiegeTank | Self::Colossus => 360.0,
            _ => DEFAULT_TURN_RATE,
        }
    }

    pub const fn worker_for(race: Race) -> UnitTypeId {
        match race {
            Race::Protoss => Self::Probe,
            Race::Zerg => Self::Drone,
            Race::Terran | Race::Random => Self::Scv,
        }
    }

    pub const fn supply_for(race: Race) -> UnitTypeId {
        match race {
            Race::Protoss => Self::Pylon,
            Race::Zerg => Self::Overlord,
            Race::Terran | Race::Random => Self::SupplyDepot,
        }
    }

    pub const fn townhall_for(race: Race) -> UnitTypeId {
        match race {
            Race::Protoss => Self::Nexus,
            Race::Zerg => Self::Hatchery,
            Race::Terran | Race::Random => Self::CommandCenter,
        }
    }

    pub const fn gas_for(race: Race) -> UnitTypeId {
        match race {
            Race::Protoss => Self::Assimilator,
            Race::Zerg => Self::Extractor,
            Race::Terran | Race::Random => Self::Refinery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uppercase_build_names() {
        assert_eq!("supplydepot".parse::<UnitTypeId>(), Ok(UnitTypeId::SupplyDepot));
        assert_eq!("STALKER".parse::<UnitTypeId>(), Ok(UnitTypeId::Stalker));
    }

    #[test]
    fn workers_train_from_race_townhall() {
        for race in [Race::Terran, Race::Protoss] {
            let worker = UnitTypeId::worker_for(race);
            assert!(worker.trained_from().contains(&UnitTypeId::townhall_for(race)));
        }
        assert_eq!(UnitTypeId::Drone.trained_from(), &[UnitTypeId::Larva]);
    }

    #[test]
    fn structures_are_built_by_workers() {
        assert!(UnitTypeId::Barracks.is_structure());
        assert_eq!(UnitTypeId::Barracks.trained_from(), &[UnitTypeId::Scv]);
        assert!(!UnitTypeId::Marine.is_structure());
    }

    #[test]
    fn add_ons_attach_to_their_production_structure() {
        assert_eq!(
            "barracksreactor".parse::<UnitTypeId>(),
            Ok(UnitTypeId::BarracksReactor)
        );
        assert_eq!(UnitTypeId::BarracksReactor.add_on_base(), Some(UnitTypeId::Barracks));
        assert_eq!(UnitTypeId::StarportTechLab.add_on_base(), Some(UnitTypeId::Starport));
        assert!(UnitTypeId::FactoryReactor.is_reactor());
        assert!(!UnitTypeId::FactoryTechLab.is_reactor());
        assert_eq!(UnitTypeId::Barracks.add_on_base(), None);
    }
}
