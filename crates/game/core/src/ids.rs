use std::fmt;

/// Stable identity of a game unit, unique for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTag(pub u64);

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Race {
    #[default]
    Terran,
    Protoss,
    Zerg,
    Random,
}

/// Role tag assigned to a unit by the host's unit-role bookkeeping.
///
/// The decision layer only reads roles; assignment happens elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitRole {
    Attacking,
    Defending,
    Gathering,
    Building,
    PersistentBuilder,
    Scouting,
    Dropship,
    Harassing,
    Reserve,
}

/// Abstract placement specifier used by scripted build steps.
///
/// Resolved to a concrete coordinate by the spatial query service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildTarget {
    Spawn,
    Ramp,
    Nat,
    Third,
    Fourth,
    Fifth,
    Sixth,
    MapCenter,
    EnemySpawn,
    EnemyRamp,
    EnemyNat,
    EnemyThird,
    EnemyFourth,
}

impl BuildTarget {
    pub const fn is_enemy_side(self) -> bool {
        matches!(
            self,
            Self::EnemySpawn | Self::EnemyRamp | Self::EnemyNat | Self::EnemyThird | Self::EnemyFourth
        )
    }
}
