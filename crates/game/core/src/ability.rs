//! Ability identifiers and the static cooldown table.
//!
//! The game reports which abilities a unit may currently use, but not when a
//! spent ability becomes usable again. Abilities listed in
//! [`AbilityId::base_cooldown_frames`] are tracked by the agent itself.

/// Simulation frames per real-time second at "faster" game speed.
pub const FRAMES_PER_SECOND: f32 = 22.4;

/// Frames added to every tracked cooldown to absorb order latency.
const COOLDOWN_PADDING_FRAMES: u32 = 6;

/// Locust spawns resolve later than other casts.
const LOCUST_PADDING_FRAMES: u32 = 8;

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
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityId {
    // ===== generic orders =====
    Attack,
    Move,
    Stop,
    HoldPosition,
    Smart,
    HarvestGather,
    HarvestReturn,
    Load,
    UnloadAllAt,

    // ===== macro =====
    BuildCreepTumor,
    BuildCreepTumorTumor,
    BuildCreepTumorQueen,
    EffectChronoBoostEnergyCost,
    UpgradeToOrbitalOrbitalCommand,
    CalldownMule,
    EffectInjectLarva,
    LarvaTrainOverlord,
    BuildReactor,
    BuildTechLab,

    // ===== tracked protoss abilities =====
    AdeptPhaseShift,
    BehaviorPulsarBeamOn,
    EffectBlinkStalker,
    EffectPurificationNova,
    EffectShadowStride,
    EffectVoidRayPrismaticAlignment,
    OracleRevelation,

    // ===== tracked terran abilities =====
    EffectMedivacIgniteAfterburners,
    EffectTacticalJump,
    LockOn,
    Kd8Charge,
    TacNukeStrike,
    WidowMineAttack,
    YamatoGun,

    // ===== tracked zerg abilities =====
    CausticSpray,
    EffectCorrosiveBile,
    EffectSpawnLocusts,

    // ===== area effects =====
    EffectPsiStorm,
    EffectFungalGrowth,
    EffectEmp,
    EffectGuardianShield,
}

impl AbilityId {
    /// Base cooldown in real-time seconds for abilities the agent must track.
    pub const fn cooldown_seconds(self) -> Option<f32> {
        let seconds = match self {
            Self::AdeptPhaseShift => 11.0,
            Self::BehaviorPulsarBeamOn => 4.0,
            Self::EffectBlinkStalker => 7.0,
            Self::EffectPurificationNova => 21.4,
            Self::EffectShadowStride => 14.0,
            Self::EffectVoidRayPrismaticAlignment => 42.9,
            Self::OracleRevelation => 10.0,
            Self::EffectMedivacIgniteAfterburners => 14.0,
            Self::EffectTacticalJump => 71.0,
            Self::LockOn => 4.3,
            Self::Kd8Charge => 14.0,
            Self::TacNukeStrike => 14.0,
            Self::WidowMineAttack => 29.0,
            Self::YamatoGun => 71.0,
            Self::CausticSpray => 32.14,
            Self::EffectCorrosiveBile => 7.0,
            Self::EffectSpawnLocusts => 43.0,
            _ => return None,
        };
        Some(seconds)
    }

    /// Base cooldown in frames, `None` for abilities the game already gates.
    pub fn base_cooldown_frames(self) -> Option<u32> {
        let seconds = self.cooldown_seconds()?;
        let padding = if self == Self::EffectSpawnLocusts {
            LOCUST_PADDING_FRAMES
        } else {
            COOLDOWN_PADDING_FRAMES
        };
        Some((FRAMES_PER_SECOND * seconds) as u32 + padding)
    }

    /// Abilities whose first order locks the caster's weapon until it resolves.
    pub const fn locks_weapon(self) -> bool {
        matches!(
            self,
            Self::EffectPurificationNova
                | Self::EffectCorrosiveBile
                | Self::Kd8Charge
                | Self::EffectPsiStorm
                | Self::EffectFungalGrowth
                | Self::YamatoGun
                | Self::LockOn
                | Self::CausticSpray
        )
    }

    /// Radius of the area affected by an area-effect ability.
    pub const fn effect_radius(self) -> Option<f32> {
        let radius = match self {
            Self::EffectPsiStorm => 1.5,
            Self::EffectFungalGrowth => 2.25,
            Self::EffectEmp => 1.5,
            Self::EffectCorrosiveBile => 0.5,
            Self::Kd8Charge => 0.5,
            _ => return None,
        };
        Some(radius)
    }
}
