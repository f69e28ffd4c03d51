/// Agent tunables shared by the runtime and loaded from the bot config file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    /// Frames simulated between agent steps.
    pub game_step: u32,
    /// Highest grid value still considered safe.
    pub safety_limit: f32,
    /// Default path precision for single-unit pathing.
    pub path_sensitivity: u32,
    /// Radius checked for danger before running an expensive path query.
    pub danger_distance: f32,
    /// Grid value above which a cell counts as dangerous for that check.
    pub danger_threshold: f32,
    /// Opening to run from the opening book, if any.
    pub opening: Option<String>,
    /// Keep producing workers until this many exist while the opening runs.
    pub constant_worker_production_till: u32,
    /// Prefer the persistent builder for structure steps.
    pub persistent_worker: bool,
}

impl BotConfig {
    pub const DEFAULT_GAME_STEP: u32 = 2;
    pub const DEFAULT_SAFETY_LIMIT: f32 = 1.0;
    pub const DEFAULT_PATH_SENSITIVITY: u32 = 5;
    pub const DEFAULT_DANGER_DISTANCE: f32 = 20.0;
    pub const DEFAULT_DANGER_THRESHOLD: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            game_step: Self::DEFAULT_GAME_STEP,
            safety_limit: Self::DEFAULT_SAFETY_LIMIT,
            path_sensitivity: Self::DEFAULT_PATH_SENSITIVITY,
            danger_distance: Self::DEFAULT_DANGER_DISTANCE,
            danger_threshold: Self::DEFAULT_DANGER_THRESHOLD,
            opening: None,
            constant_worker_production_till: 0,
            persistent_worker: true,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}
