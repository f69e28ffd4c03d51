//! Runtime configuration.
use std::env;

use game_core::BotConfig;

/// Runtime configuration shared by the bot driver and its behaviors.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bot: BotConfig,
    /// Keep running remaining behaviors when one panics (default: true).
    pub isolate_failures: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            isolate_failures: true,
        }
    }
}

impl RuntimeConfig {
    /// Starts from `bot` and applies `BOT_*` environment overrides.
    pub fn from_env_with(bot: BotConfig) -> Self {
        let mut config = Self {
            bot,
            ..Self::default()
        };

        if let Some(step) = read_env::<u32>("BOT_GAME_STEP") {
            config.bot.game_step = step.max(1);
        }
        if let Some(limit) = read_env::<f32>("BOT_SAFETY_LIMIT") {
            config.bot.safety_limit = limit;
        }
        if let Some(sensitivity) = read_env::<u32>("BOT_PATH_SENSITIVITY") {
            config.bot.path_sensitivity = sensitivity.max(1);
        }
        if let Ok(opening) = env::var("BOT_OPENING") {
            config.bot.opening = (!opening.is_empty()).then_some(opening);
        }
        if let Some(isolate) = read_env_bool("BOT_ISOLATE_FAILURES") {
            config.isolate_failures = isolate;
        }

        config
    }

    pub fn from_env() -> Self {
        Self::from_env_with(BotConfig::default())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
