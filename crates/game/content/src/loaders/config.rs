//! Bot configuration loader.

use std::path::Path;

use game_core::BotConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for bot configuration from TOML files.
///
/// Missing keys fall back to [`BotConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<BotConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> LoadResult<BotConfig> {
        let config: BotConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}
