//! Opening book loader.
//!
//! ```ron
//! (
//!     openings: {
//!         "ReaperExpand": (
//!             steps: ["14 supply @ ramp", "16 barracks @ ramp", "16 gas", "19 reaper"],
//!             constant_worker_production_till: 44,
//!         ),
//!     },
//! )
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::build_order::{BuildParseError, BuildStepSpec, parse_steps};
use crate::loaders::{LoadResult, read_file};

/// Named openings available to the bot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningBook {
    pub openings: BTreeMap<String, OpeningSpec>,
}

impl OpeningBook {
    pub fn opening(&self, name: &str) -> Option<&OpeningSpec> {
        self.openings.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.openings.keys().map(String::as_str)
    }
}

/// One opening as authored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningSpec {
    pub steps: Vec<String>,
    #[serde(default)]
    pub constant_worker_production_till: u32,
    #[serde(default = "default_persistent_worker")]
    pub persistent_worker: bool,
}

impl OpeningSpec {
    pub fn parse(&self) -> Result<Vec<BuildStepSpec>, BuildParseError> {
        parse_steps(self.steps.as_slice())
    }
}

fn default_persistent_worker() -> bool {
    true
}

/// Loader for opening books from RON files.
pub struct BuildOrderLoader;

impl BuildOrderLoader {
    pub fn load(path: &Path) -> LoadResult<OpeningBook> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn from_str(content: &str) -> LoadResult<OpeningBook> {
        let book: OpeningBook = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse opening book RON: {}", e))?;
        Ok(book)
    }
}
