//! Data-driven agent content and loaders.
//!
//! This crate houses authored data and the loaders that read it:
//! - Build step grammar (`"13 supply @ ramp"`, `"16 marine x3"`)
//! - Opening books (data-driven via RON)
//! - Bot configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime when a bot is built and never changes
//! during a game.

pub mod build_order;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use build_order::{
    BuildOption, BuildParseError, BuildStepSpec, StepCommand, StepTarget, parse_step, parse_steps,
};

#[cfg(feature = "loaders")]
pub use loaders::{BuildOrderLoader, ConfigLoader, LoadResult, OpeningBook, OpeningSpec};
