//! Per-frame world snapshot types shared by the agent runtime and its tooling.
//!
//! `game-core` defines what the decision layer is allowed to see each frame
//! (units, economy, cost grids) and the commands it is allowed to emit. The
//! types here are plain data: producing a [`Frame`] from a live game and
//! delivering [`Command`]s back to it are the host's responsibility.
pub mod ability;
pub mod command;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod ids;
pub mod unit;
pub mod unit_type;
pub mod upgrade;

pub use ability::{AbilityId, FRAMES_PER_SECOND};
pub use command::{Command, CommandKind};
pub use config::BotConfig;
pub use error::GridError;
pub use frame::{Economy, Frame, FrameBuilder, MapSize};
pub use geometry::Point2;
pub use grid::{CostGrid, GridKind};
pub use ids::{BuildTarget, Race, UnitRole, UnitTag};
pub use unit::{Target, Unit, UnitOrder};
pub use unit_type::{Cost, UnitTypeId};
pub use upgrade::UpgradeId;
