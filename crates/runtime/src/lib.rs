//! Frame-stepped decision layer for a real-time strategy agent.
//!
//! This crate turns a per-frame [`game_core::Frame`] into unit commands. Agent
//! logic composes atomic behaviors into [`maneuver::Maneuver`]s and
//! [`maneuver::MacroPlan`]s, registers them with the [`Bot`], and collects the
//! resulting commands at the end of the frame.
//!
//! Modules are organized by responsibility:
//! - [`bot`] hosts the per-frame driver and its builder
//! - [`context`] and [`services`] define what behaviors may read and call
//! - [`combat`] provides individual and group tactics plus ready-made recipes
//! - [`economy`] provides macro behaviors for production and supply
//! - [`build_order`] sequences scripted openings
//! - [`cooldowns`] tracks ability cooldowns the game does not report
pub mod bot;
pub mod build_order;
pub mod combat;
pub mod config;
pub mod context;
pub mod cooldowns;
pub mod economy;
pub mod error;
pub mod services;

pub use bot::{Bot, BotBuilder, FrameOutput};
pub use build_order::{BuildCommand, BuildOrderParser, BuildOrderRunner, BuildOrderStep};
pub use config::RuntimeConfig;
pub use context::BotContext;
pub use cooldowns::AbilityCooldownTracker;
pub use error::{Result, RuntimeError};
pub use services::{
    CreepQuery, DangerSense, NoCreep, PathRequest, RoleRegistry, RoleTable, Services,
    ServicesBuilder, SpatialQuery, UnitQuery, WorkerService,
};
