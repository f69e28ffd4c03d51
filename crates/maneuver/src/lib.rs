//! Priority-ordered fallback composition for frame-stepped game agents.
//!
//! Every simulation frame the agent builds a handful of behaviors from the
//! current snapshot, registers them, and runs each one exactly once:
//!
//! - **No running state**: a behavior either acts this frame or declines
//! - **First success wins**: composites stop at the first child that acted
//! - **One frame lifetime**: nothing registered survives to the next frame
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for every decision unit
//! - [`Outcome`]: Acted or Declined
//! - Composites: [`Maneuver`] (tactical), [`MacroPlan`] (economic)
//! - [`BehaviorExecutioner`]: per-frame runner with per-item failure isolation

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod error;
pub mod executioner;
pub mod outcome;

pub use behavior::Behavior;
pub use composite::{MacroPlan, Maneuver};
pub use error::{BehaviorFailure, ExecutionError};
pub use executioner::{BehaviorExecutioner, FrameReport, run_isolated};
pub use outcome::Outcome;
