//! Atomic behaviors that control one unit.
//!
//! Each behavior resolves its unit from the current frame and declines when
//! the unit is gone. Commands are issued only on the path that returns
//! [`maneuver::Outcome::Acted`].
mod ability;
mod attack;
mod cargo;
mod creep;
mod pathing;
mod stutter;

pub use ability::{PlacePredictiveAoe, UseAbility, UseAoeAbility};
pub use attack::{AMove, AttackTarget, ShootAndMoveToTarget, ShootTargetInRange};
pub use cargo::{DropCargo, PickUpAndDropCargo, PickUpCargo};
pub use creep::TumorSpreadCreep;
pub use pathing::{KeepUnitSafe, MoveToSafeTarget, PathUnitToTarget};
pub use stutter::{StutterUnitBack, StutterUnitForward, WorkerKiteBack};
