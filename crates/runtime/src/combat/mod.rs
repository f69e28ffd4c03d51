//! Tactical behaviors and the helpers they share.
pub mod group;
pub mod individual;
pub mod prediction;
pub mod recipes;
pub mod targeting;

pub use group::{
    AMoveGroup, GroupUseAbility, KeepGroupSafe, PathGroupToTarget, StutterGroupBack,
    StutterGroupForward,
};
pub use individual::{
    AMove, AttackTarget, DropCargo, KeepUnitSafe, MoveToSafeTarget, PathUnitToTarget,
    PickUpAndDropCargo, PickUpCargo, PlacePredictiveAoe, ShootAndMoveToTarget,
    ShootTargetInRange, StutterUnitBack, StutterUnitForward, TumorSpreadCreep, UseAbility,
    UseAoeAbility, WorkerKiteBack,
};
