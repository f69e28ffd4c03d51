//! Execution context handed to every behavior.
//!
//! [`BotContext`] is the only thing a behavior sees. It provides:
//!
//! - The current [`Frame`] snapshot (read-only, shared)
//! - The injected [`Services`]
//! - The ability cooldown tracker
//! - The command buffer drained at the end of the frame
use std::sync::Arc;

use game_core::{AbilityId, BotConfig, Command, Frame, GridKind, Point2, UnitTag};

use crate::cooldowns::AbilityCooldownTracker;
use crate::services::{
    CreepQuery, DangerSense, PathRequest, RoleRegistry, Services, SpatialQuery, WorkerService,
};

pub struct BotContext {
    frame: Arc<Frame>,
    services: Services,
    cooldowns: AbilityCooldownTracker,
    commands: Vec<Command>,
    config: BotConfig,
}

impl BotContext {
    pub fn new(services: Services, config: BotConfig) -> Self {
        Self {
            frame: Arc::new(Frame::default()),
            services,
            cooldowns: AbilityCooldownTracker::new(),
            commands: Vec::new(),
            config,
        }
    }

    /// Replaces the snapshot. Commands still buffered from the previous
    /// frame are discarded.
    pub fn begin_frame(&mut self, frame: Frame) {
        self.frame = Arc::new(frame);
        self.commands.clear();
    }

    /// Shared handle to the current frame.
    ///
    /// Holding the handle does not borrow the context, so a behavior can keep
    /// unit references while it issues commands.
    pub fn frame(&self) -> Arc<Frame> {
        Arc::clone(&self.frame)
    }

    pub fn game_loop(&self) -> u64 {
        self.frame.game_loop
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn spatial(&self) -> &dyn SpatialQuery {
        self.services.spatial()
    }

    pub fn workers(&self) -> &dyn WorkerService {
        self.services.workers()
    }

    pub fn roles(&self) -> &dyn RoleRegistry {
        self.services.roles()
    }

    pub fn creep(&self) -> &dyn CreepQuery {
        self.services.creep()
    }

    // ===== spatial helpers using configured thresholds =====

    pub fn is_position_safe(&self, grid: GridKind, position: Point2) -> bool {
        self.spatial()
            .is_position_safe(grid, position, self.config.safety_limit)
    }

    /// Builds a path request with configured sensitivity and danger settings.
    pub fn path_request(&self, start: Point2, target: Point2, grid: GridKind) -> PathRequest {
        PathRequest {
            start,
            target,
            grid,
            sensitivity: self.config.path_sensitivity,
            smoothing: false,
            danger: Some(DangerSense {
                distance: self.config.danger_distance,
                threshold: self.config.danger_threshold,
            }),
        }
    }

    // ===== cooldowns =====

    pub fn cooldowns(&self) -> &AbilityCooldownTracker {
        &self.cooldowns
    }

    pub fn cooldowns_mut(&mut self) -> &mut AbilityCooldownTracker {
        &mut self.cooldowns
    }

    pub fn is_ability_ready(&self, unit: UnitTag, ability: AbilityId) -> bool {
        self.cooldowns.is_ready(unit, ability, self.frame.game_loop)
    }

    /// Records a cast issued this frame.
    pub fn record_cast(&mut self, unit: UnitTag, ability: AbilityId) {
        let frame = self.frame.game_loop;
        self.cooldowns.record_cast(unit, ability, frame);
    }

    // ===== commands =====

    pub fn issue(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Commands issued so far this frame.
    pub fn issued(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}
