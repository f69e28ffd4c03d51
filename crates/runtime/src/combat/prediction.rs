//! Lead targeting for area-effect abilities.
//!
//! A discrete-time pursuit approximation: the caster is walked along its
//! intended path one agent step at a time, the enemy is assumed to chase the
//! caster's simulated position greedily, and the enemy's simulated position
//! at the ability's landing time is the place to aim. Cheap enough to
//! recompute every frame; not a closed-form intercept.
use game_core::Point2;

/// Upper bound on simulated steps for either trajectory.
pub const MAX_SIMULATION_STEPS: usize = 100;

/// Inputs for [`predict_enemy_position`].
#[derive(Clone, Copy, Debug)]
pub struct PredictionInput<'a> {
    pub caster_start: Point2,
    /// Waypoints the caster intends to follow, in order.
    pub caster_path: &'a [Point2],
    /// Distance the caster covers per agent step.
    pub caster_step: f32,
    pub enemy_start: Point2,
    /// Distance the enemy covers per agent step.
    pub enemy_step: f32,
    /// Frames between the cast order and the effect landing.
    pub ability_delay_frames: u32,
    /// Frames per agent step.
    pub game_step: u32,
}

/// Where the enemy is expected to be when the ability lands.
pub fn predict_enemy_position(input: &PredictionInput<'_>) -> Point2 {
    let caster = simulate_path(input.caster_start, input.caster_path, input.caster_step);
    let enemy = simulate_pursuit(input.enemy_start, &caster, input.enemy_step);
    let index = delay_index(input.ability_delay_frames, input.game_step, enemy.len());
    enemy[index]
}

/// Positions reached by walking `path` from `start`, `step` per tick.
///
/// The first entry is `start`. Leftover distance after reaching a waypoint
/// carries on toward the next one within the same tick.
pub fn simulate_path(start: Point2, path: &[Point2], step: f32) -> Vec<Point2> {
    let mut positions = vec![start];
    if step <= 0.0 {
        return positions;
    }

    let mut current = start;
    let mut waypoint = 0;
    while waypoint < path.len() && positions.len() < MAX_SIMULATION_STEPS {
        current = advance_along(current, path, &mut waypoint, step);
        positions.push(current);
    }
    positions
}

/// Positions of a pursuer starting at `start` that, at tick `k`, moves
/// `step` toward `quarry[k]` (the last entry once the quarry stops).
///
/// The first entry is `start`; the simulation ends when the pursuer reaches
/// its quarry.
pub fn simulate_pursuit(start: Point2, quarry: &[Point2], step: f32) -> Vec<Point2> {
    let mut positions = vec![start];
    let Some(last) = quarry.len().checked_sub(1) else {
        return positions;
    };
    if step <= 0.0 {
        return positions;
    }

    let mut current = start;
    for tick in 0..MAX_SIMULATION_STEPS - 1 {
        let goal = quarry[tick.min(last)];
        if current.distance_to(goal) <= step {
            positions.push(goal);
            break;
        }
        current = current.towards(goal, step);
        positions.push(current);
    }
    positions
}

/// Index of the simulated position at which an ability with `delay_frames`
/// lands, clamped to the simulated range.
pub fn delay_index(delay_frames: u32, game_step: u32, len: usize) -> usize {
    let steps = delay_frames.div_ceil(game_step.max(1)) as usize;
    steps.min(len.saturating_sub(1))
}

fn advance_along(mut current: Point2, path: &[Point2], waypoint: &mut usize, step: f32) -> Point2 {
    let mut remaining = step;
    while *waypoint < path.len() {
        let target = path[*waypoint];
        let distance = current.distance_to(target);
        if distance > remaining {
            return current.towards(target, remaining);
        }
        remaining -= distance;
        current = target;
        *waypoint += 1;
    }
    current
}
