//! Service contracts consumed by behaviors.
//!
//! Map analysis, worker bookkeeping and role assignment live outside this
//! crate. Behaviors reach them only through these traits, bundled into
//! [`Services`] and handed to the [`crate::BotContext`] at construction.
use std::collections::HashMap;
use std::sync::Arc;

use game_core::{BuildTarget, CostGrid, GridKind, Point2, UnitRole, UnitTag, UnitTypeId};

use crate::error::{Result, RuntimeError};

/// Skip the path query when no cell within `distance` reaches `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DangerSense {
    pub distance: f32,
    pub threshold: f32,
}

/// Parameters of a single next-waypoint query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathRequest {
    pub start: Point2,
    pub target: Point2,
    pub grid: GridKind,
    /// Waypoints skipped along the computed path; higher is coarser and cheaper.
    pub sensitivity: u32,
    pub smoothing: bool,
    pub danger: Option<DangerSense>,
}

/// Which units a range query should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitQuery {
    OwnGround,
    OwnFlying,
    OwnAll,
    Enemy,
}

/// Cost grids and spatial queries owned by the host's map analysis.
pub trait SpatialQuery: Send + Sync {
    fn grid(&self, kind: GridKind) -> &CostGrid;

    /// Next waypoint from `request.start` toward `request.target`.
    fn next_path_step(&self, request: &PathRequest) -> Point2;

    /// Tags within `distance` of each point, one set per point.
    fn units_in_range(&self, points: &[Point2], distance: f32, query: UnitQuery)
    -> Vec<Vec<UnitTag>>;

    /// Concrete placement for `structure` near `near`, honoring `target`.
    fn find_placement(
        &self,
        structure: UnitTypeId,
        target: Option<BuildTarget>,
        near: Point2,
    ) -> Option<Point2>;

    fn is_position_safe(&self, kind: GridKind, position: Point2, limit: f32) -> bool {
        self.grid(kind).is_below(position, limit)
    }

    fn closest_safe_spot(&self, from: Point2, kind: GridKind, radius: f32) -> Option<Point2> {
        self.grid(kind).closest_lowest_cost_point(from, radius)
    }

    fn is_pathable(&self, position: Point2) -> bool {
        self.grid(GridKind::Ground).is_pathable(position)
    }

    fn is_position_visible(&self, _position: Point2) -> bool {
        true
    }
}

/// Worker selection and structure placement orders.
pub trait WorkerService: Send + Sync {
    fn select_worker(&self, target: Point2, force_close: bool) -> Option<UnitTag>;

    /// Sends `worker` to start `structure`; `false` if the order was refused.
    fn build_with_worker(&self, worker: UnitTag, structure: UnitTypeId, position: Point2) -> bool;
}

/// Read-only view of the host's unit-role assignment.
pub trait RoleRegistry: Send + Sync {
    fn role_of(&self, tag: UnitTag) -> Option<UnitRole>;
    fn tags_with_role(&self, role: UnitRole) -> Vec<UnitTag>;
}

/// Creep queries used by tumor spreading.
pub trait CreepQuery: Send + Sync {
    fn nearby_creep_edge(
        &self,
        position: Point2,
        search_radius: f32,
        spread_distance: f32,
    ) -> Option<Point2>;

    /// Creep position farthest from existing tumors' influence.
    fn lowest_tumor_influence(&self, position: Point2) -> Option<Point2>;

    fn random_creep_position(&self, position: Point2) -> Option<Point2>;
}

/// Fixed role assignment, also the default when no registry is supplied.
#[derive(Clone, Debug, Default)]
pub struct RoleTable {
    roles: HashMap<UnitTag, UnitRole>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, tag: UnitTag, role: UnitRole) -> Self {
        self.roles.insert(tag, role);
        self
    }
}

impl RoleRegistry for RoleTable {
    fn role_of(&self, tag: UnitTag) -> Option<UnitRole> {
        self.roles.get(&tag).copied()
    }

    fn tags_with_role(&self, role: UnitRole) -> Vec<UnitTag> {
        let mut tags: Vec<_> = self
            .roles
            .iter()
            .filter(|(_, r)| **r == role)
            .map(|(tag, _)| *tag)
            .collect();
        tags.sort();
        tags
    }
}

/// Creep service for races without creep.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCreep;

impl CreepQuery for NoCreep {
    fn nearby_creep_edge(&self, _: Point2, _: f32, _: f32) -> Option<Point2> {
        None
    }

    fn lowest_tumor_influence(&self, _: Point2) -> Option<Point2> {
        None
    }

    fn random_creep_position(&self, _: Point2) -> Option<Point2> {
        None
    }
}

/// Service handles injected into the context.
#[derive(Clone)]
pub struct Services {
    spatial: Arc<dyn SpatialQuery>,
    workers: Arc<dyn WorkerService>,
    roles: Arc<dyn RoleRegistry>,
    creep: Arc<dyn CreepQuery>,
}

impl Services {
    pub fn builder() -> ServicesBuilder {
        ServicesBuilder::default()
    }

    pub fn spatial(&self) -> &dyn SpatialQuery {
        self.spatial.as_ref()
    }

    pub fn workers(&self) -> &dyn WorkerService {
        self.workers.as_ref()
    }

    pub fn roles(&self) -> &dyn RoleRegistry {
        self.roles.as_ref()
    }

    pub fn creep(&self) -> &dyn CreepQuery {
        self.creep.as_ref()
    }
}

/// Spatial and worker services are required; roles and creep default to
/// [`RoleTable`] and [`NoCreep`].
#[derive(Default)]
pub struct ServicesBuilder {
    spatial: Option<Arc<dyn SpatialQuery>>,
    workers: Option<Arc<dyn WorkerService>>,
    roles: Option<Arc<dyn RoleRegistry>>,
    creep: Option<Arc<dyn CreepQuery>>,
}

impl ServicesBuilder {
    pub fn spatial(mut self, spatial: Arc<dyn SpatialQuery>) -> Self {
        self.spatial = Some(spatial);
        self
    }

    pub fn workers(mut self, workers: Arc<dyn WorkerService>) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn roles(mut self, roles: Arc<dyn RoleRegistry>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn creep(mut self, creep: Arc<dyn CreepQuery>) -> Self {
        self.creep = Some(creep);
        self
    }

    pub fn build(self) -> Result<Services> {
        let spatial = self
            .spatial
            .ok_or(RuntimeError::MissingService { name: "spatial" })?;
        let workers = self
            .workers
            .ok_or(RuntimeError::MissingService { name: "worker" })?;
        Ok(Services {
            spatial,
            workers,
            roles: self.roles.unwrap_or_else(|| Arc::new(RoleTable::new())),
            creep: self.creep.unwrap_or_else(|| Arc::new(NoCreep)),
        })
    }
}
