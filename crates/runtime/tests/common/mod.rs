//! Shared stub world for runtime integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use game_core::{
    BotConfig, BuildTarget, CostGrid, Frame, GridKind, Point2, Unit, UnitTag, UnitTypeId,
};
use runtime::{
    BotContext, CreepQuery, PathRequest, RoleTable, Services, SpatialQuery, UnitQuery,
    WorkerService,
};

pub const MAP_SIZE: usize = 64;

/// Open map with optional per-kind overrides, recording every path query.
pub struct StubSpatial {
    grids: HashMap<GridKind, CostGrid>,
    open: CostGrid,
    pub placement: Option<Point2>,
    pub visible: bool,
    pub in_range: Vec<UnitTag>,
    pub requests: Mutex<Vec<PathRequest>>,
}

impl StubSpatial {
    pub fn new() -> Self {
        Self {
            grids: HashMap::new(),
            open: CostGrid::open(MAP_SIZE, MAP_SIZE),
            placement: Some(Point2::new(20.0, 20.0)),
            visible: true,
            in_range: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_grid(mut self, kind: GridKind, grid: CostGrid) -> Self {
        self.grids.insert(kind, grid);
        self
    }

    /// Ground grid with enemy influence of `weight` around `center`.
    pub fn with_danger(self, center: Point2, radius: f32, weight: f32) -> Self {
        let mut grid = CostGrid::open(MAP_SIZE, MAP_SIZE);
        grid.add_influence(center, radius, weight);
        self.with_grid(GridKind::Ground, grid)
    }

    pub fn path_requests(&self) -> Vec<PathRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SpatialQuery for StubSpatial {
    fn grid(&self, kind: GridKind) -> &CostGrid {
        self.grids.get(&kind).unwrap_or(&self.open)
    }

    fn next_path_step(&self, request: &PathRequest) -> Point2 {
        self.requests.lock().unwrap().push(*request);
        request.target
    }

    fn units_in_range(
        &self,
        points: &[Point2],
        _distance: f32,
        _query: UnitQuery,
    ) -> Vec<Vec<UnitTag>> {
        vec![self.in_range.clone(); points.len()]
    }

    fn find_placement(
        &self,
        _structure: UnitTypeId,
        _target: Option<BuildTarget>,
        _near: Point2,
    ) -> Option<Point2> {
        self.placement
    }

    fn is_position_visible(&self, _position: Point2) -> bool {
        self.visible
    }
}

/// Hands out one fixed worker and records build orders.
pub struct StubWorkers {
    pub worker: Option<UnitTag>,
    pub accept: bool,
    pub builds: Mutex<Vec<(UnitTag, UnitTypeId, Point2)>>,
}

impl StubWorkers {
    pub fn new(worker: Option<UnitTag>) -> Self {
        Self {
            worker,
            accept: true,
            builds: Mutex::new(Vec::new()),
        }
    }

    pub fn builds(&self) -> Vec<(UnitTag, UnitTypeId, Point2)> {
        self.builds.lock().unwrap().clone()
    }
}

impl WorkerService for StubWorkers {
    fn select_worker(&self, _target: Point2, _force_close: bool) -> Option<UnitTag> {
        self.worker
    }

    fn build_with_worker(&self, worker: UnitTag, structure: UnitTypeId, position: Point2) -> bool {
        if self.accept {
            self.builds.lock().unwrap().push((worker, structure, position));
        }
        self.accept
    }
}

/// Fixed answers for each creep placement tier.
#[derive(Default)]
pub struct StubCreep {
    pub edge: Option<Point2>,
    pub lowest_influence: Option<Point2>,
    pub random: Option<Point2>,
}

impl CreepQuery for StubCreep {
    fn nearby_creep_edge(&self, _: Point2, _: f32, _: f32) -> Option<Point2> {
        self.edge
    }

    fn lowest_tumor_influence(&self, _: Point2) -> Option<Point2> {
        self.lowest_influence
    }

    fn random_creep_position(&self, _: Point2) -> Option<Point2> {
        self.random
    }
}

/// Stub services plus handles for inspecting what they saw.
pub struct World {
    pub spatial: Arc<StubSpatial>,
    pub workers: Arc<StubWorkers>,
    pub creep: Arc<StubCreep>,
    pub roles: RoleTable,
}

impl World {
    pub fn new() -> Self {
        Self::with(StubSpatial::new(), StubWorkers::new(Some(UnitTag(900))))
    }

    pub fn with(spatial: StubSpatial, workers: StubWorkers) -> Self {
        Self {
            spatial: Arc::new(spatial),
            workers: Arc::new(workers),
            creep: Arc::new(StubCreep::default()),
            roles: RoleTable::new(),
        }
    }

    pub fn with_creep(mut self, creep: StubCreep) -> Self {
        self.creep = Arc::new(creep);
        self
    }

    pub fn services(&self) -> Services {
        Services::builder()
            .spatial(self.spatial.clone())
            .workers(self.workers.clone())
            .roles(Arc::new(self.roles.clone()))
            .creep(self.creep.clone())
            .build()
            .expect("stub services are complete")
    }

    /// Context already positioned on `frame`.
    pub fn context(&self, frame: Frame) -> BotContext {
        let mut ctx = BotContext::new(self.services(), BotConfig::default());
        ctx.begin_frame(frame);
        ctx
    }
}

pub fn unit(tag: u64, type_id: UnitTypeId, x: f32, y: f32) -> Unit {
    Unit::new(UnitTag(tag), type_id, Point2::new(x, y))
}

/// Ground unit with a ranged ground weapon.
pub fn shooter(tag: u64, x: f32, y: f32, range: f32) -> Unit {
    Unit {
        ground_range: Some(range),
        ..unit(tag, UnitTypeId::Marine, x, y)
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
