//! Dense per-tile cost grids.
//!
//! A cell holds the traversal cost of a map tile: [`CostGrid::BASE_COST`] for
//! open ground, larger values where enemy influence adds danger, and infinity
//! for tiles that cannot be entered. Grids are produced by the host's map
//! analysis each frame and are read-only for the decision layer.
use crate::error::GridError;
use crate::geometry::Point2;

/// Which cost grid a query should consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridKind {
    Ground,
    Air,
    /// Ground grid that also allows cliff-jumping units over ledges.
    Climber,
    /// Air grid carrying only ground-to-air threats.
    AirVsGround,
    GroundAvoidance,
    AirAvoidance,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CostGrid {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl CostGrid {
    pub const BASE_COST: f32 = 1.0;

    /// A fully open grid with every cell at [`Self::BASE_COST`].
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Self::BASE_COST; width * height],
        }
    }

    /// Wraps row-major cell values (`cells[y * width + x]`).
    pub fn from_cells(width: usize, height: usize, cells: Vec<f32>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != width * height {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile containing `position`, `None` outside the grid.
    pub fn tile(&self, position: Point2) -> Option<(usize, usize)> {
        let x = position.x.floor();
        let y = position.y.floor();
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then_some((x, y))
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
        }
    }

    pub fn value_at(&self, position: Point2) -> Option<f32> {
        let (x, y) = self.tile(position)?;
        self.get(x, y)
    }

    /// Adds `weight` to every enterable cell whose center lies within `radius`.
    pub fn add_influence(&mut self, center: Point2, radius: f32, weight: f32) {
        let tiles: Vec<_> = self.tiles_within(center, radius).collect();
        for (x, y) in tiles {
            let idx = y * self.width + x;
            if self.cells[idx].is_finite() {
                self.cells[idx] += weight;
            }
        }
    }

    /// Whether the cell under `position` is at most `limit`. Off-grid is never below.
    pub fn is_below(&self, position: Point2, limit: f32) -> bool {
        self.value_at(position).is_some_and(|v| v <= limit)
    }

    pub fn is_pathable(&self, position: Point2) -> bool {
        self.value_at(position).is_some_and(f32::is_finite)
    }

    /// Whether every enterable cell within `radius` is below `limit`.
    pub fn all_below(&self, center: Point2, radius: f32, limit: f32) -> bool {
        self.tiles_within(center, radius)
            .map(|(x, y)| self.cells[y * self.width + x])
            .filter(|v| v.is_finite())
            .all(|v| v < limit)
    }

    /// Centers of the cheapest enterable cells within `radius` of `from`.
    pub fn lowest_cost_points(&self, from: Point2, radius: f32) -> Vec<Point2> {
        let mut best = f32::INFINITY;
        let mut points = Vec::new();
        for (x, y) in self.tiles_within(from, radius) {
            let value = self.cells[y * self.width + x];
            if !value.is_finite() || value > best {
                continue;
            }
            if value < best {
                best = value;
                points.clear();
            }
            points.push(Self::center_of(x, y));
        }
        points
    }

    /// Nearest of [`Self::lowest_cost_points`] to `from`.
    pub fn closest_lowest_cost_point(&self, from: Point2, radius: f32) -> Option<Point2> {
        self.lowest_cost_points(from, radius)
            .into_iter()
            .min_by(|a, b| from.distance_squared(*a).total_cmp(&from.distance_squared(*b)))
    }

    pub fn center_of(x: usize, y: usize) -> Point2 {
        Point2::new(x as f32 + 0.5, y as f32 + 0.5)
    }

    fn tiles_within(&self, center: Point2, radius: f32) -> impl Iterator<Item = (usize, usize)> + '_ {
        let min_x = (center.x - radius).floor().max(0.0) as usize;
        let min_y = (center.y - radius).floor().max(0.0) as usize;
        let max_x = ((center.x + radius).ceil().max(0.0) as usize).min(self.width);
        let max_y = ((center.y + radius).ceil().max(0.0) as usize).min(self.height);
        let radius_sq = radius * radius;
        (min_y..max_y)
            .flat_map(move |y| (min_x..max_x).map(move |x| (x, y)))
            .filter(move |&(x, y)| Self::center_of(x, y).distance_squared(center) <= radius_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_checks_dimensions() {
        assert_eq!(
            CostGrid::from_cells(2, 2, vec![1.0; 3]),
            Err(GridError::DimensionMismatch {
                width: 2,
                height: 2,
                cells: 3
            })
        );
        assert_eq!(CostGrid::from_cells(0, 2, Vec::new()), Err(GridError::Empty));
    }

    #[test]
    fn influence_makes_tiles_unsafe() {
        let mut grid = CostGrid::open(20, 20);
        let threat = Point2::new(10.5, 10.5);
        grid.add_influence(threat, 3.0, 50.0);
        assert!(!grid.is_below(threat, 1.0));
        assert!(grid.is_below(Point2::new(1.5, 1.5), 1.0));
        assert!(!grid.is_below(Point2::new(-1.0, 1.0), 1.0));
    }

    #[test]
    fn closest_lowest_cost_point_escapes_influence() {
        let mut grid = CostGrid::open(30, 30);
        let threat = Point2::new(15.5, 15.5);
        grid.add_influence(threat, 4.0, 50.0);
        let from = Point2::new(16.5, 15.5);
        let safe = grid
            .closest_lowest_cost_point(from, 7.0)
            .expect("open cells nearby");
        assert_eq!(grid.value_at(safe), Some(CostGrid::BASE_COST));
        assert!(safe.distance_to(threat) > 4.0);
    }

    #[test]
    fn unpathable_cells_are_skipped() {
        let mut grid = CostGrid::open(3, 1);
        grid.set(0, 0, f32::INFINITY);
        assert!(!grid.is_pathable(Point2::new(0.5, 0.5)));
        let points = grid.lowest_cost_points(Point2::new(0.5, 0.5), 5.0);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn overlapping_influence_stacks_around_walls() {
        let mut grid = CostGrid::open(5, 1);
        grid.set(2, 0, f32::INFINITY);
        grid.add_influence(Point2::new(1.5, 0.5), 1.0, 10.0);
        grid.add_influence(Point2::new(1.5, 0.5), 1.0, 5.0);

        assert_eq!(grid.get(1, 0), Some(CostGrid::BASE_COST + 15.0));
        assert_eq!(grid.get(2, 0), Some(f32::INFINITY));
        assert_eq!(grid.get(4, 0), Some(CostGrid::BASE_COST));
    }
}
