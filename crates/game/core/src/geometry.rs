use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Continuous map coordinate in game distance units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point2) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn distance_squared(self, other: Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Moves `distance` from `self` in the direction of `target`.
    ///
    /// Returns `self` unchanged when both points coincide, since no direction
    /// is defined.
    pub fn towards(self, target: Point2, distance: f32) -> Point2 {
        let d = self.distance_to(target);
        if d <= f32::EPSILON {
            return self;
        }
        self + (target - self) * (distance / d)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point2 {
        Point2::new(self.x + dx, self.y + dy)
    }

    /// Heading from `self` to `other` in radians, in `(-PI, PI]`.
    pub fn angle_to(self, other: Point2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Rounds both coordinates to one decimal place.
    ///
    /// Orders reported by the game carry float noise; comparing rounded
    /// points keeps "same destination" checks stable across frames.
    pub fn rounded(self) -> Point2 {
        Point2::new((self.x * 10.0).round() / 10.0, (self.y * 10.0).round() / 10.0)
    }

    /// Arithmetic mean of the given points, `None` when empty.
    pub fn centroid<I>(points: I) -> Option<Point2>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut sum = Point2::ORIGIN;
        let mut count = 0u32;
        for point in points {
            sum = sum + point;
            count += 1;
        }
        (count > 0).then(|| sum * (1.0 / count as f32))
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;
    fn mul(self, rhs: f32) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
