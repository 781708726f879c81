// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A point on the 2D integer lattice.
///
/// Points compare equal only to other points with the same coordinates.
/// Arithmetic is componentwise, and only `+=`/`-=` mutate the receiver.
#[derive(Clone, Copy, Eq, Hash, PartialEq, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

// JSON shape for a point. Coordinates are decoded as raw numbers so that
// non-integer values fail with a coordinate error instead of a generic
// deserialization error.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPoint {
    x: serde_json::Number,
    y: serde_json::Number,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_center(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Serialize to a JSON object with exactly the keys `x` and `y`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a point from a JSON object with exactly the keys `x` and `y`,
    /// both integers
    pub fn from_json(text: &str) -> Result<Point> {
        let raw: RawPoint = serde_json::from_str(text)?;
        let x = raw.x.as_i64().ok_or(Error::NonIntegerCoordinate("x"))?;
        let y = raw.y.as_i64().ok_or(Error::NonIntegerCoordinate("y"))?;
        Ok(Point::new(x, y))
    }
}

pub fn point2(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        point2(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        point2(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Point) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        point2(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
