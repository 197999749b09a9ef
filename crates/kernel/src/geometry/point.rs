use serde::{Deserialize, Serialize};

/// A point in 3D Euclidean space. Y is the vertical (elevation) axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a point from single-precision buffer coordinates.
    pub fn from_f32(coords: [f32; 3]) -> Self {
        Self {
            x: coords[0] as f64,
            y: coords[1] as f64,
            z: coords[2] as f64,
        }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance in the horizontal X/Z plane, ignoring elevation.
    pub fn planar_distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
            z: (self.z + other.z) * 0.5,
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A point in the horizontal X/Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub z: f64,
}

impl PlanarPoint {
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Bearing of `other` as seen from this point, in degrees within (-180, 180].
    ///
    /// Measured as `atan2(self.x - other.x, self.z - other.z)`.
    pub fn bearing_to(&self, other: &Self) -> f64 {
        (self.x - other.x).atan2(self.z - other.z).to_degrees()
    }
}

impl From<Point3d> for PlanarPoint {
    fn from(p: Point3d) -> Self {
        Self { x: p.x, z: p.z }
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
