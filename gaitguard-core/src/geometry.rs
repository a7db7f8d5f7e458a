//! Minimal 3D vector for foot positions and headings
//!
//! Spatial sessions report positions with `y` up, so the walking plane is
//! `x`/`z`. Only the handful of operations the step detector needs are here.

use libm::sqrt;

/// Point or direction in session space (meters, `y` up)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vec3 {
    /// Lateral axis
    pub x: f64,
    /// Vertical axis
    pub y: f64,
    /// Depth axis
    pub z: f64,
}

impl Vec3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Build from components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise difference `self − other`
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Projection onto the walking plane (y dropped)
    pub fn horizontal(self) -> Self {
        Self::new(self.x, 0.0, self.z)
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm
    pub fn norm(self) -> f64 {
        sqrt(self.dot(self))
    }

    /// Unit vector in the same direction, `None` for a zero or non-finite vector
    pub fn normalized(self) -> Option<Self> {
        let norm = self.norm();
        if norm.is_finite() && norm > f64::EPSILON {
            Some(Self::new(self.x / norm, self.y / norm, self.z / norm))
        } else {
            None
        }
    }

    /// True when every component is finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_norm_ignores_height() {
        let v = Vec3::new(0.3, 0.5, 0.4);
        assert!((v.horizontal().norm() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(Vec3::ZERO.normalized().is_none());
        assert!(Vec3::new(f64::NAN, 0.0, 1.0).normalized().is_none());
        let unit = Vec3::new(0.0, 0.0, -2.0).normalized().unwrap();
        assert_eq!(unit, Vec3::new(0.0, 0.0, -1.0));
    }
}
