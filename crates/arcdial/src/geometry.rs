use derive_more::{From, Into};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle, measured the way cairo measures arcs: 0 points along +x and
    /// angles grow towards +y (clockwise on screen).
    pub fn on_circle(center: Point, radius: f64, angle: Angle) -> Self {
        let a = angle.radians();
        Self::new(center.x + radius * a.cos(), center.y + radius * a.sin())
    }

    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size of the square surface a slider is laid out in. Only `width` drives the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.width / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Into)]
pub struct Angle(f64);

impl Angle {
    pub const FULL_TURN: Angle = Angle(TAU);

    pub fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Same direction, folded into `[0, 2π)`.
    pub fn normalized(self) -> Self {
        Self(self.0.rem_euclid(TAU))
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_circle_follows_screen_orientation() {
        let center = Point::new(50.0, 50.0);
        let below = Point::on_circle(center, 10.0, Angle::from_degrees(90.0));
        assert!((below.x - 50.0).abs() < 1e-9);
        assert!((below.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_folds_into_one_turn() {
        let a = Angle::from_degrees(405.0).normalized();
        assert!((a.degrees() - 45.0).abs() < 1e-9);
        let b = Angle::from_degrees(-90.0).normalized();
        assert!((b.degrees() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_square_size_center_uses_width() {
        let size = Size::new(200.0, 120.0);
        assert_eq!(size.center(), Point::new(100.0, 100.0));
        assert_eq!(size.radius(), 100.0);
    }
}
