use crate::arc::ArcConfig;
use crate::geometry::{Angle, Point, Size};
use std::f64::consts::{PI, TAU};

/// Stateless conversions between slider values, arc angles and pointer positions.
///
/// Angles follow screen orientation: 0 points right and positive angles turn towards +y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcValueMapper {
    config: ArcConfig,
}

impl ArcValueMapper {
    pub fn new(config: ArcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArcConfig {
        &self.config
    }

    /// `lower` maps to `end_angle`, `upper` to `end_angle + arc_span`.
    pub fn value_to_angle(&self, value: f64) -> Angle {
        let ratio = (value - self.config.lower()) / (self.config.upper() - self.config.lower());
        Angle::from_radians(
            ratio * self.config.arc_span().radians() + self.config.end_angle().radians(),
        )
    }

    /// Maps a pointer position inside a square `surface` onto the range.
    ///
    /// Returns `None` when the position falls outside the sweep (in the gap, or past either
    /// end). Callers keep their current value in that case rather than clamping.
    pub fn candidate_value(&self, point: Point, surface: Size) -> Option<f64> {
        let center = surface.center();
        let radius = surface.radius();
        if radius <= 0.0 || !radius.is_finite() {
            return None;
        }
        let x = (center.x - point.x) / radius;
        let y = (center.y - point.y) / radius;

        let end = self.config.end_angle().radians();
        let mut angle = y.atan2(x) + PI;
        // unwrap the seam so the sweep is one increasing interval starting at `end`
        if angle < end {
            angle += TAU;
        }

        let ratio = (angle - end) / self.config.arc_span().radians();
        let candidate = ratio * (self.config.upper() - self.config.lower()) + self.config.lower();
        self.config.contains(candidate).then_some(candidate)
    }

    /// Like [`Self::candidate_value`], but returns `previous` for rejected positions.
    pub fn point_to_candidate_value(&self, point: Point, surface: Size, previous: f64) -> f64 {
        self.candidate_value(point, surface).unwrap_or(previous)
    }

    /// Rounds to the nearest multiple of `step`. The result is not re-clamped to the range.
    pub fn apply_step(&self, value: f64) -> f64 {
        let step = self.config.step();
        if step == 0.0 {
            return value;
        }
        (value / step).round() * step
    }

    /// Center of the handle for `value`, snapped to whole pixels.
    pub fn handle_center(&self, value: f64, surface: Size) -> Point {
        Point::on_circle(
            surface.center(),
            surface.radius(),
            self.value_to_angle(value),
        )
        .rounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::ArcDirection;

    const EPS: f64 = 1e-9;

    fn mapper() -> ArcValueMapper {
        ArcValueMapper::new(ArcConfig::with_range(1.0..=100.0).unwrap())
    }

    fn point_at(angle: Angle, surface: Size) -> Point {
        Point::on_circle(surface.center(), surface.radius(), angle)
    }

    #[test]
    fn test_full_range_sweep() {
        let m = mapper();
        let lower = m.value_to_angle(1.0);
        let upper = m.value_to_angle(100.0);
        assert!((lower.degrees() - 135.0).abs() < EPS);
        assert!((upper.degrees() - 405.0).abs() < EPS);
        assert!((upper.normalized().degrees() - 45.0).abs() < EPS);
    }

    #[test]
    fn test_full_range_sweep_other_arc() {
        let config = ArcConfig::new(
            Angle::from_degrees(250.0),
            Angle::from_degrees(290.0),
            ArcDirection::CounterClockwise,
            -10.0..=10.0,
            0.0,
        )
        .unwrap();
        let m = ArcValueMapper::new(config);
        assert!((m.value_to_angle(-10.0).degrees() - 290.0).abs() < EPS);
        assert!((m.value_to_angle(10.0).degrees() - (290.0 + 320.0)).abs() < EPS);
        assert!((m.value_to_angle(10.0).normalized().degrees() - 250.0).abs() < EPS);
    }

    #[test]
    fn test_round_trip_inside_range() {
        let m = mapper();
        let surface = Size::square(240.0);
        for v in [1.5, 10.0, 26.0, 50.0, 73.25, 99.0] {
            let p = point_at(m.value_to_angle(v), surface);
            let back = m.point_to_candidate_value(p, surface, -1.0);
            assert!((back - v).abs() < 1e-6, "{v} came back as {back}");
        }
    }

    #[test]
    fn test_round_trip_on_wrapped_arc() {
        let config = ArcConfig::new(
            Angle::from_degrees(-100.0),
            Angle::from_degrees(-80.0),
            ArcDirection::Clockwise,
            0.0..=1.0,
            0.0,
        )
        .unwrap();
        let m = ArcValueMapper::new(config);
        let surface = Size::square(100.0);
        for v in [0.05, 0.3, 0.5, 0.9] {
            let p = point_at(m.value_to_angle(v), surface);
            let back = m.candidate_value(p, surface).unwrap();
            assert!((back - v).abs() < 1e-6);
        }
    }

    #[test]
    fn test_arc_with_gap_across_zero_degrees() {
        let config = ArcConfig::new(
            Angle::from_degrees(350.0),
            Angle::from_degrees(10.0),
            ArcDirection::Clockwise,
            0.0..=34.0,
            0.0,
        )
        .unwrap();
        let m = ArcValueMapper::new(config);
        let surface = Size::square(200.0);

        assert!((m.value_to_angle(0.0).degrees() - 10.0).abs() < EPS);
        assert!((m.value_to_angle(34.0).normalized().degrees() - 350.0).abs() < EPS);
        for v in [0.5, 9.0, 17.0, 33.5] {
            let p = point_at(m.value_to_angle(v), surface);
            let back = m.candidate_value(p, surface).unwrap();
            assert!((back - v).abs() < 1e-6, "{v} came back as {back}");
        }

        // gap straddles the positive x axis
        let gap_mid = point_at(Angle::from_degrees(0.0), surface);
        assert_eq!(m.candidate_value(gap_mid, surface), None);
        assert_eq!(m.point_to_candidate_value(gap_mid, surface, 12.0), 12.0);
    }

    #[test]
    fn test_monotonic_along_sweep() {
        let m = mapper();
        let end = m.config().end_angle().radians();
        let mut last = f64::NEG_INFINITY;
        for i in 0..=99 {
            let v = 1.0 + i as f64;
            let offset = m.value_to_angle(v).radians() - end;
            assert!(offset > last);
            assert!(offset <= m.config().arc_span().radians() + EPS);
            last = offset;
        }
    }

    #[test]
    fn test_freeze_in_gap() {
        let m = mapper();
        let surface = Size::square(200.0);
        // midpoint of the 45°..135° gap is straight down
        let p = Point::new(100.0, 180.0);
        assert_eq!(m.candidate_value(p, surface), None);
        assert_eq!(m.point_to_candidate_value(p, surface, 50.0), 50.0);
    }

    #[test]
    fn test_freeze_just_outside_each_end() {
        let m = mapper();
        let surface = Size::square(200.0);
        let before = point_at(Angle::from_degrees(134.0), surface);
        let after = point_at(Angle::from_degrees(46.0), surface);
        assert_eq!(m.point_to_candidate_value(before, surface, 42.0), 42.0);
        assert_eq!(m.point_to_candidate_value(after, surface, 42.0), 42.0);

        let inside = point_at(Angle::from_degrees(136.0), surface);
        assert!(m.candidate_value(inside, surface).is_some());
    }

    #[test]
    fn test_zero_surface_degrades_to_previous() {
        let m = mapper();
        let v = m.point_to_candidate_value(Point::new(3.0, 4.0), Size::square(0.0), 12.0);
        assert_eq!(v, 12.0);
    }

    #[test]
    fn test_apply_step() {
        let stepped = ArcValueMapper::new(
            ArcConfig::with_range(1.0..=100.0)
                .unwrap()
                .with_step(0.1)
                .unwrap(),
        );
        assert!((stepped.apply_step(26.37) - 26.4).abs() < EPS);
        assert!((stepped.apply_step(26.34) - 26.3).abs() < EPS);

        let continuous = mapper();
        for x in [-3.5, 0.0, 26.37, 1e9] {
            assert_eq!(continuous.apply_step(x), x);
        }
    }

    #[test]
    fn test_apply_step_may_overshoot_upper() {
        let m = ArcValueMapper::new(
            ArcConfig::with_range(1.0..=100.0)
                .unwrap()
                .with_step(60.0)
                .unwrap(),
        );
        assert_eq!(m.apply_step(99.0), 120.0);
    }

    #[test]
    fn test_handle_center_is_stable_and_on_circle() {
        let m = mapper();
        let surface = Size::square(200.0);
        let first = m.handle_center(26.0, surface);
        assert_eq!(first, m.handle_center(26.0, surface));
        assert_eq!(first, first.rounded());
        assert!((first.distance(surface.center()) - 100.0).abs() < 1.0);

        let lower = m.handle_center(1.0, surface);
        assert_eq!(lower, Point::new(29.0, 171.0));
    }
}
