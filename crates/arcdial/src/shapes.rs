use crate::geometry::{Angle, Point, Size};
use crate::mapper::ArcValueMapper;

pub const LINE_WIDTH: f64 = 8.0;
pub const HANDLE_RADIUS: f64 = 16.0;
/// Inset between the host surface and the circle so the stroke and handle stay visible.
pub const PADDING: f64 = LINE_WIDTH / 2.0 + HANDLE_RADIUS;
/// How far from the handle center a press still grabs the handle.
pub const GRAB_RADIUS: f64 = HANDLE_RADIUS + LINE_WIDTH / 2.0;

/// Stroked arc the handle travels along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackShape {
    pub center: Point,
    pub radius: f64,
    pub start: Angle,
    pub end: Angle,
    pub clockwise: bool,
    pub line_width: f64,
}

impl TrackShape {
    /// `(from, to)` for a positive-direction arc (cairo `arc`).
    ///
    /// `clockwise` uses the flipped-coordinate convention of the original toolkit, where a
    /// clockwise path from `start` to `end` visually runs backwards through the sweep.
    pub fn positive_span(&self) -> (Angle, Angle) {
        if self.clockwise {
            let turn = Angle::FULL_TURN.radians();
            (self.end, Angle::from_radians(self.start.radians() + turn))
        } else {
            (self.start, self.end)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleShape {
    pub center: Point,
    pub radius: f64,
}

impl HandleShape {
    pub fn grabs(&self, point: Point) -> bool {
        self.center.distance(point) <= GRAB_RADIUS
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderShapes {
    pub track: TrackShape,
    pub handle: HandleShape,
}

impl SliderShapes {
    pub fn layout(mapper: &ArcValueMapper, value: f64, surface: Size) -> Self {
        let config = mapper.config();
        Self {
            track: TrackShape {
                center: surface.center(),
                radius: surface.radius(),
                start: config.start_angle(),
                end: config.end_angle(),
                clockwise: config.direction().is_clockwise(),
                line_width: LINE_WIDTH,
            },
            handle: HandleShape {
                center: mapper.handle_center(value, surface),
                radius: HANDLE_RADIUS,
            },
        }
    }
}

/// Drawing surface left after removing [`PADDING`] from a host allocation, plus the offset
/// of its origin inside the allocation. Only the width drives the slider geometry, so hosts
/// keep the allocation at the arc's aspect ratio.
pub fn inset_surface(width: f64, height: f64) -> (Size, Point) {
    let inner = (width - 2.0 * PADDING).max(0.0);
    let inner_height = (height - 2.0 * PADDING).max(0.0);
    (
        Size::new(inner, inner_height),
        Point::new(PADDING, PADDING),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::{ArcConfig, ArcDirection};

    #[test]
    fn test_layout_for_default_arc() {
        let mapper = ArcValueMapper::new(ArcConfig::with_range(1.0..=100.0).unwrap());
        let shapes = SliderShapes::layout(&mapper, 1.0, Size::square(200.0));

        assert_eq!(shapes.track.center, Point::new(100.0, 100.0));
        assert_eq!(shapes.track.radius, 100.0);
        assert!(shapes.track.clockwise);
        assert_eq!(shapes.handle.radius, HANDLE_RADIUS);
        assert_eq!(shapes.handle.center, Point::new(29.0, 171.0));

        let (from, to) = shapes.track.positive_span();
        assert!((from.degrees() - 135.0).abs() < 1e-9);
        assert!((to.degrees() - 405.0).abs() < 1e-9);
    }

    #[test]
    fn test_counter_clockwise_track_runs_start_to_end() {
        let config = ArcConfig::new(
            Angle::from_degrees(45.0),
            Angle::from_degrees(135.0),
            ArcDirection::CounterClockwise,
            0.0..=1.0,
            0.0,
        )
        .unwrap();
        let shapes = SliderShapes::layout(&ArcValueMapper::new(config), 0.5, Size::square(50.0));
        let (from, to) = shapes.track.positive_span();
        assert!((from.degrees() - 45.0).abs() < 1e-9);
        assert!((to.degrees() - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_is_idempotent_without_mutation() {
        let mapper = ArcValueMapper::new(ArcConfig::with_range(0.0..=10.0).unwrap());
        let surface = Size::square(320.0);
        let first = SliderShapes::layout(&mapper, 3.3, surface);
        for _ in 0..3 {
            assert_eq!(SliderShapes::layout(&mapper, 3.3, surface), first);
        }
    }

    #[test]
    fn test_handle_grab_area() {
        let handle = HandleShape {
            center: Point::new(29.0, 171.0),
            radius: HANDLE_RADIUS,
        };
        assert!(handle.grabs(Point::new(29.0, 171.0)));
        assert!(handle.grabs(Point::new(29.0 + GRAB_RADIUS, 171.0)));
        assert!(!handle.grabs(Point::new(29.0, 171.0 - GRAB_RADIUS - 0.5)));
        assert!(!handle.grabs(Point::new(195.3, 130.4)));
    }

    #[test]
    fn test_inset_surface() {
        let (surface, origin) = inset_surface(240.0, 200.0);
        assert_eq!(surface, Size::new(200.0, 160.0));
        assert_eq!(origin, Point::new(20.0, 20.0));

        let (tiny, _) = inset_surface(10.0, 10.0);
        assert_eq!(tiny, Size::new(0.0, 0.0));
    }
}
