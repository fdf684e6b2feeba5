use crate::geometry::Angle;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::f64::consts::TAU;
use std::ops::RangeInclusive;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

pub const DEFAULT_START_DEGREES: f64 = 45.0;
pub const DEFAULT_END_DEGREES: f64 = 135.0;

/// Winding of the drawn track between `start_angle` and `end_angle`. Value mapping is the
/// same for both; only the track path follows it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ArcDirection {
    #[default]
    #[strum(to_string = "clockwise", serialize = "cw")]
    Clockwise,
    #[strum(
        to_string = "counterclockwise",
        serialize = "counter-clockwise",
        serialize = "ccw"
    )]
    CounterClockwise,
}

impl ArcDirection {
    pub fn is_clockwise(self) -> bool {
        self == Self::Clockwise
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArcConfigError {
    #[error("Arc angles must be finite")]
    NonFiniteAngle,
    #[error("Arc gap must lie strictly between 0° and 360°, got {0:.1}°")]
    DegenerateGap(f64),
    #[error("Value range must be finite with lower < upper, got {lower}..={upper}")]
    InvalidRange { lower: f64, upper: f64 },
    #[error("Step must be finite and non-negative, got {0}")]
    InvalidStep(f64),
}

/// Immutable arc slider configuration. The track sweeps from `end_angle` forward through a
/// full turn back to `start_angle`; the short gap between the two is left open.
///
/// Angles are stored shifted by whole turns so that `end_angle` lies in `[0, 2π)` and
/// `start_angle = end_angle - gap`, with the gap folded into `(0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcConfig {
    start_angle: Angle,
    end_angle: Angle,
    direction: ArcDirection,
    lower: f64,
    upper: f64,
    step: f64,
}

impl ArcConfig {
    pub fn new(
        start_angle: Angle,
        end_angle: Angle,
        direction: ArcDirection,
        range: RangeInclusive<f64>,
        step: f64,
    ) -> Result<Self, ArcConfigError> {
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(ArcConfigError::NonFiniteAngle);
        }

        // a gap crossing 0° (e.g. 350° -> 10°) is the same gap one turn later
        let raw_gap = end_angle.radians() - start_angle.radians();
        let gap = raw_gap.rem_euclid(TAU);
        if raw_gap.abs() >= TAU || gap <= 0.0 || gap >= TAU {
            return Err(ArcConfigError::DegenerateGap(raw_gap.to_degrees()));
        }

        let (lower, upper) = range.into_inner();
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(ArcConfigError::InvalidRange { lower, upper });
        }

        if !step.is_finite() || step < 0.0 {
            return Err(ArcConfigError::InvalidStep(step));
        }

        let end = end_angle.normalized();
        Ok(Self {
            start_angle: Angle::from_radians(end.radians() - gap),
            end_angle: end,
            direction,
            lower,
            upper,
            step,
        })
    }

    /// Default half-circle style arc (45° → 135°, clockwise, continuous) over `range`.
    pub fn with_range(range: RangeInclusive<f64>) -> Result<Self, ArcConfigError> {
        Self::new(
            Angle::from_degrees(DEFAULT_START_DEGREES),
            Angle::from_degrees(DEFAULT_END_DEGREES),
            ArcDirection::default(),
            range,
            0.0,
        )
    }

    /// Same arc with a different quantization step.
    pub fn with_step(self, step: f64) -> Result<Self, ArcConfigError> {
        Self::new(
            self.start_angle,
            self.end_angle,
            self.direction,
            self.lower..=self.upper,
            step,
        )
    }

    pub fn start_angle(&self) -> Angle {
        self.start_angle
    }

    pub fn end_angle(&self) -> Angle {
        self.end_angle
    }

    pub fn direction(&self) -> ArcDirection {
        self.direction
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.lower..=self.upper
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn contains(&self, value: f64) -> bool {
        self.range().contains(&value)
    }

    /// Angular distance swept by the track: a full turn minus the gap.
    pub fn arc_span(&self) -> Angle {
        Angle::from_radians(TAU - (self.end_angle.radians() - self.start_angle.radians()))
    }

    /// Width / height ratio that fits the track without laying out the unused part of the
    /// circle below the gap.
    pub fn aspect_ratio(&self) -> f64 {
        let y = self
            .start_angle
            .radians()
            .sin()
            .max(self.end_angle.radians().sin());
        2.0 / (y + 1.0)
    }
}
