//! Toolkit-independent logic for an arc slider, underline text fields and a selection list.

pub mod arc;
pub mod binding;
pub mod field;
pub mod geometry;
pub mod macros;
pub mod mapper;
pub mod picker;
pub mod registry;
pub mod shapes;
pub mod slider;

pub use arc::{ArcConfig, ArcConfigError, ArcDirection};
pub use binding::Binding;
pub use geometry::{Angle, Point, Size};
pub use mapper::ArcValueMapper;
pub use slider::{CircularSlider, DragEvent, FeedbackSource, SelectionFeedback, SliderAction};
