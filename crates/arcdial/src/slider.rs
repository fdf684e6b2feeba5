use crate::arc::ArcConfig;
use crate::binding::Binding;
use crate::geometry::{Point, Size};
use crate::mapper::ArcValueMapper;
use crate::shapes::SliderShapes;

/// Discrete cue fired once per accepted value change (selection tick, haptics, sound).
pub trait SelectionFeedback {
    fn selection_changed(&mut self);

    /// Warm up for the next change. Called right after every `selection_changed`.
    fn prepare(&mut self) {}
}

/// Hands out a feedback generator for the duration of one drag.
pub trait FeedbackSource {
    type Generator: SelectionFeedback;

    fn generator(&mut self) -> Self::Generator;
}

/// Feedback source that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl SelectionFeedback for NoFeedback {
    fn selection_changed(&mut self) {}
}

impl FeedbackSource for NoFeedback {
    type Generator = NoFeedback;

    fn generator(&mut self) -> Self::Generator {
        NoFeedback
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Began(Point),
    Moved(Point),
    Ended,
    Cancelled,
}

/// `generator` is created on the first accepted change of a drag and dropped when the drag
/// ends or is cancelled.
#[derive(Debug)]
pub enum DragPhase<G> {
    Idle,
    Dragging { anchor: Point, generator: Option<G> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderAction {
    pub should_redraw: bool,
    pub value_changed: bool,
}

impl SliderAction {
    pub fn new(should_redraw: bool, value_changed: bool) -> Self {
        Self {
            should_redraw,
            value_changed,
        }
    }
}

pub struct CircularSlider<F: FeedbackSource> {
    mapper: ArcValueMapper,
    value: Binding<f64>,
    feedback: F,
    phase: DragPhase<F::Generator>,
}

impl<F: FeedbackSource> CircularSlider<F> {
    pub fn new(config: ArcConfig, value: Binding<f64>, feedback: F) -> Self {
        Self {
            mapper: ArcValueMapper::new(config),
            value,
            feedback,
            phase: DragPhase::Idle,
        }
    }

    pub fn config(&self) -> &ArcConfig {
        self.mapper.config()
    }

    pub fn mapper(&self) -> &ArcValueMapper {
        &self.mapper
    }

    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Owner-side assignment. Clamped into range, never fires feedback.
    pub fn set_value(&mut self, value: f64) {
        let config = self.mapper.config();
        self.value.set(value.clamp(config.lower(), config.upper()));
    }

    pub fn phase(&self) -> &DragPhase<F::Generator> {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn drag_anchor(&self) -> Option<Point> {
        match self.phase {
            DragPhase::Dragging { anchor, .. } => Some(anchor),
            DragPhase::Idle => None,
        }
    }

    /// Feeds one pointer event. `surface` is the square the track is inscribed in, with
    /// `point` in the same coordinate space. A drag only starts when `Began` lands on the
    /// handle; presses elsewhere on the track leave the value alone.
    pub fn handle(&mut self, event: DragEvent, surface: Size) -> SliderAction {
        match event {
            DragEvent::Began(point) => {
                if self.is_dragging() {
                    log::debug!("Drag restarted without an end event");
                }
                if !self.shapes(surface).handle.grabs(point) {
                    log::trace!("Press at {:?} missed the handle", point);
                    self.phase = DragPhase::Idle;
                    return SliderAction::default();
                }
                self.phase = DragPhase::Dragging {
                    anchor: point,
                    generator: None,
                };
                self.drag_to(point, surface)
            }
            DragEvent::Moved(point) => match self.phase {
                DragPhase::Dragging { .. } => self.drag_to(point, surface),
                DragPhase::Idle => SliderAction::default(),
            },
            DragEvent::Ended | DragEvent::Cancelled => {
                if let DragPhase::Dragging { anchor, .. } = self.phase {
                    log::trace!("Drag from {:?} finished: {:?}", anchor, event);
                }
                self.phase = DragPhase::Idle;
                SliderAction::default()
            }
        }
    }

    fn drag_to(&mut self, point: Point, surface: Size) -> SliderAction {
        let Some(candidate) = self.mapper.candidate_value(point, surface) else {
            return SliderAction::default();
        };

        let old = self.value.get();
        let new = self.mapper.apply_step(candidate);
        if new == old {
            return SliderAction::default();
        }

        self.value.set(new);
        log::trace!("Slider value {} -> {}", old, new);

        if let DragPhase::Dragging { generator, .. } = &mut self.phase {
            let generator = generator.get_or_insert_with(|| self.feedback.generator());
            generator.selection_changed();
            generator.prepare();
        }

        SliderAction::new(true, true)
    }

    pub fn shapes(&self, surface: Size) -> SliderShapes {
        SliderShapes::layout(&self.mapper, self.value.get(), surface)
    }
}
