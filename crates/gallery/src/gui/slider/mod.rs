use crate::config::SliderSettings;
use crate::gui::theme::ThemeColors;
use arcdial::shapes;
use arcdial::slider::{FeedbackSource, SelectionFeedback};
use arcdial::{Binding, CircularSlider, DragEvent, Point};
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub mod view;

pub const MIN_SIDE: i32 = 280;
pub const STEP_MAX: f64 = 100.0;
pub const STEP_INCREMENT: f64 = 0.1;

/// Desktop stand-in for a selection haptic.
#[derive(Debug, Default)]
pub struct LogFeedback;

#[derive(Debug)]
pub struct SelectionTick {
    ticks: usize,
}

impl SelectionFeedback for SelectionTick {
    fn selection_changed(&mut self) {
        self.ticks += 1;
        log::debug!("Selection tick {}", self.ticks);
    }
}

impl Drop for SelectionTick {
    fn drop(&mut self) {
        log::debug!("Feedback released after {} ticks", self.ticks);
    }
}

impl FeedbackSource for LogFeedback {
    type Generator = SelectionTick;

    fn generator(&mut self) -> SelectionTick {
        SelectionTick { ticks: 0 }
    }
}

type SharedSlider = Rc<RefCell<CircularSlider<LogFeedback>>>;

pub fn format_value(value: f64) -> String {
    format!("{:.1}", value)
}

/// Arc slider over the configured range with a big value readout and a step picker.
pub fn page(settings: &SliderSettings) -> gtk::Widget {
    let config = match settings.arc_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Cannot build slider: {}", e);
            return gtk::Label::new(Some(&e.to_string())).upcast();
        }
    };

    let value = Rc::new(Cell::new(
        settings.initial.clamp(config.lower(), config.upper()),
    ));

    let value_label = gtk::Label::new(Some(&format_value(value.get())));
    value_label.add_css_class("gallery-value");
    // sits over the drawing area; let presses fall through to the drag gesture
    value_label.set_can_target(false);

    // the owner keeps the value; every slider instance gets a fresh handle onto it
    let binding = {
        let value = value.clone();
        let label = value_label.clone();
        move || {
            let reader = value.clone();
            let writer = value.clone();
            let label = label.clone();
            Binding::new(
                move || reader.get(),
                move |v| {
                    writer.set(v);
                    label.set_text(&format_value(v));
                },
            )
        }
    };

    let slider: SharedSlider = Rc::new(RefCell::new(CircularSlider::new(
        config,
        binding(),
        LogFeedback,
    )));

    let drawing_area = gtk::DrawingArea::builder()
        .hexpand(true)
        .vexpand(true)
        .content_width(MIN_SIDE)
        .content_height(MIN_SIDE)
        .build();
    drawing_area.add_css_class("gallery-drawing-area");

    let slider_draw = slider.clone();
    drawing_area.set_draw_func(move |area, cr, width, height| {
        let (surface, origin) = shapes::inset_surface(width as f64, height as f64);
        let colors = ThemeColors::from_context(&area.style_context());
        let layout = slider_draw.borrow().shapes(surface);
        if let Err(e) = view::draw(cr, &layout, origin, &colors) {
            log::error!("Drawing error: {}", e);
        }
    });

    drawing_area.add_controller(drag_controller(&slider));

    let frame = gtk::AspectFrame::new(0.5, 0.5, config.aspect_ratio() as f32, false);
    frame.set_child(Some(&drawing_area));

    let step_adjustment =
        gtk::Adjustment::new(config.step(), 0.0, STEP_MAX, STEP_INCREMENT, 1.0, 0.0);
    let step_button = gtk::SpinButton::new(Some(&step_adjustment), STEP_INCREMENT, 1);
    let area = drawing_area.clone();
    let slider_step = slider.clone();
    step_button.connect_value_changed(move |button| {
        let step = button.value();
        let next = slider_step.borrow().config().with_step(step);
        match next {
            Ok(config) => {
                // configuration is fixed per slider, so swap in a new one
                *slider_step.borrow_mut() = CircularSlider::new(config, binding(), LogFeedback);
                area.queue_draw();
                log::debug!("Slider step set to {}", step);
            }
            Err(e) => log::error!("Rejected slider step: {}", e),
        }
    });

    let step_row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    step_row.set_halign(gtk::Align::Center);
    step_row.append(&gtk::Label::new(Some("Step:")));
    step_row.append(&step_button);

    let readout = gtk::Box::new(gtk::Orientation::Vertical, 24);
    readout.set_halign(gtk::Align::Center);
    readout.set_valign(gtk::Align::Center);
    readout.append(&value_label);
    readout.append(&step_row);

    let overlay = gtk::Overlay::new();
    overlay.set_child(Some(&frame));
    overlay.add_overlay(&readout);
    overlay.set_margin_start(16);
    overlay.set_margin_end(16);

    overlay.upcast()
}

fn drag_controller(slider: &SharedSlider) -> gtk::GestureDrag {
    let drag = gtk::GestureDrag::new();

    let s = slider.clone();
    drag.connect_drag_begin(move |gesture, x, y| {
        forward(&s, gesture, DragEvent::Began(Point::new(x, y)));
    });

    let s = slider.clone();
    drag.connect_drag_update(move |gesture, dx, dy| {
        if let Some((x, y)) = gesture.start_point() {
            forward(&s, gesture, DragEvent::Moved(Point::new(x + dx, y + dy)));
        }
    });

    let s = slider.clone();
    drag.connect_drag_end(move |gesture, _, _| {
        forward(&s, gesture, DragEvent::Ended);
    });

    let s = slider.clone();
    drag.connect_cancel(move |gesture, _| {
        forward(&s, gesture, DragEvent::Cancelled);
    });

    drag
}

/// Moves widget-space pointer positions into the inset slider surface and feeds the slider.
fn forward(slider: &SharedSlider, gesture: &gtk::GestureDrag, event: DragEvent) {
    let Some(area) = gesture.widget() else {
        return;
    };
    let (surface, origin) = shapes::inset_surface(area.width() as f64, area.height() as f64);
    let local = |p: Point| Point::new(p.x - origin.x, p.y - origin.y);
    let event = match event {
        DragEvent::Began(p) => DragEvent::Began(local(p)),
        DragEvent::Moved(p) => DragEvent::Moved(local(p)),
        other => other,
    };

    let action = slider.borrow_mut().handle(event, surface);
    if action.should_redraw {
        area.queue_draw();
    }
}
