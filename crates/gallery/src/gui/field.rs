use crate::gui::theme::{self, ThemeColors};
use arcdial::Binding;
use arcdial::field::{FieldEvent, FieldKind, FieldTitle, UnderlineField};
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

pub const LINE_WIDTH: i32 = 1;

type SharedField = Rc<RefCell<UnderlineField>>;

/// Storage owned by the login form; both fields read and write through bindings into it.
#[derive(Default, Clone)]
pub struct LoginState {
    pub username: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub username_focused: Rc<Cell<bool>>,
    pub password_focused: Rc<Cell<bool>>,
}

impl LoginState {
    /// Username keeps its underline while non-empty, and starting to edit it lights the
    /// password underline only when a password was already typed.
    pub fn username_field(&self) -> UnderlineField {
        let username = self.username.clone();
        let password = self.password.clone();
        let password_focused = self.password_focused.clone();
        UnderlineField::new_text(
            FieldTitle::from("Username"),
            Binding::from_ref_cell(self.username.clone()),
            Binding::from_cell(self.username_focused.clone()),
        )
        .on_editing_changed(move |began| {
            if began {
                password_focused.set(!password.borrow().is_empty());
            }
            !username.borrow().is_empty()
        })
    }

    /// Password keeps its underline after commit while non-empty.
    pub fn password_field(&self) -> UnderlineField {
        let password = self.password.clone();
        UnderlineField::new_secure(
            FieldTitle::from("Password"),
            Binding::from_ref_cell(self.password.clone()),
            Binding::from_cell(self.password_focused.clone()),
        )
        .on_commit(move || !password.borrow().is_empty())
    }
}

pub fn login_page() -> gtk::Widget {
    let state = LoginState::default();

    let column = gtk::Box::new(gtk::Orientation::Vertical, 24);
    column.set_margin_start(16);
    column.set_margin_end(16);
    column.set_margin_top(24);
    column.append(&underline_field(state.username_field()));
    column.append(&underline_field(state.password_field()));
    column.upcast()
}

/// Entry plus animated underline for one field.
pub fn underline_field(field: UnderlineField) -> gtk::Widget {
    let kind = field.kind();
    let title = field.title().to_string();
    let field: SharedField = Rc::new(RefCell::new(field));

    let entry: gtk::Widget = match kind {
        FieldKind::Text => {
            let entry = gtk::Entry::builder()
                .placeholder_text(title.as_str())
                .has_frame(false)
                .build();
            entry.add_css_class("underline-entry");
            bind_text(&entry, &field);
            let f = field.clone();
            entry.connect_activate(move |_| dispatch(&f, FieldEvent::Commit));
            entry.upcast()
        }
        FieldKind::Secure => {
            let entry = gtk::PasswordEntry::builder()
                .placeholder_text(title.as_str())
                .show_peek_icon(true)
                .build();
            entry.add_css_class("underline-entry");
            bind_text(&entry, &field);
            let f = field.clone();
            entry.connect_activate(move |_| dispatch(&f, FieldEvent::Commit));

            let tap = gtk::GestureClick::new();
            tap.set_propagation_phase(gtk::PropagationPhase::Capture);
            let f = field.clone();
            tap.connect_pressed(move |_, _, _, _| dispatch(&f, FieldEvent::Tap));
            entry.add_controller(tap);
            entry.upcast()
        }
    };

    let focus = gtk::EventControllerFocus::new();
    let f = field.clone();
    focus.connect_enter(move |_| {
        let event = match kind {
            FieldKind::Text => FieldEvent::EditingChanged(true),
            FieldKind::Secure => FieldEvent::Tap,
        };
        dispatch(&f, event);
    });
    let f = field.clone();
    focus.connect_leave(move |_| dispatch(&f, FieldEvent::EditingChanged(false)));
    entry.add_controller(focus);

    let underline = gtk::DrawingArea::builder()
        .hexpand(true)
        .content_height(LINE_WIDTH)
        .build();

    let f = field.clone();
    underline.set_draw_func(move |area, cr, width, height| {
        let colors = ThemeColors::from_context(&area.style_context());
        let progress = f.borrow().indicator().progress(Instant::now());
        if let Err(e) = draw_underline(cr, width as f64, height as f64, progress, &colors) {
            log::error!("Drawing error: {}", e);
        }
    });

    // focus may also change through another field's hook, so poll the binding every frame
    let f = field.clone();
    underline.add_tick_callback(move |area, _| {
        let now = Instant::now();
        let mut field = f.borrow_mut();
        if field.sync(now) || field.indicator().is_animating(now) {
            area.queue_draw();
        }
        glib::ControlFlow::Continue
    });

    let column = gtk::Box::new(gtk::Orientation::Vertical, 4);
    column.append(&entry);
    column.append(&underline);
    column.upcast()
}

fn bind_text(editable: &impl IsA<gtk::Editable>, field: &SharedField) {
    let f = field.clone();
    editable.connect_changed(move |e| f.borrow().set_text(e.text().to_string()));
}

fn dispatch(field: &SharedField, event: FieldEvent) {
    let changed = field.borrow_mut().handle(event, Instant::now());
    if changed {
        log::trace!("{} underline transition on {:?}", field.borrow().title(), event);
    }
}

fn draw_underline(
    cr: &cairo::Context,
    width: f64,
    height: f64,
    progress: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    theme::set_source(cr, colors.underline);
    cr.rectangle(0.0, 0.0, width, height);
    cr.fill()?;

    theme::set_source(cr, colors.accent);
    cr.rectangle(0.0, 0.0, width * progress.clamp(0.0, 1.0), height);
    cr.fill()
}
