use crate::binding::Binding;
use derive_more::{AsRef, Deref, Display, From, Into};
use std::fmt;
use std::time::{Duration, Instant};

pub const INDICATOR_DURATION: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct FieldTitle(String);

crate::impl_string_newtype!(FieldTitle);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Host input began (`true`) or stopped (`false`) editing.
    EditingChanged(bool),
    /// Return / activate.
    Commit,
    Tap,
}

/// Fill fraction of the focus underline, eased towards the latest focus flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderlineIndicator {
    focused: bool,
    from: f64,
    changed_at: Option<Instant>,
    duration: Duration,
}

impl UnderlineIndicator {
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            from: target(focused),
            changed_at: None,
            duration: INDICATOR_DURATION,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Starts a transition from wherever the line currently is. Returns `false` if the flag
    /// did not change.
    pub fn set_focused(&mut self, focused: bool, now: Instant) -> bool {
        if focused == self.focused {
            return false;
        }
        self.from = self.progress(now);
        self.focused = focused;
        self.changed_at = Some(now);
        true
    }

    /// 0 = empty line, 1 = fully lit. Ease-in while focusing, ease-out while unfocusing.
    pub fn progress(&self, now: Instant) -> f64 {
        let to = target(self.focused);
        let Some(changed_at) = self.changed_at else {
            return to;
        };
        let t = (now.saturating_duration_since(changed_at).as_secs_f64()
            / self.duration.as_secs_f64())
        .clamp(0.0, 1.0);
        let eased = if self.focused {
            t * t
        } else {
            1.0 - (1.0 - t) * (1.0 - t)
        };
        self.from + (to - self.from) * eased
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.changed_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }
}

fn target(focused: bool) -> f64 {
    if focused { 1.0 } else { 0.0 }
}

type EditingHook = Box<dyn FnMut(bool) -> bool>;
type CommitHook = Box<dyn FnMut() -> bool>;

/// Text input with an underline that lights up while the field counts as focused.
///
/// `Text` fields set focus to `hook(began) || began` on editing changes and call the commit
/// hook for its side effects. `Secure` fields focus on tap and take their focus from the
/// commit hook's result.
pub struct UnderlineField {
    title: FieldTitle,
    kind: FieldKind,
    text: Binding<String>,
    focused: Binding<bool>,
    on_editing_changed: EditingHook,
    on_commit: CommitHook,
    indicator: UnderlineIndicator,
}

impl UnderlineField {
    pub fn new_text(title: FieldTitle, text: Binding<String>, focused: Binding<bool>) -> Self {
        Self::new(FieldKind::Text, title, text, focused)
    }

    pub fn new_secure(title: FieldTitle, text: Binding<String>, focused: Binding<bool>) -> Self {
        Self::new(FieldKind::Secure, title, text, focused)
    }

    fn new(kind: FieldKind, title: FieldTitle, text: Binding<String>, focused: Binding<bool>) -> Self {
        let indicator = UnderlineIndicator::new(focused.get());
        Self {
            title,
            kind,
            text,
            focused,
            on_editing_changed: Box::new(|_| false),
            on_commit: Box::new(|| false),
            indicator,
        }
    }

    pub fn on_editing_changed(mut self, hook: impl FnMut(bool) -> bool + 'static) -> Self {
        self.on_editing_changed = Box::new(hook);
        self
    }

    pub fn on_commit(mut self, hook: impl FnMut() -> bool + 'static) -> Self {
        self.on_commit = Box::new(hook);
        self
    }

    pub fn title(&self) -> &FieldTitle {
        &self.title
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn set_text(&self, text: String) {
        self.text.set(text);
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn indicator(&self) -> &UnderlineIndicator {
        &self.indicator
    }

    /// Applies one host event and returns whether the indicator started a transition.
    pub fn handle(&mut self, event: FieldEvent, now: Instant) -> bool {
        match (self.kind, event) {
            (FieldKind::Text, FieldEvent::EditingChanged(began)) => {
                let focused = (self.on_editing_changed)(began) || began;
                self.focused.set(focused);
            }
            (FieldKind::Text, FieldEvent::Commit) => {
                (self.on_commit)();
            }
            (FieldKind::Secure, FieldEvent::Commit) => {
                let focused = (self.on_commit)();
                self.focused.set(focused);
            }
            (FieldKind::Secure, FieldEvent::Tap) => self.focused.set(true),
            (kind, event) => log::trace!("{} ({:?}) ignores {:?}", self.title, kind, event),
        }
        self.sync(now)
    }

    /// Picks up focus changes made through the binding by someone else.
    pub fn sync(&mut self, now: Instant) -> bool {
        self.indicator.set_focused(self.focused.get(), now)
    }
}

impl fmt::Debug for UnderlineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnderlineField")
            .field("title", &self.title)
            .field("kind", &self.kind)
            .field("focused", &self.focused)
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn bindings() -> (Binding<String>, Rc<Cell<bool>>, Binding<bool>) {
        let focused = Rc::new(Cell::new(false));
        (
            Binding::from_ref_cell(Rc::new(RefCell::new(String::new()))),
            focused.clone(),
            Binding::from_cell(focused),
        )
    }

    #[test]
    fn test_text_field_focus_follows_editing() {
        let (text, flag, focused) = bindings();
        let mut field = UnderlineField::new_text(FieldTitle::from("Email"), text, focused);
        let now = Instant::now();

        assert!(field.handle(FieldEvent::EditingChanged(true), now));
        assert!(flag.get());
        assert!(field.handle(FieldEvent::EditingChanged(false), now));
        assert!(!flag.get());
    }

    #[test]
    fn test_text_field_hook_can_keep_focus() {
        let (text, flag, focused) = bindings();
        let mut field = UnderlineField::new_text(FieldTitle::from("Username"), text, focused)
            .on_editing_changed(|_| true);
        field.handle(FieldEvent::EditingChanged(false), Instant::now());
        assert!(flag.get());
    }

    #[test]
    fn test_text_commit_runs_hook_without_touching_focus() {
        let (text, flag, focused) = bindings();
        let commits = Rc::new(Cell::new(0));
        let counter = commits.clone();
        let mut field = UnderlineField::new_text(FieldTitle::from("Email"), text, focused).on_commit(
            move || {
                counter.set(counter.get() + 1);
                true
            },
        );
        assert!(!field.handle(FieldEvent::Commit, Instant::now()));
        assert_eq!(commits.get(), 1);
        assert!(!flag.get());
    }

    #[test]
    fn test_secure_field_tap_and_commit() {
        let (text, flag, focused) = bindings();
        let mut field = UnderlineField::new_secure(FieldTitle::from("Password"), text, focused);
        let now = Instant::now();

        field.handle(FieldEvent::Tap, now);
        assert!(flag.get());
        // default commit hook reports "not focused"
        field.handle(FieldEvent::Commit, now);
        assert!(!flag.get());

        field.handle(FieldEvent::EditingChanged(true), now);
        assert!(!flag.get());
    }

    #[test]
    fn test_sync_picks_up_external_focus() {
        let (text, flag, focused) = bindings();
        let mut field = UnderlineField::new_secure(FieldTitle::from("Password"), text, focused);
        let now = Instant::now();
        flag.set(true);
        assert!(field.sync(now));
        assert!(field.indicator().is_focused());
        assert!(!field.sync(now));
    }

    #[test]
    fn test_indicator_easing_endpoints() {
        let start = Instant::now();
        let mut indicator = UnderlineIndicator::new(false);
        assert_eq!(indicator.progress(start), 0.0);
        assert!(!indicator.is_animating(start));

        indicator.set_focused(true, start);
        assert_eq!(indicator.progress(start), 0.0);
        assert!(indicator.is_animating(start));

        let half = start + INDICATOR_DURATION / 2;
        // ease-in lags behind linear
        assert!((indicator.progress(half) - 0.25).abs() < 1e-9);

        let done = start + INDICATOR_DURATION;
        assert_eq!(indicator.progress(done), 1.0);
        assert!(!indicator.is_animating(done));
    }

    #[test]
    fn test_indicator_reverses_from_current_position() {
        let start = Instant::now();
        let mut indicator = UnderlineIndicator::new(false);
        indicator.set_focused(true, start);
        let half = start + INDICATOR_DURATION / 2;
        indicator.set_focused(false, half);
        assert!((indicator.progress(half) - 0.25).abs() < 1e-9);

        // ease-out leads linear on the way down
        let quarter = half + INDICATOR_DURATION / 2;
        assert!((indicator.progress(quarter) - 0.25 * 0.25).abs() < 1e-9);
        assert_eq!(indicator.progress(half + INDICATOR_DURATION), 0.0);
    }

    #[test]
    fn test_initially_focused_field_starts_lit() {
        let indicator = UnderlineIndicator::new(true);
        assert_eq!(indicator.progress(Instant::now()), 1.0);
    }
}
