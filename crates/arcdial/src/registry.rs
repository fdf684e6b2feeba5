use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct ScreenLabel(String);

crate::impl_string_newtype!(ScreenLabel);

struct DemoEntry<W> {
    label: ScreenLabel,
    build: Box<dyn Fn() -> W>,
}

/// Demo screens keyed by label, kept sorted by label. Built once at startup.
pub struct DemoRegistry<W> {
    entries: Vec<DemoEntry<W>>,
}

impl<W> Default for DemoRegistry<W> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<W> DemoRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a screen. A second registration under the same label replaces the first.
    pub fn register(mut self, label: impl Into<ScreenLabel>, build: impl Fn() -> W + 'static) -> Self {
        let entry = DemoEntry {
            label: label.into(),
            build: Box::new(build),
        };
        match self
            .entries
            .binary_search_by(|e| e.label.cmp(&entry.label))
        {
            Ok(idx) => {
                log::warn!("Demo screen '{}' registered twice", entry.label);
                self.entries[idx] = entry;
            }
            Err(idx) => self.entries.insert(idx, entry),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &ScreenLabel> {
        self.entries.iter().map(|e| &e.label)
    }

    /// Case-insensitive lookup.
    pub fn find(&self, label: &str) -> Option<&ScreenLabel> {
        self.entries
            .iter()
            .map(|e| &e.label)
            .find(|l| l.eq_ignore_ascii_case(label))
    }

    pub fn build(&self, label: &str) -> Option<W> {
        self.entries
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(label))
            .map(|e| (e.build)())
    }

    /// Builds every screen in label order.
    pub fn build_all(&self) -> Vec<(ScreenLabel, W)> {
        self.entries
            .iter()
            .map(|e| (e.label.clone(), (e.build)()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn registry() -> DemoRegistry<&'static str> {
        DemoRegistry::new()
            .register("UnderLineTextField", || "fields")
            .register("HalfCircleSlider", || "slider")
            .register("ListPicker", || "picker")
    }

    #[test]
    fn test_labels_are_sorted() {
        let labels: Vec<_> = registry().labels().map(|l| l.to_string()).collect();
        assert_eq!(labels, ["HalfCircleSlider", "ListPicker", "UnderLineTextField"]);
    }

    #[test]
    fn test_build_by_label() {
        let r = registry();
        assert_eq!(r.build("ListPicker"), Some("picker"));
        assert_eq!(r.build("halfcircleslider"), Some("slider"));
        assert_eq!(r.build("Missing"), None);
        assert_eq!(r.find("listpicker").map(|l| l.as_str()), Some("ListPicker"));
    }

    #[test]
    fn test_duplicate_label_replaces() {
        let r = registry().register("ListPicker", || "other picker");
        assert_eq!(r.len(), 3);
        assert_eq!(r.build("ListPicker"), Some("other picker"));
    }

    #[test]
    fn test_constructors_run_on_demand() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let r = DemoRegistry::new().register("Counter", move || {
            counter.set(counter.get() + 1);
            counter.get()
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(r.build("Counter"), Some(1));
        let all = r.build_all();
        assert_eq!(all, vec![(ScreenLabel::from("Counter"), 2)]);
    }
}
