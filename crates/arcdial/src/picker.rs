use derive_more::{Display, From, Into};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::collections::BTreeSet;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub id: ItemId,
    pub label: String,
}

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
pub enum SelectionMode {
    #[default]
    #[strum(serialize = "single")]
    Single,
    #[strum(to_string = "multiple", serialize = "multi")]
    Multiple,
}

/// Selection state behind a host list. Ids that are not part of the list are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionList {
    items: Vec<PickerItem>,
    mode: SelectionMode,
    selected: BTreeSet<ItemId>,
}

impl SelectionList {
    pub fn new(items: Vec<PickerItem>, mode: SelectionMode) -> Self {
        Self {
            items,
            mode,
            selected: BTreeSet::new(),
        }
    }

    /// `"{prefix} #1"` .. `"{prefix} #count"` with ids 1..=count.
    pub fn numbered(prefix: &str, count: u32, mode: SelectionMode) -> Self {
        let items = (1..=count)
            .map(|n| PickerItem {
                id: ItemId(n),
                label: format!("{} #{}", prefix, n),
            })
            .collect();
        Self::new(items, mode)
    }

    pub fn items(&self) -> &[PickerItem] {
        &self.items
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_single(&self) -> Option<ItemId> {
        self.selected.iter().next().copied()
    }

    pub fn select(&mut self, id: ItemId) -> bool {
        if !self.contains(id) || self.is_selected(id) {
            return false;
        }
        if self.mode == SelectionMode::Single {
            self.selected.clear();
        }
        self.selected.insert(id)
    }

    pub fn deselect(&mut self, id: ItemId) -> bool {
        self.selected.remove(&id)
    }

    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.is_selected(id) {
            self.deselect(id)
        } else {
            self.select(id)
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Replaces the selection with what the host list reports. In single mode only the last
    /// reported id is kept.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = ItemId>) -> bool {
        let reported: Vec<ItemId> = ids.into_iter().filter(|id| self.contains(*id)).collect();
        let next: BTreeSet<ItemId> = match self.mode {
            SelectionMode::Single => reported.last().copied().into_iter().collect(),
            SelectionMode::Multiple => reported.into_iter().collect(),
        };
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Header text: `sel: 0` when nothing is selected.
    pub fn summary(&self) -> String {
        if self.selected.is_empty() {
            return "sel: 0".to_string();
        }
        let ids: Vec<String> = self.selected.iter().map(ToString::to_string).collect();
        format!("sel: {}", ids.join(", "))
    }
}
