use crate::config::PickerSettings;
use arcdial::picker::{ItemId, SelectionList, SelectionMode};
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;

fn list_mode(mode: SelectionMode) -> gtk::SelectionMode {
    match mode {
        SelectionMode::Single => gtk::SelectionMode::Single,
        SelectionMode::Multiple => gtk::SelectionMode::Multiple,
    }
}

/// Ids for the rows the list box reports as selected, by row position.
pub fn ids_for_rows(list: &SelectionList, rows: impl IntoIterator<Item = i32>) -> Vec<ItemId> {
    rows.into_iter()
        .filter_map(|idx| usize::try_from(idx).ok())
        .filter_map(|idx| list.items().get(idx).map(|item| item.id))
        .collect()
}

pub fn page(settings: &PickerSettings) -> gtk::Widget {
    let list = Rc::new(RefCell::new(settings.selection_list()));

    let header = gtk::Label::new(Some(&list.borrow().summary()));
    header.set_margin_top(12);

    let list_box = gtk::ListBox::new();
    list_box.set_selection_mode(list_mode(list.borrow().mode()));
    list_box.add_css_class("boxed-list");
    for item in list.borrow().items() {
        let label = gtk::Label::new(Some(&item.label));
        label.set_halign(gtk::Align::Start);
        label.set_margin_top(8);
        label.set_margin_bottom(8);
        label.set_margin_start(12);
        list_box.append(&label);
    }

    let model = list.clone();
    let summary = header.clone();
    list_box.connect_selected_rows_changed(move |list_box| {
        let rows = list_box.selected_rows().into_iter().map(|row| row.index());
        let mut model = model.borrow_mut();
        let ids = ids_for_rows(&model, rows);
        if model.set_selection(ids) {
            summary.set_text(&model.summary());
        }
    });

    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .child(&list_box)
        .build();

    let column = gtk::Box::new(gtk::Orientation::Vertical, 12);
    column.set_margin_start(16);
    column.set_margin_end(16);
    column.append(&header);
    column.append(&scroller);
    column.upcast()
}
