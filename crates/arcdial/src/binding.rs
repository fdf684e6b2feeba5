use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Getter/setter pair into storage owned by someone else. Widgets read and publish their
/// value through it; the owner stays the single source of truth.
pub struct Binding<T> {
    get: Box<dyn Fn() -> T>,
    set: Box<dyn Fn(T)>,
}

impl<T: 'static> Binding<T> {
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Box::new(get),
            set: Box::new(set),
        }
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn set(&self, value: T) {
        (self.set)(value)
    }

    /// Read-only binding; writes are dropped.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone(), |_| {})
    }
}

impl<T: Copy + 'static> Binding<T> {
    pub fn from_cell(cell: Rc<Cell<T>>) -> Self {
        let reader = cell.clone();
        Self::new(move || reader.get(), move |v| cell.set(v))
    }
}

impl<T: Clone + 'static> Binding<T> {
    pub fn from_ref_cell(cell: Rc<RefCell<T>>) -> Self {
        let reader = cell.clone();
        Self::new(
            move || reader.borrow().clone(),
            move |v| *cell.borrow_mut() = v,
        )
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}
