pub mod config;
pub mod events;

pub mod gui {
    pub mod app;
    pub mod field;
    pub mod picker;
    pub mod slider;
    pub mod theme;
}

pub mod sys {
    pub mod runtime;
}
