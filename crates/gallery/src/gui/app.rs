use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::{field, picker, slider, theme};
use arcdial::registry::{DemoRegistry, ScreenLabel};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub const SLIDER_SCREEN: &str = "HalfCircleSlider";
pub const PICKER_SCREEN: &str = "ListPicker";
pub const FIELDS_SCREEN: &str = "UnderLineTextField";

/// Every demo screen, built from whatever configuration is current when it is constructed.
pub fn screens(config: &Rc<RefCell<Config>>) -> DemoRegistry<gtk::Widget> {
    let slider_config = config.clone();
    let picker_config = config.clone();
    DemoRegistry::new()
        .register(FIELDS_SCREEN, field::login_page)
        .register(SLIDER_SCREEN, move || {
            slider::page(&slider_config.borrow().slider)
        })
        .register(PICKER_SCREEN, move || {
            picker::page(&picker_config.borrow().picker)
        })
}

pub struct AppModel {
    pub config: Rc<RefCell<Config>>,
    pub registry: DemoRegistry<gtk::Widget>,
    pub stack: gtk::Stack,
}

#[derive(Debug)]
pub enum AppMsg {
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    /// Replaces every page with a freshly built one, keeping the visible screen.
    fn populate(&self, visible: Option<&str>) {
        while let Some(child) = self.stack.first_child() {
            self.stack.remove(&child);
        }

        for (label, widget) in self.registry.build_all() {
            self.stack.add_titled(&widget, Some(label.as_str()), label.as_str());
        }

        if let Some(label) = visible.and_then(|l| self.registry.find(l)) {
            self.stack.set_visible_child_name(label.as_str());
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Config,
        Option<ScreenLabel>,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Components"),
            set_default_width: 720,
            set_default_height: 640,

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,

                gtk::StackSidebar {
                    set_stack: &model.stack,
                    set_width_request: 200,
                },

                gtk::Separator {
                    set_orientation: gtk::Orientation::Vertical,
                },

                #[local_ref]
                stack -> gtk::Stack {
                    set_hexpand: true,
                    set_vexpand: true,
                    set_transition_type: gtk::StackTransitionType::SlideLeftRight,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, initial_screen, rx) = init;

        theme::load_css();

        let config = Rc::new(RefCell::new(config));
        let model = AppModel {
            registry: screens(&config),
            config,
            stack: gtk::Stack::new(),
        };

        let stack = &model.stack;
        let widgets = view_output!();

        let initial = initial_screen
            .or_else(|| model.config.borrow().initial_screen.clone())
            .map(|l| l.to_string());
        if let Some(label) = &initial
            && model.registry.find(label).is_none()
        {
            log::warn!("Unknown screen '{}'", label);
        }
        model.populate(initial.as_deref());

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    let visible = self.stack.visible_child_name().map(|n| n.to_string());
                    *self.config.borrow_mut() = new_config;
                    self.populate(visible.as_deref());
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
