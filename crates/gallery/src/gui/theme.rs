use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub accent: Srgba<f64>,
    pub handle: Srgba<f64>,
    pub handle_shadow: Srgba<f64>,
    pub underline: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            accent: Self::lookup_color(
                context,
                "accent_bg_color",
                Srgba::new(0.21, 0.52, 0.89, 1.0),
                None,
            ),
            handle: Srgba::new(1.0, 1.0, 1.0, 1.0),
            handle_shadow: Srgba::new(0.0, 0.0, 0.0, 0.1),
            underline: Self::lookup_color(
                context,
                "borders",
                Srgba::new(0.78, 0.78, 0.8, 1.0),
                Some(1.0),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn set_source(cr: &cairo::Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.gallery-value {
    font-family: monospace;
    font-size: 80px;
}
.gallery-drawing-area {
    background: none;
}
entry.underline-entry {
    border: none;
    box-shadow: none;
    background: none;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
