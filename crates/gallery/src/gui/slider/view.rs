use crate::gui::theme::{self, ThemeColors};
use arcdial::Point;
use arcdial::shapes::{HandleShape, SliderShapes, TrackShape};
use cairo::{Context, LineCap};
use std::f64::consts::PI;

const SHADOW_SPREAD: f64 = 5.0;

/// Draws track then handle, with `origin` the top-left of the inset slider surface.
pub fn draw(
    cr: &Context,
    shapes: &SliderShapes,
    origin: Point,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(origin.x, origin.y);
    draw_track(cr, &shapes.track, colors)?;
    draw_handle(cr, &shapes.handle, colors)?;
    cr.restore()
}

fn draw_track(cr: &Context, track: &TrackShape, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (from, to) = track.positive_span();
    theme::set_source(cr, colors.accent);
    cr.set_line_width(track.line_width);
    cr.set_line_cap(LineCap::Round);
    cr.new_path();
    cr.arc(
        track.center.x,
        track.center.y,
        track.radius,
        from.radians(),
        to.radians(),
    );
    cr.stroke()
}

fn draw_handle(cr: &Context, handle: &HandleShape, colors: &ThemeColors) -> Result<(), cairo::Error> {
    // soft shadow: a few widening, fading rings
    let (r, g, b, a) = colors.handle_shadow.into_components();
    for i in (1..=SHADOW_SPREAD as usize).rev() {
        let alpha = a * (1.0 - i as f64 / (SHADOW_SPREAD + 1.0));
        cr.set_source_rgba(r, g, b, alpha);
        cr.new_path();
        cr.arc(
            handle.center.x,
            handle.center.y,
            handle.radius + i as f64,
            0.0,
            2.0 * PI,
        );
        cr.fill()?;
    }

    theme::set_source(cr, colors.handle);
    cr.new_path();
    cr.arc(handle.center.x, handle.center.y, handle.radius, 0.0, 2.0 * PI);
    cr.fill()
}
