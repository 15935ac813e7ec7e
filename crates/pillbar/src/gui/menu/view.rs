use super::model::MenuState;
use super::LABEL_FONT_FAMILY;
use crate::gui::theme::ThemeColors;
use cairo::Context;
use glide::{Axis, FillPaint, Rect};
use palette::Srgba;
use std::f64::consts::FRAC_PI_2;
use std::iter::zip;

pub fn draw(cr: &Context, state: &MenuState, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let padding = state.control.config().indicator_side_padding;
    cr.save()?;
    cr.translate(padding - state.control.scroll_offset(), 0.0);

    draw_indicator(cr, state)?;

    set_source(cr, colors.label);
    draw_label_texts(cr, state)?;
    draw_label_overlay(cr, state)?;

    cr.restore()
}

fn draw_indicator(cr: &Context, state: &MenuState) -> Result<(), cairo::Error> {
    let rect = state.displayed();
    if rect.is_empty() {
        return Ok(());
    }
    pill_path(cr, rect);
    match state.fill() {
        FillPaint::Solid(color) => set_source(cr, *color),
        FillPaint::Gradient {
            axis,
            start,
            end,
            span,
        } => {
            let padding = state.control.config().indicator_side_padding;
            let content = state
                .control
                .layout()
                .content_bounds()
                .inset_by(-padding, 0.0);
            let gradient = match axis {
                Axis::Horizontal => {
                    cairo::LinearGradient::new(0.0, 0.0, content.width.max(1.0), 0.0)
                }
                Axis::Vertical => cairo::LinearGradient::new(0.0, 0.0, 0.0, content.height.max(1.0)),
            };
            add_stop(&gradient, span.0, *start);
            add_stop(&gradient, span.1, *end);
            cr.set_source(&gradient)?;
        }
    }
    cr.fill()
}

fn draw_label_texts(cr: &Context, state: &MenuState) -> Result<(), cairo::Error> {
    cr.select_font_face(
        LABEL_FONT_FAMILY,
        cairo::FontSlant::Normal,
        cairo::FontWeight::Bold,
    );
    cr.set_font_size(state.font_size);
    for (item, frame) in zip(state.control.items(), state.control.layout().frames()) {
        if let Ok(ext) = cr.text_extents(item) {
            cr.move_to(
                frame.mid_x() - ext.width() / 2.0,
                frame.min_y() + (frame.height + ext.height()) / 2.0,
            );
            cr.show_text(item)?;
        }
    }
    Ok(())
}

/// Redraws the labels clipped to the pill in the overlay tint, so the text
/// under the indicator reads in the contrast color.
fn draw_label_overlay(cr: &Context, state: &MenuState) -> Result<(), cairo::Error> {
    let rect = state.displayed();
    if rect.is_empty() {
        return Ok(());
    }
    cr.save()?;
    pill_path(cr, rect);
    cr.clip();
    set_source(cr, state.current_tint());
    draw_label_texts(cr, state)?;
    cr.restore()
}

fn pill_path(cr: &Context, rect: Rect) {
    let radius = (rect.height / 2.0).min(rect.width / 2.0);
    let cy = rect.min_y() + rect.height / 2.0;
    cr.new_sub_path();
    cr.arc(rect.max_x() - radius, cy, radius, -FRAC_PI_2, FRAC_PI_2);
    cr.arc(rect.min_x() + radius, cy, radius, FRAC_PI_2, 3.0 * FRAC_PI_2);
    cr.close_path();
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn add_stop(gradient: &cairo::LinearGradient, offset: f64, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    gradient.add_color_stop_rgba(offset, r, g, b, a);
}
