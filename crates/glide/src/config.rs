use crate::appearance::IndicatorFill;
use palette::Srgba;

/// Behavior switches for a menu control, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Gap between adjacent labels.
    pub item_spacing: f64,
    /// How far the indicator extends past the reference label on each side.
    pub indicator_side_padding: f64,
    /// Pin the content width to the control width instead of packing labels
    /// at their intrinsic size.
    pub fills_all_items_in_bounds: bool,
    /// Give every label the same width.
    pub fills_items_equally: bool,
    /// Ask the host for a feedback pulse when the nearest item changes.
    pub generates_feedback: bool,
    pub indicator_fill: IndicatorFill,
    /// Derive the overlay label tint from the fill instead of using
    /// `label_color` as-is.
    pub vibrant_label_color: bool,
    /// Overlay label tint inside the indicator when vibrant mode is off.
    pub label_color: Srgba<f64>,
    /// Maximum extra indicator length at the midpoint between two items.
    pub elasticity: f64,
    /// Extra margin kept visible around the indicator when auto-scrolling.
    pub scroll_lookahead: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_spacing: 20.0,
            indicator_side_padding: 12.0,
            fills_all_items_in_bounds: false,
            fills_items_equally: false,
            generates_feedback: true,
            indicator_fill: IndicatorFill::Solid(Srgba::new(0.0, 0.5, 1.0, 1.0)),
            vibrant_label_color: false,
            label_color: Srgba::new(1.0, 1.0, 1.0, 1.0),
            elasticity: 15.0,
            scroll_lookahead: 80.0,
        }
    }
}
