use crate::appearance::{self, Axis, IndicatorFill};
use crate::config::Config;
use crate::geometry::{self, Point, Rect};
use crate::layout::{self, LabelLayout};
use crate::motion::{self, AnimationParams};
use crate::tracker::IndexCache;
use palette::Srgba;

/// Everything the host must apply after a value or layout change: the new
/// indicator frame (possibly animated), the viewport offset, the fill paint,
/// an optional new label tint, and whether to fire a feedback pulse.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameChange {
    pub indicator: Rect,
    pub scroll_offset: f64,
    pub animation: Option<AnimationParams>,
    pub feedback: bool,
    pub fill: FillPaint,
    /// `Some` only when the tint actually differs from the last one handed
    /// out, so hosts can cross-fade exactly once per change.
    pub label_tint: Option<Srgba<f64>>,
}

/// A resolved indicator paint, ready for the host's renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillPaint {
    Solid(Srgba<f64>),
    Gradient {
        axis: Axis,
        start: Srgba<f64>,
        end: Srgba<f64>,
        /// Fractional stop offsets along the axis within the content bounds.
        span: (f64, f64),
    },
}

type GradientStopsFn = dyn Fn(f64) -> (Srgba<f64>, Srgba<f64>);

/// The menu-bar control core, independent of any rendering toolkit.
///
/// Hosts feed in label measurements and user input through the explicit
/// setters; each mutation synchronously recomputes the dependent state and
/// returns a [`FrameChange`] describing what to apply (or animate) visually.
pub struct MenuControl {
    config: Config,
    items: Vec<String>,
    value: f64,
    cache: IndexCache,
    layout: LabelLayout,
    bounds_width: f64,
    scroll_offset: f64,
    animator: Option<Box<motion::AnimatorFn>>,
    gradient_stops: Option<Box<GradientStopsFn>>,
    last_label_tint: Option<Srgba<f64>>,
}

impl MenuControl {
    pub fn new(config: Config, items: Vec<String>) -> Self {
        Self {
            config,
            items,
            value: 0.0,
            cache: IndexCache::initial(),
            layout: LabelLayout::default(),
            bounds_width: 0.0,
            scroll_offset: 0.0,
            animator: Some(Box::new(motion::default_animator)),
            gradient_stops: None,
            last_label_tint: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn current_index(&self) -> i64 {
        self.cache.current()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    /// Replaces the transition policy. `None` applies every change
    /// instantly.
    pub fn set_animator(&mut self, animator: Option<Box<motion::AnimatorFn>>) {
        self.animator = animator;
    }

    /// Replaces the value-to-gradient-stops function used in gradient fill
    /// mode. The default samples the configured ramp at `value` and
    /// `value + 1`.
    pub fn set_gradient_stops(&mut self, stops: Option<Box<GradientStopsFn>>) {
        self.gradient_stops = stops;
    }

    /// Swaps the item labels. Selection resets to the first item and the
    /// label layout is invalidated until the host feeds new measurements
    /// through [`MenuControl::relayout`].
    pub fn set_items(&mut self, items: Vec<String>) -> FrameChange {
        log::debug!("menu items replaced ({} labels)", items.len());
        self.items = items;
        self.layout = LabelLayout::default();
        self.set_value(0.0)
    }

    /// Lays the labels out from freshly measured intrinsic widths and
    /// recomputes the visual state at the current value. This is the
    /// explicit "force a recompute" a layout pass performs.
    pub fn relayout(&mut self, widths: &[f64], bounds_width: f64, height: f64) -> FrameChange {
        self.bounds_width = bounds_width;
        self.layout = LabelLayout::compute(widths, height, &self.config, bounds_width);
        self.set_value(self.value)
    }

    /// Drives the continuous selection position and returns the visual
    /// updates to apply. Values outside `[0, len - 1]` are accepted and
    /// degrade gracefully.
    pub fn set_value(&mut self, value: f64) -> FrameChange {
        let old = self.value;
        self.value = value;

        let events = self.cache.update(value);
        let nearest = value.round() as i64;
        let current_box = self.layout.frame(self.cache.current()).unwrap_or_default();
        let nearest_box = self.layout.frame(nearest).unwrap_or_default();

        let raw = geometry::indicator_frame(
            self.cache.current(),
            current_box,
            nearest,
            nearest_box,
            self.config.elasticity,
            value,
        );
        let padding = self.config.indicator_side_padding;
        let content = self.layout.content_bounds().inset_by(-padding, 0.0);
        let indicator = raw.inset_by(-padding, 0.0).intersection(content);

        self.scroll_offset = layout::reveal_offset(
            indicator,
            self.viewport_width(),
            self.layout.content_width(),
            self.scroll_offset,
            self.config.scroll_lookahead,
        );

        let fill = self.fill_paint(indicator);
        let label_tint = self.refresh_label_tint(&fill);
        let animation = self
            .animator
            .as_ref()
            .and_then(|animator| animator(old, value));

        FrameChange {
            indicator,
            scroll_offset: self.scroll_offset,
            animation,
            feedback: self.config.generates_feedback && events.nearest_changed,
            fill,
            label_tint,
        }
    }

    /// Maps a tap in content coordinates to its label; a hit selects that
    /// item. The returned index lets the host notify its tap delegate
    /// separately from the value-changed signal.
    pub fn tap(&mut self, point: Point) -> Option<(usize, FrameChange)> {
        let index = self.layout.index_at(point)?;
        let change = self.set_value(index as f64);
        Some((index, change))
    }

    /// Snaps a fractional value (e.g. after a drag ends) to the nearest
    /// item.
    pub fn settle(&mut self) -> FrameChange {
        self.set_value(self.value.round())
    }

    /// The continuous value for an x position in content coordinates.
    pub fn value_for_x(&self, x: f64) -> f64 {
        self.layout.value_for_x(x)
    }

    /// The width of the scrollable viewport inside the control bounds.
    pub fn viewport_width(&self) -> f64 {
        (self.bounds_width - self.config.indicator_side_padding * 2.0).max(0.0)
    }

    fn fill_paint(&self, indicator: Rect) -> FillPaint {
        match &self.config.indicator_fill {
            IndicatorFill::Solid(color) => FillPaint::Solid(*color),
            IndicatorFill::Gradient(spec) => {
                let (start, end) = match &self.gradient_stops {
                    Some(stops) => stops(self.value),
                    None => spec.stops_at(self.value),
                };
                let padding = self.config.indicator_side_padding;
                let content = self.layout.content_bounds().inset_by(-padding, 0.0);
                FillPaint::Gradient {
                    axis: spec.axis,
                    start,
                    end,
                    span: appearance::gradient_span(indicator, content, spec.axis),
                }
            }
        }
    }

    fn refresh_label_tint(&mut self, fill: &FillPaint) -> Option<Srgba<f64>> {
        let tint = if self.config.vibrant_label_color {
            let background = match fill {
                FillPaint::Solid(color) => *color,
                FillPaint::Gradient { start, end, .. } => appearance::mix(*start, *end, 0.5),
            };
            appearance::vibrant_label_color(background)
        } else {
            self.config.label_color
        };
        if self.last_label_tint == Some(tint) {
            return None;
        }
        self.last_label_tint = Some(tint);
        Some(tint)
    }
}
