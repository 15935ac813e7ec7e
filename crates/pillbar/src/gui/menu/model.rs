use super::{LABEL_FONT_FAMILY, TINT_FADE_DURATION};
use cairo::Context;
use glide::{FillPaint, FrameChange, MenuControl, Point, Rect, Transition};
use palette::Srgba;

/// Presentation state around the control core: the rect currently on
/// screen, the in-flight transition, the resolved paints, and the cairo
/// text measurements feeding the control's layout.
pub struct MenuState {
    pub control: MenuControl,
    pub font_size: f64,
    /// Frame-clock time of the latest tick, in seconds.
    now: f64,
    displayed: Rect,
    transition: Option<Transition>,
    fill: FillPaint,
    tint: Srgba<f64>,
    tint_previous: Srgba<f64>,
    tint_started: f64,
    needs_layout: bool,
    last_bounds: (f64, f64),
}

impl MenuState {
    pub fn new(control: MenuControl, font_size: f64) -> Self {
        let tint = control.config().label_color;
        Self {
            control,
            font_size,
            now: 0.0,
            displayed: Rect::ZERO,
            transition: None,
            fill: FillPaint::Solid(Srgba::new(0.0, 0.0, 0.0, 0.0)),
            tint,
            tint_previous: tint,
            tint_started: f64::NEG_INFINITY,
            needs_layout: true,
            last_bounds: (0.0, 0.0),
        }
    }

    pub fn displayed(&self) -> Rect {
        self.displayed
    }

    pub fn fill(&self) -> &FillPaint {
        &self.fill
    }

    pub fn invalidate_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Installs a freshly constructed control, e.g. after a config reload.
    pub fn replace_control(&mut self, control: MenuControl, font_size: f64) {
        self.control = control;
        self.font_size = font_size;
        self.transition = None;
        self.needs_layout = true;
    }

    /// Applies a frame change, starting an animation when one is requested.
    /// Returns whether the host should fire a feedback pulse.
    pub fn apply(&mut self, change: FrameChange) -> bool {
        match change.animation {
            Some(params) => {
                self.transition = Some(Transition::new(
                    self.displayed,
                    change.indicator,
                    self.now,
                    params,
                ));
            }
            None => {
                self.transition = None;
                self.displayed = change.indicator;
            }
        }
        self.fill = change.fill;
        if let Some(tint) = change.label_tint {
            self.tint_previous = self.current_tint();
            self.tint = tint;
            self.tint_started = self.now;
        }
        change.feedback
    }

    /// Advances animations to `now`. Returns true while another frame is
    /// needed.
    pub fn tick(&mut self, now: f64) -> bool {
        self.now = now;
        let mut animating = false;
        if let Some(transition) = self.transition {
            if transition.is_finished(now) {
                self.displayed = transition.target();
                self.transition = None;
            } else {
                self.displayed = transition.sample(now);
                animating = true;
            }
        }
        animating || now - self.tint_started < TINT_FADE_DURATION
    }

    /// The overlay label tint at the current time, mid cross-fade included.
    pub fn current_tint(&self) -> Srgba<f64> {
        let elapsed = self.now - self.tint_started;
        if elapsed >= TINT_FADE_DURATION {
            self.tint
        } else {
            let t = (elapsed / TINT_FADE_DURATION).clamp(0.0, 1.0);
            glide::appearance::mix(self.tint_previous, self.tint, t)
        }
    }

    /// Widget x to content x, accounting for the side padding inset and the
    /// scroll position.
    pub fn to_content_x(&self, x: f64) -> f64 {
        x - self.control.config().indicator_side_padding + self.control.scroll_offset()
    }

    pub fn to_content(&self, point: Point) -> Point {
        Point::new(self.to_content_x(point.x), point.y)
    }

    /// Measures the labels with the draw context and re-lays the control out
    /// when the items or bounds changed since the last pass.
    pub fn ensure_layout(&mut self, cr: &Context, width: f64, height: f64) {
        if !self.needs_layout && self.last_bounds == (width, height) {
            return;
        }
        cr.select_font_face(
            LABEL_FONT_FAMILY,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Bold,
        );
        cr.set_font_size(self.font_size);
        let widths: Vec<f64> = self
            .control
            .items()
            .iter()
            .map(|item| {
                cr.text_extents(item)
                    .map(|extents| extents.width())
                    .unwrap_or(0.0)
            })
            .collect();

        let change = self.control.relayout(&widths, width, height);
        self.needs_layout = false;
        self.last_bounds = (width, height);
        // Layout corrections land instantly; a transition started against
        // stale frames would animate to the wrong place.
        self.transition = None;
        self.apply(change);
    }
}
