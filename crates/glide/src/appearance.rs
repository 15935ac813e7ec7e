use crate::geometry::Rect;
use palette::{FromColor, Hsv, Mix, Srgb, Srgba, WithAlpha};

/// Saturation added to the fill color when deriving a vibrant label tint.
pub const VIBRANT_SATURATION_BOOST: f64 = 0.2;
/// Brightness removed from the fill color when deriving a vibrant label tint.
pub const VIBRANT_BRIGHTNESS_DROP: f64 = 0.3;

/// Direction of a gradient fill across the menu content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How the indicator is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorFill {
    Solid(Srgba<f64>),
    Gradient(GradientSpec),
}

/// A value-driven two-stop gradient: the ramp assigns a key color to each
/// item index and the stop colors are sampled from it at the continuous
/// selection position.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub axis: Axis,
    pub ramp: Vec<Srgba<f64>>,
}

impl GradientSpec {
    /// The ramp color at a fractional index, blending between neighbors and
    /// clamping at the ends.
    pub fn color_at(&self, value: f64) -> Srgba<f64> {
        match self.ramp.as_slice() {
            [] => Srgba::new(0.0, 0.0, 0.0, 0.0),
            [only] => *only,
            ramp => {
                let clamped = value.clamp(0.0, (ramp.len() - 1) as f64);
                let lower = clamped.floor() as usize;
                let upper = (lower + 1).min(ramp.len() - 1);
                let t = clamped - lower as f64;
                if t <= 0.0 {
                    ramp[lower]
                } else {
                    mix(ramp[lower], ramp[upper], t)
                }
            }
        }
    }

    /// Default stop colors for a selection position: the ramp at `value` and
    /// one item ahead, so a drag blends adjacent item colors.
    pub fn stops_at(&self, value: f64) -> (Srgba<f64>, Srgba<f64>) {
        (self.color_at(value), self.color_at(value + 1.0))
    }
}

/// Blends two colors in linear space.
pub fn mix(a: Srgba<f64>, b: Srgba<f64>, factor: f64) -> Srgba<f64> {
    Srgba::from_linear(a.into_linear().mix(b.into_linear(), factor.clamp(0.0, 1.0)))
}

/// Fractional start/end positions of the indicator along the gradient axis,
/// relative to the full content bounds. These become the gradient's color
/// stop offsets so the fill shifts as the indicator travels.
pub fn gradient_span(indicator: Rect, content: Rect, axis: Axis) -> (f64, f64) {
    let (min, max, extent) = match axis {
        Axis::Horizontal => (indicator.min_x(), indicator.max_x(), content.width),
        Axis::Vertical => (indicator.min_y(), indicator.max_y(), content.height),
    };
    if extent <= 0.0 {
        return (0.0, 1.0);
    }
    ((min / extent).clamp(0.0, 1.0), (max / extent).clamp(0.0, 1.0))
}

/// A label tint that stays readable on top of the indicator fill: the fill
/// color with saturation pushed up and brightness pulled down.
pub fn vibrant_label_color(background: Srgba<f64>) -> Srgba<f64> {
    let mut hsv = Hsv::from_color(background.color);
    hsv.saturation = (hsv.saturation + VIBRANT_SATURATION_BOOST).min(1.0);
    hsv.value = (hsv.value - VIBRANT_BRIGHTNESS_DROP).max(0.0);
    Srgb::from_color(hsv).with_alpha(background.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Srgba<f64>, b: Srgba<f64>) {
        let (ar, ag, ab_, aa) = a.into_components();
        let (br, bg, bb, ba) = b.into_components();
        for (x, y) in [(ar, br), (ag, bg), (ab_, bb), (aa, ba)] {
            assert!((x - y).abs() < 1e-6, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn ramp_clamps_at_both_ends() {
        let spec = GradientSpec {
            axis: Axis::Horizontal,
            ramp: vec![
                Srgba::new(1.0, 0.0, 0.0, 1.0),
                Srgba::new(0.0, 0.0, 1.0, 1.0),
            ],
        };
        assert_close(spec.color_at(-2.0), spec.color_at(0.0));
        assert_close(spec.color_at(5.0), spec.color_at(1.0));
    }

    #[test]
    fn ramp_blends_between_neighbors() {
        let spec = GradientSpec {
            axis: Axis::Horizontal,
            ramp: vec![
                Srgba::new(1.0, 0.0, 0.0, 1.0),
                Srgba::new(0.0, 0.0, 1.0, 1.0),
            ],
        };
        let half = spec.color_at(0.5);
        assert_close(half, mix(spec.ramp[0], spec.ramp[1], 0.5));
    }

    #[test]
    fn stops_straddle_one_item() {
        let spec = GradientSpec {
            axis: Axis::Horizontal,
            ramp: vec![
                Srgba::new(1.0, 0.0, 0.0, 1.0),
                Srgba::new(0.0, 1.0, 0.0, 1.0),
                Srgba::new(0.0, 0.0, 1.0, 1.0),
            ],
        };
        let (start, end) = spec.stops_at(0.0);
        assert_close(start, spec.ramp[0]);
        assert_close(end, spec.ramp[1]);
    }

    #[test]
    fn mix_hits_its_endpoints() {
        let a = Srgba::new(0.2, 0.4, 0.6, 1.0);
        let b = Srgba::new(0.8, 0.1, 0.3, 0.5);
        assert_close(mix(a, b, 0.0), a);
        assert_close(mix(a, b, 1.0), b);
    }

    #[test]
    fn gradient_span_is_fractional() {
        let content = Rect::new(0.0, 0.0, 200.0, 30.0);
        let indicator = Rect::new(50.0, 0.0, 50.0, 30.0);
        let (start, end) = gradient_span(indicator, content, Axis::Horizontal);
        assert!((start - 0.25).abs() < 1e-9);
        assert!((end - 0.5).abs() < 1e-9);
    }

    #[test]
    fn gradient_span_degrades_without_content() {
        let (start, end) = gradient_span(Rect::ZERO, Rect::ZERO, Axis::Vertical);
        assert_eq!((start, end), (0.0, 1.0));
    }

    #[test]
    fn vibrant_tint_raises_saturation_and_lowers_brightness() {
        let background = Srgba::new(0.0, 0.5, 1.0, 1.0);
        let tint = vibrant_label_color(background);

        let before = Hsv::from_color(background.color);
        let after = Hsv::from_color(tint.color);
        assert!(after.saturation >= before.saturation);
        assert!(after.saturation <= 1.0);
        assert!((after.value - (before.value - VIBRANT_BRIGHTNESS_DROP)).abs() < 1e-6);
    }

    #[test]
    fn vibrant_tint_clamps_at_the_gamut_edges() {
        let saturated_dark = Srgba::new(0.1, 0.0, 0.0, 1.0);
        let tint = vibrant_label_color(saturated_dark);
        let hsv = Hsv::from_color(tint.color);
        assert!(hsv.saturation <= 1.0);
        assert!(hsv.value >= 0.0);
    }
}
