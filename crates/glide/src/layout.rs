use crate::config::Config;
use crate::geometry::{Point, Rect};

/// Resolved label frames in the menu's content coordinate space.
///
/// Built from measured intrinsic label widths; the control never measures
/// text itself, the host's text layer feeds widths in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelLayout {
    frames: Vec<Rect>,
    content_width: f64,
    content_height: f64,
}

impl LabelLayout {
    /// Lays labels out left to right.
    ///
    /// In intrinsic mode every label keeps its measured width (equal
    /// distribution widens them all to the widest). When
    /// `fills_all_items_in_bounds` is set the content is pinned to the
    /// control width minus the indicator side padding and the remaining
    /// space is split equally or proportionally to the measured widths.
    pub fn compute(widths: &[f64], height: f64, config: &Config, bounds_width: f64) -> Self {
        let count = widths.len();
        if count == 0 {
            return Self::default();
        }

        let spacing_total = config.item_spacing * (count - 1) as f64;
        let resolved: Vec<f64> = if config.fills_all_items_in_bounds {
            let content = (bounds_width - config.indicator_side_padding * 2.0).max(0.0);
            let available = (content - spacing_total).max(0.0);
            if config.fills_items_equally {
                vec![available / count as f64; count]
            } else {
                let total: f64 = widths.iter().sum();
                if total > 0.0 {
                    widths.iter().map(|w| available * w / total).collect()
                } else {
                    vec![available / count as f64; count]
                }
            }
        } else if config.fills_items_equally {
            let widest = widths.iter().cloned().fold(0.0, f64::max);
            vec![widest; count]
        } else {
            widths.to_vec()
        };

        let mut frames = Vec::with_capacity(count);
        let mut x = 0.0;
        for width in &resolved {
            frames.push(Rect::new(x, 0.0, *width, height));
            x += width + config.item_spacing;
        }
        let content_width = x - config.item_spacing;

        Self {
            frames,
            content_width,
            content_height: height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn content_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.content_width, self.content_height)
    }

    /// The frame for an index, or `None` while the label does not exist.
    /// Signed so that extrapolated tracker indices degrade instead of
    /// panicking.
    pub fn frame(&self, index: i64) -> Option<Rect> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.frames.get(i))
            .copied()
    }

    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Tap hit-testing: the label whose frame contains the point.
    pub fn index_at(&self, point: Point) -> Option<usize> {
        self.frames.iter().position(|frame| frame.contains(point))
    }

    /// The continuous selection value for an x position, piecewise linear
    /// between label centers. Used to scrub the value during a drag.
    pub fn value_for_x(&self, x: f64) -> f64 {
        let centers: Vec<f64> = self.frames.iter().map(Rect::mid_x).collect();
        match centers.as_slice() {
            [] => 0.0,
            [_] => 0.0,
            [first, .., last] => {
                if x <= *first {
                    return 0.0;
                }
                if x >= *last {
                    return (centers.len() - 1) as f64;
                }
                for (i, pair) in centers.windows(2).enumerate() {
                    let span = pair[1] - pair[0];
                    if x <= pair[1] && span > f64::EPSILON {
                        return i as f64 + (x - pair[0]) / span;
                    }
                }
                (centers.len() - 1) as f64
            }
        }
    }
}

/// Minimal scroll offset that keeps `target` visible with `margin` lookahead
/// on both sides, clamped to the scrollable range.
pub fn reveal_offset(
    target: Rect,
    viewport_width: f64,
    content_width: f64,
    offset: f64,
    margin: f64,
) -> f64 {
    let target = target.inset_by(-margin, 0.0);
    let mut next = offset;
    if target.min_x() < next {
        next = target.min_x();
    } else if target.max_x() > next + viewport_width {
        next = target.max_x() - viewport_width;
    }
    next.clamp(0.0, (content_width - viewport_width).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            item_spacing: 10.0,
            ..Config::default()
        }
    }

    #[test]
    fn intrinsic_mode_packs_measured_widths() {
        let layout = LabelLayout::compute(&[40.0, 60.0, 20.0], 30.0, &config(), 500.0);
        assert_eq!(layout.frame(0), Some(Rect::new(0.0, 0.0, 40.0, 30.0)));
        assert_eq!(layout.frame(1), Some(Rect::new(50.0, 0.0, 60.0, 30.0)));
        assert_eq!(layout.frame(2), Some(Rect::new(120.0, 0.0, 20.0, 30.0)));
        assert_eq!(layout.content_width(), 140.0);
    }

    #[test]
    fn equal_mode_widens_to_the_widest_label() {
        let cfg = Config {
            fills_items_equally: true,
            ..config()
        };
        let layout = LabelLayout::compute(&[40.0, 60.0, 20.0], 30.0, &cfg, 500.0);
        for i in 0..3 {
            assert_eq!(layout.frame(i).unwrap().width, 60.0);
        }
    }

    #[test]
    fn bounds_fill_distributes_proportionally() {
        let cfg = Config {
            item_spacing: 10.0,
            indicator_side_padding: 10.0,
            fills_all_items_in_bounds: true,
            ..Config::default()
        };
        // content = 240 - 20 = 220; available = 220 - 20 spacing = 200.
        let layout = LabelLayout::compute(&[30.0, 10.0, 10.0], 30.0, &cfg, 240.0);
        assert_eq!(layout.frame(0).unwrap().width, 120.0);
        assert_eq!(layout.frame(1).unwrap().width, 40.0);
        assert_eq!(layout.frame(2).unwrap().width, 40.0);
        assert!((layout.content_width() - 220.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_fill_can_split_equally() {
        let cfg = Config {
            item_spacing: 10.0,
            indicator_side_padding: 10.0,
            fills_all_items_in_bounds: true,
            fills_items_equally: true,
            ..Config::default()
        };
        let layout = LabelLayout::compute(&[30.0, 10.0], 30.0, &cfg, 240.0);
        assert_eq!(layout.frame(0).unwrap().width, 105.0);
        assert_eq!(layout.frame(1).unwrap().width, 105.0);
    }

    #[test]
    fn absent_indices_have_no_frame() {
        let layout = LabelLayout::compute(&[40.0], 30.0, &config(), 500.0);
        assert_eq!(layout.frame(-1), None);
        assert_eq!(layout.frame(3), None);
    }

    #[test]
    fn index_at_finds_the_containing_label() {
        let layout = LabelLayout::compute(&[40.0, 60.0], 30.0, &config(), 500.0);
        assert_eq!(layout.index_at(Point::new(10.0, 5.0)), Some(0));
        assert_eq!(layout.index_at(Point::new(60.0, 5.0)), Some(1));
        assert_eq!(layout.index_at(Point::new(45.0, 5.0)), None, "gap");
    }

    #[test]
    fn value_for_x_interpolates_between_centers() {
        let layout = LabelLayout::compute(&[40.0, 40.0, 40.0], 30.0, &config(), 500.0);
        // Centers at 20, 70, 120.
        assert_eq!(layout.value_for_x(0.0), 0.0);
        assert!((layout.value_for_x(45.0) - 0.5).abs() < 1e-9);
        assert!((layout.value_for_x(70.0) - 1.0).abs() < 1e-9);
        assert!((layout.value_for_x(95.0) - 1.5).abs() < 1e-9);
        assert_eq!(layout.value_for_x(500.0), 2.0);
    }

    #[test]
    fn value_for_x_round_trips_label_centers() {
        let layout = LabelLayout::compute(&[35.0, 80.0, 55.0, 20.0], 30.0, &config(), 500.0);
        for (i, frame) in layout.frames().iter().enumerate() {
            assert!((layout.value_for_x(frame.mid_x()) - i as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn reveal_scrolls_right_with_lookahead() {
        let target = Rect::new(400.0, 0.0, 50.0, 30.0);
        let offset = reveal_offset(target, 200.0, 600.0, 0.0, 80.0);
        // Expanded target ends at 530; viewport must end there.
        assert_eq!(offset, 330.0);
    }

    #[test]
    fn reveal_scrolls_left_and_clamps_to_zero() {
        let target = Rect::new(10.0, 0.0, 50.0, 30.0);
        let offset = reveal_offset(target, 200.0, 600.0, 300.0, 80.0);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn reveal_keeps_offset_when_already_visible() {
        let target = Rect::new(150.0, 0.0, 40.0, 30.0);
        let offset = reveal_offset(target, 400.0, 600.0, 50.0, 80.0);
        assert_eq!(offset, 50.0);
    }

    #[test]
    fn reveal_clamps_to_the_scrollable_range() {
        let target = Rect::new(560.0, 0.0, 40.0, 30.0);
        let offset = reveal_offset(target, 200.0, 600.0, 0.0, 80.0);
        assert_eq!(offset, 400.0);
    }
}
