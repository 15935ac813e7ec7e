#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrinks the rect by `dx`/`dy` on each side. Negative insets grow it.
    pub fn inset_by(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - dx * 2.0,
            height: self.height - dy * 2.0,
        }
    }

    /// The overlapping region of two rects, or [`Rect::ZERO`] if they are
    /// disjoint.
    pub fn intersection(&self, other: Self) -> Self {
        let x = self.min_x().max(other.min_x());
        let y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        if max_x <= x || max_y <= y {
            return Self::ZERO;
        }
        Self::new(x, y, max_x - x, max_y - y)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// Computes the indicator pill for a continuous selection position.
///
/// `value - round(value)` is the signed distance past the nearest item; the
/// leading edge stretches by `elasticity * |v| * 2` while the trailing edge
/// advances half that, so the pill leans into the direction of travel. The
/// reference box switches from the committed item to the nearest one as soon
/// as the nearest index pulls away, which keeps the shape continuous across
/// the hysteresis lag.
///
/// Absent label boxes are passed in as [`Rect::ZERO`]; the result is then a
/// degenerate rect that the next layout pass corrects.
pub fn indicator_frame(
    current_index: i64,
    current_box: Rect,
    nearest_index: i64,
    nearest_box: Rect,
    elasticity: f64,
    value: f64,
) -> Rect {
    let v = value - value.round(); // -0.5...0.5
    let lead = elasticity * v.abs() * 2.0;
    let trail = lead / 2.0;
    let reference = if current_index == nearest_index {
        current_box
    } else {
        nearest_box
    };
    let width = reference.width + lead;
    let x = if v >= 0.0 {
        reference.min_x() + trail
    } else {
        reference.max_x() - width - trail
    };
    Rect::new(x, 0.0, width, reference.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> (Rect, Rect) {
        (
            Rect::new(0.0, 0.0, 60.0, 30.0),
            Rect::new(80.0, 0.0, 100.0, 30.0),
        )
    }

    #[test]
    fn rest_has_zero_stretch() {
        let (a, _) = boxes();
        let frame = indicator_frame(0, a, 0, a, 15.0, 0.0);
        assert_eq!(frame, Rect::new(0.0, 0.0, 60.0, 30.0));
    }

    #[test]
    fn stretch_reaches_elasticity_at_midpoint() {
        let (a, b) = boxes();
        // At exactly 0.5 the nearest index has already flipped to 1.
        for elasticity in [0.0, 7.5, 15.0] {
            let frame = indicator_frame(0, a, 1, b, elasticity, 0.5);
            assert!((frame.width - (b.width + elasticity)).abs() < 1e-9);
        }
    }

    #[test]
    fn width_is_continuous_across_the_midpoint() {
        let (a, b) = boxes();
        let eps = 1e-6;
        // Just below the midpoint the reference is still item 0, just above
        // it flips to item 1; the stretch magnitude must match on both sides.
        let below = indicator_frame(0, a, 0, b, 15.0, 0.5 - eps);
        let above = indicator_frame(0, a, 1, b, 15.0, 0.5 + eps);
        assert!((below.width - a.width - 15.0).abs() < 1e-3);
        assert!((above.width - b.width - 15.0).abs() < 1e-3);
    }

    #[test]
    fn forward_travel_advances_the_leading_edge() {
        let (a, b) = boxes();
        let frame = indicator_frame(0, a, 0, b, 10.0, 0.25);
        // v = 0.25: lead 5.0, trail 2.5, reference is the current box.
        assert!((frame.width - 65.0).abs() < 1e-9);
        assert!((frame.x - 2.5).abs() < 1e-9);
    }

    #[test]
    fn backward_travel_anchors_the_far_edge() {
        let (a, b) = boxes();
        let frame = indicator_frame(1, b, 1, b, 10.0, 0.75);
        // v = -0.25 relative to item 1: lead 5.0, trail 2.5.
        assert!((frame.width - 105.0).abs() < 1e-9);
        assert!((frame.max_x() - (b.max_x() - 2.5)).abs() < 1e-9);
    }

    #[test]
    fn absent_box_degrades_to_zero_rect() {
        let frame = indicator_frame(0, Rect::ZERO, 1, Rect::ZERO, 15.0, 1.0);
        assert_eq!(frame, Rect::ZERO);
    }

    #[test]
    fn intersection_of_disjoint_rects_is_zero() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection(b), Rect::ZERO);
    }

    #[test]
    fn intersection_clips_to_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(4.0, -2.0, 10.0, 10.0);
        assert_eq!(a.intersection(b), Rect::new(4.0, 0.0, 6.0, 8.0));
    }

    #[test]
    fn inset_grows_with_negative_amounts() {
        let r = Rect::new(10.0, 0.0, 20.0, 30.0).inset_by(-12.0, 0.0);
        assert_eq!(r, Rect::new(-2.0, 0.0, 44.0, 30.0));
    }
}
