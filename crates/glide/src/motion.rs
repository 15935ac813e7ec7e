use crate::geometry::Rect;

/// Duration for a tap-style jump that crosses one item boundary from rest.
pub const LEAP_DURATION: f64 = 0.22;

/// How a pending frame change should be animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Seconds.
    pub duration: f64,
    pub timing: SpringTiming,
}

/// Maps `(old_value, new_value)` to animation parameters, or `None` to apply
/// the change instantly. Hosts can swap in their own on the control.
pub type AnimatorFn = dyn Fn(f64, f64) -> Option<AnimationParams>;

/// The stock policy: a boundary-crossing jump gets a fixed short duration,
/// otherwise the duration scales with the distance traveled in three
/// buckets, and anything under 0.2 items is applied instantly.
pub fn default_animator(old: f64, new: f64) -> Option<AnimationParams> {
    let gap = new - old;
    let leaps = gap.abs() < 1.0 && new.round() != old.round();
    let duration = if leaps {
        LEAP_DURATION
    } else if gap.abs() < 0.2 {
        0.0
    } else if gap.abs() < 0.5 {
        0.2
    } else {
        0.4
    };
    (duration > 0.0).then_some(AnimationParams {
        duration,
        timing: SpringTiming::critically_damped(),
    })
}

/// A damped-spring timing curve, sampled by the host's frame clock.
///
/// `progress` maps normalized elapsed time in `[0, 1]` to normalized
/// position. The critically damped case (ratio 1.0) is normalized so the
/// curve lands exactly on 1.0 at the end of the duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTiming {
    pub damping_ratio: f64,
    pub initial_velocity: f64,
}

// Decay rate scaled so a critically damped spring has visually settled at
// the end of its duration.
const SETTLE_RATE: f64 = 8.0;

impl SpringTiming {
    pub const fn critically_damped() -> Self {
        Self {
            damping_ratio: 1.0,
            initial_velocity: 0.0,
        }
    }

    pub fn progress(&self, fraction: f64) -> f64 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        if self.damping_ratio >= 1.0 {
            let raw = |u: f64| 1.0 - (1.0 + (SETTLE_RATE - self.initial_velocity) * u) * (-SETTLE_RATE * u).exp();
            raw(fraction) / raw(1.0)
        } else {
            let zeta = self.damping_ratio.max(0.0);
            let damped = SETTLE_RATE * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * SETTLE_RATE * fraction).exp();
            let phase = (zeta * SETTLE_RATE + self.initial_velocity) / damped;
            1.0 - envelope * ((damped * fraction).cos() + phase * (damped * fraction).sin())
        }
    }
}

/// An in-flight rect animation, sampled against wall-clock seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: Rect,
    to: Rect,
    start: f64,
    params: AnimationParams,
}

impl Transition {
    pub fn new(from: Rect, to: Rect, start: f64, params: AnimationParams) -> Self {
        Self {
            from,
            to,
            start,
            params,
        }
    }

    pub fn target(&self) -> Rect {
        self.to
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.start >= self.params.duration
    }

    pub fn sample(&self, now: f64) -> Rect {
        let fraction = if self.params.duration > 0.0 {
            (now - self.start) / self.params.duration
        } else {
            1.0
        };
        let t = self.params.timing.progress(fraction);
        lerp_rect(self.from, self.to, t)
    }
}

fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    Rect::new(
        lerp(a.x, b.x),
        lerp(a.y, b.y),
        lerp(a.width, b.width),
        lerp(a.height, b.height),
    )
}
