//! Time-bounded camera transitions: interpolates position and look-at between
//! two poses over a fixed duration with a pluggable easing curve.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::CameraPose;

/// Monotonic map from linear progress in `[0, 1]` to eased progress in `[0, 1]`.
///
/// Implementations must return 0 at 0 and 1 at 1.
pub trait Easing: fmt::Debug + Send + Sync {
    /// Map linear progress to eased progress.
    fn ease(&self, t: f32) -> f32;
}

/// Built-in easing curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EasingFunction {
    /// Constant speed, no acceleration.
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end.
    EaseOut,
    /// Slow start, fast middle, slow end.
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Map a linear progress value (0.0..=1.0) to an eased value.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

impl Easing for EasingFunction {
    fn ease(&self, t: f32) -> f32 {
        self.apply(t)
    }
}

/// Returned when an easing name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing '{0}' (expected linear, ease_in, ease_out or ease_in_out)")]
pub struct UnknownEasing(pub String);

impl FromStr for EasingFunction {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(EasingFunction::Linear),
            "ease_in" => Ok(EasingFunction::EaseIn),
            "ease_out" => Ok(EasingFunction::EaseOut),
            "ease_in_out" => Ok(EasingFunction::EaseInOut),
            _ => Err(UnknownEasing(s.to_string())),
        }
    }
}

/// Default settle threshold in scene units.
pub const DEFAULT_PRECISION: f32 = 1e-4;

/// A running interpolation from one pose to another.
///
/// The animator is a value: it never reads a clock, and sampling it does not
/// advance anything. The scheduler drops it once [`is_complete`] reports true.
///
/// [`is_complete`]: TransitionAnimator::is_complete
#[derive(Clone, Debug)]
pub struct TransitionAnimator {
    /// Pose at the start of the transition.
    pub from: CameraPose,
    /// Pose at the end of the transition.
    pub to: CameraPose,
    /// Start timestamp in milliseconds.
    pub start_ms: f64,
    /// Duration in milliseconds. Zero snaps immediately.
    pub duration_ms: f64,
    /// Residual distance under which the pose counts as settled.
    pub precision: f32,
    easing: Arc<dyn Easing>,
}

impl TransitionAnimator {
    /// Start a transition at `start_ms`.
    pub fn new(
        from: CameraPose,
        to: CameraPose,
        start_ms: f64,
        duration_ms: f64,
        easing: Arc<dyn Easing>,
    ) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(0.0),
            precision: DEFAULT_PRECISION,
            easing,
        }
    }

    /// Returns a copy with a different settle threshold.
    pub fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Interpolated pose at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> CameraPose {
        let t = self.easing.ease(self.progress(now_ms));
        let pose = self.from.lerp(&self.to, t);
        if pose.distance(&self.to) < self.precision {
            self.to
        } else {
            pose
        }
    }

    /// True once `duration_ms` has elapsed.
    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}
