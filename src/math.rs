//! Clamping and interpolation helpers
//!
//! The interpolators clamp their `amount` to `[0, 1]` before use, so results
//! always stay between the two endpoints.

use crate::error::{Error, Result};
use num_traits::Float;
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[inline]
fn two<T: Float>() -> T {
    T::one() + T::one()
}

/// Clamps a value between a lower and upper limit.
///
/// # Parameters
/// - `value`: The value to clamp.
/// - `low`: The minimum allowed value.
/// - `high`: The maximum allowed value.
///
/// # Returns
/// `high` if `value > high`, `low` if `value < low`, otherwise `value`.
///
/// The upper limit is checked first, so with `low > high` a value above
/// `high` yields `high`. Use [`try_clamp`] when the bounds are not trusted.
///
/// # Examples
///
/// ```
/// use toolbelt::math::clamp;
///
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value > high {
        high
    } else if value < low {
        low
    } else {
        value
    }
}

/// Like [`clamp`], but rejects `low > high`.
///
/// # Errors
///
/// Returns [`Error::InvalidBounds`] if `low > high`.
pub fn try_clamp<T: PartialOrd + std::fmt::Debug>(value: T, low: T, high: T) -> Result<T> {
    if low > high {
        return Err(Error::invalid_bounds(low, high));
    }
    Ok(clamp(value, low, high))
}

/// Linearly interpolates between two values.
///
/// # Parameters
/// - `from`: The start value, returned exactly at `amount <= 0`.
/// - `to`: The end value, returned exactly at `amount >= 1`.
/// - `amount`: The interpolation factor, clamped to `[0, 1]`.
#[inline]
pub fn lerp<T: Float>(from: T, to: T, amount: T) -> T {
    let t = clamp(amount, T::zero(), T::one());
    if t == T::zero() {
        from
    } else if t == T::one() {
        to
    } else {
        from + (to - from) * t
    }
}

/// Cubic Hermite ease from `from` to `to` with zero tangents at both ends.
///
/// # Parameters
/// - `from`: The start value, returned exactly at `amount <= 0`.
/// - `to`: The end value, returned exactly at `amount >= 1`.
/// - `amount`: The interpolation factor, clamped to `[0, 1]`.
///
/// # Returns
/// `(2a - 2b)t³ + (3b - 3a)t² + a` for `t` strictly inside `(0, 1)`.
#[inline]
pub fn smooth_step<T: Float>(from: T, to: T, amount: T) -> T {
    let t = clamp(amount, T::zero(), T::one());
    if t == T::zero() {
        return from;
    }
    if t == T::one() {
        return to;
    }
    let two = two::<T>();
    let three = two + T::one();
    let t2 = t * t;
    let t3 = t2 * t;
    (two * from - two * to) * t3 + (three * to - three * from) * t2 + from
}

/// Ping-pong ease: `from` → `to` over the first half, then back to `from`.
///
/// Yields `from` at 0, `to` at 0.5 and `from` again at 1.
#[inline]
pub fn smooth_step2<T: Float>(from: T, to: T, amount: T) -> T {
    let t = clamp(amount, T::zero(), T::one());
    let two = two::<T>();
    let half = T::one() / two;
    if t <= half {
        smooth_step(from, to, t * two)
    } else {
        smooth_step(to, from, (t - half) * two)
    }
}

/// Named interpolation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    Smooth,
    PingPong,
}

impl Easing {
    /// Evaluates the curve between `from` and `to` at `amount`.
    pub fn apply<T: Float>(self, from: T, to: T, amount: T) -> T {
        match self {
            Self::Linear => lerp(from, to, amount),
            Self::Smooth => smooth_step(from, to, amount),
            Self::PingPong => smooth_step2(from, to, amount),
        }
    }
}
