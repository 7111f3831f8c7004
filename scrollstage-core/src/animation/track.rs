use crate::foundation::core::{Progress, Vec2};
use crate::foundation::error::{StageError, StageResult};
use crate::foundation::math::{inv_lerp_f64, lerp_f64};

/// Values that can be interpolated linearly between two breakpoints.
pub trait Lerp: Sized {
    /// Interpolate between `a` and `b` at fraction `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_f64(*a, *b, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
    }
}

/// Easing applied toward the next breakpoint.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// No easing; the segment fraction is used as-is.
    #[default]
    Linear,
    /// Decelerating quadratic.
    OutQuad,
    /// Accelerate-then-decelerate quadratic.
    InOutQuad,
    /// Decelerating cubic.
    OutCubic,
}

impl Ease {
    /// Map a segment fraction through the easing curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A single control point of a [`Track`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint<T> {
    /// Scroll progress this breakpoint sits at, in `[0, 1]`.
    pub at: f64,
    /// Target value at this progress.
    pub value: T,
    /// Easing toward the next breakpoint.
    #[serde(default)]
    pub ease: Ease,
}

/// Piecewise-linear mapping from scroll progress to a value.
///
/// Outside the breakpoint range the track clamps to the first/last target
/// value; there is no extrapolation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    /// Breakpoints sorted by `at`.
    pub points: Vec<Breakpoint<T>>,
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    /// Build a validated track from explicit breakpoints.
    pub fn new(points: Vec<Breakpoint<T>>) -> StageResult<Self> {
        let track = Self { points };
        track.validate()?;
        Ok(track)
    }

    /// Build a validated linear track from `(progress, value)` pairs.
    pub fn linear(pairs: Vec<(f64, T)>) -> StageResult<Self> {
        Self::new(
            pairs
                .into_iter()
                .map(|(at, value)| Breakpoint {
                    at,
                    value,
                    ease: Ease::Linear,
                })
                .collect(),
        )
    }

    /// A track that holds `value` over the whole progress range.
    pub fn constant(value: T) -> Self {
        Self {
            points: vec![Breakpoint {
                at: 0.0,
                value,
                ease: Ease::Linear,
            }],
        }
    }

    /// Check breakpoint well-formedness; deserialized tracks must be
    /// validated before sampling.
    pub fn validate(&self) -> StageResult<()> {
        if self.points.is_empty() {
            return Err(StageError::validation(
                "track must have at least one breakpoint",
            ));
        }
        for bp in &self.points {
            if !bp.at.is_finite() || !(0.0..=1.0).contains(&bp.at) {
                return Err(StageError::validation(
                    "track breakpoint keys must be finite and in [0, 1]",
                ));
            }
        }
        if !self.points.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(StageError::validation(
                "track breakpoints must be sorted by progress",
            ));
        }
        Ok(())
    }

    /// Sample the track at `p` with clamping outside the breakpoint range.
    pub fn sample(&self, p: Progress) -> T {
        let x = p.value();
        let idx = self.points.partition_point(|bp| bp.at <= x);

        if idx == 0 {
            return self.points[0].value.clone();
        }
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1].value.clone();
        }

        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        if b.at == a.at {
            return a.value.clone();
        }

        let t = inv_lerp_f64(a.at, b.at, x);
        T::lerp(&a.value, &b.value, a.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
