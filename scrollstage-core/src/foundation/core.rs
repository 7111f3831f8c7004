use crate::foundation::error::{StageError, StageResult};

pub use kurbo::Vec2;

/// Zero-based index into a frame sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

/// Normalized scroll progress in `[0, 1]`.
///
/// 0 means the scroll region's start aligns with the viewport start, 1 means
/// the region's end aligns with the viewport end. A live derived signal; the
/// engine never stores or persists a history of these.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of the scroll span.
    pub const ZERO: Progress = Progress(0.0);
    /// Progress at the end of the scroll span.
    pub const ONE: Progress = Progress(1.0);

    /// Validate a raw scalar as progress. Non-finite input is rejected;
    /// values outside `[0, 1]` are an error rather than silently clamped.
    pub fn new(value: f64) -> StageResult<Self> {
        if !value.is_finite() {
            return Err(StageError::validation("progress must be finite"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(StageError::validation("progress must be in [0, 1]"));
        }
        Ok(Self(value))
    }

    /// Clamp a raw scalar into `[0, 1]`; non-finite input saturates to 0.
    pub fn clamped(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw scalar value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Discrete frame selection: `min(floor(p * count), count - 1)`.
    ///
    /// Monotonic non-decreasing in `p`; clamps at the final frame rather
    /// than overflowing at `p = 1`.
    pub fn frame_index(self, count: u32) -> FrameIndex {
        if count == 0 {
            return FrameIndex(0);
        }
        let raw = (self.0 * f64::from(count)).floor() as u32;
        FrameIndex(raw.min(count - 1))
    }
}
