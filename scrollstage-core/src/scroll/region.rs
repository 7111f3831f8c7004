use crate::foundation::core::Progress;
use crate::foundation::error::{StageError, StageResult};

/// Geometry of the tall scroll region relative to the viewport.
///
/// Progress is 0 when the region's start aligns with the viewport start and
/// 1 when the region's end aligns with the viewport end, so the usable span
/// is `region_height - viewport_height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    region_top: f64,
    region_height: f64,
    viewport_height: f64,
}

impl ScrollMetrics {
    /// Build validated metrics; the region must be strictly taller than the
    /// viewport or no scroll span exists.
    pub fn new(region_top: f64, region_height: f64, viewport_height: f64) -> StageResult<Self> {
        if !region_top.is_finite() || !region_height.is_finite() || !viewport_height.is_finite() {
            return Err(StageError::validation("scroll metrics must be finite"));
        }
        if viewport_height <= 0.0 {
            return Err(StageError::validation("viewport height must be > 0"));
        }
        if region_height <= viewport_height {
            return Err(StageError::validation(
                "scroll region must be taller than the viewport",
            ));
        }
        Ok(Self {
            region_top,
            region_height,
            viewport_height,
        })
    }

    /// Metrics for a region spanning `factor` viewport heights, starting at
    /// the top of the document.
    pub fn spanning(viewport_height: f64, factor: f64) -> StageResult<Self> {
        if !factor.is_finite() {
            return Err(StageError::validation("scroll span factor must be finite"));
        }
        Self::new(0.0, viewport_height * factor, viewport_height)
    }

    /// Scrollable distance between progress 0 and 1.
    pub fn span(&self) -> f64 {
        self.region_height - self.viewport_height
    }

    /// Map an absolute scroll offset to normalized progress, clamped at both
    /// ends. Non-finite offsets saturate to 0.
    pub fn progress_at(&self, offset: f64) -> Progress {
        Progress::clamped((offset - self.region_top) / self.span())
    }
}
