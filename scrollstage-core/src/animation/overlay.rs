use crate::animation::track::Track;
use crate::foundation::core::{Progress, Vec2};
use crate::foundation::error::{StageError, StageResult};

/// Where a caption sits on the visual surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OverlayAnchor {
    /// Centered on both axes.
    #[default]
    Center,
    /// Pinned to the leading (left) edge, vertically centered.
    Leading,
    /// Pinned to the trailing (right) edge, vertically centered.
    Trailing,
}

/// One line of caption text with its styling.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CaptionLine {
    /// Text content.
    pub text: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Straight (non-premultiplied) RGBA color.
    pub color_rgba8: [u8; 4],
}

/// A named overlay caption animated over scroll progress.
///
/// Each overlay is active within its own sub-range of the scroll span;
/// ranges of different overlays may overlap or leave gaps. That is a
/// content-authoring concern, not an engine invariant.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OverlaySpec {
    /// Stable overlay name for authoring/debugging.
    pub name: String,
    /// Placement on the surface.
    #[serde(default)]
    pub anchor: OverlayAnchor,
    /// Caption lines, drawn top to bottom.
    pub lines: Vec<CaptionLine>,
    /// Animated opacity in `[0, 1]`.
    pub opacity: Track<f64>,
    /// Animated positional offset in pixels.
    pub shift: Track<Vec2>,
    /// Animated uniform scale; defaults to a constant 1.
    #[serde(default = "default_scale_track")]
    pub scale: Track<f64>,
}

fn default_scale_track() -> Track<f64> {
    Track::constant(1.0)
}

/// Interpolated overlay state at one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Positional offset in pixels.
    pub shift: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl OverlaySpec {
    /// Check track well-formedness for this overlay.
    pub fn validate(&self) -> StageResult<()> {
        if self.name.trim().is_empty() {
            return Err(StageError::validation("overlay name must be non-empty"));
        }
        self.opacity.validate()?;
        self.shift.validate()?;
        self.scale.validate()?;
        Ok(())
    }

    /// Interpolate this overlay's style at `p`.
    ///
    /// Cheap and recomputed on every progress update; never gated on the
    /// discrete frame index changing.
    pub fn style_at(&self, p: Progress) -> OverlayStyle {
        OverlayStyle {
            opacity: self.opacity.sample(p).clamp(0.0, 1.0),
            shift: self.shift.sample(p),
            scale: self.scale.sample(p),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/overlay.rs"]
mod tests;
