use crate::animation::overlay::{CaptionLine, OverlayAnchor, OverlaySpec};
use crate::animation::track::{Breakpoint, Ease, Track};
use crate::assets::sequence::FrameLocator;
use crate::foundation::core::Vec2;
use crate::foundation::error::{StageError, StageResult};

/// White at 90%, used for headings.
const HEADING: [u8; 4] = [255, 255, 255, 230];
/// White at 60%, used for subheadings.
const SUBHEADING: [u8; 4] = [255, 255, 255, 153];
/// Cyan accent at 80%, used for kicker lines.
const KICKER: [u8; 4] = [34, 211, 238, 204];

/// Everything that defines the scroll showcase: which frames to load, how
/// tall the scroll region is, and the overlay captions with their
/// breakpoints.
///
/// Definable in JSON; the stock NeuralCore X1 definition is built in.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShowcaseContent {
    /// Naming scheme of the pre-rendered frame sequence.
    pub locator: FrameLocator,
    /// Scroll region height as a multiple of the viewport height.
    pub scroll_span_factor: f64,
    /// Label shown under the loading indicator.
    pub loading_label: String,
    /// Overlay captions in paint order.
    pub overlays: Vec<OverlaySpec>,
}

impl ShowcaseContent {
    /// Validate the locator, span factor, and every overlay track.
    pub fn validate(&self) -> StageResult<()> {
        self.locator.validate()?;
        if !self.scroll_span_factor.is_finite() || self.scroll_span_factor <= 1.0 {
            return Err(StageError::validation(
                "scroll_span_factor must be finite and > 1",
            ));
        }
        for overlay in &self.overlays {
            overlay.validate()?;
        }
        Ok(())
    }

    /// Parse and validate a JSON showcase definition.
    pub fn from_json(json: &str) -> StageResult<Self> {
        let content: Self = serde_json::from_str(json)
            .map_err(|e| StageError::validation(format!("invalid showcase JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// The built-in NeuralCore X1 showcase: 240 frames scrubbed across a
    /// four-viewport scroll span, with four captions keyed to it.
    pub fn neuralcore_x1() -> Self {
        Self {
            locator: FrameLocator {
                base_path: "sequence/frame-".to_string(),
                ext: "jpg".to_string(),
                count: 240,
            },
            scroll_span_factor: 4.0,
            loading_label: "Loading NeuralCore X1".to_string(),
            overlays: vec![
                title_overlay(),
                feature_overlay(
                    "processing-power",
                    OverlayAnchor::Leading,
                    &["Processing Power", "256 Billion", "Parameters"],
                    [0.2, 0.28, 0.42, 0.5],
                    -50.0,
                ),
                feature_overlay(
                    "architecture",
                    OverlayAnchor::Trailing,
                    &["Architecture", "Built for Speed.", "Designed for Scale."],
                    [0.45, 0.53, 0.67, 0.75],
                    50.0,
                ),
                cta_overlay(),
            ],
        }
    }
}

fn track(pairs: Vec<(f64, f64)>) -> Track<f64> {
    Track {
        points: pairs
            .into_iter()
            .map(|(at, value)| Breakpoint {
                at,
                value,
                ease: Ease::Linear,
            })
            .collect(),
    }
}

fn shift_track(pairs: Vec<(f64, Vec2)>) -> Track<Vec2> {
    Track {
        points: pairs
            .into_iter()
            .map(|(at, value)| Breakpoint {
                at,
                value,
                ease: Ease::Linear,
            })
            .collect(),
    }
}

fn title_overlay() -> OverlaySpec {
    OverlaySpec {
        name: "title".to_string(),
        anchor: OverlayAnchor::Center,
        lines: vec![
            CaptionLine {
                text: "NeuralCore X1".to_string(),
                size_px: 96.0,
                color_rgba8: HEADING,
            },
            CaptionLine {
                text: "The Future of AI.".to_string(),
                size_px: 28.0,
                color_rgba8: SUBHEADING,
            },
        ],
        opacity: track(vec![(0.0, 1.0), (0.15, 0.0)]),
        shift: Track::constant(Vec2::ZERO),
        scale: track(vec![(0.0, 1.0), (0.15, 0.95)]),
    }
}

fn feature_overlay(
    name: &str,
    anchor: OverlayAnchor,
    lines: &[&str; 3],
    keys: [f64; 4],
    slide_px: f64,
) -> OverlaySpec {
    let resting = Vec2::new(slide_px, 0.0);
    OverlaySpec {
        name: name.to_string(),
        anchor,
        lines: vec![
            CaptionLine {
                text: lines[0].to_string(),
                size_px: 14.0,
                color_rgba8: KICKER,
            },
            CaptionLine {
                text: lines[1].to_string(),
                size_px: 56.0,
                color_rgba8: HEADING,
            },
            CaptionLine {
                text: lines[2].to_string(),
                size_px: 28.0,
                color_rgba8: SUBHEADING,
            },
        ],
        opacity: track(vec![
            (keys[0], 0.0),
            (keys[1], 1.0),
            (keys[2], 1.0),
            (keys[3], 0.0),
        ]),
        shift: shift_track(vec![
            (keys[0], resting),
            (keys[1], Vec2::ZERO),
            (keys[2], Vec2::ZERO),
            (keys[3], resting),
        ]),
        scale: Track::constant(1.0),
    }
}

fn cta_overlay() -> OverlaySpec {
    OverlaySpec {
        name: "cta".to_string(),
        anchor: OverlayAnchor::Center,
        lines: vec![
            CaptionLine {
                text: "Power Your Next".to_string(),
                size_px: 56.0,
                color_rgba8: HEADING,
            },
            CaptionLine {
                text: "Breakthrough.".to_string(),
                size_px: 56.0,
                color_rgba8: HEADING,
            },
        ],
        opacity: track(vec![(0.8, 0.0), (0.9, 1.0)]),
        shift: shift_track(vec![(0.8, Vec2::new(0.0, 30.0)), (0.9, Vec2::ZERO)]),
        scale: Track::constant(1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/showcase.rs"]
mod tests;
