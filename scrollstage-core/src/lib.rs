//! Scrollstage is a scroll-synchronized frame player and showcase engine.
//!
//! It implements the core of a scroll-driven product page: a tall scroll
//! region is mapped to a normalized progress scalar that scrubs through a
//! preloaded image sequence and drives breakpoint-interpolated caption
//! overlays, with a CPU compositor to flatten any state to pixels.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`SequenceLoader`] fetches and decodes all frames ahead of
//!    interaction (`FrameLocator + FrameSource -> FrameSequence`), reporting
//!    monotonic percent progress. Any single failure aborts the sequence.
//! 2. **Observe**: [`ScrollObserver`] coalesces raw scroll offsets to the
//!    newest value per host tick and normalizes them through
//!    [`ScrollMetrics`] (`offset -> Progress`).
//! 3. **Advance**: [`Player`] selects the discrete frame
//!    (`min(floor(p * n), n - 1)`), redraws its surface only when that frame
//!    changes, and recomputes every overlay style on every update.
//! 4. **Compose** (optional): [`Compositor`] flattens a frame plus styled
//!    captions to premultiplied RGBA8 for preview/export.
//!
//! The site shell (routes, static pages, contact form) lives in owned state
//! structs driven through the [`SiteApp`] event loop.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single logical thread**: mutable state is only touched from the event
//!   loop; the parallel load is the sole suspension point.
//! - **Premultiplied RGBA8** end-to-end.
//! - **Fail-fast loading**: no partial sequences, no retries.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod foundation;
mod player;
mod render;
mod scroll;
mod site;

pub use animation::overlay::{CaptionLine, OverlayAnchor, OverlaySpec, OverlayStyle};
pub use animation::track::{Breakpoint, Ease, Lerp, Track};
pub use assets::decode::{PreparedImage, decode_image};
pub use assets::sequence::{
    DirSource, FrameLocator, FrameSequence, FrameSource, LoadProgress, LoadState, SequenceLoader,
    normalize_rel_path,
};
pub use foundation::core::{FrameIndex, Progress, Vec2};
pub use foundation::error::{StageError, StageResult};
pub use player::scrub::{Player, PlayerPhase, PlayerStats, PlayerUpdate};
pub use render::compose::{Compositor, FrameRgba, TextBrushRgba8};
pub use render::surface::FrameSurface;
pub use scroll::observer::ScrollObserver;
pub use scroll::region::ScrollMetrics;
pub use site::app::{SiteApp, SiteEvent};
pub use site::contact::ContactForm;
pub use site::pages::{ContactPage, Highlight, HomePage, PageAction, contact_page, home_page};
pub use site::routes::Route;
pub use site::showcase::ShowcaseContent;
pub use site::specs::{SpecItem, SpecSection, SpecsPage, specs_page};
