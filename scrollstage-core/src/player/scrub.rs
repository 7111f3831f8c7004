use crate::animation::overlay::{OverlaySpec, OverlayStyle};
use crate::assets::sequence::FrameSequence;
use crate::foundation::core::{FrameIndex, Progress};
use crate::foundation::error::StageResult;
use crate::render::surface::FrameSurface;

/// Lifecycle phase of a [`Player`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerPhase {
    /// Waiting for the frame sequence to finish loading.
    Loading,
    /// Sequence loaded; progress updates drive the surface.
    Ready,
    /// A frame failed to load; terminal, the surface stays blank.
    Failed,
    /// Torn down; all further events are no-ops.
    Detached,
}

/// Counters for the hot path, kept for tests and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// Surface redraws performed (the expensive operation).
    pub redraws: u64,
    /// Progress updates consumed, redraw or not.
    pub progress_updates: u64,
}

/// Result of one progress update.
#[derive(Clone, Debug)]
pub struct PlayerUpdate {
    /// Frame selected for this progress value.
    pub frame: FrameIndex,
    /// Whether the surface was redrawn (the selected frame changed).
    pub redrawn: bool,
    /// Interpolated overlay styles, parallel to [`Player::overlays`].
    pub styles: Vec<OverlayStyle>,
}

/// The scroll-synchronized frame player.
///
/// Maps normalized scroll progress to a discrete frame drawn on the surface
/// and to continuous overlay styles. The surface redraw is the expensive
/// operation in the hot path, so it only happens when the selected integer
/// frame actually changes; overlay styles are recomputed on every update.
#[derive(Debug)]
pub struct Player {
    overlays: Vec<OverlaySpec>,
    phase: PlayerPhase,
    sequence: Option<FrameSequence>,
    surface: FrameSurface,
    current: Option<FrameIndex>,
    stats: PlayerStats,
}

impl Player {
    /// Create a player waiting for its sequence; overlays are validated up
    /// front.
    pub fn new(overlays: Vec<OverlaySpec>) -> StageResult<Self> {
        for overlay in &overlays {
            overlay.validate()?;
        }
        Ok(Self {
            overlays,
            phase: PlayerPhase::Loading,
            sequence: None,
            surface: FrameSurface::empty(),
            current: None,
            stats: PlayerStats::default(),
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    /// Overlay specs, in the order styles are reported.
    pub fn overlays(&self) -> &[OverlaySpec] {
        &self.overlays
    }

    /// The visual surface; blank until ready.
    pub fn surface(&self) -> &FrameSurface {
        &self.surface
    }

    /// Last frame index drawn, if any.
    pub fn current_frame(&self) -> Option<FrameIndex> {
        self.current
    }

    /// Hot-path counters.
    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    /// Accept the loaded sequence and draw frame 0 exactly once as the
    /// initial state, independent of the scroll observer ever firing.
    ///
    /// Ignored outside the `Loading` phase.
    pub fn ready(&mut self, sequence: FrameSequence) -> Option<PlayerUpdate> {
        if self.phase != PlayerPhase::Loading {
            return None;
        }
        self.phase = PlayerPhase::Ready;
        self.sequence = Some(sequence);
        Some(self.draw(Progress::ZERO))
    }

    /// Record a failed load; terminal, the surface stays blank.
    pub fn fail(&mut self) {
        if self.phase == PlayerPhase::Loading {
            self.phase = PlayerPhase::Failed;
        }
    }

    /// Tear the player down; subsequent updates are no-ops.
    pub fn detach(&mut self) {
        self.phase = PlayerPhase::Detached;
    }

    /// Return to `Loading` as a freshly mounted instance would.
    pub fn reset(&mut self) {
        self.phase = PlayerPhase::Loading;
        self.sequence = None;
        self.surface.clear();
        self.current = None;
        self.stats = PlayerStats::default();
    }

    /// Consume one progress update.
    ///
    /// Selects `min(floor(p * len), len - 1)`, redraws only if that differs
    /// from the last drawn frame, and recomputes every overlay style.
    /// Returns `None` unless the player is `Ready`.
    pub fn advance_to(&mut self, progress: Progress) -> Option<PlayerUpdate> {
        if self.phase != PlayerPhase::Ready {
            return None;
        }
        Some(self.draw(progress))
    }

    fn draw(&mut self, progress: Progress) -> PlayerUpdate {
        self.stats.progress_updates += 1;

        let mut frame = FrameIndex(0);
        let mut redrawn = false;
        if let Some(sequence) = self.sequence.as_ref() {
            frame = progress.frame_index(sequence.len());
            redrawn = self.current != Some(frame);
            if redrawn {
                if let Some(image) = sequence.get(frame) {
                    self.surface.blit_frame(image);
                }
                self.current = Some(frame);
                self.stats.redraws += 1;
            }
        }

        let styles = self
            .overlays
            .iter()
            .map(|overlay| overlay.style_at(progress))
            .collect();

        PlayerUpdate {
            frame,
            redrawn,
            styles,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/scrub.rs"]
mod tests;
