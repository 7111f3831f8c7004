use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::Context;
use rayon::prelude::*;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{StageError, StageResult};

/// Zero-padded width of the frame number in resource names.
const FRAME_PAD_DIGITS: u32 = 3;

/// Deterministic naming scheme for a numbered frame sequence.
///
/// Frame `i` (0-indexed) resolves to `{base_path}{i+1:03}.{ext}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameLocator {
    /// Path prefix up to and including the stem, e.g. `"sequence/frame-"`.
    pub base_path: String,
    /// File extension without the leading dot.
    pub ext: String,
    /// Total frame count; indices are contiguous `0..count`.
    pub count: u32,
}

impl FrameLocator {
    /// Build a validated locator.
    pub fn new(base_path: impl Into<String>, ext: impl Into<String>, count: u32) -> StageResult<Self> {
        let locator = Self {
            base_path: base_path.into(),
            ext: ext.into(),
            count,
        };
        locator.validate()?;
        Ok(locator)
    }

    /// Check locator well-formedness.
    pub fn validate(&self) -> StageResult<()> {
        if self.base_path.trim().is_empty() {
            return Err(StageError::validation("locator base_path must be non-empty"));
        }
        if self.ext.trim().is_empty() || self.ext.starts_with('.') {
            return Err(StageError::validation(
                "locator ext must be non-empty without a leading dot",
            ));
        }
        let max = 10u32.pow(FRAME_PAD_DIGITS) - 1;
        if self.count == 0 || self.count > max {
            return Err(StageError::validation(format!(
                "locator count must be in 1..={max}"
            )));
        }
        Ok(())
    }

    /// Resource path for one frame index.
    pub fn source_for(&self, index: FrameIndex) -> String {
        format!("{}{:03}.{}", self.base_path, index.0 + 1, self.ext)
    }
}

/// Source of raw frame bytes addressed by a relative resource path.
///
/// Implementations are idempotent reads with no side effects; an in-flight
/// fetch whose result gets discarded is harmless.
pub trait FrameSource: Sync {
    /// Fetch the raw bytes behind `rel_path`.
    fn fetch(&self, rel_path: &str) -> StageResult<Vec<u8>>;
}

/// Filesystem-backed [`FrameSource`] rooted at an asset directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory used when resolving relative paths.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FrameSource for DirSource {
    fn fetch(&self, rel_path: &str) -> StageResult<Vec<u8>> {
        let norm = normalize_rel_path(rel_path)?;
        let path = self.root.join(Path::new(&norm));
        std::fs::read(&path)
            .with_context(|| format!("read frame bytes from '{}'", path.display()))
            .map_err(StageError::from)
    }
}

/// Normalize and validate source-relative resource paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> StageResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(StageError::validation("resource paths must be relative"));
    }
    if s.is_empty() {
        return Err(StageError::validation("resource path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(StageError::validation(
                "resource paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(StageError::validation(
            "resource path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// A progress report emitted after each successfully loaded frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    /// Frames loaded so far.
    pub loaded: u32,
    /// Total frames in the sequence.
    pub total: u32,
}

impl LoadProgress {
    /// Rounded percentage `round(loaded / total * 100)`.
    pub fn percent(self) -> u8 {
        (f64::from(self.loaded) / f64::from(self.total) * 100.0).round() as u8
    }
}

/// Externally observable loading state of a sequence.
///
/// `loaded` never decrements, and loading ends exactly once: either the full
/// count arrived or a failure was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadState {
    loaded: u32,
    total: u32,
    loading: bool,
    failed: bool,
}

impl LoadState {
    /// Fresh state for a sequence of `total` frames.
    pub fn new(total: u32) -> Self {
        Self {
            loaded: 0,
            total,
            loading: true,
            failed: false,
        }
    }

    /// Fold in a progress report; regressions are ignored.
    pub fn record(&mut self, progress: LoadProgress) {
        self.loaded = self.loaded.max(progress.loaded.min(self.total));
    }

    /// Mark the load complete.
    pub fn complete(&mut self) {
        self.loaded = self.total;
        self.loading = false;
    }

    /// Mark the load failed; terminal.
    pub fn fail(&mut self) {
        self.loading = false;
        self.failed = true;
    }

    /// Frames loaded so far.
    pub fn loaded(&self) -> u32 {
        self.loaded
    }

    /// Whether the load is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the load ended in failure.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Rounded load percentage.
    pub fn percent(&self) -> u8 {
        LoadProgress {
            loaded: self.loaded,
            total: self.total,
        }
        .percent()
    }
}

/// A fully loaded, immutable sequence of decoded frames.
///
/// Constructed once by a successful [`SequenceLoader::load`]; read-only
/// shared data afterwards (pixel buffers are `Arc`ed).
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<PreparedImage>,
}

impl FrameSequence {
    /// Wrap decoded frames; the sequence must be non-empty.
    pub fn new(frames: Vec<PreparedImage>) -> StageResult<Self> {
        if frames.is_empty() {
            return Err(StageError::validation("frame sequence must be non-empty"));
        }
        Ok(Self { frames })
    }

    /// Number of frames.
    pub fn len(&self) -> u32 {
        self.frames.len() as u32
    }

    /// Always false; empty sequences cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if in range.
    pub fn get(&self, index: FrameIndex) -> Option<&PreparedImage> {
        self.frames.get(index.0 as usize)
    }
}

/// Loads every frame of a sequence ahead of interaction.
pub struct SequenceLoader;

impl SequenceLoader {
    /// Fetch and decode all frames named by `locator` from `source`.
    ///
    /// Frames are fetched in parallel; completion order is arbitrary, but
    /// `on_progress` is invoked under a lock so delivered counts are
    /// monotonically non-decreasing. Any single fetch or decode failure
    /// aborts the whole load (no retry, no partial sequence); the error is
    /// logged once and returned.
    #[tracing::instrument(skip(source, on_progress), fields(count = locator.count))]
    pub fn load<S, F>(
        locator: &FrameLocator,
        source: &S,
        on_progress: F,
    ) -> StageResult<FrameSequence>
    where
        S: FrameSource + ?Sized,
        F: FnMut(LoadProgress) + Send,
    {
        locator.validate()?;
        let total = locator.count;
        let progress = Mutex::new((0u32, on_progress));

        let loaded: StageResult<Vec<PreparedImage>> = (0..total)
            .into_par_iter()
            .map(|i| {
                let rel = locator.source_for(FrameIndex(i));
                let bytes = source
                    .fetch(&rel)
                    .map_err(|e| StageError::load(format!("frame '{rel}': {e}")))?;
                let img = decode_image(&bytes)
                    .map_err(|e| StageError::load(format!("frame '{rel}': {e}")))?;

                let mut guard = progress.lock().unwrap_or_else(PoisonError::into_inner);
                let (count, sink) = &mut *guard;
                *count += 1;
                sink(LoadProgress {
                    loaded: *count,
                    total,
                });
                drop(guard);

                Ok(img)
            })
            .collect();

        match loaded {
            Ok(frames) => FrameSequence::new(frames),
            Err(err) => {
                tracing::error!(error = %err, "frame sequence load failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sequence.rs"]
mod tests;
