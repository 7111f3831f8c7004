use std::collections::HashMap;

use super::*;

struct MapSource {
    files: HashMap<String, Vec<u8>>,
}

impl FrameSource for MapSource {
    fn fetch(&self, rel_path: &str) -> StageResult<Vec<u8>> {
        self.files
            .get(rel_path)
            .cloned()
            .ok_or_else(|| StageError::load(format!("no such resource '{rel_path}'")))
    }
}

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

fn full_source(locator: &FrameLocator) -> MapSource {
    let png = tiny_png();
    let files = (0..locator.count)
        .map(|i| (locator.source_for(FrameIndex(i)), png.clone()))
        .collect();
    MapSource { files }
}

#[test]
fn locator_pads_index_plus_one_to_three_digits() {
    let locator = FrameLocator::new("sequence/frame-", "jpg", 240).unwrap();
    assert_eq!(locator.source_for(FrameIndex(0)), "sequence/frame-001.jpg");
    assert_eq!(locator.source_for(FrameIndex(136)), "sequence/frame-137.jpg");
    assert_eq!(locator.source_for(FrameIndex(239)), "sequence/frame-240.jpg");
}

#[test]
fn locator_validation_bounds() {
    assert!(FrameLocator::new("f-", "jpg", 0).is_err());
    assert!(FrameLocator::new("f-", "jpg", 1000).is_err());
    assert!(FrameLocator::new("", "jpg", 10).is_err());
    assert!(FrameLocator::new("f-", ".jpg", 10).is_err());
    assert!(FrameLocator::new("f-", "jpg", 999).is_ok());
}

#[test]
fn normalize_rel_path_cleans_and_rejects() {
    assert_eq!(normalize_rel_path("a\\b\\c.jpg").unwrap(), "a/b/c.jpg");
    assert_eq!(normalize_rel_path("./a//b.jpg").unwrap(), "a/b.jpg");
    assert!(normalize_rel_path("/abs.jpg").is_err());
    assert!(normalize_rel_path("../up.jpg").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path(".").is_err());
}

#[test]
fn load_reports_monotonic_percent_reaching_100() {
    let locator = FrameLocator::new("seq/f-", "png", 8).unwrap();
    let source = full_source(&locator);

    let mut reports = Vec::new();
    let sequence = SequenceLoader::load(&locator, &source, |p| reports.push(p)).unwrap();

    assert_eq!(sequence.len(), 8);
    assert_eq!(reports.len(), 8);
    assert!(reports.windows(2).all(|w| w[0].loaded < w[1].loaded));
    assert_eq!(reports.last().unwrap().percent(), 100);
}

#[test]
fn missing_frame_137_aborts_the_whole_load() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let locator = FrameLocator::new("seq/f-", "png", 240).unwrap();
    let mut source = full_source(&locator);
    source.files.remove("seq/f-137.png");

    let err = SequenceLoader::load(&locator, &source, |_| {}).unwrap_err();
    assert!(matches!(err, StageError::Load(_)));
    assert!(err.to_string().contains("seq/f-137.png"));
}

#[test]
fn corrupt_frame_bytes_abort_the_whole_load() {
    let locator = FrameLocator::new("seq/f-", "png", 3).unwrap();
    let mut source = full_source(&locator);
    source
        .files
        .insert("seq/f-002.png".to_string(), b"garbage".to_vec());

    let err = SequenceLoader::load(&locator, &source, |_| {}).unwrap_err();
    assert!(matches!(err, StageError::Load(_)));
}

#[test]
fn load_progress_percent_rounds() {
    let p = LoadProgress {
        loaded: 119,
        total: 240,
    };
    assert_eq!(p.percent(), 50);
    let p = LoadProgress {
        loaded: 1,
        total: 240,
    };
    assert_eq!(p.percent(), 0);
}

#[test]
fn load_state_is_monotonic_and_ends_once() {
    let mut state = LoadState::new(240);
    assert!(state.is_loading());
    assert_eq!(state.percent(), 0);

    state.record(LoadProgress {
        loaded: 5,
        total: 240,
    });
    state.record(LoadProgress {
        loaded: 3,
        total: 240,
    });
    assert_eq!(state.loaded(), 5);

    state.complete();
    assert!(!state.is_loading());
    assert!(!state.is_failed());
    assert_eq!(state.percent(), 100);
}

#[test]
fn load_state_failure_is_terminal() {
    let mut state = LoadState::new(240);
    state.record(LoadProgress {
        loaded: 136,
        total: 240,
    });
    state.fail();
    assert!(!state.is_loading());
    assert!(state.is_failed());
    assert_eq!(state.loaded(), 136);
}

#[test]
fn frame_sequence_rejects_empty_and_bounds_access() {
    assert!(FrameSequence::new(vec![]).is_err());

    let locator = FrameLocator::new("seq/f-", "png", 2).unwrap();
    let source = full_source(&locator);
    let sequence = SequenceLoader::load(&locator, &source, |_| {}).unwrap();
    assert!(sequence.get(FrameIndex(1)).is_some());
    assert!(sequence.get(FrameIndex(2)).is_none());
}

#[test]
fn dir_source_reads_relative_paths_only() {
    let dir = std::env::temp_dir().join("scrollstage-dir-source-test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("frame-001.png"), tiny_png()).unwrap();

    let source = DirSource::new(&dir);
    assert!(source.fetch("frame-001.png").is_ok());
    assert!(source.fetch("missing.png").is_err());
    assert!(source.fetch("../escape.png").is_err());
}
