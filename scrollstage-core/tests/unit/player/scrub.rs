use std::sync::Arc;

use super::*;
use crate::animation::overlay::{CaptionLine, OverlayAnchor};
use crate::animation::track::Track;
use crate::assets::decode::PreparedImage;
use crate::foundation::core::Vec2;

fn sequence(count: u32) -> FrameSequence {
    let frames = (0..count)
        .map(|i| PreparedImage {
            width: 2,
            height: 2,
            rgba8_premul: Arc::new(vec![i as u8; 2 * 2 * 4]),
        })
        .collect();
    FrameSequence::new(frames).unwrap()
}

fn title_overlay() -> OverlaySpec {
    OverlaySpec {
        name: "title".to_string(),
        anchor: OverlayAnchor::Center,
        lines: vec![CaptionLine {
            text: "NeuralCore X1".to_string(),
            size_px: 96.0,
            color_rgba8: [255, 255, 255, 230],
        }],
        opacity: Track::linear(vec![(0.0, 1.0), (0.15, 0.0)]).unwrap(),
        shift: Track::constant(Vec2::ZERO),
        scale: Track::linear(vec![(0.0, 1.0), (0.15, 0.95)]).unwrap(),
    }
}

#[test]
fn ready_draws_frame_zero_exactly_once() {
    let mut player = Player::new(vec![title_overlay()]).unwrap();
    assert_eq!(player.phase(), PlayerPhase::Loading);
    assert!(player.surface().is_blank());

    let update = player.ready(sequence(240)).unwrap();
    assert_eq!(update.frame, FrameIndex(0));
    assert!(update.redrawn);
    assert_eq!(player.stats().redraws, 1);
    assert_eq!(player.current_frame(), Some(FrameIndex(0)));
    assert!(!player.surface().is_blank() || player.surface().width() > 0);

    // Progress 0 after mount selects the same frame: no extra redraw.
    let update = player.advance_to(Progress::ZERO).unwrap();
    assert!(!update.redrawn);
    assert_eq!(player.stats().redraws, 1);
}

#[test]
fn monotonic_sweep_redraws_once_per_distinct_frame() {
    let mut player = Player::new(vec![]).unwrap();
    player.ready(sequence(6));

    for step in 0..=1000 {
        let p = Progress::clamped(f64::from(step) / 1000.0);
        player.advance_to(p);
    }

    // One initial draw plus one redraw per frame change: 6 total for 6 frames.
    assert_eq!(player.stats().redraws, 6);
    assert_eq!(player.current_frame(), Some(FrameIndex(5)));
    assert_eq!(player.stats().progress_updates, 1002);
}

#[test]
fn frame_selection_hits_spec_boundaries() {
    let mut player = Player::new(vec![]).unwrap();
    player.ready(sequence(240));

    let update = player.advance_to(Progress::ONE).unwrap();
    assert_eq!(update.frame, FrameIndex(239));

    let update = player.advance_to(Progress::ZERO).unwrap();
    assert_eq!(update.frame, FrameIndex(0));
}

#[test]
fn overlay_styles_are_recomputed_even_without_redraw() {
    let mut player = Player::new(vec![title_overlay()]).unwrap();
    player.ready(sequence(2));

    // Both progress values select frame 0 but style differs.
    let a = player.advance_to(Progress::clamped(0.0)).unwrap();
    let b = player.advance_to(Progress::clamped(0.075)).unwrap();
    assert_eq!(a.frame, b.frame);
    assert!(!b.redrawn);
    assert!((a.styles[0].opacity - 1.0).abs() < 1e-9);
    assert!((b.styles[0].opacity - 0.5).abs() < 1e-9);
}

#[test]
fn failed_load_leaves_surface_blank_forever() {
    let mut player = Player::new(vec![title_overlay()]).unwrap();
    player.fail();
    assert_eq!(player.phase(), PlayerPhase::Failed);
    assert!(player.surface().is_blank());
    assert!(player.advance_to(Progress::ONE).is_none());
    assert_eq!(player.stats().redraws, 0);

    // ready() after failure is ignored; the phase is terminal.
    assert!(player.ready(sequence(2)).is_none());
    assert_eq!(player.phase(), PlayerPhase::Failed);
}

#[test]
fn detach_makes_updates_no_ops() {
    let mut player = Player::new(vec![]).unwrap();
    player.ready(sequence(4));
    player.detach();
    assert_eq!(player.phase(), PlayerPhase::Detached);
    assert!(player.advance_to(Progress::ONE).is_none());
    assert_eq!(player.stats().redraws, 1);
}

#[test]
fn reset_behaves_like_a_fresh_mount() {
    let mut player = Player::new(vec![]).unwrap();
    player.ready(sequence(4));
    player.advance_to(Progress::ONE);
    player.detach();

    player.reset();
    assert_eq!(player.phase(), PlayerPhase::Loading);
    assert!(player.surface().is_blank());
    assert_eq!(player.current_frame(), None);
    assert_eq!(player.stats(), PlayerStats::default());

    let update = player.ready(sequence(4)).unwrap();
    assert_eq!(update.frame, FrameIndex(0));
}
