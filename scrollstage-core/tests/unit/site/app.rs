use std::sync::Arc;

use super::*;
use crate::assets::decode::PreparedImage;
use crate::foundation::core::FrameIndex;
use crate::player::scrub::PlayerPhase;

fn app() -> SiteApp {
    SiteApp::new(&ShowcaseContent::neuralcore_x1(), 1000.0).unwrap()
}

fn sequence(count: u32) -> FrameSequence {
    let frames = (0..count)
        .map(|_| PreparedImage {
            width: 2,
            height: 2,
            rgba8_premul: Arc::new(vec![7; 2 * 2 * 4]),
        })
        .collect();
    FrameSequence::new(frames).unwrap()
}

#[test]
fn starts_on_home_loading() {
    let app = app();
    assert_eq!(app.route(), Route::Home);
    assert!(app.load().is_loading());
    assert_eq!(app.player().phase(), PlayerPhase::Loading);
}

#[test]
fn scroll_before_ready_moves_nothing() {
    let mut app = app();
    app.handle(SiteEvent::Scroll { offset: 1500.0 }).unwrap();
    let update = app.handle(SiteEvent::Tick).unwrap();
    assert!(update.is_none());
}

#[test]
fn load_progress_drives_the_indicator() {
    let mut app = app();
    app.handle(SiteEvent::SequenceProgress(LoadProgress {
        loaded: 120,
        total: 240,
    }))
    .unwrap();
    assert_eq!(app.load().percent(), 50);
    assert!(app.load().is_loading());

    app.handle(SiteEvent::SequenceReady(sequence(240))).unwrap();
    assert!(!app.load().is_loading());
    assert_eq!(app.load().percent(), 100);
}

#[test]
fn ready_then_scroll_then_tick_redraws() {
    let mut app = app();
    let initial = app
        .handle(SiteEvent::SequenceReady(sequence(240)))
        .unwrap()
        .unwrap();
    assert_eq!(initial.frame, FrameIndex(0));
    assert!(initial.redrawn);

    // Region spans 4 viewports of 1000px: offset 1500 is progress 0.5.
    app.handle(SiteEvent::Scroll { offset: 1500.0 }).unwrap();
    let update = app.handle(SiteEvent::Tick).unwrap().unwrap();
    assert_eq!(update.frame, FrameIndex(120));
    assert!(update.redrawn);

    // Nothing new observed: the next tick is a no-op.
    assert!(app.handle(SiteEvent::Tick).unwrap().is_none());
}

#[test]
fn scroll_events_coalesce_between_ticks() {
    let mut app = app();
    app.handle(SiteEvent::SequenceReady(sequence(240))).unwrap();

    for offset in [100.0, 700.0, 2900.0, 3000.0] {
        app.handle(SiteEvent::Scroll { offset }).unwrap();
    }
    let update = app.handle(SiteEvent::Tick).unwrap().unwrap();
    assert_eq!(update.frame, FrameIndex(239));
    assert_eq!(app.player().stats().redraws, 2);
}

#[test]
fn failed_load_is_terminal_and_blank() {
    let mut app = app();
    app.handle(SiteEvent::SequenceFailed).unwrap();
    assert!(app.load().is_failed());
    assert_eq!(app.player().phase(), PlayerPhase::Failed);
    assert!(app.player().surface().is_blank());

    app.handle(SiteEvent::Scroll { offset: 2000.0 }).unwrap();
    assert!(app.handle(SiteEvent::Tick).unwrap().is_none());
    assert_eq!(app.player().stats().redraws, 0);
}

#[test]
fn navigating_away_detaches_the_showcase() {
    let mut app = app();
    app.handle(SiteEvent::SequenceReady(sequence(240))).unwrap();
    app.handle(SiteEvent::Navigate(Route::Specs)).unwrap();
    assert_eq!(app.route(), Route::Specs);
    assert_eq!(app.player().phase(), PlayerPhase::Detached);

    // Stale callbacks are no-ops.
    app.handle(SiteEvent::Scroll { offset: 1500.0 }).unwrap();
    assert!(app.handle(SiteEvent::Tick).unwrap().is_none());
}

#[test]
fn returning_home_remounts_a_fresh_showcase() {
    let mut app = app();
    app.handle(SiteEvent::SequenceReady(sequence(240))).unwrap();
    app.handle(SiteEvent::Navigate(Route::Contact)).unwrap();
    app.handle(SiteEvent::Navigate(Route::Home)).unwrap();

    assert_eq!(app.player().phase(), PlayerPhase::Loading);
    assert!(app.load().is_loading());

    let update = app
        .handle(SiteEvent::SequenceReady(sequence(240)))
        .unwrap()
        .unwrap();
    assert_eq!(update.frame, FrameIndex(0));
}

#[test]
fn contact_flow_requires_all_fields() {
    let mut app = app();
    app.handle(SiteEvent::Navigate(Route::Contact)).unwrap();
    app.handle(SiteEvent::SetContactName("Ada".to_string()))
        .unwrap();
    assert!(app.handle(SiteEvent::SubmitContact).is_err());
    assert!(!app.contact().is_submitted());

    app.handle(SiteEvent::SetContactEmail("ada@example.com".to_string()))
        .unwrap();
    app.handle(SiteEvent::SetContactMessage("Demo please".to_string()))
        .unwrap();
    app.handle(SiteEvent::SubmitContact).unwrap();
    assert!(app.contact().is_submitted());
}
