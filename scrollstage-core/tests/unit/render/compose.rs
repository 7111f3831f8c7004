use std::sync::Arc;

use super::*;
use crate::animation::track::Track;
use crate::foundation::core::Vec2;

fn solid_frame(width: u32, height: u32, rgba: [u8; 4]) -> PreparedImage {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width * height {
        data.extend_from_slice(&rgba);
    }
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(data),
    }
}

fn overlay() -> OverlaySpec {
    OverlaySpec {
        name: "cta".to_string(),
        anchor: OverlayAnchor::Center,
        lines: vec![crate::animation::overlay::CaptionLine {
            text: "Power Your Next Breakthrough.".to_string(),
            size_px: 48.0,
            color_rgba8: [255, 255, 255, 255],
        }],
        opacity: Track::constant(1.0),
        shift: Track::constant(Vec2::ZERO),
        scale: Track::constant(1.0),
    }
}

fn style(opacity: f64) -> OverlayStyle {
    OverlayStyle {
        opacity,
        shift: Vec2::ZERO,
        scale: 1.0,
    }
}

#[test]
fn compose_adopts_frame_dimensions() {
    let mut compositor = Compositor::new();
    let frame = solid_frame(16, 9, [200, 10, 10, 255]);
    let out = compositor.compose(&frame, &[], &[]).unwrap();
    assert_eq!((out.width, out.height), (16, 9));
    assert_eq!(out.data.len(), 16 * 9 * 4);
    assert!(out.premultiplied);
}

#[test]
fn compose_replaces_the_whole_canvas_with_the_frame() {
    let mut compositor = Compositor::new();
    let frame = solid_frame(8, 8, [64, 128, 192, 255]);
    let out = compositor.compose(&frame, &[], &[]).unwrap();

    // Every pixel comes from the frame; nothing of a prior canvas survives.
    for px in out.data.chunks_exact(4) {
        assert_eq!(px, [64, 128, 192, 255]);
    }
}

#[test]
fn fontless_compositor_skips_captions() {
    let mut compositor = Compositor::new();
    assert!(!compositor.has_font());

    let frame = solid_frame(8, 8, [0, 0, 0, 255]);
    let out = compositor
        .compose(&frame, &[overlay()], &[style(1.0)])
        .unwrap();
    for px in out.data.chunks_exact(4) {
        assert_eq!(px, [0, 0, 0, 255]);
    }
}

#[test]
fn mismatched_styles_are_rejected() {
    let mut compositor = Compositor::new();
    let frame = solid_frame(4, 4, [0, 0, 0, 255]);
    assert!(compositor.compose(&frame, &[overlay()], &[]).is_err());
}

#[test]
fn garbage_font_bytes_are_rejected() {
    assert!(Compositor::with_font(b"not a font".to_vec()).is_err());
}
