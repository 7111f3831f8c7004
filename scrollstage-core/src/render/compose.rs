use std::borrow::Cow;
use std::sync::Arc;

use crate::animation::overlay::{OverlayAnchor, OverlaySpec, OverlayStyle};
use crate::assets::decode::PreparedImage;
use crate::foundation::error::{StageError, StageResult};

/// Opacity below which an overlay is not worth rasterizing.
const MIN_VISIBLE_OPACITY: f64 = 1.0 / 512.0;

/// Horizontal margin for edge-anchored captions, as a fraction of width.
const EDGE_MARGIN_FRAC: f64 = 0.06;

/// Vertical gap between caption lines, as a fraction of the line height.
const LINE_GAP_FRAC: f64 = 0.25;

/// A flattened showcase frame in row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, premultiplied.
    pub data: Vec<u8>,
    /// Always true for CPU-composed output.
    pub premultiplied: bool,
}

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

struct CaptionFont {
    family: String,
    font_data: vello_cpu::peniko::FontData,
}

/// Flattens one showcase frame plus styled captions to pixels.
///
/// This reifies for preview/export what the host environment composites
/// live: the current frame below, each visible caption above it at its
/// anchor position plus animated shift/scale, under an opacity layer.
pub struct Compositor {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    font: Option<CaptionFont>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// A compositor without caption fonts; it renders frames only.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            font: None,
        }
    }

    /// A compositor rendering captions with the given font bytes.
    pub fn with_font(font_bytes: Vec<u8>) -> StageResult<Self> {
        let mut out = Self::new();

        let families = out.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font_bytes.clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| StageError::validation("no font families registered from font bytes"))?;
        let family = out
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StageError::validation("registered font family has no name"))?
            .to_string();

        let font_data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        out.font = Some(CaptionFont { family, font_data });
        Ok(out)
    }

    /// Whether captions will be rendered.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Compose `frame` with each overlay's caption styled by the matching
    /// entry of `styles`. The output adopts the frame's native dimensions.
    pub fn compose(
        &mut self,
        frame: &PreparedImage,
        overlays: &[OverlaySpec],
        styles: &[OverlayStyle],
    ) -> StageResult<FrameRgba> {
        if overlays.len() != styles.len() {
            return Err(StageError::evaluation(
                "overlay styles must be parallel to overlay specs",
            ));
        }

        let width_u16: u16 = frame
            .width
            .try_into()
            .map_err(|_| StageError::evaluation("frame width exceeds u16"))?;
        let height_u16: u16 = frame
            .height
            .try_into()
            .map_err(|_| StageError::evaluation("frame height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);

        // Base frame: full replacement of the canvas, no compositing with
        // anything prior.
        let frame_paint = image_paint(frame)?;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(frame_paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(frame.width),
            f64::from(frame.height),
        ));

        if self.font.is_some() {
            for (overlay, style) in overlays.iter().zip(styles) {
                if style.opacity < MIN_VISIBLE_OPACITY {
                    continue;
                }
                self.draw_caption(&mut ctx, frame, overlay, style)?;
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRgba {
            width: frame.width,
            height: frame.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_caption(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        frame: &PreparedImage,
        overlay: &OverlaySpec,
        style: &OverlayStyle,
    ) -> StageResult<()> {
        let Some(font) = self.font.as_ref() else {
            return Ok(());
        };
        let family = font.family.clone();
        let font_data = font.font_data.clone();

        let mut layouts = Vec::with_capacity(overlay.lines.len());
        let mut block_w = 0f64;
        let mut block_h = 0f64;
        for line in &overlay.lines {
            let brush = TextBrushRgba8 {
                r: line.color_rgba8[0],
                g: line.color_rgba8[1],
                b: line.color_rgba8[2],
                a: line.color_rgba8[3],
            };
            let layout = layout_line(
                &mut self.font_ctx,
                &mut self.layout_ctx,
                &family,
                &line.text,
                line.size_px,
                brush,
            )?;
            let (w, h) = (f64::from(layout.width()), f64::from(layout.height()));
            block_w = block_w.max(w);
            if !layouts.is_empty() {
                block_h += h * LINE_GAP_FRAC;
            }
            block_h += h;
            layouts.push((layout, w, h));
        }
        if layouts.is_empty() {
            return Ok(());
        }

        let (surface_w, surface_h) = (f64::from(frame.width), f64::from(frame.height));
        let margin = surface_w * EDGE_MARGIN_FRAC;
        let block_x = match overlay.anchor {
            OverlayAnchor::Center => (surface_w - block_w) / 2.0,
            OverlayAnchor::Leading => margin,
            OverlayAnchor::Trailing => surface_w - margin - block_w,
        };
        let block_y = (surface_h - block_h) / 2.0;

        // Scale around the block center, then apply the animated shift.
        let center = vello_cpu::kurbo::Vec2::new(block_w / 2.0, block_h / 2.0);
        let block_transform = vello_cpu::kurbo::Affine::translate((
            block_x + style.shift.x,
            block_y + style.shift.y,
        )) * vello_cpu::kurbo::Affine::translate(center)
            * vello_cpu::kurbo::Affine::scale(style.scale)
            * vello_cpu::kurbo::Affine::translate(-center);

        if style.opacity < 1.0 {
            ctx.push_opacity_layer(style.opacity as f32);
        }

        let mut y_cursor = 0f64;
        for (layout, line_w, line_h) in &layouts {
            let line_x = match overlay.anchor {
                OverlayAnchor::Center => (block_w - line_w) / 2.0,
                OverlayAnchor::Leading => 0.0,
                OverlayAnchor::Trailing => block_w - line_w,
            };
            ctx.set_transform(
                block_transform * vello_cpu::kurbo::Affine::translate((line_x, y_cursor)),
            );

            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };

                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));

                    let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&font_data)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }

            y_cursor += line_h * (1.0 + LINE_GAP_FRAC);
        }

        if style.opacity < 1.0 {
            ctx.pop_layer();
        }

        Ok(())
    }
}

fn layout_line(
    font_ctx: &mut parley::FontContext,
    layout_ctx: &mut parley::LayoutContext<TextBrushRgba8>,
    family: &str,
    text: &str,
    size_px: f32,
    brush: TextBrushRgba8,
) -> StageResult<parley::Layout<TextBrushRgba8>> {
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(StageError::validation(
            "caption size_px must be finite and > 0",
        ));
    }

    let mut builder = layout_ctx.ranged_builder(font_ctx, text, 1.0, true);
    builder.push_default(parley::style::StyleProperty::FontStack(
        parley::style::FontStack::Source(Cow::Owned(family.to_string())),
    ));
    builder.push_default(parley::style::StyleProperty::FontSize(size_px));
    builder.push_default(parley::style::StyleProperty::Brush(brush));

    let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
    layout.break_all_lines(None);
    Ok(layout)
}

fn image_paint(image: &PreparedImage) -> StageResult<vello_cpu::Image> {
    let w: u16 = image
        .width
        .try_into()
        .map_err(|_| StageError::evaluation("image width exceeds u16"))?;
    let h: u16 = image
        .height
        .try_into()
        .map_err(|_| StageError::evaluation("image height exceeds u16"))?;
    let bytes = image.rgba8_premul.as_slice();
    if bytes.len() != image.width as usize * image.height as usize * 4 {
        return Err(StageError::evaluation("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(image.width as usize * image.height as usize);
    for px in bytes.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
