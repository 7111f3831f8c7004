use crate::assets::decode::PreparedImage;

/// The fixed visual surface frames are drawn onto.
///
/// Exclusively owned and mutated by the player; premultiplied RGBA8,
/// row-major. A surface that never had a frame drawn stays zero-sized.
#[derive(Clone, Debug, Default)]
pub struct FrameSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameSurface {
    /// A zero-sized surface with no contents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major premultiplied RGBA8.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether nothing has ever been drawn (or the surface was cleared).
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Drop all contents and dimensions.
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.data.clear();
    }

    /// Draw one frame, fully replacing prior contents.
    ///
    /// The surface is resized to the image's native dimensions when they
    /// differ. Frames are independent; nothing composites across frames, so
    /// the replacement doubles as the clear.
    pub fn blit_frame(&mut self, image: &PreparedImage) {
        if self.width != image.width || self.height != image.height {
            self.width = image.width;
            self.height = image.height;
            self.data = vec![0; image.width as usize * image.height as usize * 4];
        }
        self.data.copy_from_slice(&image.rgba8_premul);
    }
}
