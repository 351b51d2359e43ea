//! Rendering seam between bodies and the host
//!
//! Bodies never touch a framebuffer directly: they emit fractional pixel
//! coordinates into a [`PixelSink`]. The host decides how coordinates round and
//! what happens outside its canvas. [`Canvas`] is a ready-made in-memory sink.

/// Destination for plotted pixels
pub trait PixelSink<C> {
    /// Set the pixel at (x, y); coordinates may be fractional or off-canvas
    fn plot(&mut self, x: f64, y: f64, color: C);
}

/// Records every plot call in order
impl<C> PixelSink<C> for Vec<(f64, f64, C)> {
    fn plot(&mut self, x: f64, y: f64, color: C) {
        self.push((x, y, color));
    }
}

/// Plot `color` unless it is transparent
#[inline]
pub fn plot_opt<C>(sink: &mut dyn PixelSink<C>, x: f64, y: f64, color: Option<C>) {
    if let Some(color) = color {
        sink.plot(x, y, color);
    }
}

/// Which hemisphere a draw call renders
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawPass {
    /// Near hemisphere
    Front,
    /// Far hemisphere, mirrored left to right
    Back,
}

impl DrawPass {
    /// Both passes in painter's order
    pub const ALL: [DrawPass; 2] = [DrawPass::Back, DrawPass::Front];

    #[inline]
    pub fn is_back(self) -> bool {
        self == DrawPass::Back
    }
}

/// A body that can draw one hemisphere pass for a given frame
pub trait Renderable<C> {
    fn draw(&self, sink: &mut dyn PixelSink<C>, frame: u64, pass: DrawPass);
}

/// Fixed-size in-memory pixel buffer
///
/// Coordinates are floored to integers; anything outside the buffer is
/// silently clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas<C> {
    width: usize,
    height: usize,
    pixels: Vec<Option<C>>,
}

impl<C: Copy> Canvas<C> {
    /// Create an empty canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at integer (x, y), `None` if unset or outside the canvas
    pub fn get(&self, x: usize, y: usize) -> Option<C> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }

    /// Reset every pixel to unset
    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = None);
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<C>]> {
        self.pixels.chunks(self.width.max(1))
    }

    /// Number of pixels that have been set
    pub fn filled_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }
}

impl<C: Copy> PixelSink<C> for Canvas<C> {
    fn plot(&mut self, x: f64, y: f64, color: C) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let (x, y) = (x.floor(), y.floor());
        if x < 0.0 || y < 0.0 || x >= self.width as f64 || y >= self.height as f64 {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = Some(color);
    }
}
