//! Raster frame buffer — an owned, growable RGB image.
//!
//! A [`Frame`] is reshaped in place between draws: [`Frame::resize`]
//! recomputes the row stride and byte length and zero-fills the buffer,
//! growing the allocation only when the requested area exceeds anything
//! seen before. The allocation is never shrunk except by an explicit
//! [`Frame::reset`], so a long-running pipeline settles into a steady
//! state with no per-frame allocation.
//!
//! Allocation failure is fatal by policy: the workspace builds with
//! `panic = "abort"` and `Vec` growth aborts on out-of-memory, which is
//! the intended behavior for a real-time pipeline where partial state
//! is unacceptable.

use bytemuck::{Pod, Zeroable};

/// Pixel format tag carried by a [`Frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Packed 24-bit color, 3 bytes per pixel, in the channel order
    /// produced by this renderer.
    #[default]
    Rgb24,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb24 => 3,
        }
    }
}

/// A single packed 3-byte pixel, in buffer order.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb(pub [u8; 3]);

/// An owned raster image.
///
/// Invariants (maintained by [`resize`](Frame::resize) and
/// [`reset`](Frame::reset), relied on by writers):
/// `stride == width * bytes_per_pixel` and
/// `data.len() == stride * height`.
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per row (`width * 3` for RGB24).
    pub stride: usize,
    /// Pixel format of `data`.
    pub format: PixelFormat,
    /// Pixel bytes. Length is the valid byte count (`used`); capacity
    /// may exceed it after the frame has been reshaped smaller.
    pub data: Vec<u8>,
}

impl Frame {
    /// Create an empty 0×0 frame. Does not allocate.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            stride: 0,
            format: PixelFormat::Rgb24,
            data: Vec::new(),
        }
    }

    /// Valid byte length of the pixel buffer.
    #[inline]
    pub fn used(&self) -> usize {
        self.data.len()
    }

    /// Whether the frame has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reshape the frame to the given geometry and zero-fill it.
    ///
    /// Grows the allocation if the new area is larger than any previous
    /// one; never releases memory. The entire buffer is blanked, so any
    /// previously rendered content is gone after this call.
    pub fn resize(&mut self, width: u32, height: u32, format: PixelFormat) {
        self.width = width;
        self.height = height;
        self.format = format;
        self.stride = width as usize * format.bytes_per_pixel();
        let used = self.stride * height as usize;
        if used > self.data.capacity() {
            log::trace!("frame buffer grows to {used} bytes ({width}x{height})");
        }
        self.data.resize(used, 0);
        self.data.fill(0);
    }

    /// Zero-fill the buffer without changing its geometry.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Release the allocation and return to the empty 0×0 state.
    pub fn reset(&mut self) {
        *self = Frame::new();
    }

    /// View the buffer as packed pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        bytemuck::cast_slice(&self.data)
    }

    /// Pixel at (x, y). Panics if out of bounds; intended for consumers
    /// and tests that already know the geometry.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = y as usize * self.stride + x as usize * self.format.bytes_per_pixel();
        Rgb([self.data[offset], self.data[offset + 1], self.data[offset + 2]])
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

// ===================================================================
// Tests
// ===================================================================
