//! Cached text overlay — owns the output frame, redraws only on change.
//!
//! The caller invokes [`TextOverlay::draw`] for every outgoing video
//! frame; almost always the text and geometry are unchanged and the
//! call returns without touching the buffer. The cache check is the
//! correctness-critical fast path of this crate.

use burnin_frame::{Frame, PixelFormat};

use crate::font::GLYPH_HEIGHT;
use crate::layout;
use crate::raster;

/// A persistent status-text overlay.
///
/// Created once at pipeline setup and reused across frames. Not
/// internally synchronized: `draw` takes `&mut self`, so concurrent use
/// requires external serialization (confine it to one pipeline worker).
///
/// Allocation failure while growing the frame or copying the text
/// aborts the process; see the `burnin-frame` crate docs.
///
/// # Usage
///
/// ```
/// use burnin_osd::TextOverlay;
///
/// let mut overlay = TextOverlay::new();
/// overlay.draw("1280x720\n30 fps", 1280, 720);
/// let frame = overlay.frame();
/// assert_eq!(frame.used(), 1280 * 720 * 3);
/// ```
pub struct TextOverlay {
    frame: Frame,
    text: Option<String>,
    renders: u64,
}

impl TextOverlay {
    /// Create an overlay with an empty frame. Does not allocate.
    pub fn new() -> Self {
        Self {
            frame: Frame::new(),
            text: None,
            renders: 0,
        }
    }

    /// The rendered output frame, for the downstream composition stage.
    ///
    /// Contents are stale the moment the next `draw` call redraws.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of draws that actually recomputed the frame (cache
    /// misses). Cache hits leave this untouched.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Render `text` into a `width`×`height` RGB frame.
    ///
    /// Skips all work when the geometry and text match the previous
    /// call. Otherwise the buffer is reshaped, blanked, and the text is
    /// rasterized centered into it; degenerate input (zero dimension,
    /// empty text, scale floored to zero) leaves the buffer blank.
    pub fn draw(&mut self, text: &str, width: u32, height: u32) {
        if self.frame.width == width
            && self.frame.height == height
            && self.text.as_deref() == Some(text)
        {
            log::trace!("overlay unchanged ({width}x{height}), skipping redraw");
            return;
        }

        self.text = Some(text.to_owned());
        self.frame.resize(width, height, PixelFormat::Rgb24);
        self.renders += 1;
        if width == 0 || height == 0 {
            return;
        }

        let block = layout::measure(text);
        if block.is_empty() {
            return;
        }
        let scale = layout::fit(width, height, block);
        let start_y = layout::block_origin_y(height, block, scale);

        for (n_line, line) in layout::lines(text).enumerate() {
            let start_x = layout::line_origin_x(width, line, scale);
            raster::draw_line(
                &mut self.frame,
                line,
                scale,
                start_x,
                start_y + n_line as u32 * GLYPH_HEIGHT * scale.y,
            );
        }
        log::debug!(
            "overlay redrawn: {width}x{height}, {} line(s), scale {}x{}",
            layout::lines(text).count(),
            scale.x,
            scale.y,
        );
    }
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self::new()
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::FOREGROUND;

    fn foreground_count(frame: &Frame) -> usize {
        frame.pixels().iter().filter(|p| p.0 == FOREGROUND).count()
    }

    #[test]
    fn test_draw_sets_frame_geometry() {
        let mut overlay = TextOverlay::new();
        overlay.draw("720p 30fps", 1280, 720);
        let frame = overlay.frame();
        assert_eq!(frame.width, 1280);
        assert_eq!(frame.height, 720);
        assert_eq!(frame.stride, 1280 * 3);
        assert_eq!(frame.used(), 1280 * 720 * 3);
        assert_eq!(frame.format, PixelFormat::Rgb24);
    }

    #[test]
    fn test_identical_draw_skips_recomputation() {
        let mut overlay = TextOverlay::new();
        overlay.draw("HI", 64, 64);
        assert_eq!(overlay.render_count(), 1);
        let first = overlay.frame().data.clone();

        overlay.draw("HI", 64, 64);
        assert_eq!(overlay.render_count(), 1, "cache hit must not redraw");
        assert_eq!(overlay.frame().data, first, "buffer must be byte-identical");
    }

    #[test]
    fn test_text_change_forces_redraw() {
        let mut overlay = TextOverlay::new();
        overlay.draw("A", 64, 64);
        let a = overlay.frame().data.clone();
        overlay.draw("B", 64, 64);
        assert_eq!(overlay.render_count(), 2);
        assert_ne!(overlay.frame().data, a, "different glyphs, different pixels");
    }

    #[test]
    fn test_dimension_change_forces_redraw() {
        let mut overlay = TextOverlay::new();
        overlay.draw("HI", 64, 64);
        overlay.draw("HI", 32, 32);
        assert_eq!(overlay.render_count(), 2);
        assert_eq!(overlay.frame().width, 32);
    }

    #[test]
    fn test_empty_text_yields_blank_frame() {
        let mut overlay = TextOverlay::new();
        overlay.draw("", 64, 48);
        assert_eq!(overlay.frame().used(), 64 * 48 * 3);
        assert!(overlay.frame().data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_dimensions_yield_empty_frame() {
        let mut overlay = TextOverlay::new();
        overlay.draw("HI", 0, 480);
        assert_eq!(overlay.frame().used(), 0);
        overlay.draw("HI", 640, 0);
        assert_eq!(overlay.frame().used(), 0);
    }

    #[test]
    fn test_tiny_frame_degrades_to_blank() {
        // Scale floors to zero: blank frame, no error.
        let mut overlay = TextOverlay::new();
        overlay.draw("A VERY LONG STATUS LINE", 16, 16);
        assert_eq!(foreground_count(overlay.frame()), 0);
        assert_eq!(overlay.frame().used(), 16 * 16 * 3);
    }

    #[test]
    fn test_golden_hi_64x64() {
        // Reference geometry: block 16x8, scale (1, 2), block origin
        // (24, 24). Each glyph row occupies two canvas rows.
        let mut overlay = TextOverlay::new();
        overlay.draw("HI", 64, 64);
        let frame = overlay.frame();

        // 'H' row 0 = 0xC6: columns 0, 1 on; 2 off.
        assert_eq!(frame.pixel(24, 24).0, FOREGROUND);
        assert_eq!(frame.pixel(24, 25).0, FOREGROUND); // y-doubled
        assert_eq!(frame.pixel(25, 24).0, FOREGROUND);
        assert_eq!(frame.pixel(26, 24).0, [0, 0, 0]);
        // 'H' row 0 column 7 off.
        assert_eq!(frame.pixel(31, 24).0, [0, 0, 0]);
        // 'I' row 0 = 0x7E: column 0 off, column 1 on. Cell starts at x = 32.
        assert_eq!(frame.pixel(32, 24).0, [0, 0, 0]);
        assert_eq!(frame.pixel(33, 24).0, FOREGROUND);
        // Nothing above or left of the block.
        assert_eq!(frame.pixel(23, 24).0, [0, 0, 0]);
        assert_eq!(frame.pixel(24, 23).0, [0, 0, 0]);
        // Block is 16 rows tall: nothing at or below y = 40.
        assert_eq!(frame.pixel(24, 40).0, [0, 0, 0]);
    }

    #[test]
    fn test_multiline_rows_separated_by_scaled_cell() {
        // "A\nB" in 128x128: block 8x16, candidates x = 8, y = 2,
        // aspect derives x = 1. Block origin y = (128 - 32) / 2 = 48,
        // line origins x = (128 - 8) / 2 = 60; second line starts at
        // y = 48 + 8 * 2 = 64.
        let mut overlay = TextOverlay::new();
        overlay.draw("A\nB", 128, 128);
        let frame = overlay.frame();

        // 'A' row 0 = 0x38: columns 2..=4.
        assert_eq!(frame.pixel(62, 48).0, FOREGROUND);
        assert_eq!(frame.pixel(60, 48).0, [0, 0, 0]);
        // 'B' row 0 = 0xFC: columns 0..=5.
        assert_eq!(frame.pixel(60, 64).0, FOREGROUND);
        // Row just above the second line belongs to 'A' row 7 = 0x00.
        assert_eq!(frame.pixel(60, 63).0, [0, 0, 0]);
    }

    #[test]
    fn test_consecutive_newlines_collapse() {
        let mut single = TextOverlay::new();
        single.draw("A\nB", 128, 128);
        let mut doubled = TextOverlay::new();
        doubled.draw("A\n\nB\n", 128, 128);
        assert_eq!(single.frame().data, doubled.frame().data);
    }

    #[test]
    fn test_redraw_after_degenerate_geometry() {
        let mut overlay = TextOverlay::new();
        overlay.draw("HI", 0, 0);
        assert_eq!(overlay.render_count(), 1);
        // Same text, zero geometry again: cache hit.
        overlay.draw("HI", 0, 0);
        assert_eq!(overlay.render_count(), 1);
        // Real geometry renders normally.
        overlay.draw("HI", 64, 64);
        assert!(foreground_count(overlay.frame()) > 0);
    }

    #[test]
    fn test_default_is_empty() {
        let overlay = TextOverlay::default();
        assert!(overlay.frame().is_empty());
        assert_eq!(overlay.render_count(), 0);
    }
}
