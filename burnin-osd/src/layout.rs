//! Multi-line layout: block measurement, scale derivation, placement.
//!
//! All functions here are pure; the overlay calls them once per redraw
//! and feeds the results to the rasterizer.

use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Unscaled bounding box of a text block, in pixels: each character
/// contributes an 8×8 cell before scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Widest line, in pixels.
    pub width: u32,
    /// 8 × number of lines.
    pub height: u32,
}

impl Block {
    /// True when there is nothing to draw.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Integer magnification applied to the 8×8 glyph cell, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    pub x: u32,
    pub y: u32,
}

/// Split `text` into drawable lines.
///
/// Empty segments are skipped, so consecutive newlines collapse and a
/// trailing newline adds no line. Restartable single pass, no per-line
/// allocation.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.is_empty())
}

/// Measure the unscaled bounding box of `text`.
pub fn measure(text: &str) -> Block {
    let mut width = 0u32;
    let mut height = 0u32;
    for line in lines(text) {
        width = width.max(line.len() as u32 * GLYPH_WIDTH);
        height += GLYPH_HEIGHT;
    }
    Block { width, height }
}

/// Derive the scale factors that fit `block` into a frame.
///
/// The divisors 2 and 3 reserve margin so the block never fills the
/// whole frame, and the second step locks the factors to a 1:1.5 cell
/// aspect ratio (glyph cells render one unit wide by one-and-a-half
/// tall, approximating letterform proportions): whichever candidate is
/// smaller dominates and the other is derived from it, so the scaled
/// block stays within the bounds implied by both candidates.
///
/// Integer division can floor either factor to zero when the frame is
/// small relative to the text; the result is then a blank render, not
/// an error. `block` must be non-empty.
pub fn fit(frame_width: u32, frame_height: u32, block: Block) -> Scale {
    debug_assert!(!block.is_empty());
    let mut x = frame_width / block.width / 2;
    let mut y = frame_height / block.height / 3;
    if (x as f64) < y as f64 / 1.5 {
        y = (x as f64 * 1.5) as u32;
    } else if (y as f64) < x as f64 * 1.5 {
        x = (y as f64 / 1.5) as u32;
    }
    Scale { x, y }
}

/// Top edge of the scaled block: vertically centered when it fits,
/// pinned to the top edge otherwise.
pub fn block_origin_y(frame_height: u32, block: Block, scale: Scale) -> u32 {
    let scaled = block.height * scale.y;
    if frame_height >= scaled {
        (frame_height - scaled) / 2
    } else {
        0
    }
}

/// Left edge of one scaled line: horizontally centered when it fits,
/// pinned to the left edge otherwise. Each line centers independently.
pub fn line_origin_x(frame_width: u32, line: &str, scale: Scale) -> u32 {
    let line_width = line.len() as u32 * GLYPH_WIDTH * scale.x;
    if frame_width >= line_width {
        (frame_width - line_width) / 2
    } else {
        0
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_skip_empty_segments() {
        let collected: Vec<&str> = lines("a\n\nb\n").collect();
        assert_eq!(collected, vec!["a", "b"]);
        assert_eq!(lines("").count(), 0);
        assert_eq!(lines("\n\n").count(), 0);
    }

    #[test]
    fn test_measure_single_line() {
        assert_eq!(measure("HI"), Block { width: 16, height: 8 });
    }

    #[test]
    fn test_measure_widest_line_wins() {
        let block = measure("A\nLONGER\nBC");
        assert_eq!(block.width, 6 * 8);
        assert_eq!(block.height, 3 * 8);
    }

    #[test]
    fn test_measure_empty_text() {
        let block = measure("");
        assert!(block.is_empty());
        assert!(measure("\n").is_empty());
    }

    #[test]
    fn test_fit_reference_geometry() {
        // "HI" in a 64x64 frame: candidates x = 64/16/2 = 2,
        // y = 64/8/3 = 2; the aspect step derives x = 2/1.5 -> 1.
        let scale = fit(64, 64, Block { width: 16, height: 8 });
        assert_eq!(scale, Scale { x: 1, y: 2 });
    }

    #[test]
    fn test_fit_wide_frame_derives_y() {
        // x = 512/16/2 = 16, y = 48/8/3 = 2; y < x*1.5 so x = 2/1.5 -> 1.
        let scale = fit(512, 48, Block { width: 16, height: 8 });
        assert_eq!(scale, Scale { x: 1, y: 2 });
    }

    #[test]
    fn test_fit_tall_frame_derives_x() {
        // x = 64/16/2 = 2, y = 512/8/3 = 21; x < y/1.5 so y = 2*1.5 = 3.
        let scale = fit(64, 512, Block { width: 16, height: 8 });
        assert_eq!(scale, Scale { x: 2, y: 3 });
    }

    #[test]
    fn test_fit_floors_to_zero_for_tiny_frame() {
        // Long text in a small frame: both candidates floor to zero.
        let scale = fit(16, 16, Block { width: 80, height: 8 });
        assert_eq!(scale, Scale { x: 0, y: 0 });
    }

    #[test]
    fn test_fit_unit_candidates_floor_x() {
        // x = y = 1: the aspect step derives x = 1/1.5 -> 0 while y
        // stays 1. A quirk of the original formula, kept as-is.
        let scale = fit(32, 24, Block { width: 16, height: 8 });
        assert_eq!(scale, Scale { x: 0, y: 1 });
    }

    #[test]
    fn test_block_origin_centers_when_fits() {
        let block = Block { width: 16, height: 8 };
        let scale = Scale { x: 1, y: 2 };
        assert_eq!(block_origin_y(64, block, scale), (64 - 16) / 2);
    }

    #[test]
    fn test_block_origin_pins_to_top_when_too_tall() {
        let block = Block { width: 16, height: 64 };
        let scale = Scale { x: 1, y: 2 };
        assert_eq!(block_origin_y(64, block, scale), 0);
    }

    #[test]
    fn test_line_origin_centers_independently() {
        let scale = Scale { x: 1, y: 2 };
        assert_eq!(line_origin_x(64, "HI", scale), (64 - 16) / 2);
        assert_eq!(line_origin_x(64, "A", scale), (64 - 8) / 2);
    }

    #[test]
    fn test_line_origin_pins_to_left_when_too_wide() {
        let scale = Scale { x: 4, y: 4 };
        assert_eq!(line_origin_x(32, "WIDE", scale), 0);
    }
}
