//! Per-pixel glyph rasterization into a frame buffer.
//!
//! Walks every destination pixel of a scaled line and maps it back to a
//! font bit (nearest-neighbor). The frame was zero-filled by the caller,
//! so only foreground pixels are written.

use burnin_frame::Frame;

use crate::font;
use crate::layout::Scale;

/// Foreground color bytes, in buffer order.
pub const FOREGROUND: [u8; 3] = [0x65, 0x65, 0x51];

/// Rasterize one line of text at (`start_x`, `start_y`).
///
/// Out-of-frame pixels terminate the current row early; with a zero
/// scale on either axis the loops cover no pixels and the line is a
/// no-op.
pub(crate) fn draw_line(frame: &mut Frame, line: &str, scale: Scale, start_x: u32, start_y: u32) {
    let bytes = line.as_bytes();
    let row_count = font::GLYPH_HEIGHT * scale.y;
    let col_count = font::GLYPH_WIDTH * bytes.len() as u32 * scale.x;

    for ch_y in 0..row_count {
        let canvas_y = (start_y + ch_y) as usize;
        for ch_x in 0..col_count {
            let canvas_x = start_x + ch_x;
            if canvas_x >= frame.width {
                break;
            }
            let offset = canvas_y * frame.stride + canvas_x as usize * 3;
            if offset >= frame.used() {
                break;
            }

            let code = bytes[(ch_x / font::GLYPH_WIDTH / scale.x) as usize];
            let glyph = font::glyph(code);
            let row = (ch_y / scale.y) % font::GLYPH_HEIGHT;
            let col = (ch_x / scale.x) % font::GLYPH_WIDTH;
            if font::pixel_on(glyph, col, row) {
                // offset and used are both pixel-aligned, so a full
                // triplet fits below the guard above.
                frame.data[offset..offset + 3].copy_from_slice(&FOREGROUND);
            }
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
