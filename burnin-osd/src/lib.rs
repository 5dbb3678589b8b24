//! # burnin-osd
//!
//! On-screen-display rasterizer: burns multi-line status text (resolution,
//! fps, diagnostics) into a raw RGB frame using a built-in 8×8 bitmap
//! font. No font files, no shaping, no antialiasing — a deterministic
//! nearest-neighbor renderer suitable for a real-time capture pipeline.
//!
//! ## Architecture
//!
//! ```text
//!  TextOverlay::draw(text, w, h)
//!       │
//!       ├── cache hit (same text + geometry) ──► return, frame untouched
//!       ▼
//!  layout::measure()  ──► Block (unscaled bounding box)
//!  layout::fit()      ──► Scale (integer cell magnification)
//!       │
//!       ▼  once per line
//!  raster::draw_line() ──► pixels into Frame (burnin-frame)
//! ```
//!
//! - [`font`] — the built-in glyph table
//! - [`layout`] — line splitting, block measurement, scale derivation
//! - [`raster`] — per-pixel glyph rasterization
//! - [`overlay`] — the cached [`TextOverlay`] front end

pub mod font;
pub mod layout;
pub mod overlay;
pub mod raster;

// Re-exports for convenience
pub use overlay::TextOverlay;
