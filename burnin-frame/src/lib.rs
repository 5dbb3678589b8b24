//! # burnin-frame
//!
//! Owned raster frame buffer shared between the overlay rasterizer
//! (`burnin-osd`) and downstream pipeline stages that encode or
//! transmit the finished frame.
//!
//! ## Architecture
//!
//! ```text
//!  TextOverlay (burnin-osd)
//!       │ writes pixels
//!       ▼
//!  Frame { width, height, stride, format, data }
//!       │ borrowed by reference
//!       ▼
//!  composition / encoder stage (outside this workspace)
//! ```
//!
//! - [`frame`] — the [`Frame`] buffer, its [`PixelFormat`] tag and the
//!   [`Rgb`] pixel view type.

pub mod frame;

// Re-exports for ergonomic use.
pub use frame::{Frame, PixelFormat, Rgb};
