//! # zenmono
//!
//! Monochrome (1-bit) BMP decoder that packs pixels into the byte layouts
//! small LCD and OLED controllers expect, plus a C array renderer for
//! embedding the result in firmware.
//!
//! ## Output layouts
//!
//! - [`Orientation::Vertical`] (default): page-packed. Each byte holds 8
//!   vertically adjacent pixels of one column, least significant bit on top.
//!   Byte `(y / 8) * width + x` holds pixel `(x, y)` in bit `y % 8`.
//! - [`Orientation::Horizontal`]: row-packed. Each byte holds 8 horizontally
//!   adjacent pixels, most significant bit on the left, `ceil(width / 8)`
//!   bytes per row.
//!
//! A set bit in the BMP pixel data is a set bit in the output; the BMP
//! palette (if any) is not consulted.
//!
//! ## Supported input
//!
//! Uncompressed, bottom-up, 1 bit per pixel BMPs with a BITMAPINFOHEADER
//! and `colors_used == 0`. Compressed or color-mapped files are rejected.
//!
//! ## Usage
//!
//! ```no_run
//! use zenmono::{ArrayName, CArray, DecodeRequest, Orientation, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let out = DecodeRequest::new(data)
//!     .with_orientation(Orientation::Vertical)
//!     .decode(Unstoppable)?;
//!
//! let name = ArrayName::new("logo")?;
//! print!("{}", CArray::new(&name, &out));
//! # Ok::<(), zenmono::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod decode;
mod error;
mod layout;
mod limits;

pub mod bmp;
pub mod render;
pub mod repack;

// Re-exports
pub use bitmap::MonoBitmap;
pub use bmp::{FileHeader, ImageHeader, encode_mono_bmp, read_headers};
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use layout::Orientation;
pub use limits::Limits;
pub use render::{ArrayName, CArray};

/// Decode a 1-bit BMP into packed display bytes.
pub fn decode(
    data: &[u8],
    orientation: Orientation,
    stop: impl Stop,
) -> Result<DecodeOutput, BmpError> {
    DecodeRequest::new(data)
        .with_orientation(orientation)
        .decode(stop)
}

/// Read a 1-bit BMP from disk and decode it.
#[cfg(feature = "std")]
pub fn decode_file(
    path: impl AsRef<std::path::Path>,
    orientation: Orientation,
) -> Result<DecodeOutput, BmpError> {
    let data = std::fs::read(path)?;
    decode(&data, orientation, Unstoppable)
}
