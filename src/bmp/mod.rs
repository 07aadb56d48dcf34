//! 1-bit uncompressed BMP reading and writing.
//!
//! Use top-level [`crate::decode`], [`crate::read_headers`] and
//! [`crate::encode_mono_bmp`].

mod encode;
mod header;
mod unpack;

pub use encode::encode_mono_bmp;
pub use header::{FileHeader, ImageHeader, read_headers};

use enough::Stop;

use crate::bitmap::{MonoBitmap, stride_for};
use crate::error::BmpError;
use crate::layout::Orientation;
use crate::limits::Limits;

/// Validate headers, apply limits, then read the rows.
///
/// Nothing is allocated until the headers have been accepted.
pub(crate) fn decode_bitmap(
    data: &[u8],
    orientation: Orientation,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<MonoBitmap, BmpError> {
    let (file, image) = read_headers(data)?;
    let (width, height) = (image.width_px(), image.height_px());
    check_limits(limits, width, height, orientation)?;
    stop.check()?;
    unpack::unpack_rows(data, &file, &image, stop)
}

fn check_limits(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
    orientation: Orientation,
) -> Result<(), BmpError> {
    let Some(limits) = limits else {
        return Ok(());
    };
    limits.check(width, height)?;
    let bitmap_bytes = stride_for(width)
        .checked_mul(height as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let out_bytes = orientation
        .buffer_len(width, height)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    limits.check_memory(bitmap_bytes.saturating_add(out_bytes))
}
