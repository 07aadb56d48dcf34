//! BMP encoder: uncompressed 1-bit BMP with a black/white palette.

use alloc::vec::Vec;

use super::header::HEADERS_LEN;
use crate::bitmap::MonoBitmap;
use crate::error::BmpError;

/// Black (index 0) then white (index 1), stored as BGRX.
const PALETTE: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00];

/// Encode a bitmap as a bottom-up 1-bit BMP.
///
/// Set pixels become palette index 1. The palette is written but
/// `colors_used` stays 0 (meaning "all two entries"), so the output is
/// accepted by [`crate::decode()`].
pub fn encode_mono_bmp(bitmap: &MonoBitmap) -> Result<Vec<u8>, BmpError> {
    let width = bitmap.width();
    let height = bitmap.height();
    let width_i32 = stored_dimension("width", width, height)?;
    let height_i32 = stored_dimension("height", height, width)?;

    let row_stride = (width as usize).div_ceil(32) * 4;
    let off_bits = HEADERS_LEN + PALETTE.len();
    let pixel_data_size = row_stride
        .checked_mul(height as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let file_size = pixel_data_size
        .checked_add(off_bits)
        .filter(|&s| s <= u32::MAX as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(
        &mut out,
        file_size,
        off_bits,
        pixel_data_size,
        width_i32,
        height_i32,
    );
    out.extend_from_slice(&PALETTE);

    let pad_bytes = row_stride - bitmap.stride();
    for y in (0..height).rev() {
        out.extend_from_slice(bitmap.row(y));
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

/// BMP stores dimensions as `i32`; zero is meaningless for a bitmap.
fn stored_dimension(field: &'static str, value: u32, other: u32) -> Result<i32, BmpError> {
    if value == 0 {
        return Err(BmpError::InvalidGeometry { field, value: 0 });
    }
    i32::try_from(value).map_err(|_| {
        let (width, height) = if field == "width" {
            (value, other)
        } else {
            (other, value)
        };
        BmpError::DimensionsTooLarge { width, height }
    })
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    off_bits: usize,
    pixel_data_size: usize,
    width: i32,
    height: i32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(off_bits as u32).to_le_bytes());

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&1u16.to_le_bytes()); // bpp
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // 72 DPI
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
