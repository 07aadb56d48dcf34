//! Logical bitmap → display byte layouts.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::bitmap::MonoBitmap;
use crate::error::BmpError;
use crate::layout::Orientation;

/// Pack `bitmap` into the byte layout selected by `orientation`.
///
/// The buffer is zero-filled first, so unused bits in a partial last byte
/// (horizontal) or a partial last band (vertical) are always zero.
pub fn repack(
    bitmap: &MonoBitmap,
    orientation: Orientation,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let (width, height) = (bitmap.width(), bitmap.height());
    let len = orientation
        .buffer_len(width, height)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let mut out = vec![0u8; len];
    match orientation {
        Orientation::Vertical => pack_vertical(bitmap, &mut out, stop)?,
        Orientation::Horizontal => pack_horizontal(bitmap, &mut out, stop)?,
    }
    Ok(out)
}

/// Byte `(y / 8) * width + x` gets bit `y % 8` for every set pixel.
fn pack_vertical(bitmap: &MonoBitmap, out: &mut [u8], stop: &dyn Stop) -> Result<(), BmpError> {
    let width = bitmap.width() as usize;
    if width == 0 {
        return Ok(());
    }
    for (band, page) in out.chunks_exact_mut(width).enumerate() {
        stop.check()?;
        let top = band as u32 * 8;
        let bottom = (top + 8).min(bitmap.height());
        for y in top..bottom {
            let bit = 1u8 << (y - top);
            for (col_byte, &packed) in bitmap.row(y).iter().enumerate() {
                if packed == 0 {
                    continue;
                }
                let first = col_byte * 8;
                for k in 0..(width - first).min(8) {
                    if packed & (0x80 >> k) != 0 {
                        page[first + k] |= bit;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Rows are already MSB-first and padding-masked; copy them in order.
fn pack_horizontal(bitmap: &MonoBitmap, out: &mut [u8], stop: &dyn Stop) -> Result<(), BmpError> {
    let stride = bitmap.stride();
    if stride == 0 {
        return Ok(());
    }
    for (y, line) in out.chunks_exact_mut(stride).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        line.copy_from_slice(bitmap.row(y as u32));
    }
    Ok(())
}

/// Rebuild a bitmap from a packed buffer; the inverse of [`repack`].
///
/// Useful for previewing what a display will show, and for checking that
/// both layouts carry the same pixels.
pub fn unpack(
    packed: &[u8],
    width: u32,
    height: u32,
    orientation: Orientation,
) -> Result<MonoBitmap, BmpError> {
    match orientation {
        Orientation::Vertical => unpack_vertical(packed, width, height),
        Orientation::Horizontal => unpack_horizontal(packed, width, height),
    }
}

/// Inverse of vertical packing: bit `y % 8` of byte `(y / 8) * width + x`.
pub fn unpack_vertical(packed: &[u8], width: u32, height: u32) -> Result<MonoBitmap, BmpError> {
    check_packed_len(packed, width, height, Orientation::Vertical)?;
    let mut bitmap = MonoBitmap::new(width, height)?;
    for y in 0..height {
        let base = (y / 8) as usize * width as usize;
        let bit = 1u8 << (y % 8);
        for x in 0..width {
            if packed[base + x as usize] & bit != 0 {
                bitmap.set(x, y, true);
            }
        }
    }
    Ok(bitmap)
}

/// Inverse of horizontal packing. Bits past `width` in the packed rows are
/// ignored.
pub fn unpack_horizontal(packed: &[u8], width: u32, height: u32) -> Result<MonoBitmap, BmpError> {
    check_packed_len(packed, width, height, Orientation::Horizontal)?;
    let mut bitmap = MonoBitmap::new(width, height)?;
    let stride = bitmap.stride();
    let tail_mask = bitmap.tail_mask();
    for y in 0..height {
        let start = y as usize * stride;
        let row = bitmap.row_mut(y);
        row.copy_from_slice(&packed[start..start + stride]);
        if let Some(last) = row.last_mut() {
            *last &= tail_mask;
        }
    }
    Ok(bitmap)
}

fn check_packed_len(
    packed: &[u8],
    width: u32,
    height: u32,
    orientation: Orientation,
) -> Result<(), BmpError> {
    let needed = orientation
        .buffer_len(width, height)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if packed.len() < needed {
        return Err(BmpError::TruncatedData {
            needed,
            available: packed.len(),
        });
    }
    Ok(())
}
