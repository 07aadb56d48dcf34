//! Bottom-up, 4-byte padded 1-bit rows → [`MonoBitmap`].

use enough::Stop;
use log::debug;

use super::header::{Cursor, FileHeader, ImageHeader};
use crate::bitmap::MonoBitmap;
use crate::error::BmpError;

/// Read every stored row into a top-down bitmap.
///
/// Logical row `i` is stored at `off_bits + row_len * (height - 1 - i)`.
/// Column bits past `width` are dropped. Any row running past the end of
/// `data` fails the whole decode.
pub(crate) fn unpack_rows(
    data: &[u8],
    file: &FileHeader,
    image: &ImageHeader,
    stop: &dyn Stop,
) -> Result<MonoBitmap, BmpError> {
    let width = image.width_px();
    let height = image.height_px();
    let row_len = image.row_len();
    let off_bits = file.off_bits as usize;

    // The last stored row sits furthest into the file; checking it up front
    // means a short file fails before the bitmap is touched.
    let pixel_bytes = row_len
        .checked_mul(height as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let needed = off_bits
        .checked_add(pixel_bytes)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if needed > data.len() {
        return Err(BmpError::TruncatedData {
            needed,
            available: data.len(),
        });
    }

    debug!("Unpacking {width}x{height}, {row_len} bytes per row from offset {off_bits}");

    let mut bitmap = MonoBitmap::new(width, height)?;
    let stride = bitmap.stride();
    let tail_mask = bitmap.tail_mask();
    let cursor = Cursor::new(data);

    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        let stored = (height - 1 - y) as usize;
        let src = cursor.slice_at(off_bits + row_len * stored, row_len)?;
        let dst = bitmap.row_mut(y);
        dst.copy_from_slice(&src[..stride]);
        if let Some(last) = dst.last_mut() {
            *last &= tail_mask;
        }
    }

    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::header::read_headers;
    use alloc::vec::Vec;
    use enough::Unstoppable;

    /// Headers for a 1-bit image with pixel data straight after them.
    fn raw_bmp(width: i32, height: i32, rows_bottom_up: &[&[u8]]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&[0u8; 8]);
        out.extend_from_slice(&54u32.to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&[0u8; 24]);
        for row in rows_bottom_up {
            out.extend_from_slice(row);
        }
        out
    }

    fn unpack(data: &[u8]) -> Result<MonoBitmap, BmpError> {
        let (file, image) = read_headers(data)?;
        unpack_rows(data, &file, &image, &Unstoppable)
    }

    #[test]
    fn rows_are_flipped() {
        let data = raw_bmp(8, 2, &[&[0x0F, 0, 0, 0], &[0xF0, 0, 0, 0]]);
        let bm = unpack(&data).unwrap();
        assert_eq!(bm.row(0), &[0xF0]);
        assert_eq!(bm.row(1), &[0x0F]);
    }

    #[test]
    fn padding_bits_dropped() {
        // 3 pixels wide: only the top 3 bits of the first byte count.
        let data = raw_bmp(3, 1, &[&[0xFF, 0xFF, 0xFF, 0xFF]]);
        let bm = unpack(&data).unwrap();
        assert_eq!(bm.as_bytes(), &[0xE0]);
        assert_eq!(bm.count_set(), 3);
    }

    #[test]
    fn nine_columns_use_two_bytes() {
        let data = raw_bmp(9, 1, &[&[0x00, 0xFF, 0xFF, 0xFF]]);
        let bm = unpack(&data).unwrap();
        assert_eq!(bm.as_bytes(), &[0x00, 0x80]);
        assert!(bm.get(8, 0));
        assert_eq!(bm.count_set(), 1);
    }

    #[test]
    fn truncated_rows() {
        let mut data = raw_bmp(8, 2, &[&[0xFF, 0, 0, 0], &[0xFF, 0, 0, 0]]);
        data.truncate(data.len() - 1);
        match unpack(&data) {
            Err(BmpError::TruncatedData { needed, available }) => {
                assert_eq!(needed, 62);
                assert_eq!(available, 61);
            }
            other => panic!("expected TruncatedData, got {other:?}"),
        }
    }

    #[test]
    fn honours_off_bits() {
        let mut data = raw_bmp(8, 1, &[]);
        data[10..14].copy_from_slice(&58u32.to_le_bytes());
        data.extend_from_slice(&[0xAA; 4]); // gap, e.g. a palette
        data.extend_from_slice(&[0x81, 0, 0, 0]);
        let bm = unpack(&data).unwrap();
        assert_eq!(bm.as_bytes(), &[0x81]);
    }
}
