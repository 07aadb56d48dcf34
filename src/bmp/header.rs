//! BITMAPFILEHEADER + BITMAPINFOHEADER reader for 1-bit uncompressed BMPs.

use log::{trace, warn};

use crate::error::BmpError;

/// Size of the file header at offset 0.
pub const FILE_HEADER_LEN: usize = 14;
/// Size of the BITMAPINFOHEADER that follows the file header.
pub const INFO_HEADER_LEN: usize = 40;
/// Both headers together; the smallest input that can be parsed.
pub const HEADERS_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

/// The 14-byte BMP file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Declared file size. Not trusted.
    pub file_size: u32,
    pub reserved: u32,
    /// Offset of the pixel data from the start of the file.
    pub off_bits: u32,
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl ImageHeader {
    /// Width in pixels. Only meaningful after [`read_headers`] succeeded.
    pub fn width_px(&self) -> u32 {
        self.width.unsigned_abs()
    }

    /// Height in pixels. Only meaningful after [`read_headers`] succeeded.
    pub fn height_px(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Bytes per stored row: `ceil(width / 32) * 4`.
    pub fn row_len(&self) -> usize {
        (self.width_px() as usize).div_ceil(32) * 4
    }
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos + N;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BmpError::TruncatedData {
                needed: end,
                available: self.data.len(),
            })?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }

    /// Borrow `len` bytes starting at absolute offset `pos` without moving.
    pub(crate) fn slice_at(&self, pos: usize, len: usize) -> Result<&'a [u8], BmpError> {
        let end = pos.checked_add(len).ok_or(BmpError::TruncatedData {
            needed: usize::MAX,
            available: self.data.len(),
        })?;
        self.data.get(pos..end).ok_or(BmpError::TruncatedData {
            needed: end,
            available: self.data.len(),
        })
    }
}

/// Parse and validate both headers.
///
/// The signature is checked first, so anything not starting with `"BM"` is
/// [`BmpError::InvalidFormat`] no matter what follows. Palettes, compression
/// and non-positive dimensions are rejected here, before any pixel data is
/// touched.
pub fn read_headers(data: &[u8]) -> Result<(FileHeader, ImageHeader), BmpError> {
    match data {
        [b'B', b'M', ..] => {}
        [b'B'] => {
            return Err(BmpError::TruncatedData {
                needed: 2,
                available: 1,
            });
        }
        _ => {
            let mut found = [0u8; 2];
            for (dst, src) in found.iter_mut().zip(data) {
                *dst = *src;
            }
            return Err(BmpError::InvalidFormat { found });
        }
    }

    let mut cursor = Cursor::new(data);
    let file = FileHeader {
        signature: cursor.read_fixed_bytes()?,
        file_size: cursor.get_u32_le()?,
        reserved: cursor.get_u32_le()?,
        off_bits: cursor.get_u32_le()?,
    };
    let image = ImageHeader {
        header_size: cursor.get_u32_le()?,
        width: cursor.get_i32_le()?,
        height: cursor.get_i32_le()?,
        planes: cursor.get_u16_le()?,
        bit_count: cursor.get_u16_le()?,
        compression: cursor.get_u32_le()?,
        image_size: cursor.get_u32_le()?,
        x_pels_per_meter: cursor.get_i32_le()?,
        y_pels_per_meter: cursor.get_i32_le()?,
        colors_used: cursor.get_u32_le()?,
        colors_important: cursor.get_u32_le()?,
    };

    trace!("Pixel offset: {}", file.off_bits);
    trace!("Width: {}", image.width);
    trace!("Height: {}", image.height);
    trace!("Bit depth: {}", image.bit_count);
    trace!("Compression: {}", image.compression);
    trace!("Colors used: {}", image.colors_used);

    if image.colors_used > 0 {
        return Err(BmpError::UnsupportedFeature {
            field: "colors_used",
            value: image.colors_used,
        });
    }
    if image.compression != 0 {
        return Err(BmpError::UnsupportedFeature {
            field: "compression",
            value: image.compression,
        });
    }
    if image.width <= 0 {
        return Err(BmpError::InvalidGeometry {
            field: "width",
            value: image.width,
        });
    }
    if image.height <= 0 {
        return Err(BmpError::InvalidGeometry {
            field: "height",
            value: image.height,
        });
    }
    if image.bit_count != 1 {
        warn!(
            "BMP declares {} bits per pixel; decoding as 1-bit anyway",
            image.bit_count
        );
    }

    Ok((file, image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn header(width: i32, height: i32, compression: u32, colors_used: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADERS_LEN);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&62u32.to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&compression.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&colors_used.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out
    }

    #[test]
    fn parses_fields_little_endian() {
        let (file, image) = read_headers(&header(300, 7, 0, 0)).unwrap();
        assert_eq!(file.signature, *b"BM");
        assert_eq!(file.off_bits, 62);
        assert_eq!(image.header_size, 40);
        assert_eq!(image.width, 300);
        assert_eq!(image.height, 7);
        assert_eq!(image.bit_count, 1);
        assert_eq!(image.row_len(), 40);
    }

    #[test]
    fn row_len_pads_to_four_bytes() {
        let (_, image) = read_headers(&header(1, 1, 0, 0)).unwrap();
        assert_eq!(image.row_len(), 4);
        let (_, image) = read_headers(&header(32, 1, 0, 0)).unwrap();
        assert_eq!(image.row_len(), 4);
        let (_, image) = read_headers(&header(33, 1, 0, 0)).unwrap();
        assert_eq!(image.row_len(), 8);
    }

    #[test]
    fn signature_checked_before_length() {
        assert!(matches!(
            read_headers(b""),
            Err(BmpError::InvalidFormat { found: [0, 0] })
        ));
        assert!(matches!(
            read_headers(b"P6"),
            Err(BmpError::InvalidFormat { found: [b'P', b'6'] })
        ));
        assert!(matches!(
            read_headers(b"B"),
            Err(BmpError::TruncatedData { .. })
        ));
        assert!(matches!(
            read_headers(b"BM\x00\x00"),
            Err(BmpError::TruncatedData { .. })
        ));
    }

    #[test]
    fn palette_is_rejected_before_compression() {
        match read_headers(&header(8, 8, 1, 2)) {
            Err(BmpError::UnsupportedFeature { field, value }) => {
                assert_eq!(field, "colors_used");
                assert_eq!(value, 2);
            }
            other => panic!("expected UnsupportedFeature, got {other:?}"),
        }
        match read_headers(&header(8, 8, 3, 0)) {
            Err(BmpError::UnsupportedFeature { field, .. }) => assert_eq!(field, "compression"),
            other => panic!("expected UnsupportedFeature, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_geometry() {
        assert!(matches!(
            read_headers(&header(0, 8, 0, 0)),
            Err(BmpError::InvalidGeometry { field: "width", value: 0 })
        ));
        assert!(matches!(
            read_headers(&header(8, -8, 0, 0)),
            Err(BmpError::InvalidGeometry { field: "height", value: -8 })
        ));
    }
}
