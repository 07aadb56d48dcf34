use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;

/// A `width x height` grid of 1-bit pixels, row 0 at the top.
///
/// Rows are stored packed, most significant bit first (bit `0x80` of the
/// first byte is column 0), `stride()` bytes per row. Bits past `width` in
/// the last byte of a row are always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonoBitmap {
    width: u32,
    height: u32,
    stride: usize,
    bits: Vec<u8>,
}

impl MonoBitmap {
    /// An all-clear bitmap.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        let stride = stride_for(width);
        let len = stride
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            stride,
            bits: vec![0u8; len],
        })
    }

    /// Build from a row-major `bool` slice of `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[bool]) -> Result<Self, BmpError> {
        let mut bitmap = Self::new(width, height)?;
        let needed = width as usize * height as usize;
        if pixels.len() < needed {
            return Err(BmpError::TruncatedData {
                needed,
                available: pixels.len(),
            });
        }
        if width > 0 {
            for (y, row) in pixels[..needed].chunks_exact(width as usize).enumerate() {
                for (x, &on) in row.iter().enumerate() {
                    bitmap.set(x as u32, y as u32, on);
                }
            }
        }
        Ok(bitmap)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per packed row: `ceil(width / 8)`.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel at column `x`, row `y`. Out-of-range coordinates read as clear.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.bits[y as usize * self.stride + (x as usize >> 3)];
        byte & (0x80 >> (x & 7)) != 0
    }

    /// Set or clear one pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let mask = 0x80u8 >> (x & 7);
        let byte = &mut self.bits[y as usize * self.stride + (x as usize >> 3)];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Packed bytes of row `y`.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.bits[start..start + self.stride]
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        &mut self.bits[start..start + self.stride]
    }

    /// All rows, top to bottom, `stride()` bytes each.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Mask applied to the last byte of every row to clear bits past `width`.
    pub(crate) fn tail_mask(&self) -> u8 {
        match self.width % 8 {
            0 => 0xFF,
            rem => 0xFFu8 << (8 - rem),
        }
    }

    /// Grayscale view: set pixels are 255, clear pixels 0.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<u8> {
        let mut gray = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                gray.push(if self.get(x, y) { 255 } else { 0 });
            }
        }
        imgref::ImgVec::new(gray, self.width as usize, self.height as usize)
    }
}

pub(crate) fn stride_for(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_msb_first() {
        let mut bm = MonoBitmap::new(10, 2).unwrap();
        assert_eq!(bm.stride(), 2);
        bm.set(0, 0, true);
        bm.set(9, 1, true);
        assert_eq!(bm.row(0), &[0x80, 0x00]);
        assert_eq!(bm.row(1), &[0x00, 0x40]);
        assert!(bm.get(0, 0));
        assert!(bm.get(9, 1));
        assert!(!bm.get(1, 0));
        bm.set(0, 0, false);
        assert_eq!(bm.row(0), &[0x00, 0x00]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut bm = MonoBitmap::new(3, 1).unwrap();
        bm.set(3, 0, true);
        bm.set(0, 1, true);
        assert_eq!(bm.count_set(), 0);
        assert!(!bm.get(7, 0));
    }

    #[test]
    fn from_pixels_row_major() {
        let px = [true, false, true, false, true, false];
        let bm = MonoBitmap::from_pixels(3, 2, &px).unwrap();
        assert_eq!(bm.row(0), &[0b1010_0000]);
        assert_eq!(bm.row(1), &[0b0100_0000]);
        assert!(MonoBitmap::from_pixels(3, 3, &px).is_err());
    }

    #[test]
    fn tail_mask_covers_partial_byte() {
        assert_eq!(MonoBitmap::new(8, 1).unwrap().tail_mask(), 0xFF);
        assert_eq!(MonoBitmap::new(3, 1).unwrap().tail_mask(), 0xE0);
        assert_eq!(MonoBitmap::new(9, 1).unwrap().tail_mask(), 0x80);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgvec_is_gray_0_or_255() {
        let mut bm = MonoBitmap::new(3, 2).unwrap();
        bm.set(2, 1, true);
        bm.set(0, 0, true);
        let img = bm.to_imgvec();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.buf().as_slice(), &[255, 0, 0, 0, 0, 255]);
    }
}
