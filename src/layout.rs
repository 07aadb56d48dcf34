/// Byte layout of the packed output buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Page-packed: 8 vertically adjacent pixels per byte, least significant
    /// bit on top, one byte per column per 8-row band.
    #[default]
    Vertical,
    /// Row-packed: 8 horizontally adjacent pixels per byte, most significant
    /// bit on the left, `ceil(width / 8)` bytes per row.
    Horizontal,
}

impl Orientation {
    /// Output buffer size in bytes for a `width x height` image.
    pub fn buffer_len(self, width: u32, height: u32) -> Option<usize> {
        self.lines(width, height)
            .checked_mul(self.line_len(width, height))
    }

    /// Number of output lines: 8-row bands (vertical) or pixel rows (horizontal).
    pub fn lines(self, _width: u32, height: u32) -> usize {
        match self {
            Self::Vertical => (height as usize).div_ceil(8),
            Self::Horizontal => height as usize,
        }
    }

    /// Bytes per output line: one per column (vertical) or one per 8
    /// columns (horizontal).
    pub fn line_len(self, width: u32, _height: u32) -> usize {
        match self {
            Self::Vertical => width as usize,
            Self::Horizontal => (width as usize).div_ceil(8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_geometry() {
        let o = Orientation::Vertical;
        assert_eq!(o.lines(128, 64), 8);
        assert_eq!(o.line_len(128, 64), 128);
        assert_eq!(o.buffer_len(128, 64), Some(1024));
        assert_eq!(o.buffer_len(5, 9), Some(10));
    }

    #[test]
    fn horizontal_geometry() {
        let o = Orientation::Horizontal;
        assert_eq!(o.lines(9, 3), 3);
        assert_eq!(o.line_len(9, 3), 2);
        assert_eq!(o.buffer_len(9, 3), Some(6));
    }

    #[test]
    fn default_is_vertical() {
        assert_eq!(Orientation::default(), Orientation::Vertical);
    }
}
