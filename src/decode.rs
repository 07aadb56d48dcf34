use alloc::vec::Vec;

use enough::Stop;

use crate::bitmap::MonoBitmap;
use crate::error::BmpError;
use crate::layout::Orientation;
use crate::limits::Limits;

/// Packed display bytes plus the geometry needed to interpret them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
}

impl DecodeOutput {
    /// The packed bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the packed bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The buffer split into output lines: one 8-row band per line
    /// (vertical) or one pixel row per line (horizontal).
    pub fn lines(&self) -> core::slice::ChunksExact<'_, u8> {
        let line_len = self.orientation.line_len(self.width, self.height).max(1);
        self.data.chunks_exact(line_len)
    }

    /// Rebuild the pixel grid these bytes describe.
    pub fn to_bitmap(&self) -> Result<MonoBitmap, BmpError> {
        crate::repack::unpack(&self.data, self.width, self.height, self.orientation)
    }
}

/// Builder for decoding a 1-bit BMP into display bytes.
///
/// ```no_run
/// use zenmono::{DecodeRequest, Orientation, Unstoppable};
///
/// let data = std::fs::read("logo.bmp")?;
/// let out = DecodeRequest::new(&data)
///     .with_orientation(Orientation::Horizontal)
///     .decode(Unstoppable)?;
/// println!("{}x{}: {} bytes", out.width, out.height, out.data().len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    orientation: Orientation,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            orientation: Orientation::default(),
            limits: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the pixel grid without packing it.
    pub fn decode_bitmap(&self, stop: impl Stop) -> Result<MonoBitmap, BmpError> {
        crate::bmp::decode_bitmap(self.data, self.orientation, self.limits, &stop)
    }

    /// Decode and pack. Either the whole buffer is produced or an error is
    /// returned; there is no partial output.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, BmpError> {
        let bitmap = crate::bmp::decode_bitmap(self.data, self.orientation, self.limits, &stop)?;
        let data = crate::repack::repack(&bitmap, self.orientation, &stop)?;
        log::debug!(
            "Packed {}x{} into {} bytes ({:?})",
            bitmap.width(),
            bitmap.height(),
            data.len(),
            self.orientation
        );
        Ok(DecodeOutput {
            data,
            width: bitmap.width(),
            height: bitmap.height(),
            orientation: self.orientation,
        })
    }
}
