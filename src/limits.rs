use crate::error::BmpError;

/// Resource limits applied after the header is parsed and before any
/// pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the unpacked bitmap plus the packed output.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits sized for a display controller: `width x height` pixels, no more.
    pub fn display(width: u32, height: u32) -> Self {
        Self {
            max_width: Some(u64::from(width)),
            max_height: Some(u64::from(height)),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BmpError> {
        exceeds("allocation", bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BmpError> {
    match limit {
        Some(max) if value > max => Err(BmpError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
