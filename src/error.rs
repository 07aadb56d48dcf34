use alloc::string::String;
use enough::StopReason;

/// Errors from monochrome BMP decoding, encoding and rendering.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("not a BMP file: expected \"BM\" signature, found {found:02x?}")]
    InvalidFormat { found: [u8; 2] },

    #[error("unsupported BMP feature: {field} = {value}")]
    UnsupportedFeature { field: &'static str, value: u32 },

    #[error("truncated data: need {needed} bytes, got {available}")]
    TruncatedData { needed: usize, available: usize },

    #[error("invalid geometry: {field} = {value}, must be positive")]
    InvalidGeometry { field: &'static str, value: i32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("invalid array name {0:?}: must be a C identifier")]
    InvalidArrayName(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BmpError {
    /// Whether the source itself was rejected by header validation.
    ///
    /// These are the failures where asking for a different file makes sense;
    /// truncation and limit errors are reported as-is.
    pub fn is_rejected_source(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. } | Self::UnsupportedFeature { .. } | Self::InvalidGeometry { .. }
        )
    }
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
