//! C source rendering of packed display bytes.
//!
//! ```text
//! #define LOGO_WIDTH 16
//! #define LOGO_HEIGHT 8
//!
//! const uint8_t logo[] = {
//!  0xff, 0x81, ...,
//!  ...
//! };
//! ```

use alloc::string::String;
use core::fmt;

use crate::decode::DecodeOutput;
use crate::error::BmpError;

/// A validated C identifier used to name the generated array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayName(String);

impl ArrayName {
    /// Accepts `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn new(name: &str) -> Result<Self, BmpError> {
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(Self(name.into()))
        } else {
            Err(BmpError::InvalidArrayName(name.into()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix for the `_WIDTH` / `_HEIGHT` macros.
    pub fn macro_prefix(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl Default for ArrayName {
    fn default() -> Self {
        Self("image".into())
    }
}

impl fmt::Display for ArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders a [`DecodeOutput`] as size macros plus a `const uint8_t` array.
///
/// One source line per output line (see [`DecodeOutput::lines`]); every
/// byte is ` 0x%02x`, comma separated, no comma after the last one.
pub struct CArray<'a> {
    pub name: &'a ArrayName,
    pub output: &'a DecodeOutput,
}

impl<'a> CArray<'a> {
    pub fn new(name: &'a ArrayName, output: &'a DecodeOutput) -> Self {
        Self { name, output }
    }
}

impl fmt::Display for CArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.name.macro_prefix();
        writeln!(f, "#define {prefix}_WIDTH {}", self.output.width)?;
        writeln!(f, "#define {prefix}_HEIGHT {}", self.output.height)?;
        writeln!(f)?;
        writeln!(f, "const uint8_t {}[] = {{", self.name)?;

        let total = self.output.data().len();
        let mut written = 0usize;
        for line in self.output.lines() {
            for byte in line {
                written += 1;
                write!(f, " 0x{byte:02x}")?;
                if written != total {
                    f.write_str(",")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "}};")
    }
}
