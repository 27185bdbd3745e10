use std::fmt::Display;

/// Errors reported by lumagray.
///
/// The taxonomy is deliberately small: the conversion itself is total over
/// valid pixels, so the only thing that can go wrong is handing in a buffer
/// whose length does not agree with the stated dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LumaError {
    /// The supplied width and height do not match the buffer length.
    ///
    /// `len` is the length of the buffer as supplied: pixels for pixel
    /// buffers, bytes for raw RGBA buffers.
    InvalidDimensions { width: u32, height: u32, len: usize },
}

impl Display for LumaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LumaError::InvalidDimensions { width, height, len } => write!(
                f,
                "lumagray: dimensions {width}x{height} do not match a buffer of length {len}"
            ),
        }
    }
}

impl std::error::Error for LumaError {}
