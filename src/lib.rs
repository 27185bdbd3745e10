//! `lumagray` converts RGBA pixel buffers to luminance-weighted grayscale
//! using the ITU-R BT.601 luma coefficients (0.299, 0.587, 0.114). Alpha is
//! preserved exactly, every pixel is converted independently, and the batch
//! conversion can run serially or data-parallel with identical results.
//!
//! Decoding and encoding of file formats is out of scope; this crate only
//! consumes and produces in-memory buffers. With the default `image-interop`
//! feature, buffers convert to and from [`image::RgbaImage`].
//!
//! ```
//! use lumagray::{grayscale, Image, Rgba};
//!
//! let image = Image::from_pixels(
//!     2,
//!     1,
//!     vec![Rgba::new(255, 0, 0, 255), Rgba::new(0, 0, 255, 128)],
//! )
//! .unwrap();
//! let gray = grayscale(&image);
//!
//! let red = gray.pixel(0, 0).unwrap();
//! assert!(red.r == red.g && red.g == red.b); // truly gray
//! assert_eq!(gray.pixel(1, 0).unwrap().a, 128); // alpha untouched
//! ```

#![forbid(unsafe_code)]

pub mod error;
mod grayscale;
mod image;
#[cfg(feature = "image-interop")]
mod interop;
mod pixel;

pub use crate::error::LumaError;
pub use crate::grayscale::{
    grayscale, grayscale_into, grayscale_raw, grayscale_with, ExecutionStrategy,
};
pub use crate::image::Image;
pub use crate::pixel::{Rgba, LUMA_BLUE, LUMA_GREEN, LUMA_RED};
