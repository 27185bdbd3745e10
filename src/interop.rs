//! Conversions to and from `image-rs` buffer types, so hosts that decode
//! with the `image` crate can hand buffers over without going through raw
//! bytes. Gated behind the `image-interop` feature; no codec features are
//! pulled in.

use image::RgbaImage;

use crate::image::{pixels_from_bytes, Image};

impl From<RgbaImage> for Image {
    fn from(buffer: RgbaImage) -> Self {
        let (width, height) = buffer.dimensions();
        // RgbaImage already upholds len == width * height * 4.
        Image::from_parts(width, height, pixels_from_bytes(buffer.into_raw()))
    }
}

impl From<Image> for RgbaImage {
    fn from(image: Image) -> Self {
        let (width, height) = image.dimensions();
        RgbaImage::from_raw(width, height, image.into_raw())
            .expect("Image upholds len == width * height")
    }
}
