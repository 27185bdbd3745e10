use bytemuck::{Pod, Zeroable};

/// ITU-R BT.601 luma weight for the red channel.
pub const LUMA_RED: f32 = 0.299;
/// ITU-R BT.601 luma weight for the green channel.
pub const LUMA_GREEN: f32 = 0.587;
/// ITU-R BT.601 luma weight for the blue channel.
pub const LUMA_BLUE: f32 = 0.114;

/// One interleaved RGBA sample, 8 bits per channel.
///
/// `#[repr(C)]` and [`bytemuck::Pod`] so that slices of pixels and slices of
/// bytes cast into each other without copying.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Luma of this pixel in [0.0, 1.0], per ITU-R BT.601.
    ///
    /// Channels are normalized to [0.0, 1.0] before weighting, the same as
    /// unpacking a packed 8888 color into floats.
    #[inline]
    pub fn luma(self) -> f32 {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;
        LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b
    }

    /// The grayscale equivalent of this pixel: all three color channels set
    /// to the BT.601 luma, alpha carried over unchanged.
    #[inline]
    pub fn to_gray(self) -> Self {
        // round() first, then clamp: f32 rounding error can push the scaled
        // luma slightly past 255.0 and the channel must stay a valid u8.
        let y = (self.luma() * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: y,
            g: y,
            b: y,
            a: self.a,
        }
    }
}
