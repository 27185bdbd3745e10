//! The batch driver: applies the per-pixel luma kernel across a whole
//! buffer.
//!
//! Every pixel is converted independently of every other pixel, so the work
//! can be split across any number of workers and the output is identical
//! regardless of the strategy chosen.

use rayon::prelude::*;

use crate::{error::LumaError, image::Image, pixel::Rgba};

/// How to schedule the per-pixel work.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// One sequential pass on the calling thread.
    Serial,
    /// Rayon's global pool with its own work splitting.
    #[default]
    Parallel,
    /// At most this many row-granularity chunks on rayon's global pool.
    /// A count of 0 is treated as 1.
    Threads(usize),
}

/// Convert a whole image to grayscale with the default (parallel) strategy.
pub fn grayscale(image: &Image) -> Image {
    grayscale_with(image, ExecutionStrategy::default())
}

/// Convert a whole image to grayscale with an explicit scheduling strategy.
pub fn grayscale_with(image: &Image, strategy: ExecutionStrategy) -> Image {
    let (width, height) = image.dimensions();
    if image.pixel_count() == 0 {
        return Image::from_parts(width, height, Vec::new());
    }

    let pixels = match strategy {
        ExecutionStrategy::Serial => image.pixels().iter().map(|p| p.to_gray()).collect(),
        ExecutionStrategy::Parallel => image.pixels().par_iter().map(|p| p.to_gray()).collect(),
        ExecutionStrategy::Threads(workers) => {
            let chunk = chunk_len(width, height, workers);
            let mut out = vec![Rgba::default(); image.pixel_count()];
            image
                .pixels()
                .par_chunks(chunk)
                .zip(out.par_chunks_mut(chunk))
                .for_each(|(src, dst)| {
                    for (s, d) in src.iter().zip(dst) {
                        *d = s.to_gray();
                    }
                });
            out
        }
    };
    Image::from_parts(width, height, pixels)
}

/// Convert into a caller-supplied buffer of the same dimensions, without
/// allocating. The pattern for per-frame conversion: allocate the
/// destination once and reuse it.
pub fn grayscale_into(src: &Image, dst: &mut Image) -> Result<(), LumaError> {
    if dst.dimensions() != src.dimensions() {
        return Err(LumaError::InvalidDimensions {
            width: src.width(),
            height: src.height(),
            len: dst.pixel_count(),
        });
    }
    src.pixels()
        .par_iter()
        .zip(dst.pixels_mut().par_iter_mut())
        .for_each(|(s, d)| *d = s.to_gray());
    Ok(())
}

/// Convert a tightly packed, row-major, interleaved RGBA byte buffer.
///
/// This is the raw boundary contract: explicit dimensions plus 4 bytes per
/// pixel. The length is validated before any work happens.
pub fn grayscale_raw(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>, LumaError> {
    if data.len() as u64 != u64::from(width) * u64::from(height) * 4 {
        return Err(LumaError::InvalidDimensions {
            width,
            height,
            len: data.len(),
        });
    }
    let pixels: &[Rgba] = bytemuck::cast_slice(data);
    let gray: Vec<Rgba> = pixels.par_iter().map(|p| p.to_gray()).collect();
    Ok(bytemuck::cast_vec(gray))
}

/// Pixels per chunk so that `workers` chunks cover the image at row
/// granularity.
fn chunk_len(width: u32, height: u32, workers: usize) -> usize {
    let rows_per_worker = (height as usize).div_ceil(workers.max(1)).max(1);
    rows_per_worker * width as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Image {
        Image::from_pixels(
            2,
            2,
            vec![
                Rgba::new(255, 0, 0, 255),
                Rgba::new(0, 255, 0, 200),
                Rgba::new(0, 0, 255, 100),
                Rgba::new(12, 34, 56, 0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_each_pixel_converted_independently() {
        let input = two_by_two();
        let output = grayscale(&input);
        assert_eq!(output.dimensions(), (2, 2));
        for (out, expected) in output
            .pixels()
            .iter()
            .zip(input.pixels().iter().map(|p| p.to_gray()))
        {
            assert_eq!(*out, expected);
        }
    }

    #[test]
    fn test_strategies_agree() {
        let input = Image::from_pixels(
            5,
            3,
            (0..15)
                .map(|i| Rgba::new(i * 17, 255 - i * 13, i * 3, i))
                .collect(),
        )
        .unwrap();
        let serial = grayscale_with(&input, ExecutionStrategy::Serial);
        for strategy in [
            ExecutionStrategy::Parallel,
            ExecutionStrategy::Threads(0),
            ExecutionStrategy::Threads(1),
            ExecutionStrategy::Threads(2),
            // more workers than rows
            ExecutionStrategy::Threads(7),
        ] {
            assert_eq!(grayscale_with(&input, strategy), serial);
        }
    }

    #[test]
    fn test_grayscale_into_reuses_buffer() {
        let input = two_by_two();
        let mut dst = Image::filled(2, 2, Rgba::default());
        grayscale_into(&input, &mut dst).unwrap();
        assert_eq!(dst, grayscale(&input));
    }

    #[test]
    fn test_grayscale_into_rejects_mismatched_dimensions() {
        let input = two_by_two();
        let mut dst = Image::filled(2, 3, Rgba::default());
        assert_eq!(
            grayscale_into(&input, &mut dst),
            Err(LumaError::InvalidDimensions {
                width: 2,
                height: 2,
                len: 6,
            })
        );
    }

    #[test]
    fn test_grayscale_raw() {
        let data = vec![255, 0, 0, 255, 0, 0, 0, 0];
        let gray = grayscale_raw(2, 1, &data).unwrap();
        assert_eq!(gray.len(), data.len());
        assert_eq!(&gray[4..], &[0, 0, 0, 0]);
        assert_eq!(gray[0], gray[1]);
        assert_eq!(gray[1], gray[2]);
        assert!(gray[0] == 76 || gray[0] == 77);
        assert_eq!(gray[3], 255);
    }

    #[test]
    fn test_grayscale_raw_rejects_wrong_length() {
        // width=2, height=2, but only 3 pixels supplied
        assert_eq!(
            grayscale_raw(2, 2, &[0; 12]),
            Err(LumaError::InvalidDimensions {
                width: 2,
                height: 2,
                len: 12,
            })
        );
    }

    #[test]
    fn test_empty_image() {
        let empty = Image::from_pixels(0, 0, Vec::new()).unwrap();
        assert_eq!(grayscale(&empty).dimensions(), (0, 0));
        let zero_width = Image::from_pixels(0, 7, Vec::new()).unwrap();
        assert_eq!(
            grayscale_with(&zero_width, ExecutionStrategy::Threads(4)).dimensions(),
            (0, 7)
        );
    }
}
