#![no_main]

use std::num::NonZeroU8;

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use lumagray::grayscale_raw;

/// An RGBA buffer whose length agrees with its dimensions, so fuzzing
/// exercises the conversion itself rather than only the length check.
#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgba_data: Vec<u8>,
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}

fuzz_target!(|input: (StructuredImage, Vec<u8>)| {
    let (image, junk) = input;
    let width = image.width.get() as u32;
    let height = image.height.get() as u32;

    let gray = grayscale_raw(width, height, &image.rgba_data)
        .expect("length matches dimensions by construction");

    // Contract.
    assert_eq!(gray.len(), image.rgba_data.len());
    for (gray_pixel, src_pixel) in gray.chunks_exact(4).zip(image.rgba_data.chunks_exact(4)) {
        assert_eq!(gray_pixel[0], gray_pixel[1]);
        assert_eq!(gray_pixel[1], gray_pixel[2]);
        assert_eq!(gray_pixel[3], src_pixel[3]);
    }

    // Arbitrary-length buffers must be accepted or rejected purely on the
    // length contract, never panic.
    let expected_len = width as u64 * height as u64 * 4;
    let result = grayscale_raw(width, height, &junk);
    assert_eq!(result.is_ok(), junk.len() as u64 == expected_len);
});
