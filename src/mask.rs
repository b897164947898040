use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::{ThresholdType, threshold as ip_threshold};

use crate::config::BinarizeOptions;

const FOREGROUND: u8 = 255;
const BACKGROUND: u8 = 0;

/// A two-valued mask: every pixel is either foreground (255) or background (0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilevelMask {
    image: GrayImage,
}

impl BilevelMask {
    /// Build a mask from a grayscale image, treating any non-zero sample as foreground.
    pub fn from_gray(gray: &GrayImage) -> Self {
        let (w, h) = gray.dimensions();
        let image = GrayImage::from_fn(w, h, |x, y| {
            let Luma([v]) = *gray.get_pixel(x, y);
            Luma([if v > 0 { FOREGROUND } else { BACKGROUND }])
        });
        Self { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether the pixel at `(x, y)` belongs to the foreground.
    ///
    /// Out-of-range coordinates are background.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.image
            .get_pixel_checked(x, y)
            .is_some_and(|px| px[0] != BACKGROUND)
    }

    /// Number of foreground pixels.
    pub fn foreground_count(&self) -> usize {
        self.image.pixels().filter(|px| px[0] != BACKGROUND).count()
    }

    /// Get a reference to the underlying 0/255 image.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }
}

/// Convert a decoded raster into a bilevel mask.
pub fn binarize(image: &DynamicImage, options: &BinarizeOptions) -> BilevelMask {
    let gray = image.to_luma8();
    BilevelMask {
        image: threshold_mask(&gray, options.threshold, options.invert),
    }
}

/// Threshold the grayscale image to produce a binary mask.
///
/// Samples `> thr` are light. With `invert` light samples become 0 and the rest 255;
/// without it the polarity is reversed.
pub fn threshold_mask(gray: &GrayImage, thr: u8, invert: bool) -> GrayImage {
    let kind = if invert {
        ThresholdType::BinaryInverted
    } else {
        ThresholdType::Binary
    };
    ip_threshold(gray, thr, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gray_image(w: u32, h: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(w, h, Luma([value]))
    }

    mod threshold_mask {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn dark_pixels_become_foreground_when_inverted() {
                let input = gray_image(2, 2, 100);
                let result = threshold_mask(&input, 127, true);
                for px in result.pixels() {
                    assert_eq!(px.0[0], 255);
                }
            }

            #[test]
            fn light_pixels_become_background_when_inverted() {
                let input = gray_image(2, 2, 200);
                let result = threshold_mask(&input, 127, true);
                for px in result.pixels() {
                    assert_eq!(px.0[0], 0);
                }
            }

            #[test]
            fn exact_threshold_is_dark() {
                // imageproc: > threshold counts as light
                let input = gray_image(1, 1, 127);
                assert_eq!(threshold_mask(&input, 127, true).get_pixel(0, 0).0[0], 255);
                assert_eq!(threshold_mask(&input, 127, false).get_pixel(0, 0).0[0], 0);
            }

            #[test]
            fn mixed_values_per_pixel() {
                let mut input = GrayImage::new(2, 2);
                input.put_pixel(0, 0, Luma([0]));
                input.put_pixel(1, 0, Luma([127]));
                input.put_pixel(0, 1, Luma([128]));
                input.put_pixel(1, 1, Luma([255]));

                let result = threshold_mask(&input, 127, true);

                assert_eq!(result.get_pixel(0, 0).0[0], 255);
                assert_eq!(result.get_pixel(1, 0).0[0], 255);
                assert_eq!(result.get_pixel(0, 1).0[0], 0);
                assert_eq!(result.get_pixel(1, 1).0[0], 0);
            }

            #[test]
            fn dimensions_preserved() {
                let input = gray_image(5, 3, 100);
                let result = threshold_mask(&input, 127, true);
                assert_eq!(result.dimensions(), (5, 3));
            }
        }

        mod prop {
            use super::*;
            use proptest::prelude::*;

            proptest! {
                /// threshold_mask: output is always binary (0 or 255)
                #[test]
                fn output_is_binary(
                    w in 1u32..20,
                    h in 1u32..20,
                    fill_value in proptest::num::u8::ANY,
                    threshold in proptest::num::u8::ANY,
                    invert in proptest::bool::ANY
                ) {
                    let input = GrayImage::from_pixel(w, h, Luma([fill_value]));
                    let result = threshold_mask(&input, threshold, invert);

                    prop_assert_eq!(result.dimensions(), (w, h));
                    for px in result.pixels() {
                        prop_assert!(px.0[0] == 0 || px.0[0] == 255);
                    }
                }

                /// threshold_mask: inverting swaps the two classes exactly
                #[test]
                fn inversion_is_complement(
                    value in proptest::num::u8::ANY,
                    threshold in proptest::num::u8::ANY
                ) {
                    let input = GrayImage::from_pixel(1, 1, Luma([value]));
                    let plain = threshold_mask(&input, threshold, false).get_pixel(0, 0).0[0];
                    let inverted = threshold_mask(&input, threshold, true).get_pixel(0, 0).0[0];

                    prop_assert_eq!(plain as u16 + inverted as u16, 255);
                    prop_assert_eq!(inverted == 255, value <= threshold);
                }
            }
        }
    }

    mod binarize {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn white_image_has_no_foreground() {
                let rgb = RgbImage::from_pixel(4, 3, Rgb([255, 255, 255]));
                let image = DynamicImage::ImageRgb8(rgb);
                let mask = binarize(&image, &BinarizeOptions::default());

                assert_eq!(mask.dimensions(), (4, 3));
                assert_eq!(mask.foreground_count(), 0);
            }

            #[test]
            fn black_square_on_white_is_foreground() {
                let mut rgb = RgbImage::from_pixel(6, 6, Rgb([255, 255, 255]));
                for y in 2..4 {
                    for x in 1..5 {
                        rgb.put_pixel(x, y, Rgb([0, 0, 0]));
                    }
                }
                let mask = binarize(&DynamicImage::ImageRgb8(rgb), &BinarizeOptions::default());

                assert_eq!(mask.foreground_count(), 8);
                assert!(mask.is_foreground(1, 2));
                assert!(mask.is_foreground(4, 3));
                assert!(!mask.is_foreground(0, 2));
                assert!(!mask.is_foreground(1, 4));
            }

            #[test]
            fn grayscale_input_is_accepted() {
                let image = DynamicImage::ImageLuma8(gray_image(3, 2, 10));
                let mask = binarize(&image, &BinarizeOptions::default());
                assert_eq!(mask.foreground_count(), 6);
            }
        }
    }

    mod bilevel_mask {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn from_gray_normalizes_nonzero() {
                let mut gray = GrayImage::new(3, 1);
                gray.put_pixel(1, 0, Luma([1]));
                gray.put_pixel(2, 0, Luma([200]));

                let mask = BilevelMask::from_gray(&gray);
                assert_eq!(mask.image().as_raw(), &vec![0, 255, 255]);
            }

            #[test]
            fn out_of_range_is_background() {
                let mask = BilevelMask::from_gray(&gray_image(2, 2, 255));
                assert!(mask.is_foreground(1, 1));
                assert!(!mask.is_foreground(2, 0));
                assert!(!mask.is_foreground(0, 2));
            }
        }
    }
}
