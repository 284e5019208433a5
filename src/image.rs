//! Raster image to bit-plane encoding
//!
//! This module converts arbitrary greyscale raster images into the panel's
//! packed wire format. Encoding is pure: no hardware access, no side
//! effects, and byte-identical output for identical input.
//!
//! Sources that do not match the panel resolution are either scaled with
//! nearest-neighbor sampling ([`Fit::Resize`]) or cut down to their
//! top-left 800x480 region ([`Fit::Crop`]).
//!
//! ## Example
//!
//! ```
//! use epd7in5v2::{encode, Fit, RasterImage};
//!
//! struct Uniform(u8);
//!
//! impl RasterImage for Uniform {
//!     fn width(&self) -> u32 {
//!         800
//!     }
//!     fn height(&self) -> u32 {
//!         480
//!     }
//!     fn luminance(&self, _x: u32, _y: u32) -> u8 {
//!         self.0
//!     }
//! }
//!
//! let bitmap = encode(&Uniform(200), Fit::Resize).unwrap();
//! assert!(bitmap.as_bytes().iter().all(|&b| b == 0xFF));
//! ```

use crate::bitmap::PackedBitmap;
use crate::color::Color;
use crate::error::EncodeError;
use crate::{HEIGHT, ROW_BYTES, WIDTH};

/// Read-only greyscale raster source
///
/// Implement this for whatever pixel container the caller already has
/// (a decoded image, a generated pattern, a camera frame). The encoder
/// samples pixels through [`luminance`](RasterImage::luminance) only and
/// never mutates the source.
///
/// Sources carrying color channels should collapse them in the accessor;
/// [`rgb_luminance`] provides the standard weighting. Single-channel
/// sources return their samples unchanged.
pub trait RasterImage {
    /// Image width in pixels (must be non-zero)
    fn width(&self) -> u32;

    /// Image height in pixels (must be non-zero)
    fn height(&self) -> u32;

    /// 8-bit luminance sample at `(x, y)`
    ///
    /// Called only with `x < width()` and `y < height()`.
    fn luminance(&self, x: u32, y: u32) -> u8;
}

/// How to map a source image onto the fixed panel resolution
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Fit {
    /// Scale the whole source to 800x480 with nearest-neighbor sampling
    Resize,
    /// Take the top-left 800x480 region; fails if the source is smaller
    Crop,
}

/// Combine RGB channels into a luminance sample
///
/// Uses the ITU-R BT.601 integer weights (299/587/114). Greyscale inputs
/// pass through unchanged: `rgb_luminance(v, v, v) == v`.
///
/// ## Example
///
/// ```
/// use epd7in5v2::rgb_luminance;
///
/// assert_eq!(rgb_luminance(255, 255, 255), 255);
/// assert_eq!(rgb_luminance(0, 0, 0), 0);
/// assert_eq!(rgb_luminance(0, 255, 0), 149);
/// ```
pub fn rgb_luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    (weighted / 1000) as u8
}

/// Encode a raster image into one full-panel bit plane
///
/// Pixels with luminance strictly greater than 128 become white (bit 1),
/// everything else black (bit 0); bit 7 of each output byte is the
/// leftmost pixel of its 8-pixel group.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidImageDimensions`] if either source
/// dimension is zero, or under [`Fit::Crop`] if the source is smaller
/// than the panel in either axis.
pub fn encode<R: RasterImage>(image: &R, fit: Fit) -> Result<PackedBitmap, EncodeError> {
    let src_w = image.width();
    let src_h = image.height();

    if src_w == 0 || src_h == 0 {
        return Err(EncodeError::InvalidImageDimensions {
            width: src_w,
            height: src_h,
        });
    }
    if fit == Fit::Crop && (src_w < WIDTH || src_h < HEIGHT) {
        return Err(EncodeError::InvalidImageDimensions {
            width: src_w,
            height: src_h,
        });
    }

    let mut bitmap = PackedBitmap::filled(0x00);
    let bytes = bitmap.as_mut_bytes();

    for y in 0..HEIGHT {
        let src_y = match fit {
            Fit::Resize => scale_coord(y, src_h, HEIGHT),
            Fit::Crop => y,
        };
        for byte_x in 0..ROW_BYTES {
            let mut packed = 0u8;
            for bit in 0..8u32 {
                let x = byte_x as u32 * 8 + bit;
                let src_x = match fit {
                    Fit::Resize => scale_coord(x, src_w, WIDTH),
                    Fit::Crop => x,
                };
                if Color::from_luminance(image.luminance(src_x, src_y)) == Color::White {
                    packed |= 0x80 >> bit;
                }
            }
            bytes[y as usize * ROW_BYTES + byte_x] = packed;
        }
    }

    Ok(bitmap)
}

/// Nearest-neighbor source coordinate for a target coordinate (floor mapping)
fn scale_coord(target: u32, src_extent: u32, dst_extent: u32) -> u32 {
    (u64::from(target) * u64::from(src_extent) / u64::from(dst_extent)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BUFFER_SIZE;

    struct Uniform {
        width: u32,
        height: u32,
        value: u8,
    }

    impl RasterImage for Uniform {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn luminance(&self, _x: u32, _y: u32) -> u8 {
            self.value
        }
    }

    struct Pattern<F: Fn(u32, u32) -> u8> {
        width: u32,
        height: u32,
        sample: F,
    }

    impl<F: Fn(u32, u32) -> u8> RasterImage for Pattern<F> {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn luminance(&self, x: u32, y: u32) -> u8 {
            (self.sample)(x, y)
        }
    }

    fn panel_uniform(value: u8) -> Uniform {
        Uniform {
            width: 800,
            height: 480,
            value,
        }
    }

    #[test]
    fn test_uniform_200_encodes_all_white() {
        let bitmap = encode(&panel_uniform(200), Fit::Resize).unwrap();
        assert_eq!(bitmap.as_bytes().len(), 48_000);
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_threshold_is_strictly_greater_than_128() {
        let at_boundary = encode(&panel_uniform(128), Fit::Crop).unwrap();
        assert!(at_boundary.as_bytes().iter().all(|&b| b == 0x00));

        let above_boundary = encode(&panel_uniform(129), Fit::Crop).unwrap();
        assert!(above_boundary.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_top_left_pixel_maps_to_bit7_of_byte0() {
        let image = Pattern {
            width: 800,
            height: 480,
            sample: |x, y| if x == 0 && y == 0 { 0 } else { 255 },
        };
        let bitmap = encode(&image, Fit::Crop).unwrap();
        assert_eq!(bitmap.as_bytes()[0], 0x7F);
        assert!(bitmap.as_bytes()[1..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_output_length_fixed_regardless_of_source_size() {
        for (w, h) in [(1, 1), (123, 77), (800, 480), (1600, 960), (4000, 3000)] {
            let bitmap = encode(
                &Uniform {
                    width: w,
                    height: h,
                    value: 0,
                },
                Fit::Resize,
            )
            .unwrap();
            assert_eq!(bitmap.as_bytes().len(), BUFFER_SIZE);
        }
    }

    #[test]
    fn test_crop_rejects_smaller_sources() {
        for (w, h) in [(799, 480), (800, 479), (1, 1)] {
            let result = encode(
                &Uniform {
                    width: w,
                    height: h,
                    value: 255,
                },
                Fit::Crop,
            );
            match result {
                Err(EncodeError::InvalidImageDimensions { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                Ok(_) => panic!("crop of {w}x{h} source must fail"),
            }
        }
    }

    #[test]
    fn test_zero_sized_source_rejected_in_both_modes() {
        let empty = Uniform {
            width: 0,
            height: 100,
            value: 255,
        };
        assert!(matches!(
            encode(&empty, Fit::Resize),
            Err(EncodeError::InvalidImageDimensions { .. })
        ));
        assert!(matches!(
            encode(&empty, Fit::Crop),
            Err(EncodeError::InvalidImageDimensions { .. })
        ));
    }

    #[test]
    fn test_crop_takes_top_left_region() {
        // White inside the panel window, black outside it.
        let image = Pattern {
            width: 1600,
            height: 960,
            sample: |x, y| if x < 800 && y < 480 { 255 } else { 0 },
        };
        let bitmap = encode(&image, Fit::Crop).unwrap();
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_resize_uses_floor_mapping() {
        // At an exact 2:1 downscale the floor mapping lands on even
        // source columns only.
        let even_white = Pattern {
            width: 1600,
            height: 960,
            sample: |x, _| if x % 2 == 0 { 255 } else { 0 },
        };
        let bitmap = encode(&even_white, Fit::Resize).unwrap();
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0xFF));

        let odd_white = Pattern {
            width: 1600,
            height: 960,
            sample: |x, _| if x % 2 == 1 { 255 } else { 0 },
        };
        let bitmap = encode(&odd_white, Fit::Resize).unwrap();
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_resize_upscales_smaller_sources() {
        // Left half black, right half white, at half resolution.
        let image = Pattern {
            width: 400,
            height: 240,
            sample: |x, _| if x < 200 { 0 } else { 255 },
        };
        let bitmap = encode(&image, Fit::Resize).unwrap();
        let row = &bitmap.as_bytes()[..ROW_BYTES];
        assert!(row[..50].iter().all(|&b| b == 0x00));
        assert!(row[50..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_exact_size_passes_through_in_both_modes() {
        let image = Pattern {
            width: 800,
            height: 480,
            sample: |x, y| if (x / 8 + y / 8) % 2 == 0 { 255 } else { 0 },
        };
        let resized = encode(&image, Fit::Resize).unwrap();
        let cropped = encode(&image, Fit::Crop).unwrap();
        assert_eq!(resized.as_bytes(), cropped.as_bytes());
        // 8x8 checkerboard packs to alternating whole bytes.
        assert_eq!(resized.as_bytes()[0], 0xFF);
        assert_eq!(resized.as_bytes()[1], 0x00);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let image = Pattern {
            width: 1024,
            height: 768,
            sample: |x, y| ((x * 7 + y * 13) % 256) as u8,
        };
        let first = encode(&image, Fit::Resize).unwrap();
        let second = encode(&image, Fit::Resize).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_rgb_luminance_weights() {
        assert_eq!(rgb_luminance(255, 255, 255), 255);
        assert_eq!(rgb_luminance(0, 0, 0), 0);
        assert_eq!(rgb_luminance(255, 0, 0), 76);
        assert_eq!(rgb_luminance(0, 255, 0), 149);
        assert_eq!(rgb_luminance(0, 0, 255), 29);
        assert_eq!(rgb_luminance(90, 90, 90), 90);
    }
}
