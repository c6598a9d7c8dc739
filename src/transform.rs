use image::{imageops, RgbaImage};

use crate::config::ResizeFilter;
use crate::error::IconError;
use crate::image::Image;
use crate::mask::{apply_mask, rounded_rect_mask, RoundingPolicy};
use crate::resolution::IconSize;

/// Produces an icon of exactly `size` pixels square from `source`, clipping
/// the corners when `rounding` is enabled.
pub fn transform(source: &Image,
                 size: IconSize,
                 rounding: &RoundingPolicy,
                 filter: ResizeFilter)
                 -> Result<Image, IconError> {
    let pixels = size.pixels();
    let failure = |cause: String| IconError::TransformFailure { size: pixels, cause };

    let mut icon = resize(source, pixels, filter).map_err(failure)?;
    if rounding.is_enabled() {
        let radius = rounding.corner_radius(pixels);
        let mask = rounded_rect_mask(pixels, radius).map_err(failure)?;
        apply_mask(&mut icon, &mask).map_err(failure)?;
    }
    Ok(icon)
}

/// Resizes to exactly `pixels`x`pixels`, ignoring aspect ratio.  The result
/// is always RGBA.
fn resize(source: &Image, pixels: u32, filter: ResizeFilter) -> Result<Image, String> {
    let rgba = source.to_rgba();
    let buffer = RgbaImage::from_raw(rgba.width(), rgba.height(), rgba.into_rgba_data())
        .ok_or_else(|| "source pixel buffer has the wrong length".to_string())?;
    let resized = if buffer.dimensions() == (pixels, pixels) {
        buffer
    } else {
        imageops::resize(&buffer, pixels, pixels, filter.filter_type())
    };
    Image::from_rgba(pixels, pixels, resized.into_raw())
        .ok_or_else(|| format!("resize produced a malformed {0}x{0} buffer", pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelFormat;

    fn solid_source(edge: u32) -> Image {
        let mut image = Image::new(PixelFormat::RGB, edge, edge);
        for pixel in image.data_mut().chunks_exact_mut(3) {
            pixel.copy_from_slice(&[200, 100, 50]);
        }
        image
    }

    #[test]
    fn plain_resize_is_exact_and_opaque() {
        let source = solid_source(128);
        let icon = transform(&source, IconSize::Px32, &RoundingPolicy::disabled(),
                             ResizeFilter::Lanczos3).unwrap();
        assert_eq!((icon.width(), icon.height()), (32, 32));
        assert_eq!(icon.pixel_format(), PixelFormat::RGBA);
        assert_eq!(icon.pixel(0, 0), Some(&[200u8, 100, 50, 255][..]));
        assert_eq!(icon.pixel(31, 31), Some(&[200u8, 100, 50, 255][..]));
    }

    #[test]
    fn rounded_clears_corners_and_keeps_inside() {
        let source = solid_source(512);
        let rounding = RoundingPolicy::rounded(0.1).unwrap();
        let plain = transform(&source, IconSize::Px256, &RoundingPolicy::disabled(),
                              ResizeFilter::Triangle).unwrap();
        let rounded = transform(&source, IconSize::Px256, &rounding,
                                ResizeFilter::Triangle).unwrap();
        let radius = rounding.corner_radius(256);
        for y in 0..256u32 {
            for x in 0..256u32 {
                // Fold every pixel into the top-left corner, whose arc is
                // centered at (radius, radius).
                let mx = x.min(255 - x) as f32;
                let my = y.min(255 - y) as f32;
                if mx >= radius || my >= radius {
                    if mx >= 1.0 && my >= 1.0 {
                        assert_eq!(rounded.pixel(x, y), plain.pixel(x, y), "({}, {})", x, y);
                    }
                    continue;
                }
                let near = (radius - (mx + 1.0)).hypot(radius - (my + 1.0));
                let far = (radius - mx).hypot(radius - my);
                if near > radius + 0.5 {
                    assert_eq!(rounded.pixel(x, y).unwrap()[3], 0, "({}, {})", x, y);
                } else if far < radius - 0.5 {
                    assert_eq!(rounded.pixel(x, y), plain.pixel(x, y), "({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn same_size_skips_resampling() {
        let source = solid_source(64);
        let icon = transform(&source, IconSize::Px64, &RoundingPolicy::disabled(),
                             ResizeFilter::Nearest).unwrap();
        assert_eq!(icon, source.to_rgba());
    }
}
