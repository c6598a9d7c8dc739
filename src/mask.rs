//! Rounded-corner clipping.
//!
//! The mask is rasterized from a vector path at the exact target size, so
//! corner edges stay crisp at every resolution.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::IconError;
use crate::image::{Image, PixelFormat};

/// Control point offset that makes a cubic Bezier approximate a quarter
/// circle.
const KAPPA: f32 = 0.552_284_8;

/// Whether and how much to round icon corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundingPolicy {
    enabled: bool,
    radius_fraction: f32,
}

impl RoundingPolicy {
    /// Corner radius used when none is given, as a fraction of the icon size.
    pub const DEFAULT_RADIUS_FRACTION: f32 = 0.1;

    /// Square corners.
    pub fn disabled() -> RoundingPolicy {
        RoundingPolicy {
            enabled: false,
            radius_fraction: RoundingPolicy::DEFAULT_RADIUS_FRACTION,
        }
    }

    /// Rounded corners with a radius of `radius_fraction` times the icon
    /// size.  The fraction must lie within `[0, 0.5]`.
    pub fn rounded(radius_fraction: f32) -> Result<RoundingPolicy, IconError> {
        if !radius_fraction.is_finite() || !(0.0..=0.5).contains(&radius_fraction) {
            return Err(IconError::InvalidRadius(radius_fraction));
        }
        Ok(RoundingPolicy {
            enabled: true,
            radius_fraction,
        })
    }

    /// Returns true if corners are rounded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the radius as a fraction of the icon size.
    pub fn radius_fraction(&self) -> f32 {
        self.radius_fraction
    }

    /// Returns the corner radius in pixels for an icon of `size` pixels.
    ///
    /// # Examples
    /// ```
    /// use macos_icon_gen::RoundingPolicy;
    /// let policy = RoundingPolicy::rounded(0.1).unwrap();
    /// assert!((policy.corner_radius(256) - 25.6).abs() < 1e-4);
    /// ```
    pub fn corner_radius(&self, size: u32) -> f32 {
        let size = size as f32;
        (size * self.radius_fraction).min(size / 2.0)
    }
}

impl Default for RoundingPolicy {
    fn default() -> RoundingPolicy {
        RoundingPolicy::disabled()
    }
}

/// Rasterizes a `size`x`size` alpha mask that is opaque inside a rectangle
/// with corners rounded by `radius` pixels and transparent outside.
pub fn rounded_rect_mask(size: u32, radius: f32) -> Result<Vec<u8>, String> {
    let area = size as usize * size as usize;
    if radius <= 0.0 {
        return Ok(vec![u8::MAX; area]);
    }
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| format!("cannot allocate a {0}x{0} mask", size))?;
    let path = rounded_rect_path(size as f32, radius)
        .ok_or_else(|| format!("degenerate rounded rectangle (radius {})", radius))?;
    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    Ok(pixmap.data().chunks_exact(4).map(|px| px[3]).collect())
}

fn rounded_rect_path(size: f32, radius: f32) -> Option<tiny_skia::Path> {
    let r = radius.min(size / 2.0);
    let k = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(r, 0.0);
    pb.line_to(size - r, 0.0);
    pb.cubic_to(size - r + k, 0.0, size, r - k, size, r);
    pb.line_to(size, size - r);
    pb.cubic_to(size, size - r + k, size - r + k, size, size - r, size);
    pb.line_to(r, size);
    pb.cubic_to(r - k, size, 0.0, size - r + k, 0.0, size - r);
    pb.line_to(0.0, r);
    pb.cubic_to(0.0, r - k, r - k, 0.0, r, 0.0);
    pb.close();
    pb.finish()
}

/// Destination-in blend: keeps the color of `image` and scales its alpha by
/// the mask.  `image` must be RGBA and the mask must hold one byte per pixel.
pub fn apply_mask(image: &mut Image, mask: &[u8]) -> Result<(), String> {
    if image.pixel_format() != PixelFormat::RGBA {
        return Err(format!("cannot mask a {:?} image", image.pixel_format()));
    }
    let pixels = image.width() as usize * image.height() as usize;
    if mask.len() != pixels {
        return Err(format!("mask has {} pixels, image has {}", mask.len(), pixels));
    }
    for (pixel, &coverage) in image.data_mut().chunks_exact_mut(4).zip(mask) {
        let alpha = u32::from(pixel[3]) * u32::from(coverage);
        pixel[3] = ((alpha + 127) / 255) as u8;
    }
    Ok(())
}
