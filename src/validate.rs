use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::image::Image;
use crate::pngio::read_png_dimensions;

/// Required edge length of the source icon, in pixels.
pub const SOURCE_SIZE: u32 = 1024;

/// A source icon that passed validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceImage {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Returns the validated source path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the width of the source, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the source, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Decodes the full pixel data of the source.
    pub fn load(&self) -> Result<Image, IconError> {
        let unreadable = |source| IconError::Unreadable {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(unreadable)?;
        let image = Image::read_png(BufReader::new(file)).map_err(unreadable)?;
        if image.width() != self.width || image.height() != self.height {
            return Err(IconError::DimensionMismatch {
                width: image.width(),
                height: image.height(),
                required: SOURCE_SIZE,
            });
        }
        Ok(image)
    }
}

/// Checks that `path` names an existing PNG of exactly
/// `SOURCE_SIZE`x`SOURCE_SIZE` pixels.  Only the PNG header is read.
pub fn validate(path: &Path) -> Result<SourceImage, IconError> {
    if !path.is_file() {
        return Err(IconError::PathMissing(path.to_path_buf()));
    }
    let unreadable = |source| IconError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    let (width, height) = read_png_dimensions(BufReader::new(file)).map_err(unreadable)?;
    if width != SOURCE_SIZE || height != SOURCE_SIZE {
        return Err(IconError::DimensionMismatch {
            width,
            height,
            required: SOURCE_SIZE,
        });
    }
    log::debug!("validated {} ({}x{})", path.display(), width, height);
    Ok(SourceImage {
        path: path.to_path_buf(),
        width,
        height,
    })
}
