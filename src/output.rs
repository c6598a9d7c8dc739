use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::image::Image;
use crate::resolution::IconSize;

/// Default output directory offered to the user.
pub const DEFAULT_OUTPUT_DIR: &str = "./macos-icons";

/// An icon file written by the pipeline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedIcon {
    /// The size of the icon.
    pub size: IconSize,
    /// Where the icon was written.
    pub path: PathBuf,
}

/// The directory icons are written into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputTarget {
    directory: PathBuf,
}

impl OutputTarget {
    /// Creates a target for `directory`.  Nothing is touched on disk yet.
    pub fn new<P: Into<PathBuf>>(directory: P) -> OutputTarget {
        OutputTarget { directory: directory.into() }
    }

    /// Returns the output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the path the icon of the given size is written to.
    pub fn icon_path(&self, size: IconSize) -> PathBuf {
        self.directory.join(size.file_name())
    }

    /// Creates the output directory and any missing parents.  Does nothing
    /// if it already exists.
    pub fn ensure_directory(&self) -> Result<(), IconError> {
        let failure = |source| IconError::DirectoryCreateFailure {
            path: self.directory.clone(),
            source,
        };
        fs::create_dir_all(&self.directory).map_err(failure)?;
        if !self.directory.is_dir() {
            return Err(failure(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists and is not a directory",
            )));
        }
        Ok(())
    }

    /// Encodes `image` as PNG and writes it to the file for `size`,
    /// replacing any existing file.
    pub fn write(&self, image: &Image, size: IconSize) -> Result<GeneratedIcon, IconError> {
        let path = self.icon_path(size);
        let failure = |source| IconError::WriteFailure {
            path: path.clone(),
            source,
        };
        let mut writer = BufWriter::new(File::create(&path).map_err(failure)?);
        image.write_png(&mut writer).map_err(failure)?;
        writer.flush().map_err(failure)?;
        log::info!("wrote {} ({})", path.display(), size);
        Ok(GeneratedIcon { size, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelFormat;
    use std::io::BufReader;

    #[test]
    fn icon_paths_are_deterministic() {
        let target = OutputTarget::new("out/icons");
        assert_eq!(target.icon_path(IconSize::Px128),
                   PathBuf::from("out/icons/icon_128.png"));
    }

    #[test]
    fn nested_directory_is_created() {
        let root = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(root.path().join("a/b/c"));
        target.ensure_directory().unwrap();
        assert!(target.directory().is_dir());
        target.ensure_directory().unwrap();
    }

    #[test]
    fn file_in_the_way_fails() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("taken");
        fs::write(&blocker, b"x").unwrap();
        let target = OutputTarget::new(&blocker);
        assert!(matches!(target.ensure_directory(),
                         Err(IconError::DirectoryCreateFailure { .. })));
    }

    #[test]
    fn write_produces_readable_png() {
        let root = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(root.path());
        let image = Image::new(PixelFormat::RGBA, 16, 16);
        let icon = target.write(&image, IconSize::Px16).unwrap();
        assert_eq!(icon.path, root.path().join("icon_16.png"));
        let file = BufReader::new(File::open(&icon.path).unwrap());
        let decoded = Image::read_png(file).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(root.path().join("missing"));
        let image = Image::new(PixelFormat::RGBA, 16, 16);
        assert!(matches!(target.write(&image, IconSize::Px16),
                         Err(IconError::WriteFailure { .. })));
    }
}
