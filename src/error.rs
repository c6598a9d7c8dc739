use std::io;
use std::path::PathBuf;

/// Every way an icon generation run can fail.
///
/// Variants up to `Prompt` abort the run before any file is written.
/// `TransformFailure` and `WriteFailure` are scoped to a single icon size.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// No source path was given on the command line.
    #[error("you must pass a source icon path, e.g. `macos-icon-gen ./icon.png`")]
    MissingSourceArgument,

    /// No regular file exists at the source path.
    #[error("the source icon {} does not exist", .0.display())]
    PathMissing(PathBuf),

    /// The source file exists but is not a readable PNG.
    #[error("cannot read {} as PNG: {source}", .path.display())]
    Unreadable {
        /// The source path.
        path: PathBuf,
        /// The decoder error.
        #[source]
        source: io::Error,
    },

    /// The source is not exactly the required square size.
    #[error("the source icon is {width}x{height}, it must be {required}x{required}")]
    DimensionMismatch {
        /// Decoded width.
        width: u32,
        /// Decoded height.
        height: u32,
        /// Required edge length.
        required: u32,
    },

    /// The user confirmed a selection with no resolutions in it.
    #[error("you must select at least one resolution")]
    EmptySelection,

    /// A requested size is not in the resolution catalog.
    #[error("unsupported icon size `{0}` (choose from 16, 32, 64, 128, 256, 512, 1024)")]
    UnsupportedSize(String),

    /// The rounded-corner radius fraction is outside `[0, 0.5]`.
    #[error("corner radius fraction {0} must be between 0 and 0.5")]
    InvalidRadius(f32),

    /// Reading an interactive answer failed.
    #[error("failed to read answer: {0}")]
    Prompt(#[source] io::Error),

    /// The output directory could not be created.
    #[error("cannot create output directory {}: {source}", .path.display())]
    DirectoryCreateFailure {
        /// The output directory.
        path: PathBuf,
        /// The filesystem error.
        #[source]
        source: io::Error,
    },

    /// Resizing or masking failed for one size.
    #[error("failed to render {size}x{size} icon: {cause}")]
    TransformFailure {
        /// Edge length of the failed icon.
        size: u32,
        /// What went wrong.
        cause: String,
    },

    /// Encoding or writing one icon file failed.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        /// The icon file path.
        path: PathBuf,
        /// The filesystem or encoder error.
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_single_line() {
        let errors = [
            IconError::MissingSourceArgument,
            IconError::PathMissing(PathBuf::from("./icon.png")),
            IconError::DimensionMismatch { width: 512, height: 512, required: 1024 },
            IconError::EmptySelection,
            IconError::TransformFailure { size: 32, cause: "boom".to_string() },
            IconError::WriteFailure {
                path: PathBuf::from("out/icon_32.png"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        ];
        for error in &errors {
            assert!(!error.to_string().contains('\n'), "{}", error);
        }
    }

    #[test]
    fn dimension_mismatch_names_both_sizes() {
        let error = IconError::DimensionMismatch { width: 1024, height: 1023, required: 1024 };
        assert_eq!(error.to_string(),
                   "the source icon is 1024x1023, it must be 1024x1024");
    }
}
