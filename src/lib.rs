//! Library for generating macOS app icons from a single 1024x1024 PNG.
//!
//! The source is validated, resized to each selected size from the catalog
//! (16 through 1024 pixels), optionally clipped with rounded corners, and
//! written as `icon_{size}.png` into an output directory.
//!
//! ```no_run
//! use macos_icon_gen::{Config, ConsoleReporter, FixedSelection, OutputTarget,
//!                      Pipeline, ResolutionSet, RoundingPolicy, Selection};
//!
//! let selection = Selection {
//!     resolutions: ResolutionSet::parse_list("16,32,128").unwrap(),
//!     output: OutputTarget::new("./macos-icons"),
//!     rounding: RoundingPolicy::rounded(0.1).unwrap(),
//! };
//! let mut pipeline = Pipeline::new(Config::default(),
//!                                  FixedSelection(selection),
//!                                  ConsoleReporter::stdio());
//! let summary = pipeline.run(Some("./icon.png")).unwrap();
//! assert!(summary.is_complete());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod image;
mod mask;
mod output;
pub mod path;
mod pipeline;
mod pngio;
mod report;
mod resolution;
mod select;
mod transform;
mod validate;

pub use self::config::{Config, ResizeFilter};
pub use self::error::IconError;
pub use self::image::{Image, PixelFormat};
pub use self::mask::{apply_mask, rounded_rect_mask, RoundingPolicy};
pub use self::output::{GeneratedIcon, OutputTarget, DEFAULT_OUTPUT_DIR};
pub use self::pipeline::{Pipeline, RunSummary, SizeFailure, Stage};
pub use self::pngio::read_png_dimensions;
pub use self::report::{ConsoleReporter, Reporter, ERROR_PREFIX, INFO_PREFIX, SUCCESS_PREFIX};
pub use self::resolution::{IconSize, ResolutionSet};
pub use self::select::{FixedSelection, Presets, PromptCollector, Selection, SelectionCollector};
pub use self::transform::transform;
pub use self::validate::{validate, SourceImage, SOURCE_SIZE};
