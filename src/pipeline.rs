//! The icon generation run.
//!
//! A run moves through fixed stages:
//!
//! ```text
//! Start -> Validating -> SelectingOptions -> PreparingOutputDir
//!       -> (Transforming(size) -> Writing(size))* -> Done
//! ```
//!
//! Any error before the per-size loop aborts the run with nothing written.
//! Inside the loop a failed size is reported and the remaining sizes are still
//! generated.

use std::fmt;
use std::time::Instant;

use crate::config::Config;
use crate::error::IconError;
use crate::output::GeneratedIcon;
use crate::path::normalize_path_input;
use crate::report::Reporter;
use crate::resolution::IconSize;
use crate::select::SelectionCollector;
use crate::transform::transform;
use crate::validate::validate;

const WELCOME: &str = "Welcome to the macOS app icon generator! This tool will help you \
                       generate all the required icons for your macOS app.";
const CLOSING: &str = "If you found this tool useful, please star it on GitHub.";

/// Where a run currently is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Not started.
    Start,
    /// Checking the source icon.
    Validating,
    /// Collecting sizes, output directory and rounding.
    SelectingOptions,
    /// Decoding the source, then creating the output directory.
    PreparingOutputDir,
    /// Rendering one size.
    Transforming(IconSize),
    /// Writing one size.
    Writing(IconSize),
    /// Finished the per-size loop.
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Stage::Start => write!(out, "start"),
            Stage::Validating => write!(out, "validating"),
            Stage::SelectingOptions => write!(out, "selecting options"),
            Stage::PreparingOutputDir => write!(out, "preparing output directory"),
            Stage::Transforming(size) => write!(out, "transforming {}", size),
            Stage::Writing(size) => write!(out, "writing {}", size),
            Stage::Done => write!(out, "done"),
        }
    }
}

/// One size that could not be generated.
#[derive(Debug)]
pub struct SizeFailure {
    /// The size.
    pub size: IconSize,
    /// Why it failed.
    pub error: IconError,
}

/// Result of a run that got past the output directory.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Icons written, in generation order.
    pub generated: Vec<GeneratedIcon>,
    /// Sizes that failed, in generation order.
    pub failures: Vec<SizeFailure>,
}

impl RunSummary {
    /// Returns true if every selected size was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a run from the source path to the written icons.
pub struct Pipeline<C: SelectionCollector, R: Reporter> {
    config: Config,
    collector: C,
    reporter: R,
    stage: Stage,
}

impl<C: SelectionCollector, R: Reporter> Pipeline<C, R> {
    /// Creates a pipeline.  Nothing happens until `run`.
    pub fn new(config: Config, collector: C, reporter: R) -> Self {
        Pipeline {
            config,
            collector,
            reporter,
            stage: Stage::Start,
        }
    }

    /// Returns the stage the last run reached.  After an abort this is the
    /// stage that failed.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Runs the pipeline for the raw (unnormalized) source argument.  The
    /// closing notice is reported exactly once, whatever the outcome.
    pub fn run(&mut self, source_arg: Option<&str>) -> Result<RunSummary, IconError> {
        self.stage = Stage::Start;
        self.reporter.info(WELCOME);
        let result = self.run_stages(source_arg);
        match result {
            Ok(ref summary) if summary.is_complete() => self.reporter.info("All done!"),
            Ok(ref summary) => self.reporter.error(&format!(
                "{} of {} icon(s) failed",
                summary.failures.len(),
                summary.failures.len() + summary.generated.len()
            )),
            Err(ref error) => {
                log::debug!("aborted while {}", self.stage);
                self.reporter.error(&error.to_string());
            }
        }
        self.reporter.info(CLOSING);
        result
    }

    fn enter(&mut self, stage: Stage) {
        log::debug!("stage: {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    fn run_stages(&mut self, source_arg: Option<&str>) -> Result<RunSummary, IconError> {
        self.enter(Stage::Validating);
        let source_arg = source_arg.ok_or(IconError::MissingSourceArgument)?;
        let source = validate(&normalize_path_input(source_arg))?;

        self.enter(Stage::SelectingOptions);
        let selection = self.collector.collect()?;

        self.enter(Stage::PreparingOutputDir);
        let pixels = source.load()?;
        selection.output.ensure_directory()?;

        let mut summary = RunSummary::default();
        for &size in &selection.resolutions {
            let started = Instant::now();
            self.enter(Stage::Transforming(size));
            let written = transform(&pixels, size, &selection.rounding, self.config.filter)
                .and_then(|icon| {
                    self.enter(Stage::Writing(size));
                    selection.output.write(&icon, size)
                });
            match written {
                Ok(icon) => {
                    log::debug!("{} took {:?}", size, started.elapsed());
                    self.reporter.success(&format!("Generated {}", icon.path.display()));
                    summary.generated.push(icon);
                }
                Err(error) => {
                    log::warn!("{} failed: {}", size, error);
                    self.reporter.error(&error.to_string());
                    summary.failures.push(SizeFailure { size, error });
                }
            }
        }
        self.enter(Stage::Done);
        Ok(summary)
    }
}
