use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::IconError;
use crate::mask::RoundingPolicy;
use crate::output::{OutputTarget, DEFAULT_OUTPUT_DIR};
use crate::path::normalize_path_input;
use crate::resolution::{IconSize, ResolutionSet};

/// Everything the user chooses before icons are generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Sizes to generate, in order.
    pub resolutions: ResolutionSet,
    /// Where to write them.
    pub output: OutputTarget,
    /// Corner rounding.
    pub rounding: RoundingPolicy,
}

/// Source of a `Selection`.
pub trait SelectionCollector {
    /// Gathers the selection, prompting if the implementation does so.
    fn collect(&mut self) -> Result<Selection, IconError>;
}

/// A collector that returns a selection fixed up front.
pub struct FixedSelection(pub Selection);

impl SelectionCollector for FixedSelection {
    fn collect(&mut self) -> Result<Selection, IconError> {
        Ok(self.0.clone())
    }
}

/// Answers supplied on the command line, as given.  Each answer present here
/// skips its prompt.  Nothing is checked until the collector runs, so bad
/// flags abort the run while options are being selected.
#[derive(Clone, Debug)]
pub struct Presets {
    /// Raw `--sizes` list.
    pub sizes: Option<String>,
    /// `--all`; overrides `sizes`.
    pub all: bool,
    /// Raw output directory from `--output`, not yet normalized.
    pub output: Option<String>,
    /// `--rounded`; rounding is never prompted.
    pub rounded: bool,
    /// `--radius`, as a fraction of the icon size.
    pub radius: f32,
    /// Whether missing answers may be prompted for.
    pub interactive: bool,
}

impl Default for Presets {
    fn default() -> Presets {
        Presets {
            sizes: None,
            all: false,
            output: None,
            rounded: false,
            radius: RoundingPolicy::DEFAULT_RADIUS_FRACTION,
            interactive: false,
        }
    }
}

impl Presets {
    /// Returns the preselected sizes, if any.
    pub fn resolutions(&self) -> Result<Option<ResolutionSet>, IconError> {
        if self.all {
            return Ok(Some(ResolutionSet::all()));
        }
        self.sizes.as_deref().map(ResolutionSet::parse_list).transpose()
    }

    /// Returns the corner rounding the flags ask for.
    pub fn rounding(&self) -> Result<RoundingPolicy, IconError> {
        if self.rounded {
            RoundingPolicy::rounded(self.radius)
        } else {
            Ok(RoundingPolicy::disabled())
        }
    }
}

/// Prompts on `output` and reads answers from `input` for anything the
/// presets leave open.
pub struct PromptCollector<R: BufRead, W: Write> {
    presets: Presets,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    /// Creates a collector.
    pub fn new(presets: Presets, input: R, output: W) -> Self {
        PromptCollector { presets, input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, IconError> {
        write!(self.output, "{}", question).map_err(IconError::Prompt)?;
        self.output.flush().map_err(IconError::Prompt)?;
        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).map_err(IconError::Prompt)?;
        if read == 0 {
            writeln!(self.output).map_err(IconError::Prompt)?;
            return Ok(None);
        }
        Ok(Some(answer))
    }

    fn ask_resolutions(&mut self) -> Result<ResolutionSet, IconError> {
        writeln!(self.output, "? Select the resolutions to generate")
            .map_err(IconError::Prompt)?;
        for (index, size) in IconSize::ALL.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", index + 1, size).map_err(IconError::Prompt)?;
        }
        loop {
            let answer = self.ask("  sizes or numbers, comma separated ('all' for every size): ")?;
            let answer = match answer {
                Some(answer) => answer,
                None => return Err(IconError::EmptySelection),
            };
            match parse_choices(&answer) {
                Ok(sizes) => return ResolutionSet::new(sizes),
                Err(token) => {
                    writeln!(self.output, "  unknown choice `{}`, try again", token)
                        .map_err(IconError::Prompt)?;
                }
            }
        }
    }

    fn ask_output_dir(&mut self) -> Result<String, IconError> {
        let question = format!("? Enter the output directory ({}): ", DEFAULT_OUTPUT_DIR);
        Ok(self.ask(&question)?.unwrap_or_default())
    }
}

impl<R: BufRead, W: Write> SelectionCollector for PromptCollector<R, W> {
    fn collect(&mut self) -> Result<Selection, IconError> {
        let interactive = self.presets.interactive;
        let rounding = self.presets.rounding()?;
        let resolutions = match self.presets.resolutions()? {
            Some(resolutions) => resolutions,
            None if interactive => self.ask_resolutions()?,
            None => return Err(IconError::EmptySelection),
        };
        let raw_dir = match self.presets.output.clone() {
            Some(raw) => raw,
            None if interactive => self.ask_output_dir()?,
            None => String::new(),
        };
        let mut directory = normalize_path_input(&raw_dir);
        if directory.as_os_str().is_empty() {
            directory = DEFAULT_OUTPUT_DIR.into();
        }
        log::debug!("selected {} size(s), output {}", resolutions.len(), directory.display());
        Ok(Selection {
            resolutions,
            output: OutputTarget::new(directory),
            rounding,
        })
    }
}

/// Parses an interactive size answer.  Tokens are separated by commas or
/// whitespace and may be catalog positions (`1`..`7`), edge lengths (`64`),
/// labels (`64x64`) or `all`.  Returns the first unrecognized token on
/// failure.
fn parse_choices(answer: &str) -> Result<Vec<IconSize>, String> {
    let mut sizes = Vec::new();
    for token in answer.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        if token.eq_ignore_ascii_case("all") {
            sizes.extend_from_slice(&IconSize::ALL);
            continue;
        }
        let size = match token.parse::<usize>() {
            Ok(position) if (1..=IconSize::ALL.len()).contains(&position) => {
                IconSize::ALL[position - 1]
            }
            _ => IconSize::from_str(token).map_err(|_| token.to_string())?,
        };
        sizes.push(size);
    }
    Ok(sizes)
}
