use std::io;
use std::process::ExitCode;

use clap::Parser;
use macos_icon_gen::{Config, ConsoleReporter, Pipeline, Presets, PromptCollector, ResizeFilter,
                     RoundingPolicy};

/// Generate macOS app icons from a 1024x1024 PNG.
#[derive(Debug, Parser)]
#[command(name = "macos-icon-gen", version)]
struct Args {
    /// Path to the 1024x1024 source PNG.
    #[arg(value_name = "ICON")]
    icon: Option<String>,

    /// Clip icons with rounded corners.
    #[arg(short, long)]
    rounded: bool,

    /// Corner radius as a fraction of the icon size (with --rounded).
    #[arg(long, value_name = "FRACTION", default_value_t = RoundingPolicy::DEFAULT_RADIUS_FRACTION)]
    radius: f32,

    /// Comma separated sizes to generate; skips the size prompt.
    #[arg(short, long, value_name = "SIZES", conflicts_with = "all")]
    sizes: Option<String>,

    /// Generate every size.
    #[arg(short, long)]
    all: bool,

    /// Output directory; skips the directory prompt.
    #[arg(short, long, value_name = "DIR")]
    output: Option<String>,

    /// Resampling filter.
    #[arg(long, value_enum, default_value_t = ResizeFilter::default())]
    filter: ResizeFilter,

    /// Never prompt; missing answers fall back to defaults.
    #[arg(short = 'n', long)]
    no_interactive: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn presets(&self) -> Presets {
        Presets {
            sizes: self.sizes.clone(),
            all: self.all,
            output: self.output.clone(),
            rounded: self.rounded,
            radius: self.radius,
            interactive: !self.no_interactive,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config { filter: args.filter };
    let collector = PromptCollector::new(args.presets(), io::stdin().lock(), io::stdout());
    let mut pipeline = Pipeline::new(config, collector, ConsoleReporter::stdio());
    match pipeline.run(args.icon.as_deref()) {
        Ok(summary) if summary.is_complete() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
