// Command line front end: load an image, apply one operation, save a PNG

use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use imago::{io, ChannelOutcome, CompressOptions, Compressor, GrayscaleMode, Image, Kernel};
use log::{error, info, Level};

#[derive(Parser, Debug)]
#[command(name = "imago", version, about = "Image manipulation with Haar wavelet compression")]
struct Cli {
    /// Display information messages and higher
    #[arg(long, global = true, help_heading = "LOGGING")]
    info: bool,

    /// Display debug information and higher
    #[arg(long, global = true, help_heading = "LOGGING")]
    debug: bool,

    /// Display very verbose information
    #[arg(long, global = true, help_heading = "LOGGING")]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Files {
    /// Input file to read data from
    input: PathBuf,
    /// PNG file to write the result to
    output: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Degrade an image through Haar wavelet thresholding
    Compress {
        #[command(flatten)]
        files: Files,
        /// Fraction-quantile of coefficient magnitudes to suppress, in [0, 1]
        #[arg(short, long)]
        ratio: f64,
        /// Magnitudes below this are ignored when computing the cutoff
        #[arg(long, default_value_t = imago::consts::COEFFICIENT_EPSILON)]
        epsilon: f64,
    },
    /// Mirror left to right
    FlipH(Files),
    /// Mirror top to bottom
    FlipV(Files),
    /// Add a constant to the red, green and blue channels
    Brighten {
        #[command(flatten)]
        files: Files,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,
    },
    /// Keep only the red channel
    Red(Files),
    /// Keep only the green channel
    Green(Files),
    /// Keep only the blue channel
    Blue(Files),
    /// Convert to grayscale
    Gray {
        #[command(flatten)]
        files: Files,
        #[arg(short, long, value_enum, default_value_t = GrayMode::Intensity)]
        mode: GrayMode,
    },
    /// Apply a fixed 3x3 kernel
    Convolve {
        #[command(flatten)]
        files: Files,
        #[arg(short, long, value_enum)]
        kernel: KernelArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GrayMode {
    Value,
    Intensity,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KernelArg {
    Blur,
    Sharpen,
    Edges,
}

impl Command {
    fn files(&self) -> &Files {
        match self {
            Command::Compress { files, .. }
            | Command::Brighten { files, .. }
            | Command::Gray { files, .. }
            | Command::Convolve { files, .. } => files,
            Command::FlipH(files)
            | Command::FlipV(files)
            | Command::Red(files)
            | Command::Green(files)
            | Command::Blue(files) => files,
        }
    }
}

/// Set up logging options
fn setup_logger(cli: &Cli) {
    let log_level = if cli.trace {
        Level::Trace
    } else if cli.debug {
        Level::Debug
    } else if cli.info {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("could not initialize logger: {e}");
    }
    info!("Log level :{}", log_level);
}

fn compress(image: &Image, ratio: f64, epsilon: f64) -> Result<Image> {
    let compressor = Compressor::new(CompressOptions::new().ratio(ratio).epsilon(epsilon));
    let (compressed, report) = compressor.compress_with_report(image)?;

    for channel in &report.channels {
        match channel.outcome {
            ChannelOutcome::Lossless => info!("{}: lossless", channel.channel.name()),
            ChannelOutcome::Skipped => info!("{}: no coefficient above epsilon", channel.channel.name()),
            ChannelOutcome::Thresholded(t) => info!(
                "{}: cutoff {:.6}, {} of {} coefficients zero",
                channel.channel.name(),
                t.cutoff,
                t.zeroed,
                report.coefficients_per_channel()
            ),
        }
    }
    info!(
        "working size {0}x{0}, {1:.1}% of coefficients zero",
        report.working_size,
        report.zeroed_fraction() * 100.0
    );

    Ok(compressed)
}

fn apply(command: &Command, image: &Image) -> Result<Image> {
    let output = match command {
        Command::Compress { ratio, epsilon, .. } => compress(image, *ratio, *epsilon)?,
        Command::FlipH(_) => imago::flip_horizontal(image),
        Command::FlipV(_) => imago::flip_vertical(image),
        Command::Brighten { amount, .. } => imago::brighten(image, *amount)?,
        Command::Red(_) => imago::red(image),
        Command::Green(_) => imago::green(image),
        Command::Blue(_) => imago::blue(image),
        Command::Gray { mode, .. } => {
            let mode = match mode {
                GrayMode::Value => GrayscaleMode::Value,
                GrayMode::Intensity => GrayscaleMode::Intensity,
            };
            imago::grayscale(image, mode)
        }
        Command::Convolve { kernel, .. } => {
            let kernel = match kernel {
                KernelArg::Blur => Kernel::BoxBlur,
                KernelArg::Sharpen => Kernel::Sharpen,
                KernelArg::Edges => Kernel::EdgeDetect,
            };
            imago::convolve(image, kernel)?
        }
    };
    Ok(output)
}

fn run(cli: &Cli) -> Result<()> {
    let files = cli.command.files();

    let start = Instant::now();
    let image = io::decode_file(&files.input)
        .with_context(|| format!("failed to read {}", files.input.display()))?;
    info!(
        "Decoded {}x{} image in {:?}",
        image.width(),
        image.height(),
        start.elapsed()
    );

    let start = Instant::now();
    let output = apply(&cli.command, &image)?;
    info!("Operation finished in {:?}", start.elapsed());

    io::encode_file(&output, &files.output)
        .with_context(|| format!("failed to write {}", files.output.display()))?;
    info!("Wrote {}", files.output.display());

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logger(&cli);

    if let Err(e) = run(&cli) {
        error!("Could not complete workflow, reason {:?}", e);
        exit(1);
    }
}
