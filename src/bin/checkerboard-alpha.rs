use std::path::PathBuf;
use std::process;

use clap::Parser;

use checkerboard_alpha::{
    ProcessReport, RestoreOptions, TransparencyRestorer, DEFAULT_CORNER_SIZE, DEFAULT_INPUT,
    DEFAULT_MAX_DIST,
};

#[derive(Parser)]
#[command(
    name = "checkerboard-alpha",
    about = "Replace a baked-in checkerboard background with real transparency",
    version,
    after_help = "Simple usage: checkerboard-alpha  (rewrites assets/logo.png in place)\n\n\
                  Checkerboard tones are sampled from the image corners, so the logo\n\
                  itself should not touch them. Output is always PNG."
)]
struct Cli {
    /// Input image file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output PNG file (default: overwrite the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Edge length of each corner sample region, in pixels
    #[arg(short, long, default_value_t = DEFAULT_CORNER_SIZE)]
    corner_size: u32,

    /// Maximum RGB distance for a pixel to match a checkerboard color
    #[arg(short, long, default_value_t = DEFAULT_MAX_DIST)]
    max_dist: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if !cli.max_dist.is_finite() || cli.max_dist < 0.0 {
        eprintln!("Error: Max distance must be a non-negative number");
        process::exit(1);
    }

    if !cli.input.exists() {
        eprintln!("Error: Input path does not exist: {}", cli.input.display());
        process::exit(1);
    }

    let output = cli.output.clone().unwrap_or_else(|| cli.input.clone());
    let restorer = TransparencyRestorer::new(RestoreOptions {
        corner_size: cli.corner_size,
        max_dist: cli.max_dist,
    });

    match restorer.process_file(&cli.input, &output) {
        Ok(report) => print_report(&report, &cli),
        Err(e) => {
            eprintln!("[FAIL] {}: {e}", cli.input.display());
            process::exit(1);
        }
    }
}

fn print_report(report: &ProcessReport, cli: &Cli) {
    if cli.quiet {
        return;
    }

    if cli.verbose {
        let (w, h) = report.original_size;
        if report.used_fallback {
            eprintln!("  -> no grey corner pixels, using {} fallback greys", report.palette_len);
        } else {
            eprintln!("  -> {} checkerboard colors sampled from corners", report.palette_len);
        }
        match report.bounds {
            Some(b) => eprintln!(
                "  -> cropped {w}x{h} to {}x{} at ({}, {})",
                b.width(),
                b.height(),
                b.left,
                b.top
            ),
            None => eprintln!("  -> nothing opaque left, kept {w}x{h} uncropped"),
        }
    }

    println!("Saved: {}", report.output.display());
}
