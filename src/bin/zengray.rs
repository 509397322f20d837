use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use zengray::{Limits, MAX_DIMENSION, Unstoppable, convert_file};

/// Convert an ASCII PPM (P3) image to grayscale.
#[derive(Parser, Debug)]
#[command(name = "zengray", version)]
struct Args {
    /// Input P3 image.
    #[arg(default_value = "im.ppm")]
    input: PathBuf,
    /// Output path; removed again if conversion fails.
    #[arg(default_value = "im-gray.ppm")]
    output: PathBuf,
    /// Upper bound on width and height.
    #[arg(long, default_value_t = MAX_DIMENSION)]
    max_dimension: u32,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<()> {
    let limits = Limits::with_max_dimension(args.max_dimension);
    let header = convert_file(&args.input, &args.output, &limits, Unstoppable).with_context(
        || {
            format!(
                "converting {} to {}",
                args.input.display(),
                args.output.display()
            )
        },
    )?;
    log::info!(
        "wrote {}x{} grayscale image to {}",
        header.width,
        header.height,
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
