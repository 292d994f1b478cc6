//! trueno-sketch - replay an event script and save the final frame as PNG.
//!
//! Usage: `trueno-sketch <script> [--config FILE] [--output FILE] [--verbose]`
//!
//! `RUST_LOG` overrides the log level; otherwise it is `info`, or `debug` with
//! `--verbose`.

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;
use trueno_sketch::prelude::*;
use trueno_sketch::script;

const USAGE: &str = "usage: trueno-sketch <script> [--config FILE] [--output FILE] [--verbose]";

struct Args {
    script: PathBuf,
    config: Option<PathBuf>,
    output: PathBuf,
    verbose: bool,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut script = None;
    let mut config = None;
    let mut output = PathBuf::from("sketch.png");
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                config = Some(args.next().ok_or("--config needs a file")?.into());
            }
            "-o" | "--output" => {
                output = args.next().ok_or("--output needs a file")?.into();
            }
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if script.is_none() => script = Some(PathBuf::from(&arg)),
            _ => return Err(format!("unexpected argument '{arg}'\n{USAGE}")),
        }
    }

    Ok(Args {
        script: script.ok_or(USAGE)?,
        config,
        output,
        verbose,
    })
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), args.verbose))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        process::exit(1);
    }
}

/// `RUST_LOG` directives when set and valid, else `info` (`debug` if verbose).
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SketchConfig::load(path)?,
        None => SketchConfig::default(),
    };

    let handler = InputHandler::new(config.keys.clone());
    let events = script::load(&args.script, &handler)?;

    let backend = SoftwareBackend::new(
        config.canvas.width,
        config.canvas.height,
        config.background_color(),
    )?;
    let mut session = Session::from_config(&config, backend);
    session.start();

    tracing::info!(
        exercise = %config.exercise,
        events = events.len(),
        "replaying {}",
        args.script.display()
    );
    let strokes = session.run(events);
    tracing::info!(strokes, status = %session.status(), "replay finished");

    let fb = session.into_backend().into_framebuffer();
    let (_, _, mean) = fb.luminance_stats();
    let painted = fb.pixel_count() - fb.count_pixels(config.background_color().to_rgba());
    tracing::info!(
        painted,
        mean_luminance = mean,
        simd = ?Framebuffer::backend(),
        "frame summary"
    );

    PngEncoder::write_to_file(&fb, &args.output)?;
    tracing::info!("wrote {}", args.output.display());

    Ok(())
}
