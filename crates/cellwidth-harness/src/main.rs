#![forbid(unsafe_code)]

//! `cellwidth-harness`: render one diagnostic scene and print it.
//!
//! ```sh
//! cellwidth-harness table --east-asian
//! CELLWIDTH_HARNESS_VIEW=titles cellwidth-harness --ansi
//! RUST_LOG=cellwidth_text=debug cellwidth-harness --json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use cellwidth_core::env::process_env;
use cellwidth_harness::config::{DEFAULT_WIDTH, USAGE};
use cellwidth_harness::{
    HarnessConfig, HarnessError, OutputFormat, buffer_to_ansi, buffer_to_text, metrics_jsonl,
    scene,
};
use cellwidth_render::{PlacementStrategy, TextPlacer};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => width,
        Ok(_) => DEFAULT_WIDTH,
        Err(err) => {
            tracing::debug!(%err, "terminal size unavailable, using default width");
            DEFAULT_WIDTH
        }
    }
}

fn run() -> Result<(), HarnessError> {
    let config = HarnessConfig::from_env_with(process_env)?.apply_args(std::env::args().skip(1))?;
    let mut stdout = io::stdout().lock();

    if config.show_help {
        writeln!(stdout, "{USAGE}")?;
        return Ok(());
    }

    let placer = TextPlacer::new(PlacementStrategy::Clusters, config.mode)
        .with_calculator(config.calculator());

    let output = match config.format {
        OutputFormat::Json => metrics_jsonl(&scene::icon_metrics(&placer), config.mode),
        format => {
            let width = config.width.unwrap_or_else(terminal_width);
            tracing::info!(view = %config.view, width, mode = %config.mode, "rendering");
            let buf = scene::render(config.view, width, &placer);
            let mut text = if format == OutputFormat::Ansi {
                buffer_to_ansi(&buf)
            } else {
                buffer_to_text(&buf)
            };
            text.push('\n');
            text
        }
    };

    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(HarnessError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cellwidth-harness: {err}");
            if matches!(err, HarnessError::Config(_)) {
                eprintln!("{USAGE}");
            }
            ExitCode::from(2)
        }
    }
}
