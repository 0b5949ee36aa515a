use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use elfproef_generate::output::{write_lines, write_numbers, write_report};
use elfproef_generate::{GenerateOptions, GenerationEngine, GenerationError, GenerationReport, Mode};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "elfproef",
    version,
    about = "Generate valid or invalid Dutch BSN test numbers"
)]
struct Cli {
    /// Type of numbers to generate.
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    mode: ModeArg,
    /// How many numbers to generate.
    #[arg(long, default_value_t = 1)]
    count: u64,
    /// Output file; numbers print to stdout when omitted.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional path for a JSON run report.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Valid,
    Invalid,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Valid => Mode::Valid,
            ModeArg::Invalid => Mode::Invalid,
        }
    }
}

fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();
    let options = GenerateOptions {
        seed: cli.seed,
        ..GenerateOptions::default()
    };
    let engine = GenerationEngine::new(options);
    let result = engine.generate(cli.mode.into(), cli.count)?;

    match &cli.output {
        Some(path) => {
            let bytes = write_numbers(path, &result.numbers)?;
            tracing::info!(path = %path.display(), bytes, "numbers written");
            print_summary(&result.report, path);
        }
        None => {
            // Numbers own stdout; the summary stays in the log events.
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_lines(&mut handle, &result.numbers)?;
            handle.flush()?;
        }
    }

    if let Some(path) = &cli.report {
        write_report(path, &result.report)?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(report: &GenerationReport, output: &Path) {
    let total = report.generated.max(1) as f64;
    println!();
    println!("Summary");
    println!("----------------------------------------");
    println!("Total generated: {}", report.generated);
    println!(
        "Valid:   {} ({:.1}%)",
        report.valid_count,
        report.valid_count as f64 / total * 100.0
    );
    println!(
        "Invalid: {} ({:.1}%)",
        report.invalid_count,
        report.invalid_count as f64 / total * 100.0
    );
    if report.is_consistent() {
        println!(
            "All generated numbers are {} as requested.",
            report.mode.as_str()
        );
    } else {
        println!(
            "Note: mixture of valid and invalid numbers detected, even though type='{}' was requested.",
            report.mode.as_str()
        );
    }
    println!("Saved to: {}", output.display());
}
