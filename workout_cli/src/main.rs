use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Workout statistics from sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// What to do with packages that cannot be processed (skip, abort)
    #[arg(long, global = true)]
    policy: Option<UnknownCodePolicy>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in sample packages (default)
    Run,

    /// Process a single package given on the command line
    Calc {
        /// Activity code (SWM, RUN, WLK)
        code: String,

        /// Positional values: action, duration, weight, then activity-specific values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    // Initialize logging
    workout_core::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Package errors have already been written by the batch driver
        Err(e) if e.is_package_error() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Flags take precedence over the config file
    if let Some(policy) = cli.policy {
        config.batch.unknown_code_policy = policy;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    let options = config.batch_options();

    match cli.command {
        Some(Commands::Run) | None => cmd_run(sample_packages(), options),
        Some(Commands::Calc { code, values }) => {
            cmd_run(&[Package::new(code, values)], options)
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn cmd_run(packages: &[Package], options: BatchOptions) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();

    let report = run_batch(packages, options, &mut stdout.lock(), &mut stderr.lock())?;

    tracing::info!(
        "Printed {} summaries, skipped {} packages",
        report.printed,
        report.skipped.len()
    );

    Ok(())
}
