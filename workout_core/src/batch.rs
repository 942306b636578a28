//! Batch driver: dispatch, summarise and print a list of sensor packages.
//!
//! Packages are processed strictly in order. What happens when a package
//! cannot be turned into a summary depends on [`UnknownCodePolicy`].

use crate::dispatch::read;
use crate::message::OutputFormat;
use crate::{Error, Package, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Built-in sensor packages processed when no other input is given
static SAMPLE_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
});

/// Get the built-in sample packages
pub fn sample_packages() -> &'static [Package] {
    &SAMPLE_PACKAGES
}

/// What to do with a package that fails to dispatch or compute
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCodePolicy {
    /// Print a diagnostic and continue with the next package
    #[default]
    Skip,
    /// Stop the whole run at the first failing package
    Abort,
}

impl FromStr for UnknownCodePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(UnknownCodePolicy::Skip),
            "abort" => Ok(UnknownCodePolicy::Abort),
            other => Err(Error::Config(format!(
                "Unknown policy: {} (expected skip or abort)",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BatchOptions {
    pub policy: UnknownCodePolicy,
    pub format: OutputFormat,
}

/// Outcome of a completed batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of summaries written
    pub printed: usize,
    /// Packages that were skipped, with the reason
    pub skipped: Vec<(Package, Error)>,
}

/// Process `packages` in order, writing one summary line per package to `out`
///
/// Under [`UnknownCodePolicy::Skip`] a failing package produces one
/// diagnostic line on `diag` and is recorded in the report. Under
/// [`UnknownCodePolicy::Abort`] the first failure is written to `diag` the
/// same way and then returned. IO and
/// serialization failures always end the run.
pub fn run_batch<W: Write, E: Write>(
    packages: &[Package],
    options: BatchOptions,
    out: &mut W,
    diag: &mut E,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    tracing::info!(
        "Processing {} packages (policy: {:?}, format: {:?})",
        packages.len(),
        options.policy,
        options.format
    );

    for package in packages {
        let info = match read(package).and_then(|training| training.show_training_info()) {
            Ok(info) => info,
            Err(e) if e.is_package_error() && options.policy == UnknownCodePolicy::Skip => {
                tracing::info!("Skipping package {}: {}", package.code, e);
                writeln!(diag, "{}", e)?;
                report.skipped.push((package.clone(), e));
                continue;
            }
            Err(e) => {
                tracing::info!("Aborting on package {}: {}", package.code, e);
                if e.is_package_error() {
                    writeln!(diag, "{}", e)?;
                }
                return Err(e);
            }
        };

        writeln!(out, "{}", info.render(options.format)?)?;
        report.printed += 1;
    }

    Ok(report)
}
