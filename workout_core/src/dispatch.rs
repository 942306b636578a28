//! Dispatch of raw sensor packages to training records.

use crate::{ActivityKind, Error, Package, Result, Training, TrainingInput};

/// Build a training record from an activity code and its positional values
///
/// Values are read in the order the sensor sends them:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, pool laps
pub fn read_package(code: &str, data: &[f64]) -> Result<Training> {
    let kind: ActivityKind = code.parse()?;

    if data.len() != kind.arity() {
        return Err(Error::ArityMismatch {
            code: code.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let input = TrainingInput {
        action: parse_action(data[0])?,
        duration_h: data[1],
        weight_kg: data[2],
    };

    let training = match kind {
        ActivityKind::Running => Training::Running(input),
        ActivityKind::SportsWalking => Training::SportsWalking {
            input,
            height_cm: data[3],
        },
        ActivityKind::Swimming => Training::Swimming {
            input,
            pool_length_m: data[3],
            pool_laps: data[4],
        },
    };

    tracing::debug!("Read {} package: {:?}", code, training);
    Ok(training)
}

/// Convenience wrapper over [`read_package`] for a [`Package`]
pub fn read(package: &Package) -> Result<Training> {
    read_package(&package.code, &package.data)
}

/// The action count must be a whole, non-negative number
fn parse_action(value: f64) -> Result<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidArgument {
            field: "action",
            value,
        });
    }
    Ok(value as u32)
}
