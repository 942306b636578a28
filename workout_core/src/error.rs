//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
///
/// Domain errors are shown to the user next to the summary lines, so their
/// messages use the same language as the summary template.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Activity code is not present in the dispatch table
    #[error("Неизвестный тип тренировки: {0}")]
    UnknownActivityCode(String),

    /// Argument list does not match the variant's field count
    #[error("Неверное число параметров для {code}: ожидалось {expected}, получено {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A positional argument has a value the variant cannot hold
    #[error("Недопустимое значение параметра {field}: {value}")]
    InvalidArgument { field: &'static str, value: f64 },

    /// A formula would divide by a zero-valued field
    #[error("Деление на ноль: параметр {0} равен нулю")]
    DivisionByZero(&'static str),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error concerns a single package rather than the whole run
    pub fn is_package_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownActivityCode(_)
                | Error::ArityMismatch { .. }
                | Error::InvalidArgument { .. }
                | Error::DivisionByZero(_)
        )
    }
}
