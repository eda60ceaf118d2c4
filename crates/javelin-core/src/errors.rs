use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for Javelin planning operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JavelinError {
    /// A coordinate string was not in `group:artifact` form.
    #[error("Invalid project coordinate: {input}")]
    #[diagnostic(help("Coordinates use the form `group:artifact`, e.g. `org.example:my-lib`"))]
    InvalidCoordinate { input: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type JavelinResult<T> = miette::Result<T>;
