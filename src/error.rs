use color_model::{ColorModel, ParseColorError};
use thiserror::Error;

/// Rejected caller input: wrong number of colors or notations, bad amount,
/// or unparseable color text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No colors supplied")]
    NoColors,

    #[error("Expected exactly one color notation, got {found}")]
    MultipleInputs { found: usize },

    #[error("Too many colors: {found} (max {max})")]
    TooManyColors { max: usize, found: usize },

    #[error("Too few colors: {found} (min {min})")]
    TooFewColors { min: usize, found: usize },

    #[error("Amount {amount} is outside {min}..={max}")]
    AmountOutOfRange { amount: usize, min: usize, max: usize },

    #[error("Invalid {model} input: {source}")]
    Parse {
        model: ColorModel,
        #[source]
        source: ParseColorError,
    },
}

/// Reasons a render produced no image.
///
/// The public render functions log these and return empty bytes; the
/// `try_*` variants hand them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("No colors to render")]
    EmptyInput,

    #[error("No text to render")]
    EmptyText,

    #[error("Degenerate grid: {columns} columns x {rows} rows")]
    EmptyGrid { columns: usize, rows: usize },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<RenderError> for ConfigError {
    fn from(e: RenderError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}
