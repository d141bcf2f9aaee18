//! Error types for color parsing
//!
//! Every parse failure carries enough context to be shown back to the person
//! who typed the color.

use thiserror::Error;

use crate::model::ColorModel;

/// Error returned when color text cannot be turned into an [`Rgb`](crate::Rgb).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Nothing left after trimming whitespace
    #[error("empty color value")]
    Empty,

    /// Hex string has the wrong number of digits (3 or 6 after stripping '#')
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),

    /// Non-hexadecimal character in a hex color
    #[error("invalid hex digit '{0}'")]
    InvalidHexDigit(char),

    /// Wrong number of comma-separated components
    #[error("expected {expected} comma-separated components, found {found}")]
    ComponentCount {
        /// Components the notation requires
        expected: usize,
        /// Components actually present
        found: usize,
    },

    /// Token is not a finite number, or has trailing garbage
    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    /// Number parsed but lies outside the component's range
    #[error("{component} value {value} is outside {min}..={max}")]
    OutOfRange {
        /// Component name (e.g. "red", "saturation")
        component: &'static str,
        /// Offending value (after rounding, for RGB channels)
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Model tag is not one of hex, rgb, hsl, cmyk
    #[error("unknown color model '{0}'")]
    UnknownModel(String),

    /// A `;`-separated list contained no colors
    #[error("{model} list contains no colors")]
    EmptyList {
        /// Notation of the list
        model: ColorModel,
    },

    /// One entry of a `;`-separated list failed to parse
    #[error("{model} list entry {index} is invalid: {source}")]
    ListEntry {
        /// Notation of the list
        model: ColorModel,
        /// 1-based position among the non-empty entries
        index: usize,
        /// Underlying failure
        #[source]
        source: Box<ParseColorError>,
    },
}
