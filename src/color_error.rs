// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Validation failures raised by the mutating color operations.
//!
//! Every failure is raised before any channel is written, so a failed set leaves the
//! color exactly as it was. Getters and metrics never fail. The [std::fmt::Display]
//! strings here are part of the public contract; callers match on them.

/// Type alias to make it easy to work with [miette::Result].
pub type CommonResult<T> = miette::Result<T>;

/// The color space a multi component import came from. Tags arity failures so the
/// message names the operation that was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ColorSpace {
    Hsv,
    Hsl,
}

/// The input component that failed a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputField {
    Hue,
    Saturation,
    Value,
    Lightness,
}

impl InputField {
    /// The range notation used in the validation messages. Hue is an integer degree
    /// range w/ an exclusive upper bound; the fractional components share an inclusive
    /// `0.0..1.0`.
    #[must_use]
    pub fn valid_range(&self) -> &'static str {
        match self {
            InputField::Hue => "0...360",
            _ => "0.0..1.0",
        }
    }
}

/// Validation failures for the mutating color operations.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum ColorInputError {
    /// The input was not an exact `#RRGGBB` string.
    #[error("invalid hex colour")]
    InvalidHexFormat,

    /// A multi component import did not receive exactly three components.
    #[error("{space} array must have three elements")]
    InvalidArity { space: ColorSpace },

    /// A component fell outside its valid range (or was NaN, which is never in
    /// range).
    #[error("{field} must be in {range}", range = .field.valid_range())]
    OutOfRange { field: InputField },
}
