// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The RGB triplet that the rest of this crate revolves around.
//!
//! [RgbColor] is the single source of truth for a color: three 8-bit channels and
//! nothing else. The codecs and importers write the channels, the metrics in
//! [crate::color_metrics] read them, and every derived quantity is computed on demand
//! so it can never drift out of sync with the stored values.

use crate::{ColorInputError, hex_color_parser::parse_hex_color, sizing::StringHexColor};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Represents a color as an RGB triplet of 8-bit channels.
///
/// Each channel is a [u8], so the `0..=255` range invariant holds by construction and
/// no constructor can produce an out of range channel.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for RgbColor {
    /// A fresh color is black, all channels zero.
    fn default() -> Self { Self::from_u8(0, 0, 0) }
}

mod convenience_conversions {
    use super::RgbColor;

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            Self::from_u8(red, green, blue)
        }
    }
}

impl RgbColor {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Build a color from normalized `[0.0, 1.0]` channel fractions, applying the
    /// rounding policy of [Self::set_normalized].
    #[must_use]
    pub fn from_f64(red: f64, green: f64, blue: f64) -> Self {
        let mut it = Self::default();
        it.set_normalized(red, green, blue);
        it
    }

    /// Parse an exact `#RRGGBB` string (upper or lower case hex digits) into a new
    /// color.
    ///
    /// # Errors
    ///
    /// Returns [ColorInputError::InvalidHexFormat] if the input is not an exact match,
    /// ie: missing `#` prefix, wrong digit count, non hex digits, or trailing input.
    pub fn try_from_hex(input: &str) -> Result<RgbColor, ColorInputError> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(ColorInputError::InvalidHexFormat),
        }
    }

    /// Replace the channels by parsing an exact `#RRGGBB` string. The input is parsed
    /// in full before any channel is written, so a failed parse leaves the color
    /// untouched.
    ///
    /// # Errors
    ///
    /// Same as [Self::try_from_hex].
    pub fn try_set_hex(&mut self, input: &str) -> Result<(), ColorInputError> {
        *self = Self::try_from_hex(input)?;
        Ok(())
    }

    /// Each channel as a fraction of full scale, in `[0.0, 1.0]`.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Replace all three channels from normalized `[0.0, 1.0]` fractions. Each fraction
    /// is scaled by 255 and rounded w/ `ceil`, never to nearest. The HSV / HSL
    /// importers rely on this, eg: `hsl(300, 0.5, 0.5)` must produce channel
    /// `0xC0 = ceil(191.25)`, where rounding to nearest would give `0xBF`.
    pub fn set_normalized(&mut self, red: f64, green: f64, blue: f64) {
        self.red = denormalize(red);
        self.green = denormalize(green);
        self.blue = denormalize(blue);
    }

    /// Render the color as `#RRGGBB` w/ uppercase hex digits, each channel zero
    /// padded to two digits.
    #[must_use]
    pub fn hex(&self) -> StringHexColor {
        let mut acc = StringHexColor::new();
        _ = write!(acc, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue);
        acc
    }
}

/// Scale a normalized `[0.0, 1.0]` channel fraction to `0..=255`, always rounding up.
/// The `as` cast saturates, so a fraction nudged past `1.0` by float error still lands
/// on 255.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn denormalize(fraction: f64) -> u8 { (fraction * 255.0).ceil() as u8 }
