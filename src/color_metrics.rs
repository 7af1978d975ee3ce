// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derived color metrics, computed read only from the channels of a [RgbColor].
//!
//! Every fractional metric is rounded to two decimal places (half away from zero), so
//! the values are stable across platforms and cheap to compare. [RgbColor::hue] is the
//! one integer metric. None of these are stored; they are recomputed from the channels
//! on every call.

use crate::RgbColor;

/// Weights for the [RgbColor::luma] metric, in channel order. Green dominates
/// perceived brightness.
pub const LUMA_WEIGHTS: (f64, f64, f64) = (0.3, 0.59, 0.11);

impl RgbColor {
    /// Angular position on the color wheel as an integer in `[0, 360)`.
    ///
    /// Computed from the raw integer channels (each is exact in [f64], and the scale
    /// factor cancels inside `atan2`). The angle comes back in `(-180, 180]`, so the
    /// Euclidean remainder wraps negatives up into range, eg: `#FFC0CB` sits at -9°
    /// which lands on 351.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn hue(&self) -> u16 {
        let (red, green, blue) = (
            f64::from(self.red),
            f64::from(self.green),
            f64::from(self.blue),
        );
        let degrees = (3.0_f64.sqrt() * (green - blue))
            .atan2(2.0 * red - green - blue)
            .to_degrees();
        (degrees.round() as i32).rem_euclid(360) as u16
    }

    /// Colorfulness relative to brightness: `0.0` is grey, `1.0` is fully saturated.
    /// Black would divide by zero, so it is defined as `0.0` like every other grey.
    #[must_use]
    pub fn saturation(&self) -> f64 {
        if self.red.max(self.green).max(self.blue) == 0 {
            return 0.0;
        }
        let (max, min) = self.channel_extrema();
        round2(1.0 - min / max)
    }

    /// Brightness in the HSV model: the largest normalized channel.
    #[must_use]
    pub fn value(&self) -> f64 {
        let (max, _) = self.channel_extrema();
        round2(max)
    }

    /// Brightness in the HSL model: the midpoint of the normalized extrema.
    #[must_use]
    pub fn lightness(&self) -> f64 {
        let (max, min) = self.channel_extrema();
        round2((max + min) / 2.0)
    }

    /// Unweighted average of the normalized channels.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        let (red, green, blue) = self.normalized();
        round2((red + green + blue) / 3.0)
    }

    /// Perceptually weighted average of the normalized channels, using
    /// [LUMA_WEIGHTS].
    #[must_use]
    pub fn luma(&self) -> f64 {
        let (red, green, blue) = self.normalized();
        let (w_red, w_green, w_blue) = LUMA_WEIGHTS;
        round2(w_red * red + w_green * green + w_blue * blue)
    }

    /// Spread between the brightest and dimmest normalized channel.
    #[must_use]
    pub fn chroma(&self) -> f64 {
        let (max, min) = self.channel_extrema();
        round2(max - min)
    }

    fn channel_extrema(&self) -> (f64, f64) {
        let (red, green, blue) = self.normalized();
        (red.max(green).max(blue), red.min(green).min(blue))
    }
}

/// Round half away from zero to two decimal places.
fn round2(value: f64) -> f64 { (value * 100.0).round() / 100.0 }
