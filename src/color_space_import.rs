// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSV and HSL importers for [RgbColor].
//!
//! Both importers take their input as a slice of exactly three numbers, validate every
//! component up front, and only then write all three channels in one shot. The two
//! color spaces share the hue hexagon in [crate::hue_sector] and differ only in the
//! chroma and plane offset formulas.

use crate::{ColorInputError, ColorSpace, HueSector, InputField, RgbColor, find_sector};

impl RgbColor {
    /// Replace the channels from `[hue, saturation, value]`.
    ///
    /// - `hue` is in degrees, `[0, 360)` w/ the upper bound exclusive.
    /// - `saturation` and `value` are fractions in `[0.0, 1.0]`, both bounds
    ///   inclusive.
    ///
    /// # Errors
    ///
    /// - [ColorInputError::InvalidArity] if the slice does not hold exactly three
    ///   elements.
    /// - [ColorInputError::OutOfRange] for the first component that fails its range
    ///   check, in `hue`, `saturation`, `value` order.
    pub fn try_set_hsv(&mut self, components: &[f64]) -> Result<(), ColorInputError> {
        let &[hue, saturation, value] = components else {
            return Err(ColorInputError::InvalidArity { space: ColorSpace::Hsv });
        };
        let sector = validate::hue_sector(hue)?;
        validate::fraction(saturation, InputField::Saturation)?;
        validate::fraction(value, InputField::Value)?;

        // In HSV the chroma shrinks w/ value, and the offset lifts the triple up to
        // the brightness plane.
        let chroma = saturation * value;
        self.apply_ramp(sector, hue, chroma, value - chroma);
        Ok(())
    }

    /// Replace the channels from `[hue, saturation, lightness]`.
    ///
    /// - `hue` is in degrees, `[0, 360)` w/ the upper bound exclusive.
    /// - `saturation` and `lightness` are fractions in `[0.0, 1.0]`, both bounds
    ///   inclusive.
    ///
    /// # Errors
    ///
    /// - [ColorInputError::InvalidArity] if the slice does not hold exactly three
    ///   elements.
    /// - [ColorInputError::OutOfRange] for the first component that fails its range
    ///   check, in `hue`, `saturation`, `lightness` order.
    pub fn try_set_hsl(&mut self, components: &[f64]) -> Result<(), ColorInputError> {
        let &[hue, saturation, lightness] = components else {
            return Err(ColorInputError::InvalidArity { space: ColorSpace::Hsl });
        };
        let sector = validate::hue_sector(hue)?;
        validate::fraction(saturation, InputField::Saturation)?;
        validate::fraction(lightness, InputField::Lightness)?;

        // In HSL the chroma peaks at mid lightness and collapses to zero at both
        // black and white.
        let chroma = saturation * (1.0 - (2.0 * lightness - 1.0).abs());
        self.apply_ramp(sector, hue, chroma, lightness - chroma / 2.0);
        Ok(())
    }

    /// Run the sector ramp and lift the provisional triple by `offset`. All range
    /// checks have passed by the time this runs, so the write back cannot fail and all
    /// three channels are replaced together.
    fn apply_ramp(&mut self, sector: &HueSector, hue: f64, chroma: f64, offset: f64) {
        let (red, green, blue) = (sector.ramp)(chroma, hue / 60.0);
        self.set_normalized(red + offset, green + offset, blue + offset);
    }
}

mod validate {
    use super::{ColorInputError, HueSector, InputField, find_sector};

    /// The sector lookup doubles as the hue range check: a hue outside `[0, 360)`,
    /// or a NaN, lands in no sector.
    pub fn hue_sector(hue: f64) -> Result<&'static HueSector, ColorInputError> {
        find_sector(hue).ok_or(ColorInputError::OutOfRange { field: InputField::Hue })
    }

    pub fn fraction(fraction: f64, field: InputField) -> Result<(), ColorInputError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(())
        } else {
            Err(ColorInputError::OutOfRange { field })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(&[0.0, 1.0, 1.0], "#FF0000"; "red point")]
    #[test_case(&[60.0, 1.0, 1.0], "#FFFF00"; "yellow on a sector boundary")]
    #[test_case(&[60.0, 1.0, 0.5], "#808000"; "olive")]
    #[test_case(&[120.0, 1.0, 0.0], "#000000"; "zero value is black")]
    #[test_case(&[180.0, 0.0, 1.0], "#FFFFFF"; "zero saturation is white")]
    #[test_case(&[240.0, 0.5, 1.0], "#8080FF"; "pale blue")]
    #[test_case(&[300.0, 0.5, 0.5], "#804080"; "plum")]
    fn test_hsv_import(components: &[f64], expected_hex: &str) {
        let mut color = RgbColor::default();
        color.try_set_hsv(components).unwrap();
        assert_eq2!(color.hex(), expected_hex);
    }

    #[test_case(&[0.0, 1.0, 1.0], "#FFFFFF"; "full lightness washes out to white")]
    #[test_case(&[60.0, 1.0, 0.5], "#FFFF00"; "yellow at mid lightness")]
    #[test_case(&[120.0, 1.0, 0.0], "#000000"; "zero lightness is black")]
    #[test_case(&[180.0, 0.0, 1.0], "#FFFFFF"; "zero saturation full lightness")]
    #[test_case(&[240.0, 0.5, 1.0], "#FFFFFF"; "chroma collapses at full lightness")]
    #[test_case(&[300.0, 0.5, 0.5], "#C040C0"; "orchid rounds each channel up")]
    fn test_hsl_import(components: &[f64], expected_hex: &str) {
        let mut color = RgbColor::default();
        color.try_set_hsl(components).unwrap();
        assert_eq2!(color.hex(), expected_hex);
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[0.0]; "one element")]
    #[test_case(&[0.0, 1.0]; "two elements")]
    #[test_case(&[0.0, 1.0, 1.0, 1.0]; "four elements")]
    fn test_hsv_arity(components: &[f64]) {
        let mut color = RgbColor::from_u8(1, 2, 3);
        let result = color.try_set_hsv(components);
        assert_eq2!(
            result.unwrap_err().to_string(),
            "hsv array must have three elements"
        );
        assert_eq2!(color, RgbColor::from_u8(1, 2, 3));
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[0.0, 1.0]; "two elements")]
    #[test_case(&[0.0, 1.0, 1.0, 1.0]; "four elements")]
    fn test_hsl_arity(components: &[f64]) {
        let mut color = RgbColor::from_u8(1, 2, 3);
        let result = color.try_set_hsl(components);
        assert_eq2!(
            result.unwrap_err().to_string(),
            "hsl array must have three elements"
        );
        assert_eq2!(color, RgbColor::from_u8(1, 2, 3));
    }

    #[test_case(&[360.0, 0.0, 0.0], "hue must be in 0...360"; "hue upper bound is exclusive")]
    #[test_case(&[-1.0, 0.0, 0.0], "hue must be in 0...360"; "negative hue")]
    #[test_case(&[0.0, 1.1, 0.0], "saturation must be in 0.0..1.0"; "saturation too big")]
    #[test_case(&[0.0, -0.1, 0.0], "saturation must be in 0.0..1.0"; "negative saturation")]
    #[test_case(&[0.0, 0.0, 1.1], "value must be in 0.0..1.0"; "value too big")]
    #[test_case(&[0.0, 0.0, -0.1], "value must be in 0.0..1.0"; "negative value")]
    fn test_hsv_range(components: &[f64], expected_message: &str) {
        let mut color = RgbColor::from_u8(1, 2, 3);
        let result = color.try_set_hsv(components);
        assert_eq2!(result.unwrap_err().to_string(), expected_message);
        // A failed import leaves the existing channels alone.
        assert_eq2!(color, RgbColor::from_u8(1, 2, 3));
    }

    #[test_case(&[360.0, 0.0, 0.0], "hue must be in 0...360"; "hue upper bound is exclusive")]
    #[test_case(&[0.0, 1.1, 0.0], "saturation must be in 0.0..1.0"; "saturation too big")]
    #[test_case(&[0.0, 0.0, 1.1], "lightness must be in 0.0..1.0"; "lightness too big")]
    #[test_case(&[0.0, 0.0, -0.1], "lightness must be in 0.0..1.0"; "negative lightness")]
    fn test_hsl_range(components: &[f64], expected_message: &str) {
        let mut color = RgbColor::from_u8(1, 2, 3);
        let result = color.try_set_hsl(components);
        assert_eq2!(result.unwrap_err().to_string(), expected_message);
        assert_eq2!(color, RgbColor::from_u8(1, 2, 3));
    }

    #[test]
    fn test_range_checks_run_in_component_order() {
        let mut color = RgbColor::default();
        // Hue and saturation are both invalid; hue is reported first.
        let result = color.try_set_hsv(&[400.0, 2.0, 0.0]);
        assert_eq2!(
            result,
            Err(ColorInputError::OutOfRange { field: InputField::Hue })
        );
    }

    #[test]
    fn test_arity_is_checked_before_ranges() {
        let mut color = RgbColor::default();
        let result = color.try_set_hsl(&[400.0, 2.0]);
        assert_eq2!(
            result,
            Err(ColorInputError::InvalidArity { space: ColorSpace::Hsl })
        );
    }

    #[test]
    fn test_nan_components_are_rejected() {
        let mut color = RgbColor::default();
        assert!(color.try_set_hsv(&[f64::NAN, 0.5, 0.5]).is_err());
        assert!(color.try_set_hsv(&[0.0, f64::NAN, 0.5]).is_err());
        assert!(color.try_set_hsl(&[0.0, 0.5, f64::NAN]).is_err());
    }

    #[test]
    fn test_hue_just_below_the_bound_is_accepted() {
        let mut color = RgbColor::default();
        assert!(color.try_set_hsv(&[359.999, 1.0, 1.0]).is_ok());
        assert!(color.try_set_hsl(&[359.999, 1.0, 0.5]).is_ok());
    }
}
