// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render a CSS style string for a background color, w/ a foreground chosen to keep
//! text legible on top of it.

use crate::{RgbColor, sizing::StringColorStyle};
use std::fmt::Write;

/// Foreground that stays legible on the given background: dark text on a light
/// background and vice versa. The cutoff is [RgbColor::luma] strictly above `0.5`; a
/// luma of exactly `0.5` (eg: `#808080`) keeps the white foreground.
#[must_use]
pub fn calc_fg_color(bg_color: RgbColor) -> &'static str {
    if bg_color.luma() > 0.5 { "black" } else { "white" }
}

/// Render `background: <hex>; color: <fg>;` for the given background color.
///
/// Accepts anything that converts into an [RgbColor], so callers can pass either a
/// color value or a raw `(u8, u8, u8)` channel triple.
#[must_use]
pub fn color_style(arg_color: impl Into<RgbColor>) -> StringColorStyle {
    let color = arg_color.into();
    let mut acc = StringColorStyle::new();
    _ = write!(
        acc,
        "background: {}; color: {};",
        color.hex(),
        calc_fg_color(color)
    );
    acc
}
