// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_model
//!
//! This crate models a color as an RGB triplet of 8-bit channels, w/ strict importers
//! from other color space representations and a family of derived metrics:
//!
//! - **Hex codec**: [RgbColor::hex] renders `#RRGGBB` w/ uppercase digits, and
//!   [RgbColor::try_set_hex] parses it back. Parsing is case insensitive but otherwise
//!   an exact match, built on [nom].
//! - **HSV / HSL import**: [RgbColor::try_set_hsv] and [RgbColor::try_set_hsl] derive
//!   the channels from hue / saturation / value-or-lightness input. Both share one
//!   [hue sector table](hue_sector) and round each channel up when scaling to
//!   `0..=255`.
//! - **Metrics**: [RgbColor::hue], [RgbColor::saturation], [RgbColor::value],
//!   [RgbColor::lightness], [RgbColor::intensity], [RgbColor::luma] and
//!   [RgbColor::chroma] are computed read only from the channels, never stored.
//! - **Named color store**: an embedded [kv] backed store that resolves color names
//!   to triplets, pre seedable w/ the classic colors. See [color_store].
//! - **Style rendering**: [color_style()] renders a CSS style string w/ a legible
//!   foreground for any background color.
//!
//! Mutations are atomic: every input is validated in full before any channel is
//! written, so a failed set (see [ColorInputError]) leaves the color untouched.
//!
//! # Example usage
//!
//! ```rust
//! use r3bl_color_model::*;
//!
//! let mut color = RgbColor::default(); // Black.
//! color.try_set_hsl(&[300.0, 0.5, 0.5])?;
//! assert_eq!(color.hex(), "#C040C0");
//! assert_eq!(color.hue(), 300);
//! assert_eq!(color.lightness(), 0.5);
//! assert_eq!(
//!     color_style(color),
//!     "background: #C040C0; color: white;"
//! );
//! # Ok::<(), ColorInputError>(())
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
// Test fixtures compare floats for exact equality on purpose: the metrics round to two
// decimal places, and those rounded values are bit stable.
#![cfg_attr(test, allow(clippy::float_cmp))]

// Attach modules (re-exported below to provide clean public API).
pub mod color_error;
pub mod color_metrics;
pub mod color_space_import;
pub mod color_store;
pub mod color_style;
pub mod decl_macros;
pub mod hex_color_parser;
pub mod hue_sector;
pub mod rgb_color;
pub mod sizing;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use color_error::*;
pub use color_metrics::*;
pub use color_store::*;
pub use color_style::*;
pub use hex_color_parser::*;
pub use hue_sector::*;
pub use rgb_color::*;
pub use sizing::*;
