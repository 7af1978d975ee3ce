// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [RgbColor]
//! struct. The hex color string must be an exact match for `#RRGGBB`, eg: `#FF0000`
//! for red, w/ upper or lower case hex digits, and nothing before or after.

use crate::RgbColor;
use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res}};

/// Parse function that generates an [RgbColor] struct from a valid hex color string.
///
/// The whole parser is wrapped in [all_consuming], so trailing input after the six hex
/// digits is rejected, not silently dropped. This is what makes the setter contract an
/// exact match on `^#[0-9A-Fa-f]{6}$`.
///
/// # Errors
///
/// Returns a [nom::Err] if the input does not match the format exactly.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (rem, (_, red, green, blue)) = all_consuming((
        tag("#"),
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    ))
    .parse(input)?;
    Ok((rem, RgbColor { red, green, blue }))
}

/// Helper functions that feed the combinators above.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// Parse a single hex segment, ie: exactly two hex digits making up one channel.
    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }

    /// This function is used by [map_res] and it returns a [Result], not [IResult].
    fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [take_while_m_n] and as long as it returns `true`
    /// items will be taken from the input.
    fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }
}
