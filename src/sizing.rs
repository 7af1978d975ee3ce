// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User facing type aliases for stack allocated buffers, sized for the strings and
//! collections this crate produces. If a value outgrows its inline capacity it spills
//! over into the heap transparently.

use smallstr::SmallString;
use smallvec::SmallVec;

/// `#RRGGBB` is 7 bytes, so this never spills.
pub type StringHexColor = SmallString<[u8; MAX_HEX_COLOR_STRING_SIZE]>;
const MAX_HEX_COLOR_STRING_SIZE: usize = 8;

/// `background: #RRGGBB; color: <black|white>;` tops out at 34 bytes.
pub type StringColorStyle = SmallString<[u8; MAX_COLOR_STYLE_STRING_SIZE]>;
const MAX_COLOR_STYLE_STRING_SIZE: usize = 40;

/// The seeded reference palette has 11 names; a handful more still stays inline.
pub type InlineVecColorNames = SmallVec<[String; MAX_COLOR_NAMES_SIZE]>;
const MAX_COLOR_NAMES_SIZE: usize = 16;
