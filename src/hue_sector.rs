// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The hue hexagon shared by the HSV and HSL importers.
//!
//! `[0, 360)` is partitioned into six half open 60° sectors. Each sector carries a
//! ramp that produces the provisional `(r', g', b')` triple from the chroma and the
//! hue: inside any sector one channel is `0`, one is the full chroma, and one ramps
//! linearly between them. The importers differ only in how they compute the chroma and
//! the offset that lifts the provisional triple onto the final plane, so they share
//! this table.

use std::ops::Range;

/// One 60° slice of the hue circle, w/ the ramp that applies inside it.
///
/// `ramp` takes the chroma `c` and the hue scaled to sixths (`hue / 60.0`, so the full
/// range is `0.0..6.0`), and returns the provisional `(r', g', b')` before the plane
/// offset is applied.
#[derive(Debug)]
pub struct HueSector {
    pub degrees: Range<f64>,
    pub ramp: fn(c: f64, sixths: f64) -> (f64, f64, f64),
}

/// The six sectors, in ascending hue order. Lookup relies on the ranges being half
/// open, so each boundary hue belongs to the sector it starts.
pub static HUE_SECTORS: [HueSector; 6] = [
    HueSector { degrees: 0.0..60.0, ramp: |c, sixths| (c, c * sixths, 0.0) },
    HueSector { degrees: 60.0..120.0, ramp: |c, sixths| (c * (2.0 - sixths), c, 0.0) },
    HueSector { degrees: 120.0..180.0, ramp: |c, sixths| (0.0, c, c * (sixths - 2.0)) },
    HueSector { degrees: 180.0..240.0, ramp: |c, sixths| (0.0, c * (4.0 - sixths), c) },
    HueSector { degrees: 240.0..300.0, ramp: |c, sixths| (c * (sixths - 4.0), 0.0, c) },
    HueSector { degrees: 300.0..360.0, ramp: |c, sixths| (c, 0.0, c * (6.0 - sixths)) },
];

/// Ordered lookup over the sector table. A hue outside `[0, 360)`, or a NaN which no
/// range contains, finds no sector; that miss is the hue range check in the importers.
#[must_use]
pub fn find_sector(hue: f64) -> Option<&'static HueSector> {
    HUE_SECTORS.iter().find(|sector| sector.degrees.contains(&hue))
}
