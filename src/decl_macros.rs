// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Declarative macros used across this crate.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
