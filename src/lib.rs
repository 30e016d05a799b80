//! Toolbelt - small, self-contained helpers for everyday values
//!
//! A utility belt of leaf functions grouped by the type they work on. None of
//! them hold state; randomness always comes from a generator the caller passes
//! in.
//!
//! # Modules
//!
//! - [`math`] - Clamp, lerp, smooth step and ping-pong easing
//! - [`random`] - Uniform draws from an injected RNG
//! - [`collections`] - Predicates, uniqueness, reductions, shuffle and sample
//! - [`text`] - Grapheme-indexed slicing, affixes, truncation, templating, slugs
//! - [`geometry`] - 2-D points and rectangles
//! - [`color`] - RGBA colors, hex parsing, interpolation, grayscale
//! - [`dates`] - Calendar arithmetic
//! - [`json`] - JSON encode/decode shortcuts
//! - [`config`] - Settings for the `toolbelt` CLI
//! - [`utils`] - XDG directory helpers
//!
//! # Error Policy
//!
//! Out-of-range slices, missing placeholders and failed transliteration are
//! absorbed silently (empty string, clamped bound or `None`). Conditions with
//! no sensible value (character index past the end, average of nothing,
//! normalizing the origin, inverted bounds) return [`Error`].

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod collections;
pub mod color;
pub mod config;
pub mod dates;
pub mod error;
pub mod geometry;
pub mod json;
pub mod math;
pub mod random;
pub mod text;
pub mod utils;

// Re-export commonly used types
pub use collections::SequenceExt;
pub use color::Color;
pub use dates::DateExt;
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use math::{Easing, clamp, lerp, smooth_step, smooth_step2};
pub use text::TextExt;
