// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive types: vertical extents, configuration, and build errors.

use alloc::string::String;
use alloc::vec::Vec;

/// Vertical extent of a box, in page pixels.
///
/// Both the container extent (captured once per build) and per-node extents
/// use this type. An extent from a collaborator may be degenerate: hidden or
/// collapsed boxes report non-finite or non-positive heights, and the builder
/// excludes them rather than erroring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VExtent {
    /// Top edge (smaller y).
    pub top: f64,
    /// Bottom edge (larger y).
    pub bottom: f64,
}

impl VExtent {
    /// Create an extent from top and bottom edges.
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Create an extent from a top edge and a height.
    pub const fn from_top_height(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Rendered height. May be non-finite or non-positive for degenerate boxes.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether both edges are finite.
    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.bottom.is_finite()
    }
}

/// Configuration for building a [`PositionIndex`](crate::PositionIndex).
///
/// An explicit record with documented defaults; every field is validated or
/// coerced at build time as described on the field.
///
/// ```rust
/// use plumbline_index::IndexConfig;
///
/// let config = IndexConfig {
///     allow_elements: vec!["em".into(), "a".into()],
///     ..Default::default()
/// };
/// assert!(config.allow_text);
/// assert_eq!(config.step(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct IndexConfig {
    /// Index text content via the text-leaf walk. Defaults to `true`.
    pub allow_text: bool,
    /// Element tags to index via the element walk, matched ASCII
    /// case-insensitively. Defaults to empty, which disables element
    /// indexing (text-only mode).
    pub allow_elements: Vec<String>,
    /// Quantization step in pixels. Defaults to 1 (maximal precision).
    /// Non-finite values and values below 1 are coerced to 1; everything
    /// else is rounded to a whole pixel step. Larger steps trade precision
    /// for table size on very tall containers.
    pub resolution: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            allow_text: true,
            allow_elements: Vec::new(),
            resolution: 1.0,
        }
    }
}

impl IndexConfig {
    /// The quantization step a build will actually use.
    ///
    /// The minimum viable resolution is always one pixel.
    pub fn step(&self) -> f64 {
        if self.resolution.is_finite() && self.resolution >= 1.0 {
            round_to_i64(self.resolution) as f64
        } else {
            1.0
        }
    }

    /// Whether the element walk is enabled.
    pub fn elements_enabled(&self) -> bool {
        !self.allow_elements.is_empty()
    }
}

/// Fatal errors surfaced by [`PositionIndex::build`](crate::PositionIndex::build)
/// and [`PositionIndex::rebuild`](crate::PositionIndex::rebuild).
///
/// Per-node anomalies (missing or degenerate geometry) are never errors; they
/// exclude the node and the build proceeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// The container handle did not resolve to finite geometry.
    InvalidContainer,
}

impl core::fmt::Display for IndexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidContainer => {
                f.write_str("a container with resolvable geometry must be provided")
            }
        }
    }
}

impl core::error::Error for IndexError {}

/// Floor a finite `f64` to `i64` without `std` float math.
#[inline]
pub(crate) fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Quantized positions are bounded by the table length."
    )]
    let i = v as i64;
    if (i as f64) > v { i - 1 } else { i }
}

/// Round half-up to `i64`, the quantization used for table spans.
#[inline]
pub(crate) fn round_to_i64(v: f64) -> i64 {
    floor_to_i64(v + 0.5)
}
