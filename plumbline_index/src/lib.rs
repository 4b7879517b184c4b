// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plumbline_index --heading-base-level=0

//! Plumbline Index: a 1-D vertical position index over content boxes.
//!
//! Plumbline Index is a reusable building block for scroll-position
//! tracking: it maps a vertical pixel offset within a tall container to the
//! content node(s) occupying that offset, and answers such queries quickly
//! and repeatedly as a viewport scrolls.
//!
//! - Build a [`PositionTable`] from one or two document-order walks (text
//!   leaves and allow-listed elements) supplied by a [`ContentSource`].
//!   Walks are merged into one table without duplicates, and overlapping
//!   nodes in a bucket are ordered smallest first.
//! - Query with [`PositionIndex::locate`]: an offset landing on whitespace
//!   falls back to the nearest occupied bucket within a bounded radius.
//! - Rebuild on demand after content mutation with
//!   [`PositionIndex::rebuild`]; every build recomputes from scratch.
//!
//! It is generic over the node handle type and does not depend on any
//! geometry crate. Higher layers (like a content tree) resolve boxes to
//! vertical extents and feed them here.
//!
//! # Example
//!
//! ```rust
//! use plumbline_index::{ContentSource, IndexConfig, PositionIndex, VExtent};
//!
//! // A minimal source: a container (node 0) holding two paragraphs, each
//! // with one text leaf. Vector order is document order.
//! struct Strip {
//!     extents: Vec<Option<VExtent>>,
//!     parents: Vec<Option<usize>>,
//!     leaves: Vec<usize>,
//! }
//!
//! impl ContentSource for Strip {
//!     type Node = usize;
//!
//!     fn extent(&self, node: usize) -> Option<VExtent> {
//!         self.extents.get(node).copied().flatten()
//!     }
//!
//!     fn parent(&self, node: usize) -> Option<usize> {
//!         self.parents.get(node).copied().flatten()
//!     }
//!
//!     fn text_leaves<'a>(&'a self, _container: usize) -> Box<dyn Iterator<Item = usize> + 'a> {
//!         Box::new(self.leaves.iter().copied())
//!     }
//!
//!     fn elements<'a>(
//!         &'a self,
//!         _container: usize,
//!         _allow: &'a [String],
//!     ) -> Box<dyn Iterator<Item = usize> + 'a> {
//!         Box::new(core::iter::empty())
//!     }
//! }
//!
//! let strip = Strip {
//!     extents: vec![
//!         Some(VExtent::new(0.0, 100.0)), // container
//!         Some(VExtent::new(10.0, 30.0)), // first paragraph
//!         Some(VExtent::new(60.0, 80.0)), // second paragraph
//!         None,                           // text leaves have no geometry
//!         None,
//!     ],
//!     parents: vec![None, Some(0), Some(0), Some(1), Some(2)],
//!     leaves: vec![3, 4],
//! };
//!
//! let index = PositionIndex::build(&strip, 0, IndexConfig::default()).unwrap();
//!
//! // A hit inside the first paragraph.
//! assert_eq!(index.locate(15.0), Some(vec![1]));
//! // 45px sits in the gap between the paragraphs; at equal radius the
//! // bucket below the offset wins.
//! assert_eq!(index.locate(45.0), Some(vec![2]));
//! // Outside the container.
//! assert_eq!(index.locate(150.0), None);
//! ```
//!
//! # Choosing a resolution
//!
//! The table holds `floor(container_height / resolution)` buckets. The
//! default resolution of 1 records positions to the pixel; on very long
//! containers a coarser step (8, 16, ...) shrinks the table proportionally
//! at the cost of quantized answers. Nodes shorter than the step collapse
//! and are excluded. The minimum viable resolution is always 1 pixel;
//! smaller or non-finite values are coerced to it.
//!
//! # Degenerate geometry
//!
//! Sources report layout as it is: hidden boxes may have no extent, zero or
//! negative height, or non-finite edges. All of those are excluded from the
//! index silently; only an unresolvable *container* fails a build. Queries
//! never fail: out-of-range and non-finite offsets are simply not found.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod index;
pub mod source;
pub mod table;
pub mod types;

pub use index::PositionIndex;
pub use source::ContentSource;
pub use table::{DEFAULT_SEARCH_RADIUS, MAX_SEARCH_RADIUS, PositionTable};
pub use types::{IndexConfig, IndexError, VExtent};
