// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plumbline_content_tree --heading-base-level=0

//! Plumbline Content Tree: a document-ordered content tree for position
//! indexing.
//!
//! This crate is the concrete content supplier for
//! [`plumbline_index`]: a hierarchy of tagged elements with page-space
//! bounds and text leaves, with the filtered, lazily evaluated walks the
//! index builds from.
//!
//! - Elements carry a tag (matched ASCII case-insensitively by element
//!   walks) and a kurbo [`Rect`](kurbo::Rect) in page space.
//! - Text leaves carry content only; whitespace-only leaves are invisible
//!   to the text walk, and indexing promotes a leaf to its parent element.
//! - Nodes are addressed by generational [`NodeId`] handles that never
//!   alias after slot reuse.
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange anything. Callers compute
//! positions and sizes with whatever layout system they choose and keep the
//! stored bounds up to date with [`ContentTree::set_bounds`]; the index is
//! then rebuilt on demand.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use plumbline_content_tree::ContentTree;
//! use plumbline_index::{IndexConfig, PositionIndex};
//!
//! let mut tree = ContentTree::new();
//! let root = tree.insert_element(None, "article", Rect::new(0.0, 0.0, 400.0, 100.0));
//! let p = tree.insert_element(Some(root), "p", Rect::new(0.0, 10.0, 400.0, 30.0));
//! tree.insert_text(p, "The quick brown fox");
//! let em = tree.insert_element(Some(p), "em", Rect::new(40.0, 15.0, 80.0, 20.0));
//! tree.insert_text(em, "quick");
//!
//! let config = IndexConfig {
//!     allow_elements: vec!["em".into()],
//!     ..Default::default()
//! };
//! let index = PositionIndex::build(&tree, root, config).unwrap();
//!
//! // Inside the emphasis the smallest enclosing node comes first.
//! assert_eq!(index.locate(17.0), Some(vec![em, p]));
//! // A blank offset falls back to the nearest occupied bucket.
//! assert_eq!(index.locate(60.0), Some(vec![p]));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod source;
pub mod tree;
pub mod types;

pub use tree::ContentTree;
pub use types::{NodeData, NodeFlags, NodeId};
