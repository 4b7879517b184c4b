// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the content tree: node identifiers, flags, and content.

use alloc::string::String;
use bitflags::bitflags;
use kurbo::Rect;

/// Identifier for a node in the tree.
///
/// A small, copyable handle consisting of a slot index and a generation
/// counter. It stays stable across updates but becomes invalid when the node
/// is removed; a stale `NodeId` never aliases a different live node because
/// the generation must match. Use
/// [`ContentTree::is_alive`](crate::ContentTree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn generation(self) -> u32 {
        self.1
    }
}

bitflags! {
    /// Node flags controlling participation in indexing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node occupies layout space. Elements without this flag report no
        /// extent, like boxes removed from layout entirely.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Content stored by a node.
#[derive(Clone, Debug)]
pub enum NodeData {
    /// An element with a tag and resolved page-space bounds.
    Element {
        /// Tag name. Element walks match it ASCII case-insensitively.
        tag: String,
        /// Bounds in page space. This crate performs no layout; callers
        /// position boxes and keep these up to date.
        bounds: Rect,
    },
    /// A text leaf. Text carries no geometry of its own; indexing promotes
    /// a leaf to the element containing it.
    Text {
        /// The text content.
        content: String,
    },
}
