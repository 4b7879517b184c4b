// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator trait supplying content walks and geometry.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use crate::types::VExtent;

/// Content supplier consumed by [`PositionIndex`](crate::PositionIndex).
///
/// Implementors own the content hierarchy and its geometry; the index holds
/// only handles. A build is a read-only pass over the walks and never mutates
/// the source.
///
/// ## Walk contracts
///
/// - Both walks yield descendants of the given container in document order,
///   lazily.
/// - [`text_leaves`](Self::text_leaves) must already exclude whitespace-only
///   leaves (a leaf is blank iff its content is nothing but whitespace).
/// - [`elements`](Self::elements) must already filter by the allow-list,
///   comparing tags ASCII case-insensitively.
pub trait ContentSource {
    /// Copyable node handle. Handle equality is node identity.
    type Node: Copy + Eq + Hash + Debug;

    /// Vertical extent of a node relative to the page, or `None` when the
    /// node has no usable geometry (text leaves, hidden or detached nodes).
    ///
    /// A returned extent may still be degenerate (non-finite or non-positive
    /// height); the builder filters those out per node.
    fn extent(&self, node: Self::Node) -> Option<VExtent>;

    /// Immediate structural parent, used to promote text leaves to the
    /// element that carries their geometry.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Non-blank text leaves under `container`, in document order.
    fn text_leaves<'a>(
        &'a self,
        container: Self::Node,
    ) -> Box<dyn Iterator<Item = Self::Node> + 'a>;

    /// Elements under `container` whose tag is in `allow`, in document order.
    fn elements<'a>(
        &'a self,
        container: Self::Node,
        allow: &'a [String],
    ) -> Box<dyn Iterator<Item = Self::Node> + 'a>;
}
