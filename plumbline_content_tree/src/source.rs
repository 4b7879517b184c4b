// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `ContentSource` implementation over the content tree.

use alloc::boxed::Box;
use alloc::string::String;

use plumbline_index::{ContentSource, VExtent};

use crate::tree::ContentTree;
use crate::types::{NodeData, NodeFlags, NodeId};

impl ContentSource for ContentTree {
    type Node = NodeId;

    fn extent(&self, node: NodeId) -> Option<VExtent> {
        // Hidden elements have no usable geometry, like boxes removed from
        // layout; text leaves never have their own.
        if !self.flags(node)?.contains(NodeFlags::VISIBLE) {
            return None;
        }
        match self.data(node)? {
            NodeData::Element { bounds, .. } => Some(VExtent::new(bounds.y0, bounds.y1)),
            NodeData::Text { .. } => None,
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        ContentTree::parent(self, node)
    }

    fn text_leaves<'a>(&'a self, container: NodeId) -> Box<dyn Iterator<Item = NodeId> + 'a> {
        Box::new(ContentTree::text_leaves(self, container))
    }

    fn elements<'a>(
        &'a self,
        container: NodeId,
        allow: &'a [String],
    ) -> Box<dyn Iterator<Item = NodeId> + 'a> {
        Box::new(ContentTree::elements(self, container, allow))
    }
}
