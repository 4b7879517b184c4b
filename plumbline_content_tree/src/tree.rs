// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, and document-order walks.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{NodeData, NodeFlags, NodeId};

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
    flags: NodeFlags,
}

/// Document-ordered content tree.
///
/// Stores tagged elements with page-space bounds and text leaves, and serves
/// the filtered walks a position index builds from. Nodes are addressed by
/// generational [`NodeId`] handles; a removed node's slot is reused with a
/// bumped generation, so stale handles stay harmless.
pub struct ContentTree {
    nodes: Vec<Option<Node>>, // generational slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ContentTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("ContentTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl ContentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert an element as a child of `parent` (or as a root if `None`).
    pub fn insert_element(&mut self, parent: Option<NodeId>, tag: &str, bounds: Rect) -> NodeId {
        self.insert_node(
            parent,
            NodeData::Element {
                tag: String::from(tag),
                bounds,
            },
        )
    }

    /// Insert a text leaf under `parent`.
    pub fn insert_text(&mut self, parent: NodeId, content: &str) -> NodeId {
        self.insert_node(
            Some(parent),
            NodeData::Text {
                content: String::from(content),
            },
        )
    }

    /// Remove a node and its entire subtree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        // Detach from parent first
        if let Some(parent) = self.parent(id) {
            self.unlink_parent(id, parent);
        }
        // Depth-first remove children
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        // Free slot
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Whether `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Update an element's page-space bounds. No-op for text leaves and
    /// stale handles.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(node) = self.node_opt_mut(id)
            && let NodeData::Element { bounds: b, .. } = &mut node.data
        {
            *b = bounds;
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(node) = self.node_opt_mut(id) {
            node.flags = flags;
        }
    }

    /// Replace a text leaf's content. No-op for elements and stale handles.
    pub fn set_text(&mut self, id: NodeId, content: &str) {
        if let Some(node) = self.node_opt_mut(id)
            && let NodeData::Text { content: c } = &mut node.data
        {
            *c = String::from(content);
        }
    }

    /// Content stored by a live node.
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        Some(&self.node_opt(id)?.data)
    }

    /// Element tag, if `id` is a live element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.data(id)? {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text { .. } => None,
        }
    }

    /// Text content, if `id` is a live text leaf.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.data(id)? {
            NodeData::Text { content } => Some(content),
            NodeData::Element { .. } => None,
        }
    }

    /// Page-space bounds, if `id` is a live element.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        match self.data(id)? {
            NodeData::Element { bounds, .. } => Some(*bounds),
            NodeData::Text { .. } => None,
        }
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        Some(self.node_opt(id)?.flags)
    }

    /// Immediate structural parent of a live node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Children of a live node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Descendants of `container` in document order (pre-order). The
    /// container itself is not yielded.
    pub fn descendants(&self, container: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = Vec::new();
        if let Some(node) = self.node_opt(container) {
            stack.extend(node.children.iter().rev().copied());
        }
        Descendants { tree: self, stack }
    }

    /// Non-blank text leaves under `container`, in document order.
    ///
    /// A leaf is blank iff its content is nothing but whitespace.
    pub fn text_leaves(&self, container: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(container).filter(|&id| {
            matches!(
                self.data(id),
                Some(NodeData::Text { content }) if !content.trim().is_empty()
            )
        })
    }

    /// Elements under `container` whose tag is in `allow`, in document
    /// order. Tags are matched ASCII case-insensitively.
    pub fn elements<'a>(
        &'a self,
        container: NodeId,
        allow: &'a [String],
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(container).filter(move |&id| {
            matches!(
                self.data(id),
                Some(NodeData::Element { tag, .. })
                    if allow.iter().any(|t| t.eq_ignore_ascii_case(tag))
            )
        })
    }

    // --- internals ---

    fn insert_node(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let node = Node {
            parent: None,
            children: Vec::new(),
            data,
            flags: NodeFlags::default(),
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.generations.push(0);
            self.nodes.len() - 1
        };
        self.generations[idx] += 1;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(idx as u32, self.generations[idx]);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        self.node_opt(id).expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.node_opt_mut(id).expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        if self.generations.get(id.idx()) != Some(&id.generation()) {
            return None;
        }
        self.nodes.get(id.idx())?.as_ref()
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.generations.get(id.idx()) != Some(&id.generation()) {
            return None;
        }
        self.nodes.get_mut(id.idx())?.as_mut()
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

/// Pre-order traversal over a subtree.
struct Descendants<'a> {
    tree: &'a ContentTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Children pushed in reverse so the first child is yielded next.
        if let Some(node) = self.tree.node_opt(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}
