//! The host-surface capability trait.
//!
//! Everything the widget does to the outside world goes through
//! [`HostSurface`]: tree queries and edits, text and attributes, state
//! flags, and the two typed style properties of the menu's style contract
//! (horizontal translation and edge pinning). The navigation state machine
//! never touches a concrete rendering surface directly, so it runs
//! unchanged against [`MemoryHost`](crate::memory::MemoryHost) in tests or
//! against a real UI tree in an embedder.
//!
//! # Contract
//! - Handles stay valid for the lifetime of the surface; the widget never
//!   removes nodes.
//! - `force_reflow` must flush any pending style write so a change made
//!   under `NO_TRANSITION` is observed as instantaneous. Hosts without a
//!   deferred style pipeline may treat it as a hint.
//! - Attribute names follow the markup contract: `id`, `href`,
//!   `data-action`, `data-target`.

use crate::node::{Edge, NodeFlags, NodeId, NodeKind, Offset};

/// Capability interface over the host tree.
pub trait HostSurface {
    /// Create a detached node of the given kind.
    fn create(&mut self, kind: NodeKind) -> NodeId;

    /// Structural role of a node.
    fn kind(&self, node: NodeId) -> NodeKind;

    /// Parent, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Children in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Immediate following sibling.
    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// Append `child` as the last child of `parent`.
    fn append(&mut self, parent: NodeId, child: NodeId);

    /// Insert `child` as the first child of `parent`.
    fn prepend(&mut self, parent: NodeId, child: NodeId);

    /// Put `wrapper` in `node`'s place and move `node` inside it.
    fn wrap(&mut self, node: NodeId, wrapper: NodeId);

    /// Concatenated visible text of the node.
    fn text(&self, node: NodeId) -> String;

    /// Replace the node's visible text.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Read a string attribute.
    fn attr(&self, node: NodeId, name: &str) -> Option<String>;

    /// Write a string attribute.
    fn set_attr(&mut self, node: NodeId, name: &str, value: &str);

    /// Current state flags of a node.
    fn flags(&self, node: NodeId) -> NodeFlags;

    /// Set the given flags, leaving others untouched.
    fn insert_flags(&mut self, node: NodeId, flags: NodeFlags);

    /// Clear the given flags, leaving others untouched.
    fn remove_flags(&mut self, node: NodeId, flags: NodeFlags);

    /// Current horizontal translation, if any was ever applied.
    fn translate_x(&self, node: NodeId) -> Option<Offset>;

    /// Apply a horizontal translation.
    fn set_translate_x(&mut self, node: NodeId, offset: Offset);

    /// Edge the node is pinned to, if any.
    fn pinned_edge(&self, node: NodeId) -> Option<Edge>;

    /// Pin the node to a horizontal edge (clearing the opposite pin).
    fn pin_edge(&mut self, node: NodeId, edge: Edge);

    /// Flush pending style writes on the node's subtree.
    fn force_reflow(&mut self, node: NodeId);

    /// Look up a node by its `id` attribute.
    fn find_by_id(&self, id: &str) -> Option<NodeId>;

    // ── Provided helpers ──────────────────────────────────────────────

    /// True if the node carries all of `flags`.
    fn has_flag(&self, node: NodeId, flags: NodeFlags) -> bool {
        self.flags(node).contains(flags)
    }

    /// Descendants of `node` in depth-first preorder, excluding `node`.
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node);
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let mut kids = self.children(next);
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Ancestors of `node`, nearest first, excluding `node`.
    fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            out.push(parent);
            current = parent;
        }
        out
    }

    /// The submenu owned by an item: its immediate following sibling,
    /// when that sibling is a list.
    fn next_sibling_list(&self, node: NodeId) -> Option<NodeId> {
        self.next_sibling(node)
            .filter(|&sibling| self.kind(sibling) == NodeKind::List)
    }
}
