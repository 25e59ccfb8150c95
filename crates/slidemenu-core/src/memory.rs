//! In-memory reference implementation of [`HostSurface`].
//!
//! `MemoryHost` is a cheap-clone handle over a shared node store, so a
//! registry, several menu instances, and a test can all address the same
//! tree. It is the surface used by the test suites and by headless
//! embedders; a real host (a DOM bridge, a retained UI tree) implements
//! [`HostSurface`] the same way.
//!
//! Style writes are applied immediately; [`HostSurface::force_reflow`]
//! only bumps a counter so tests can assert that the transition-suppression
//! helper actually flushed.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::node::{Edge, NodeFlags, NodeId, NodeKind, Offset};
use crate::surface::HostSurface;

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    attrs: BTreeMap<String, String>,
    flags: NodeFlags,
    translate_x: Option<Offset>,
    edge: Option<Edge>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            text: String::new(),
            attrs: BTreeMap::new(),
            flags: NodeFlags::empty(),
            translate_x: None,
            edge: None,
        }
    }
}

#[derive(Debug, Default)]
struct Store {
    nodes: Vec<NodeData>,
    reflows: u64,
}

impl Store {
    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.node(child).parent {
            self.node_mut(parent).children.retain(|&c| c != child);
            self.node_mut(child).parent = None;
        }
    }
}

/// Shared-handle in-memory host tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    store: Rc<RefCell<Store>>,
}

impl MemoryHost {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of forced reflows since creation.
    #[must_use]
    pub fn reflow_count(&self) -> u64 {
        self.store.borrow().reflows
    }

    /// Total number of nodes ever created.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.borrow().nodes.len()
    }
}

impl HostSurface for MemoryHost {
    fn create(&mut self, kind: NodeKind) -> NodeId {
        let mut store = self.store.borrow_mut();
        let id = NodeId::from_index(store.nodes.len());
        store.nodes.push(NodeData::new(kind));
        id
    }

    fn kind(&self, node: NodeId) -> NodeKind {
        self.store.borrow().node(node).kind
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.store.borrow().node(node).parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.store.borrow().node(node).children.clone()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let store = self.store.borrow();
        let parent = store.node(node).parent?;
        let siblings = &store.node(parent).children;
        let index = siblings.iter().position(|&c| c == node)?;
        siblings.get(index + 1).copied()
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        let mut store = self.store.borrow_mut();
        store.detach(child);
        store.node_mut(parent).children.push(child);
        store.node_mut(child).parent = Some(parent);
    }

    fn prepend(&mut self, parent: NodeId, child: NodeId) {
        let mut store = self.store.borrow_mut();
        store.detach(child);
        store.node_mut(parent).children.insert(0, child);
        store.node_mut(child).parent = Some(parent);
    }

    fn wrap(&mut self, node: NodeId, wrapper: NodeId) {
        let mut store = self.store.borrow_mut();
        store.detach(wrapper);
        let old_parent = store.node(node).parent;
        if let Some(parent) = old_parent {
            let index = store
                .node(parent)
                .children
                .iter()
                .position(|&c| c == node)
                .unwrap_or(0);
            store.node_mut(parent).children[index] = wrapper;
            store.node_mut(wrapper).parent = Some(parent);
        }
        store.node_mut(node).parent = Some(wrapper);
        store.node_mut(wrapper).children.push(node);
    }

    fn text(&self, node: NodeId) -> String {
        self.store.borrow().node(node).text.clone()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.store.borrow_mut().node_mut(node).text = text.to_owned();
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.store.borrow().node(node).attrs.get(name).cloned()
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.store
            .borrow_mut()
            .node_mut(node)
            .attrs
            .insert(name.to_owned(), value.to_owned());
    }

    fn flags(&self, node: NodeId) -> NodeFlags {
        self.store.borrow().node(node).flags
    }

    fn insert_flags(&mut self, node: NodeId, flags: NodeFlags) {
        self.store.borrow_mut().node_mut(node).flags.insert(flags);
    }

    fn remove_flags(&mut self, node: NodeId, flags: NodeFlags) {
        self.store.borrow_mut().node_mut(node).flags.remove(flags);
    }

    fn translate_x(&self, node: NodeId) -> Option<Offset> {
        self.store.borrow().node(node).translate_x
    }

    fn set_translate_x(&mut self, node: NodeId, offset: Offset) {
        self.store.borrow_mut().node_mut(node).translate_x = Some(offset);
    }

    fn pinned_edge(&self, node: NodeId) -> Option<Edge> {
        self.store.borrow().node(node).edge
    }

    fn pin_edge(&mut self, node: NodeId, edge: Edge) {
        self.store.borrow_mut().node_mut(node).edge = Some(edge);
    }

    fn force_reflow(&mut self, _node: NodeId) {
        self.store.borrow_mut().reflows += 1;
    }

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        let store = self.store.borrow();
        store
            .nodes
            .iter()
            .enumerate()
            .find(|(_, data)| data.attrs.get("id").is_some_and(|v| v == id))
            .map(|(index, _)| NodeId::from_index(index))
    }
}
