//! Bidirectional adjacency between nodes and links.
//!
//! The index keeps two mirrored maps, node → links and link → nodes, and updates both on every
//! mutation so that a link appears in a node's list exactly when the node appears in the
//! link's list.

use crate::types::{LinkId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Many-to-many relation between nodes and links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkIndex {
    links_by_node: HashMap<NodeId, Vec<LinkId>>,
    nodes_by_link: HashMap<LinkId, Vec<NodeId>>,
}

impl NodeLinkIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `node` to `link`. Attaching the same pair again has no effect.
    ///
    /// A link joins at most two nodes; callers must not attach a third.
    pub fn connect(&mut self, link: LinkId, node: NodeId) {
        let nodes = self.nodes_by_link.entry(link).or_default();
        if !nodes.contains(&node) {
            debug_assert!(nodes.len() < 2, "{link} already joins two nodes");
            nodes.push(node);
        }

        let links = self.links_by_node.entry(node).or_default();
        if !links.contains(&link) {
            links.push(link);
        }
    }

    /// Forgets `link`, detaching it from every node it was attached to.
    ///
    /// Returns the nodes it was attached to. Unknown links are ignored.
    pub fn disconnect(&mut self, link: LinkId) -> Vec<NodeId> {
        let Some(nodes) = self.nodes_by_link.remove(&link) else {
            return Vec::new();
        };
        for node in &nodes {
            if let Some(links) = self.links_by_node.get_mut(node) {
                links.retain(|l| *l != link);
            }
        }
        nodes
    }

    /// Forgets `node`, detaching it from every link it was attached to.
    ///
    /// Returns the links that were attached so the caller can decide what to do with them.
    pub fn remove_node(&mut self, node: NodeId) -> Vec<LinkId> {
        let Some(links) = self.links_by_node.remove(&node) else {
            return Vec::new();
        };
        for link in &links {
            if let Some(nodes) = self.nodes_by_link.get_mut(link) {
                nodes.retain(|n| *n != node);
            }
        }
        links
    }

    /// Links attached to `node`, in the order they were attached.
    pub fn links_of(&self, node: NodeId) -> &[LinkId] {
        self.links_by_node
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nodes attached to `link`, in the order they were attached.
    pub fn nodes_of(&self, link: LinkId) -> &[NodeId] {
        self.nodes_by_link
            .get(&link)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether both maps agree on every pair.
    pub fn is_consistent(&self) -> bool {
        let forward = self.links_by_node.iter().all(|(node, links)| {
            links
                .iter()
                .all(|link| self.nodes_of(*link).contains(node))
        });
        let backward = self.nodes_by_link.iter().all(|(link, nodes)| {
            nodes
                .iter()
                .all(|node| self.links_of(*node).contains(link))
        });
        forward && backward
    }
}
