//! Preview-tree queries: by stable string id, class, or role.

use super::node::{NodeData, NodeId, NodeRole};
use super::tree::PreviewTree;

impl PreviewTree {
    /// Find the node whose stable string id matches `dom_id`.
    ///
    /// The engine calls this once per event for each bound target; absence is
    /// always a valid, silently tolerated state.
    pub fn by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.dom_id.as_deref() == Some(dom_id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all nodes that carry the given marker class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.has_class(class))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes with the given role.
    pub fn query_by_role(&self, role: NodeRole) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.role == role)
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in the arena.
    ///
    /// Slotmap insertion order: deterministic but not tree-order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}
