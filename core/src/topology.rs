//! # Topology Arena
//!
//! Owns every [`Node`] and [`Link`] of a diagram. Links store the ids of
//! their endpoints instead of references, so nodes and links can be mutated
//! independently while the level queries still resolve the current state.
//!
//! ## Classification contract
//! [`Topology::update_links`] may be called for any node, any number of
//! times. It always recomputes a link from the link's own endpoints, so the
//! result does not depend on which endpoint triggered it or in which order.

use std::collections::{BTreeSet, HashMap};
use std::ops::Deref;

use tracing::trace;

use crate::error::TopologyError;
use crate::model::link::{Direction, Link, LinkAttrs, LinkId};
use crate::model::node::{Node, NodeId};

#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: Vec<Node>,
    links: Vec<Link>,
    by_name: HashMap<String, NodeId>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> Result<NodeId, TopologyError> {
        if self.by_name.contains_key(&node.name) {
            return Err(TopologyError::DuplicateNode(node.name));
        }

        let id = NodeId(self.nodes.len());
        self.by_name.insert(node.name.clone(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Stores `link` without attaching it to its endpoints.
    pub fn add_link(&mut self, mut link: Link) -> Result<LinkId, TopologyError> {
        self.check_node(link.source)?;
        self.check_node(link.target)?;

        let id = LinkId(self.links.len());
        link.id = id;
        self.links.push(link);
        Ok(id)
    }

    /// Attaches `link` to `node` through [`Node::add_link`].
    pub fn attach(&mut self, node: NodeId, link: LinkId) -> Result<(), TopologyError> {
        if link.0 >= self.links.len() {
            return Err(TopologyError::UnknownLinkId(link));
        }
        self.node_mut(node)?.add_link(link);
        Ok(())
    }

    /// Creates a link and attaches it to both endpoints. A self loop is attached once.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        attrs: LinkAttrs,
    ) -> Result<LinkId, TopologyError> {
        let id = self.add_link(Link::new(source, target, attrs))?;
        self.attach(source, id)?;
        if target != source {
            self.attach(target, id)?;
        }
        Ok(id)
    }

    /// Borrowed view of a node with link-resolving queries.
    ///
    /// # Panics
    /// If `id` was not handed out by this topology.
    pub fn node(&self, id: NodeId) -> NodeView<'_> {
        NodeView {
            topology: self,
            id,
            node: &self.nodes[id.0],
        }
    }

    pub fn get_node(&self, id: NodeId) -> Option<NodeView<'_>> {
        self.nodes.get(id.0).map(|node| NodeView {
            topology: self,
            id,
            node,
        })
    }

    pub fn node_by_name(&self, name: &str) -> Option<NodeView<'_>> {
        self.by_name.get(name).map(|id| self.node(*id))
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TopologyError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(TopologyError::UnknownNodeId(id))
    }

    /// # Panics
    /// If `id` was not handed out by this topology.
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.0]
    }

    pub fn link_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        self.links.get_mut(id.0)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> {
        (0..self.nodes.len()).map(|idx| self.node(NodeId(idx)))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn set_graph_level(&mut self, id: NodeId, level: Option<i64>) -> Result<(), TopologyError> {
        self.node_mut(id)?.graph_level = level;
        Ok(())
    }

    /// Reclassifies every link attached to `id` from its endpoints' current levels.
    pub fn update_links(&mut self, id: NodeId) -> Result<(), TopologyError> {
        self.check_node(id)?;

        let Topology { nodes, links, .. } = self;
        for link_id in nodes[id.0].link_ids() {
            let link = &mut links[link_id.0];
            let source_level = nodes[link.source.0].graph_level;
            let target_level = nodes[link.target.0].graph_level;
            link.classify(source_level, target_level);
            trace!(
                "Link {} -> {} classified as {:?}",
                nodes[link.source.0].name,
                nodes[link.target.0].name,
                link.direction()
            );
        }
        Ok(())
    }

    /// Reclassifies every link of the topology.
    pub fn classify_all(&mut self) {
        let Topology { nodes, links, .. } = self;
        for link in links.iter_mut() {
            link.classify(nodes[link.source.0].graph_level, nodes[link.target.0].graph_level);
        }
    }

    /// Distinct levels in use. Unlevelled nodes are ignored.
    pub fn get_used_levels(&self) -> BTreeSet<i64> {
        self.nodes.iter().filter_map(|node| node.graph_level).collect()
    }

    pub fn get_max_level(&self) -> Option<i64> {
        self.nodes.iter().filter_map(|node| node.graph_level).max()
    }

    pub fn get_min_level(&self) -> Option<i64> {
        self.nodes.iter().filter_map(|node| node.graph_level).min()
    }

    /// Nodes sitting at `level`, in insertion order.
    pub fn get_nodes_by_level(&self, level: i64) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.graph_level == Some(level))
            .map(|(idx, _)| NodeId(idx))
            .collect()
    }

    fn check_node(&self, id: NodeId) -> Result<(), TopologyError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(TopologyError::UnknownNodeId(id))
        }
    }
}

/// A node together with the topology it lives in.
///
/// Dereferences to [`Node`], so plain attributes are available directly.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    topology: &'a Topology,
    id: NodeId,
    node: &'a Node,
}

impl<'a> Deref for NodeView<'a> {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

impl<'a> NodeView<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node itself, borrowed for as long as the topology.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// All attached links in attachment order.
    pub fn get_all_links(&self) -> Vec<&'a Link> {
        self.links().collect()
    }

    /// Links where either endpoint shares this node's level.
    ///
    /// An unlevelled node matches links with an unlevelled endpoint.
    pub fn get_connection_count_within_level(&self) -> usize {
        let level = self.node.graph_level;
        self.links()
            .filter(|link| {
                self.level_of(link.source) == level || self.level_of(link.target) == level
            })
            .count()
    }

    pub fn get_downstream_links(&self) -> Vec<&'a Link> {
        self.links_towards(Direction::Downstream)
    }

    pub fn get_upstream_links(&self) -> Vec<&'a Link> {
        self.links_towards(Direction::Upstream)
    }

    pub fn get_lateral_links(&self) -> Vec<&'a Link> {
        self.links_towards(Direction::Lateral)
    }

    /// Upstream links whose far end sits at `level`.
    pub fn get_upstream_links_towards_level(&self, level: i64) -> Vec<&'a Link> {
        self.links()
            .filter(|link| link.direction_from(self.id) == Some(Direction::Upstream))
            .filter(|link| self.level_of(link.other_end(self.id)) == Some(level))
            .collect()
    }

    /// The far end of every attached link, without duplicates.
    pub fn get_neighbors(&self) -> BTreeSet<NodeId> {
        self.links().map(|link| link.other_end(self.id)).collect()
    }

    pub fn is_connected_to(&self, other: NodeId) -> bool {
        self.links().any(|link| link.has_endpoint(other))
    }

    fn links(&self) -> impl Iterator<Item = &'a Link> + use<'a> {
        let topology = self.topology;
        let node: &'a Node = self.node;
        node.link_ids().iter().map(move |id| topology.link(*id))
    }

    fn links_towards(&self, direction: Direction) -> Vec<&'a Link> {
        self.links()
            .filter(|link| link.direction_from(self.id) == Some(direction))
            .collect()
    }

    fn level_of(&self, id: NodeId) -> Option<i64> {
        self.topology.nodes[id.0].graph_level
    }
}
