//! # Graph Level Assignment
//!
//! Infers levels for nodes that were built without one and tidies the
//! resulting hierarchy so that every node sits directly below something it
//! is connected to.
//!
//! Before any level is known, links are followed in their declared
//! orientation (source to target); roots are nodes no link points at.

use std::collections::HashSet;
use std::ops::Bound;

use tracing::{debug, warn};

use crate::model::node::NodeId;
use crate::topology::Topology;

#[derive(Debug, Default, Clone, Copy)]
pub struct GraphLevelManager;

impl GraphLevelManager {
    pub fn new() -> Self {
        Self
    }

    /// Gives every node a level, classifies all links and returns the node
    /// ids sorted by `(level, name)`.
    ///
    /// Nodes that already have a level keep it (they may only be pushed
    /// deeper by the traversal). The adjustment pass runs only when levels
    /// had to be inferred.
    pub fn assign_graph_levels(&self, topology: &mut Topology) -> Vec<NodeId> {
        let already_set = topology.nodes().all(|node| node.graph_level.is_some());

        if !already_set {
            warn!(
                "Not all graph levels are set, assigning them from link orientation. \
                 Set graph levels explicitly for a predictable layout."
            );

            for id in topology.node_ids() {
                if topology.node(id).graph_level.is_some() || has_incoming(topology, id) {
                    continue;
                }
                self.set_graph_level(topology, id, 0);
            }

            // Cycles without a root: seed whatever is left at the top.
            for id in topology.node_ids() {
                if topology.node(id).graph_level.is_none() {
                    self.set_graph_level(topology, id, 0);
                }
            }
        }

        topology.classify_all();

        if !already_set {
            self.adjust_node_levels(topology);
            topology.classify_all();
        }

        let mut sorted: Vec<NodeId> = topology.node_ids().collect();
        sorted.sort_by(|a, b| {
            let (a, b) = (topology.node(*a), topology.node(*b));
            (a.graph_level, &a.name).cmp(&(b.graph_level, &b.name))
        });
        sorted
    }

    /// Depth-first walk along declared orientation, starting at `start` with
    /// level `level`. A node is visited once; it only ever moves deeper.
    fn set_graph_level(&self, topology: &mut Topology, start: NodeId, level: i64) {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut stack: Vec<(NodeId, i64)> = vec![(start, level)];

        while let Some((id, level)) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }

            let view = topology.node(id);
            let current = view.graph_level;
            let children: Vec<NodeId> = view
                .get_all_links()
                .iter()
                .filter(|link| link.source == id && link.target != id)
                .map(|link| link.target)
                .collect();

            if current.is_none_or(|current| current < level) {
                debug!("Assigning level {level} to '{}'", view.name);
                if let Ok(node) = topology.node_mut(id) {
                    node.graph_level = Some(level);
                }
            }

            // Reversed so the first child is explored first.
            let child_level = level.saturating_add(1);
            stack.extend(children.into_iter().rev().map(|child| (child, child_level)));
        }
    }

    /// Compacts the hierarchy.
    ///
    /// 1. Walking down from the second level, nodes that have no upstream
    ///    link to the level right above are pushed one level deeper, together
    ///    with every deeper level. Levels holding a single node, or whose
    ///    nodes would all move, are left alone.
    /// 2. Walking up from the deepest level, a node whose upstream links all
    ///    skip at least one level is pulled up by one.
    ///
    /// Empty levels in between are skipped.
    /// Expects classified links; reclassifies after every move.
    pub fn adjust_node_levels(&self, topology: &mut Topology) {
        let used = topology.get_used_levels();
        if used.len() <= 1 {
            return;
        }

        let mut next = used.iter().nth(1).copied();
        while let Some(level) = next {
            self.push_down(topology, level);
            next = next_level_below(topology, level);
        }

        let mut next = topology.get_max_level();
        while let Some(level) = next {
            self.pull_up(topology, level);
            next = next_level_above(topology, level);
        }
    }

    fn push_down(&self, topology: &mut Topology, current_level: i64) {
        let at_current = topology.get_nodes_by_level(current_level);
        if at_current.len() <= 1 {
            return;
        }

        let Some(before_level) = current_level.checked_sub(1) else {
            return;
        };
        let to_move: Vec<NodeId> = at_current
            .iter()
            .copied()
            .filter(|id| {
                topology
                    .node(*id)
                    .get_upstream_links_towards_level(before_level)
                    .is_empty()
            })
            .collect();

        if to_move.is_empty() || to_move.len() == at_current.len() {
            return;
        }

        debug!(
            "Pushing {} node(s) below level {current_level}",
            to_move.len()
        );
        let deeper: Vec<i64> = topology
            .get_used_levels()
            .into_iter()
            .filter(|level| *level > current_level)
            .rev()
            .collect();
        for level in deeper {
            for id in topology.get_nodes_by_level(level) {
                shift(topology, id, 1);
            }
        }
        for id in to_move {
            shift(topology, id, 1);
        }
        topology.classify_all();
    }

    fn pull_up(&self, topology: &mut Topology, level: i64) {
        for id in topology.get_nodes_by_level(level) {
            let view = topology.node(id);
            let Some(node_level) = view.graph_level else {
                continue;
            };

            let gaps: Vec<i128> = view
                .get_upstream_links()
                .iter()
                .filter_map(|link| topology.node(link.other_end(id)).graph_level)
                .map(|far_level| i128::from(node_level) - i128::from(far_level))
                .collect();

            if gaps.contains(&1) {
                continue;
            }

            if gaps.iter().any(|gap| *gap > 1) {
                debug!(
                    "Pulling '{}' up to level {}",
                    view.name,
                    node_level.saturating_sub(1)
                );
                shift(topology, id, -1);
                topology.classify_all();
            }
        }
    }
}

/// Smallest occupied level deeper than `level`.
fn next_level_below(topology: &Topology, level: i64) -> Option<i64> {
    topology
        .get_used_levels()
        .range((Bound::Excluded(level), Bound::Unbounded))
        .next()
        .copied()
}

/// Largest occupied level above `level`.
fn next_level_above(topology: &Topology, level: i64) -> Option<i64> {
    topology.get_used_levels().range(..level).next_back().copied()
}

fn has_incoming(topology: &Topology, id: NodeId) -> bool {
    topology
        .node(id)
        .get_all_links()
        .iter()
        .any(|link| link.target == id && link.source != id)
}

fn shift(topology: &mut Topology, id: NodeId, by: i64) {
    if let Ok(node) = topology.node_mut(id) {
        node.graph_level = node.graph_level.map(|level| level.saturating_add(by));
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
