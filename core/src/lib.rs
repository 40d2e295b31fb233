//! # Topograph Core
//!
//! The topology annotation model behind `topograph`: nodes get a hierarchical
//! graph level, links are classified as upstream, downstream or lateral from
//! those levels, and layout and styling code queries the result.
//!
//! * **[`model`]**: [`model::node::Node`] and [`model::link::Link`].
//! * **[`topology`]**: the arena owning nodes and links, and the per-node queries.
//! * **[`levels`]**: infers and compacts graph levels.
//! * **[`builder`]**: builds a topology from lab records and a theme.
//!
//! ```
//! use topograph_core::model::link::{Direction, LinkAttrs};
//! use topograph_core::model::node::{Node, NodeAttrs};
//! use topograph_core::topology::Topology;
//!
//! let mut topology = Topology::new();
//! let level = |l: i64| NodeAttrs { graph_level: Some(l.into()), ..NodeAttrs::default() };
//! let spine = topology.add_node(Node::new("spine", "spine", "srl", level(0))).unwrap();
//! let leaf = topology.add_node(Node::new("leaf", "leaf", "srl", level(1))).unwrap();
//! let link = topology.connect(spine, leaf, LinkAttrs::default()).unwrap();
//!
//! topology.update_links(spine).unwrap();
//! assert_eq!(topology.link(link).direction(), Some(Direction::Downstream));
//! assert_eq!(topology.node(leaf).get_upstream_links().len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod levels;
pub mod model;
pub mod topology;

pub use error::TopologyError;
