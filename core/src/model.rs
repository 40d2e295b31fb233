//! # Topology Model
//!
//! * [`node::Node`]: a network device with its level, placement and style.
//! * [`link::Link`]: a connection between two nodes, classified by the
//!   level difference of its endpoints.
//!
//! Nodes and links refer to each other through [`node::NodeId`] and
//! [`link::LinkId`]; the [`crate::topology::Topology`] owns both.

pub mod link;
pub mod node;
