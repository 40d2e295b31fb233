//! Errors raised when a topology is assembled incorrectly.
//!
//! Attribute coercion never fails; these cover structural misuse only.

use thiserror::Error;

use crate::model::link::LinkId;
use crate::model::node::NodeId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Node names identify nodes, so they must be unique.
    #[error("node `{0}` already exists in the topology")]
    DuplicateNode(String),
    #[error("node id {0} does not exist in the topology")]
    UnknownNodeId(NodeId),
    #[error("link id {0} does not exist in the topology")]
    UnknownLinkId(LinkId),
    #[error("node `{0}` does not exist in the topology")]
    UnknownNode(String),
    /// Link endpoints are written `node:interface`.
    #[error("invalid link endpoint `{0}`, expected node:interface")]
    InvalidEndpoint(String),
    #[error("link needs exactly two endpoints, got {0}")]
    EndpointCount(usize),
}
