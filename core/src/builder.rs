//! # Topology Builder
//!
//! Turns loosely typed node and link records into a [`Topology`], applying
//! the diagram [`Theme`] and the node naming scheme on the way.
//!
//! Records usually come straight from a lab definition, so links may point
//! at nodes that are not part of the diagram. Those links are skipped.

use std::collections::BTreeMap;
use std::str::FromStr;

use topograph_common::config::Theme;
use topograph_common::scalar::Scalar;
use tracing::{debug, warn};

use crate::error::TopologyError;
use crate::model::link::{LinkAttrs, LinkStyles};
use crate::model::node::{Node, NodeAttrs};
use crate::topology::Topology;

pub const LEVEL_LABEL: &str = "graph-level";
pub const ICON_LABEL: &str = "graph-icon";

/// A node as described by a lab definition.
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub name: String,
    pub kind: String,
    pub mgmt_ipv4: Option<String>,
    /// Free-form labels; [`LEVEL_LABEL`] and [`ICON_LABEL`] are read.
    pub labels: BTreeMap<String, Scalar>,
    pub pos_x: Option<Scalar>,
    pub pos_y: Option<Scalar>,
    pub group: String,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, key: &str, value: impl Into<Scalar>) -> Self {
        self.labels.insert(key.to_string(), value.into());
        self
    }

    pub fn with_position(mut self, x: impl Into<Scalar>, y: impl Into<Scalar>) -> Self {
        self.pos_x = Some(x.into());
        self.pos_y = Some(y.into());
        self
    }
}

/// One side of a link, written `node:interface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub node: String,
    pub interface: String,
}

impl FromStr for Endpoint {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (node, interface) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TopologyError::InvalidEndpoint(s.to_string()))?;

        if node.is_empty() || interface.is_empty() || interface.contains(':') {
            return Err(TopologyError::InvalidEndpoint(s.to_string()));
        }

        Ok(Endpoint {
            node: node.to_string(),
            interface: interface.to_string(),
        })
    }
}

/// A link as described by a lab definition: two `node:interface` endpoints.
#[derive(Debug, Clone, Default)]
pub struct LinkSpec {
    pub endpoints: Vec<String>,
}

impl LinkSpec {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            endpoints: vec![a.into(), b.into()],
        }
    }
}

pub struct TopologyBuilder<'t> {
    theme: &'t Theme,
    prefix: String,
    lab_name: String,
    nodes: Vec<NodeSpec>,
    links: Vec<LinkSpec>,
}

impl<'t> TopologyBuilder<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            prefix: String::new(),
            lab_name: String::new(),
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Node names become `{prefix}-{lab_name}-{name}` unless `prefix` is empty.
    pub fn naming(mut self, prefix: &str, lab_name: &str) -> Self {
        self.prefix = prefix.to_string();
        self.lab_name = lab_name.to_string();
        self
    }

    pub fn node(mut self, spec: NodeSpec) -> Self {
        self.nodes.push(spec);
        self
    }

    pub fn link(mut self, spec: LinkSpec) -> Self {
        self.links.push(spec);
        self
    }

    pub fn format_node_name(&self, base_name: &str) -> String {
        if self.prefix.is_empty() {
            base_name.to_string()
        } else {
            format!("{}-{}-{}", self.prefix, self.lab_name, base_name)
        }
    }

    /// Builds the topology. Links are attached to both endpoints but not
    /// classified yet.
    pub fn build(self) -> Result<Topology, TopologyError> {
        let mut topology = Topology::new();

        for spec in &self.nodes {
            topology.add_node(self.build_node(spec))?;
        }

        for spec in &self.links {
            let Some((source, target)) = self.resolve_link(spec)? else {
                continue;
            };

            let (Some(source_id), Some(target_id)) = (
                topology.node_id(&source.node),
                topology.node_id(&target.node),
            ) else {
                warn!(
                    "Skipping link {}:{} <-> {}:{}, endpoint not in topology",
                    source.node, source.interface, target.node, target.interface
                );
                continue;
            };

            topology.connect(source_id, target_id, self.link_attrs(source, target))?;
        }

        debug!(
            "Built topology with {} nodes and {} links",
            topology.node_count(),
            topology.link_count()
        );
        Ok(topology)
    }

    fn build_node(&self, spec: &NodeSpec) -> Node {
        let attrs = NodeAttrs {
            mgmt_ipv4: spec.mgmt_ipv4.clone(),
            graph_level: spec.labels.get(LEVEL_LABEL).cloned(),
            graph_icon: spec.labels.get(ICON_LABEL).map(ToString::to_string),
            base_style: self.theme.base_style.clone(),
            custom_style: self.theme.custom_style_for(&spec.kind).to_string(),
            width: Some(self.theme.node_width.into()),
            height: Some(self.theme.node_height.into()),
            pos_x: spec.pos_x.clone(),
            pos_y: spec.pos_y.clone(),
            group: spec.group.clone(),
        };

        Node::new(
            self.format_node_name(&spec.name),
            spec.name.as_str(),
            spec.kind.as_str(),
            attrs,
        )
    }

    /// Parses both endpoints and applies the naming scheme.
    /// `Ok(None)` for a link without endpoints.
    fn resolve_link(&self, spec: &LinkSpec) -> Result<Option<(Endpoint, Endpoint)>, TopologyError> {
        match spec.endpoints.as_slice() {
            [] => Ok(None),
            [a, b] => {
                let mut source: Endpoint = a.parse()?;
                let mut target: Endpoint = b.parse()?;
                source.node = self.format_node_name(&source.node);
                target.node = self.format_node_name(&target.node);
                Ok(Some((source, target)))
            }
            other => Err(TopologyError::EndpointCount(other.len())),
        }
    }

    fn link_attrs(&self, source: Endpoint, target: Endpoint) -> LinkAttrs {
        LinkAttrs {
            source_intf: source.interface,
            target_intf: target.interface,
            styles: LinkStyles {
                base_style: Some(self.theme.base_style.clone()),
                link_style: Some(self.theme.link_style.clone()),
                src_label_style: Some(self.theme.src_label_style.clone()),
                trgt_label_style: Some(self.theme.trgt_label_style.clone()),
            },
            ..LinkAttrs::default()
        }
    }
}
