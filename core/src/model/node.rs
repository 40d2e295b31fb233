use std::fmt;

use topograph_common::scalar::{self, OptDisplay, Scalar};

use super::link::LinkId;

/// Index of a [`Node`] inside its [`crate::topology::Topology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Optional, loosely typed node attributes.
///
/// Numeric fields accept any [`Scalar`] and are coerced when the node is
/// built; see [`topograph_common::scalar`] for the rules.
#[derive(Debug, Clone, Default)]
pub struct NodeAttrs {
    pub mgmt_ipv4: Option<String>,
    pub graph_level: Option<Scalar>,
    pub graph_icon: Option<String>,
    pub base_style: String,
    pub custom_style: String,
    pub width: Option<Scalar>,
    pub height: Option<Scalar>,
    pub pos_x: Option<Scalar>,
    pub pos_y: Option<Scalar>,
    pub group: String,
}

/// A topology vertex.
///
/// Holds the ids of its attached links in attachment order. Queries that need
/// to look at those links go through [`crate::topology::NodeView`].
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub label: String,
    pub kind: String,
    pub mgmt_ipv4: Option<String>,
    pub graph_level: Option<i64>,
    pub graph_icon: Option<String>,
    pub base_style: String,
    pub custom_style: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub pos_x: Option<i64>,
    pub pos_y: Option<i64>,
    pub group: String,
    links: Vec<LinkId>,
}

impl Node {
    /// Builds a node. Never fails: malformed numeric attributes become unset.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: impl Into<String>,
        attrs: NodeAttrs,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: kind.into(),
            mgmt_ipv4: attrs.mgmt_ipv4,
            graph_level: scalar::parse_level(attrs.graph_level.as_ref()),
            graph_icon: attrs.graph_icon,
            base_style: attrs.base_style,
            custom_style: attrs.custom_style,
            width: scalar::parse_coordinate(attrs.width.as_ref()),
            height: scalar::parse_coordinate(attrs.height.as_ref()),
            pos_x: scalar::parse_coordinate(attrs.pos_x.as_ref()),
            pos_y: scalar::parse_coordinate(attrs.pos_y.as_ref()),
            group: attrs.group,
            links: Vec::new(),
        }
    }

    /// Appends `link`. Whether the link actually touches this node is the caller's concern.
    pub fn add_link(&mut self, link: LinkId) {
        self.links.push(link);
    }

    pub fn link_ids(&self) -> &[LinkId] {
        &self.links
    }

    pub fn get_connection_count(&self) -> usize {
        self.links.len()
    }

    pub fn set_base_style(&mut self, style: impl Into<String>) {
        self.base_style = style.into();
    }

    pub fn set_custom_style(&mut self, style: impl Into<String>) {
        self.custom_style = style.into();
    }

    /// Base and custom style followed by placement, e.g.
    /// `shape=image;pos_x=10;pos_y=None;width=75;height=75;`.
    ///
    /// Unset values are written as `None`.
    pub fn generate_style_string(&self) -> String {
        format!(
            "{}{}pos_x={};pos_y={};width={};height={};",
            self.base_style,
            self.custom_style,
            OptDisplay(self.pos_x),
            OptDisplay(self.pos_y),
            OptDisplay(self.width),
            OptDisplay(self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defensive_construction() {
        let node = Node::new(
            "clab-lab-leaf1",
            "leaf1",
            "nokia_srlinux",
            NodeAttrs {
                graph_level: Some("two".into()),
                pos_x: Some("3.7".into()),
                pos_y: Some("".into()),
                width: Some(75.into()),
                ..NodeAttrs::default()
            },
        );

        assert_eq!(node.graph_level, None);
        assert_eq!(node.pos_x, Some(3));
        assert_eq!(node.pos_y, None);
        assert_eq!(node.width, Some(75));
        assert_eq!(node.height, None);
        assert_eq!(node.group, "");
        assert_eq!(node.get_connection_count(), 0);
    }

    #[test]
    fn test_zero_level_is_kept() {
        let node = Node::new(
            "spine",
            "spine",
            "linux",
            NodeAttrs {
                graph_level: Some(0.into()),
                ..NodeAttrs::default()
            },
        );
        assert_eq!(node.graph_level, Some(0));
    }

    #[test]
    fn test_style_string() {
        let mut node = Node::new(
            "r1",
            "r1",
            "linux",
            NodeAttrs {
                pos_x: Some(10.into()),
                width: Some(75.into()),
                height: Some("75".into()),
                ..NodeAttrs::default()
            },
        );
        node.set_base_style("shape=image;");
        node.set_custom_style("image=router.svg;");

        assert_eq!(
            node.generate_style_string(),
            "shape=image;image=router.svg;pos_x=10;pos_y=None;width=75;height=75;"
        );
    }

    #[test]
    fn test_add_link_keeps_order() {
        let mut node = Node::new("r1", "r1", "linux", NodeAttrs::default());
        node.add_link(LinkId(4));
        node.add_link(LinkId(1));
        node.add_link(LinkId(4));

        assert_eq!(node.link_ids(), &[LinkId(4), LinkId(1), LinkId(4)]);
        assert_eq!(node.get_connection_count(), 3);
    }
}
