//! Command line forms of nodes and links, and how they become a topology.

use std::str::FromStr;

use topograph_common::config::{Config, Theme};
use topograph_core::builder::{LEVEL_LABEL, LinkSpec, NodeSpec, TopologyBuilder};
use topograph_core::topology::Topology;

use super::TopologyArgs;

/// `NAME[/KIND][@LEVEL]`. The level is kept raw and coerced by the model,
/// so `spine@top` yields an unlevelled node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeArg {
    pub name: String,
    pub kind: String,
    pub level: Option<String>,
}

impl FromStr for NodeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, level) = match s.split_once('@') {
            Some((head, level)) => (head, Some(level.to_string())),
            None => (s, None),
        };
        let (name, kind) = head.split_once('/').unwrap_or((head, ""));

        if name.is_empty() {
            return Err(format!("invalid node: {s}"));
        }

        Ok(NodeArg {
            name: name.to_string(),
            kind: kind.to_string(),
            level,
        })
    }
}

/// `NODE:IF,NODE:IF`. Endpoints are validated when the topology is built.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkArg {
    pub a: String,
    pub b: String,
}

impl FromStr for LinkArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once(',') else {
            return Err(format!("invalid link, expected NODE:IF,NODE:IF: {s}"));
        };
        Ok(LinkArg {
            a: a.trim().to_string(),
            b: b.trim().to_string(),
        })
    }
}

/// `NAME=X,Y`. Coordinates stay raw for the same reason as node levels.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionArg {
    pub name: String,
    pub x: String,
    pub y: String,
}

impl FromStr for PositionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, coords) = s
            .split_once('=')
            .ok_or_else(|| format!("invalid position, expected NAME=X,Y: {s}"))?;
        let (x, y) = coords
            .split_once(',')
            .ok_or_else(|| format!("invalid position, expected NAME=X,Y: {s}"))?;

        Ok(PositionArg {
            name: name.to_string(),
            x: x.to_string(),
            y: y.to_string(),
        })
    }
}

/// `KIND=STYLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct KindStyleArg {
    pub kind: String,
    pub style: String,
}

impl FromStr for KindStyleArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, style) = s
            .split_once('=')
            .ok_or_else(|| format!("invalid kind style, expected KIND=STYLE: {s}"))?;
        Ok(KindStyleArg {
            kind: kind.to_string(),
            style: style.to_string(),
        })
    }
}

pub fn build_topology(
    args: &TopologyArgs,
    positions: &[PositionArg],
    cfg: &Config,
    theme: &Theme,
) -> anyhow::Result<Topology> {
    let mut builder = TopologyBuilder::new(theme).naming(&cfg.prefix, &cfg.lab_name);

    for node in &args.nodes {
        let mut spec = NodeSpec::new(node.name.as_str(), node.kind.as_str());
        if let Some(level) = &node.level {
            spec = spec.with_label(LEVEL_LABEL, level.as_str());
        }
        if let Some(pos) = positions.iter().rev().find(|pos| pos.name == node.name) {
            spec = spec.with_position(pos.x.as_str(), pos.y.as_str());
        }
        builder = builder.node(spec);
    }

    for link in &args.links {
        builder = builder.link(LinkSpec::new(link.a.as_str(), link.b.as_str()));
    }

    Ok(builder.build()?)
}
