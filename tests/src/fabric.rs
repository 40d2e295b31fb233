#![cfg(test)]
use topograph_common::config::{LabelAlignment, Theme};
use topograph_core::builder::{LEVEL_LABEL, LinkSpec, NodeSpec, TopologyBuilder};
use topograph_core::levels::GraphLevelManager;
use topograph_core::model::link::Direction;
use topograph_core::topology::Topology;

fn theme() -> anyhow::Result<Theme> {
    let theme = Theme {
        base_style: "shape=image;labelPosition=bottom;".to_string(),
        link_style: "endArrow=none;".to_string(),
        label_alignment: LabelAlignment::Left,
        ..Theme::default()
    }
    .with_custom_style("nokia_srlinux", "image=srl.svg")?;
    Ok(theme)
}

/// Two spines, two leaves, one host per leaf; no levels given.
fn unlevelled_fabric(theme: &Theme) -> anyhow::Result<Topology> {
    let topology = TopologyBuilder::new(theme)
        .naming("clab", "dc")
        .node(NodeSpec::new("spine1", "nokia_srlinux"))
        .node(NodeSpec::new("spine2", "nokia_srlinux"))
        .node(NodeSpec::new("leaf1", "nokia_srlinux"))
        .node(NodeSpec::new("leaf2", "nokia_srlinux"))
        .node(NodeSpec::new("client1", "linux"))
        .node(NodeSpec::new("client2", "linux"))
        .link(LinkSpec::new("spine1:e1-1", "leaf1:e1-49"))
        .link(LinkSpec::new("spine1:e1-2", "leaf2:e1-49"))
        .link(LinkSpec::new("spine2:e1-1", "leaf1:e1-50"))
        .link(LinkSpec::new("spine2:e1-2", "leaf2:e1-50"))
        .link(LinkSpec::new("leaf1:e1-1", "client1:eth1"))
        .link(LinkSpec::new("leaf2:e1-1", "client2:eth1"))
        .link(LinkSpec::new("leaf2:e1-2", "monitor:eth1"))
        .build()?;
    Ok(topology)
}

fn level_of(topology: &Topology, name: &str) -> Option<i64> {
    topology
        .node_by_name(&format!("clab-dc-{name}"))
        .and_then(|node| node.graph_level)
}

#[test]
fn fabric_levels_are_inferred() -> anyhow::Result<()> {
    let theme = theme()?;
    let mut topology = unlevelled_fabric(&theme)?;

    // The link to `monitor` is dropped, it is not part of the diagram
    assert_eq!(topology.link_count(), 6);

    let sorted = GraphLevelManager::new().assign_graph_levels(&mut topology);

    assert_eq!(level_of(&topology, "spine1"), Some(0));
    assert_eq!(level_of(&topology, "spine2"), Some(0));
    assert_eq!(level_of(&topology, "leaf1"), Some(1));
    assert_eq!(level_of(&topology, "leaf2"), Some(1));
    assert_eq!(level_of(&topology, "client1"), Some(2));
    assert_eq!(level_of(&topology, "client2"), Some(2));

    let names: Vec<&str> = sorted
        .iter()
        .map(|id| topology.node(*id).node().label.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["spine1", "spine2", "leaf1", "leaf2", "client1", "client2"]
    );

    let leaf1 = topology.node_by_name("clab-dc-leaf1").unwrap();
    assert_eq!(leaf1.get_upstream_links().len(), 2);
    assert_eq!(leaf1.get_downstream_links().len(), 1);
    assert_eq!(leaf1.get_upstream_links_towards_level(0).len(), 2);
    assert_eq!(leaf1.get_neighbors().len(), 3);

    assert!(
        topology
            .links()
            .iter()
            .all(|link| link.direction() == Some(Direction::Downstream))
    );
    Ok(())
}

#[test]
fn explicit_levels_drive_direction() -> anyhow::Result<()> {
    let theme = theme()?;
    // Declared bottom-up on purpose
    let mut topology = TopologyBuilder::new(&theme)
        .node(NodeSpec::new("host", "linux").with_label(LEVEL_LABEL, 3))
        .node(NodeSpec::new("leaf", "nokia_srlinux").with_label(LEVEL_LABEL, "2"))
        .node(NodeSpec::new("border", "nokia_srlinux").with_label(LEVEL_LABEL, 2.0))
        .link(LinkSpec::new("host:eth1", "leaf:e1-1"))
        .link(LinkSpec::new("leaf:e1-2", "border:e1-2"))
        .build()?;

    GraphLevelManager::new().assign_graph_levels(&mut topology);

    let host = topology.node_by_name("host").unwrap();
    let leaf = topology.node_by_name("leaf").unwrap();
    assert_eq!(host.graph_level, Some(3));
    assert_eq!(host.get_upstream_links().len(), 1);
    assert_eq!(leaf.get_downstream_links().len(), 1);
    assert_eq!(leaf.get_lateral_links().len(), 1);
    assert_eq!(topology.links()[0].level_diff(), Some(-1));
    Ok(())
}

#[test]
fn style_strings_for_the_renderer() -> anyhow::Result<()> {
    let theme = theme()?;
    let topology = TopologyBuilder::new(&theme)
        .node(NodeSpec::new("spine", "nokia_srlinux").with_position(100, 0))
        .node(NodeSpec::new("leaf", "linux").with_position("100", "200.6"))
        .link(LinkSpec::new("spine:e1-1", "leaf:eth1"))
        .build()?;

    let spine = topology.node_by_name("spine").unwrap();
    assert_eq!(
        spine.generate_style_string(),
        "shape=image;labelPosition=bottom;shape=image;labelPosition=bottom;image=srl.svg;\
         pos_x=100;pos_y=0;width=75;height=75;"
    );

    let leaf = topology.node_by_name("leaf").unwrap();
    assert_eq!(
        leaf.generate_style_string(),
        "shape=image;labelPosition=bottom;pos_x=100;pos_y=200;width=75;height=75;"
    );

    let link = &topology.links()[0];
    assert_eq!(
        link.generate_style_string(),
        "shape=image;labelPosition=bottom;endArrow=none;entryY=0;exitY=0;entryX=0;exitX=0;"
    );

    let labels = link
        .get_label_positions(&spine, &leaf, &theme)
        .expect("both nodes are placed");
    // Straight down: offset along y, shifted left by label width + 2
    assert_eq!(labels.source, (100.0 - 21.0, 20.0 - 7.0));
    assert_eq!(labels.target, (100.0 - 21.0, 180.0 - 7.0));
    Ok(())
}
