#![cfg(test)]
use std::collections::HashSet;

use topograph_core::model::link::{Direction, LinkAttrs, LinkId};
use topograph_core::model::node::{Node, NodeAttrs, NodeId};
use topograph_core::topology::Topology;

fn node(name: &str, level: Option<i64>) -> Node {
    let attrs = NodeAttrs {
        graph_level: level.map(Into::into),
        ..NodeAttrs::default()
    };
    Node::new(name, name, "linux", attrs)
}

/// Small mesh with every kind of link, including a parallel pair.
fn mesh() -> (Topology, Vec<NodeId>) {
    let mut topo = Topology::new();
    let levels = [Some(0), Some(1), Some(1), Some(2), Some(0)];
    let ids: Vec<NodeId> = levels
        .iter()
        .enumerate()
        .map(|(idx, level)| topo.add_node(node(&format!("n{idx}"), *level)).unwrap())
        .collect();

    let pairs = [(0, 1), (0, 2), (1, 2), (1, 3), (3, 2), (4, 1), (1, 0), (4, 0)];
    for (a, b) in pairs {
        topo.connect(ids[a], ids[b], LinkAttrs::default()).unwrap();
    }
    (topo, ids)
}

fn snapshot(topo: &Topology) -> Vec<(Option<Direction>, Option<i64>)> {
    topo.links()
        .iter()
        .map(|link| (link.direction(), link.level_diff()))
        .collect()
}

#[test]
fn direction_follows_level_diff() {
    let (mut topo, ids) = mesh();
    for id in &ids {
        topo.update_links(*id).unwrap();
    }

    for link in topo.links() {
        let diff = link.level_diff().expect("all endpoints are levelled");
        let expected = match diff {
            d if d > 0 => Direction::Downstream,
            d if d < 0 => Direction::Upstream,
            _ => Direction::Lateral,
        };
        assert_eq!(link.direction(), Some(expected), "link {:?}", link.id);
    }
}

#[test]
fn classification_is_idempotent_and_order_independent() {
    let (mut forward, ids) = mesh();
    for id in &ids {
        forward.update_links(*id).unwrap();
    }
    let first = snapshot(&forward);

    for id in &ids {
        forward.update_links(*id).unwrap();
    }
    assert_eq!(first, snapshot(&forward));

    let (mut backward, ids) = mesh();
    for id in ids.iter().rev() {
        backward.update_links(*id).unwrap();
    }
    assert_eq!(first, snapshot(&backward));

    let (mut bulk, _) = mesh();
    bulk.classify_all();
    assert_eq!(first, snapshot(&bulk));
}

#[test]
fn alternating_endpoints_agree() {
    let (mut topo, _) = mesh();
    let links: Vec<(LinkId, NodeId, NodeId)> = topo
        .links()
        .iter()
        .map(|link| (link.id, link.source, link.target))
        .collect();

    for (link, source, target) in links {
        topo.update_links(target).unwrap();
        let from_target = (topo.link(link).direction(), topo.link(link).level_diff());
        topo.update_links(source).unwrap();
        let from_source = (topo.link(link).direction(), topo.link(link).level_diff());
        assert_eq!(from_target, from_source);
    }
}

#[test]
fn directional_subsets_partition_all_links() {
    let (mut topo, ids) = mesh();
    topo.classify_all();

    for id in ids {
        let view = topo.node(id);
        let all: Vec<LinkId> = view.get_all_links().iter().map(|l| l.id).collect();
        let down: HashSet<LinkId> = view.get_downstream_links().iter().map(|l| l.id).collect();
        let up: HashSet<LinkId> = view.get_upstream_links().iter().map(|l| l.id).collect();
        let lateral: HashSet<LinkId> = view.get_lateral_links().iter().map(|l| l.id).collect();

        assert!(down.is_disjoint(&up));
        assert!(down.is_disjoint(&lateral));
        assert!(up.is_disjoint(&lateral));

        let union: HashSet<LinkId> = down.union(&up).chain(lateral.iter()).copied().collect();
        assert_eq!(union, all.iter().copied().collect::<HashSet<_>>());
        assert_eq!(view.get_connection_count(), all.len());
    }
}

#[test]
fn neighbors_have_no_duplicates_or_self() {
    let (topo, ids) = mesh();

    // n0 and n1 are joined twice
    let neighbors = topo.node(ids[0]).get_neighbors();
    assert_eq!(neighbors.len(), 3);
    assert!(!neighbors.contains(&ids[0]));
    assert!(neighbors.contains(&ids[1]));

    assert!(topo.node(ids[3]).is_connected_to(ids[2]));
    assert!(!topo.node(ids[3]).is_connected_to(ids[4]));
}

#[test]
fn connection_count_tracks_every_attachment() {
    let mut topo = Topology::new();
    let hub = topo.add_node(node("hub", Some(0))).unwrap();

    for idx in 0..5 {
        let spoke = topo.add_node(node(&format!("spoke{idx}"), Some(1))).unwrap();
        topo.connect(hub, spoke, LinkAttrs::default()).unwrap();
        assert_eq!(topo.node(hub).get_connection_count(), idx + 1);
    }

    // Attaching an existing link again is not validated, it just counts
    let first = topo.links()[0].id;
    topo.attach(hub, first).unwrap();
    assert_eq!(topo.node(hub).get_connection_count(), 6);
}

#[test]
fn two_upstream_one_lateral() {
    let mut topo = Topology::new();
    let c = topo.add_node(node("c", Some(2))).unwrap();
    let p1 = topo.add_node(node("p1", Some(1))).unwrap();
    let p2 = topo.add_node(node("p2", Some(0))).unwrap();
    let peer = topo.add_node(node("peer", Some(2))).unwrap();
    topo.connect(p1, c, LinkAttrs::default()).unwrap();
    topo.connect(c, p2, LinkAttrs::default()).unwrap();
    topo.connect(peer, c, LinkAttrs::default()).unwrap();
    topo.update_links(c).unwrap();

    let view = topo.node(c);
    assert_eq!(view.get_connection_count(), 3);
    assert_eq!(view.get_upstream_links().len(), 2);
    assert_eq!(view.get_lateral_links().len(), 1);
    assert_eq!(view.get_upstream_links_towards_level(1).len(), 1);
    assert_eq!(view.get_connection_count_within_level(), 3);
}

#[test]
fn malformed_level_is_unset_not_zero() {
    let mut topo = Topology::new();
    let bad = Node::new(
        "bad",
        "bad",
        "linux",
        NodeAttrs {
            graph_level: Some("spine".into()),
            pos_x: Some("3.7".into()),
            ..NodeAttrs::default()
        },
    );
    let bad = topo.add_node(bad).unwrap();
    let zero = topo.add_node(node("zero", Some(0))).unwrap();
    let link = topo.connect(zero, bad, LinkAttrs::default()).unwrap();
    topo.classify_all();

    assert_eq!(topo.node(bad).graph_level, None);
    assert_eq!(topo.node(bad).pos_x, Some(3));
    assert!(!topo.link(link).is_classified());
    assert!(topo.node(zero).get_downstream_links().is_empty());
    assert!(topo.node(bad).generate_style_string().contains("pos_y=None;"));
}
