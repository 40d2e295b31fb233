use colored::*;
use topograph_common::config::{Config, Theme};
use topograph_core::levels::GraphLevelManager;
use topograph_core::model::node::NodeId;
use topograph_core::topology::Topology;
use tracing::info;

use crate::commands::{TopologyArgs, input};
use crate::terminal::{format, print};

type Detail = (String, ColoredString);

pub fn levels(args: &TopologyArgs, cfg: &Config) -> anyhow::Result<()> {
    let theme = Theme::default();
    let mut topology: Topology = input::build_topology(args, &[], cfg, &theme)?;
    let sorted: Vec<NodeId> = GraphLevelManager::new().assign_graph_levels(&mut topology);

    print::header("graph levels", cfg.quiet);

    let groups: Vec<&[NodeId]> = sorted
        .chunk_by(|a, b| topology.node(*a).graph_level == topology.node(*b).graph_level)
        .collect();

    for (idx, group) in groups.iter().enumerate() {
        print_level(&topology, group, cfg);
        if idx + 1 != groups.len() && cfg.quiet < 2 {
            print::print("");
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    info!(
        "{} assigned to {}",
        format::plural(topology.node_count(), "node"),
        format::plural(groups.len(), "level")
    );
    Ok(())
}

fn print_level(topology: &Topology, ids: &[NodeId], cfg: &Config) {
    let Some(first) = ids.first() else {
        return;
    };
    let level = format::level(topology.node(*first).graph_level);

    if cfg.quiet >= 2 {
        for id in ids {
            print::print(&format!("{} {}", level, topology.node(*id).name));
        }
        return;
    }

    print::tree_head(&format!("L{level}"), &format::plural(ids.len(), "node"));
    let details: Vec<Detail> = ids.iter().map(|id| node_detail(topology, *id)).collect();
    print::as_tree_one_level(details);
}

fn node_detail(topology: &Topology, id: NodeId) -> Detail {
    let node = topology.node(id);
    let summary: String = format!(
        "{}, {} up, {} down, {} lateral, {} within level",
        format::plural(node.get_connection_count(), "link"),
        node.get_upstream_links().len(),
        node.get_downstream_links().len(),
        node.get_lateral_links().len(),
        node.get_connection_count_within_level(),
    );
    (node.name.clone(), summary.normal())
}
