use colored::*;
use topograph_common::config::{Config, Theme};
use topograph_core::levels::GraphLevelManager;
use topograph_core::model::link::Link;
use topograph_core::topology::Topology;
use tracing::info;

use crate::commands::{TopologyArgs, input};
use crate::terminal::{format, print};

pub fn links(args: &TopologyArgs, cfg: &Config) -> anyhow::Result<()> {
    let theme = Theme::default();
    let mut topology: Topology = input::build_topology(args, &[], cfg, &theme)?;
    GraphLevelManager::new().assign_graph_levels(&mut topology);

    print::header("link directions", cfg.quiet);

    if topology.link_count() == 0 {
        print::no_results();
        return Ok(());
    }

    for link in topology.links() {
        match cfg.quiet {
            2 => print::print(&format!(
                "{} {} {}",
                endpoint_name(&topology, link, true),
                format::direction(link.direction()),
                endpoint_name(&topology, link, false)
            )),
            _ => print_link_tree(&topology, link),
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    info!("{} classified", format::plural(topology.link_count(), "link"));
    Ok(())
}

fn print_link_tree(topology: &Topology, link: &Link) {
    let title: String = format!(
        "{}:{} ⇄ {}:{}",
        endpoint_name(topology, link, true),
        link.source_intf,
        endpoint_name(topology, link, false),
        link.target_intf
    );
    print::tree_head(&link.id.0.to_string(), &title);

    let source_level = topology.node(link.source).graph_level;
    let target_level = topology.node(link.target).graph_level;
    let levels: ColoredString = format!(
        "{} → {}",
        format::level(source_level),
        format::level(target_level)
    )
    .normal();

    print::as_tree_one_level(vec![
        ("Direction".to_string(), format::direction(link.direction())),
        ("Diff".to_string(), format::level_diff(link.level_diff())),
        ("Levels".to_string(), levels),
    ]);
}

fn endpoint_name(topology: &Topology, link: &Link, source: bool) -> String {
    let id = if source { link.source } else { link.target };
    topology.node(id).name.clone()
}
