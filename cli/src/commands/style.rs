use colored::*;
use topograph_common::config::{Config, Theme};
use topograph_core::topology::Topology;
use tracing::info;

use crate::commands::TopologyArgs;
use crate::commands::input::{self, KindStyleArg, PositionArg};
use crate::terminal::{format, print};

pub fn style(
    args: &TopologyArgs,
    positions: &[PositionArg],
    base_style: &str,
    kind_styles: &[KindStyleArg],
    cfg: &Config,
) -> anyhow::Result<()> {
    let mut theme = Theme {
        base_style: base_style.to_string(),
        ..Theme::default()
    };
    for kind_style in kind_styles {
        theme = theme.with_custom_style(&kind_style.kind, &kind_style.style)?;
    }

    let topology: Topology = input::build_topology(args, positions, cfg, &theme)?;

    print::header("node styles", cfg.quiet);
    for node in topology.nodes() {
        let style: String = node.generate_style_string();
        match cfg.quiet {
            2 => print::print(&format!("{} {}", node.name, style)),
            _ => {
                print::tree_head(&node.label, &node.name);
                print::as_tree_one_level(vec![("Style".to_string(), style.normal())]);
            }
        }
    }

    if topology.link_count() > 0 {
        print::header("link styles", cfg.quiet);
    }
    for link in topology.links() {
        let source = topology.node(link.source);
        let target = topology.node(link.target);
        let style: String = link.generate_style_string();

        if cfg.quiet >= 2 {
            print::print(&format!("{} {} {}", source.name, target.name, style));
            continue;
        }

        let mut details = vec![("Style".to_string(), style.normal())];
        if let Some(labels) = link.get_label_positions(&source, &target, &theme) {
            let at = |(x, y): (f64, f64)| format!("({x:.1}, {y:.1})");
            details.push((link.source_intf.clone(), at(labels.source).normal()));
            details.push((link.target_intf.clone(), at(labels.target).normal()));
        }
        print::tree_head(&link.id.0.to_string(), &format!("{} ⇄ {}", source.name, target.name));
        print::as_tree_one_level(details);
    }

    info!(
        "Generated styles for {} and {}",
        format::plural(topology.node_count(), "node"),
        format::plural(topology.link_count(), "link")
    );
    Ok(())
}
