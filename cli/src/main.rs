mod commands;
mod terminal;

use commands::{CommandLine, Commands, levels, links, style};
use topograph_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        prefix: commands.prefix,
        lab_name: commands.lab_name,
    };

    match commands.command {
        Commands::Levels { topology } => {
            print::header("assigning graph levels", cfg.quiet);
            levels::levels(&topology, &cfg)
        }
        Commands::Links { topology } => {
            print::header("classifying links", cfg.quiet);
            links::links(&topology, &cfg)
        }
        Commands::Style {
            topology,
            positions,
            base_style,
            kind_styles,
        } => style::style(&topology, &positions, &base_style, &kind_styles, &cfg),
    }
}
