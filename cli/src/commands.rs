pub mod input;
pub mod levels;
pub mod links;
pub mod style;

use clap::{ArgAction, Args, Parser, Subcommand};

use input::{KindStyleArg, LinkArg, NodeArg, PositionArg};

#[derive(Parser)]
#[command(name = "topograph")]
#[command(about = "Assigns graph levels to a network topology and classifies its links.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output (-q drops headers, -qq prints results only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Prefix for node names; names become PREFIX-LAB-NAME
    #[arg(long, default_value = "", global = true)]
    pub prefix: String,

    /// Lab name used together with --prefix
    #[arg(long, default_value = "", global = true)]
    pub lab_name: String,
}

#[derive(Args, Clone)]
pub struct TopologyArgs {
    /// A node, optionally with a kind and a graph level
    #[arg(short, long = "node", value_name = "NAME[/KIND][@LEVEL]", required = true)]
    pub nodes: Vec<NodeArg>,

    /// A link between two node interfaces
    #[arg(short, long = "link", value_name = "NODE:IF,NODE:IF")]
    pub links: Vec<LinkArg>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign graph levels and list nodes per level
    #[command(alias = "l")]
    Levels {
        #[command(flatten)]
        topology: TopologyArgs,
    },
    /// Classify links as upstream, downstream or lateral
    #[command(alias = "k")]
    Links {
        #[command(flatten)]
        topology: TopologyArgs,
    },
    /// Print the style strings handed to the diagram renderer
    #[command(alias = "s")]
    Style {
        #[command(flatten)]
        topology: TopologyArgs,

        /// Position of a node on the canvas
        #[arg(long = "pos", value_name = "NAME=X,Y")]
        positions: Vec<PositionArg>,

        /// Style fragment shared by all nodes and links
        #[arg(long, default_value = "")]
        base_style: String,

        /// Style of a node kind, merged over the base style
        #[arg(long = "kind-style", value_name = "KIND=STYLE")]
        kind_styles: Vec<KindStyleArg>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
