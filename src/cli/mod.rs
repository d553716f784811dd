pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::graph::{FilterCriteria, Selection, TopicId};

#[derive(Parser)]
#[command(name = "senategraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore how legislators tweet about political topics", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph document to read (overrides `data_path` in the config file)
    #[arg(long, global = true, env = "SENATEGRAPH_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long, default_value = "false")]
        force: bool,
    },

    /// Start the interactive dashboard
    Serve {
        /// Address to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to serve the dashboard on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List legislators or topics available for selection
    Options {
        /// List topics instead of legislators
        #[arg(long, default_value = "false")]
        topics: bool,
    },

    /// Print the canvas layout for a filter and selection
    Layout {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the detail panel for a node or an edge
    #[command(group(
        clap::ArgGroup::new("target")
            .required(true)
            .args(["node", "edge"]),
    ))]
    Detail {
        /// Node id (legislator id, or topic id with --topic-node)
        #[arg(long)]
        node: Option<String>,

        /// Treat --node as a topic id
        #[arg(long, requires = "node", default_value = "false")]
        topic_node: bool,

        /// Edge given as LEGISLATOR TOPIC
        #[arg(long, num_args = 2, value_names = ["LEGISLATOR", "TOPIC"])]
        edge: Option<Vec<String>>,
    },

    /// Show graph statistics
    Stats {
        /// Number of entries in each ranking
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Export the filtered graph to various formats
    Export {
        /// Export format
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Filter panel settings, as command-line flags
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Lower importance bound, percent
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min: u8,

    /// Upper importance bound, percent
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub max: u8,

    /// Legislator id to keep (repeatable; none means all)
    #[arg(long = "legislator")]
    pub legislators: Vec<String>,

    /// Topic id to keep (repeatable; none means all)
    #[arg(long = "topic")]
    pub topics: Vec<TopicId>,
}

impl FilterArgs {
    pub fn legislator_selection(&self) -> Selection<String> {
        Selection::from_ids(Some(self.legislators.clone()))
    }

    pub fn topic_selection(&self) -> Selection<TopicId> {
        Selection::from_ids(Some(self.topics.clone()))
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_percent(
            [f64::from(self.min), f64::from(self.max)],
            self.legislator_selection(),
            self.topic_selection(),
        )
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Graphml,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Graphml => write!(f, "graphml"),
        }
    }
}
