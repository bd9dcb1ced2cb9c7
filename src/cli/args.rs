use crate::config::JoinPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "township-data")]
#[command(about = "Myanmar township dataset loader")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Loader configuration file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and join all township sources, then print a report
    Load {
        #[arg(short, long, help = "Directory holding the source files [default: .]")]
        data_dir: Option<PathBuf>,

        #[arg(short, long, help = "Join policy: left or inner")]
        join: Option<JoinPolicy>,

        #[arg(long, help = "Add township centroid longitude/latitude columns")]
        coordinates: bool,

        #[arg(short, long, default_value = "5")]
        sample: usize,
    },

    /// Print the column metadata catalog
    Metadata {
        #[arg(short, long, help = "Only show this output column")]
        column: Option<String>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}
