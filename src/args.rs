use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PREFIX: &str = "RoadNetwork";

/// Read a road network description and print it back in normal form.
#[derive(Parser, Debug)]
#[clap(name = "road-network", version)]
pub struct Cli {
    /// Network description file; only the first one is read
    #[clap(name = "FILE", value_parser)]
    pub files: Vec<PathBuf>,

    /// Label in front of every warning
    #[clap(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Log parser activity to stderr
    #[clap(short, long)]
    pub verbose: bool,
}
