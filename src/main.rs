use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;

pub mod args;
pub mod diagnostics;
pub mod logging;
pub mod model;
pub mod tokens;

use diagnostics::Diagnostics;
use tokens::Tokens;

fn main() {
    let cli = args::Cli::parse();

    logging::init(cli.verbose);

    let mut diagnostics = Diagnostics::default();
    diagnostics.set_prefix(cli.prefix.as_str());

    match read_network(&cli, &mut diagnostics) {
        Ok(network) => network.print(),
        Err(error) => {
            tracing::debug!("{error:#}");
            diagnostics.warn(error.to_string());
            process::exit(1);
        }
    }
}

fn read_network(cli: &args::Cli, diagnostics: &mut Diagnostics) -> Result<model::Network> {
    let path = match cli.files.as_slice() {
        [] => bail!("missing argument"),
        [path] => path,
        [path, ..] => {
            diagnostics.warn("extra arguments");
            path
        }
    };

    let input = fs::read_to_string(path).context("can't open file")?;

    tracing::debug!(path = %path.display(), bytes = input.len(), "reading network");

    Ok(model::build_network(&mut Tokens::new(&input), diagnostics))
}
