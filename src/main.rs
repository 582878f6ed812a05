#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;

use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aip_obstacles::output::{render, Format};
use aip_obstacles::{ObstacleParser, SwedenObstacleParser};

#[derive(StructOpt)]
#[structopt(about = "Extracts the obstacle list (ENR 5.4) from the Swedish AIP")]
struct Args {
    /// Text extracted from the ENR 5.4 document
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    /// Where to write the obstacles, stdout when omitted
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// tsv or vrc
    #[structopt(short = "f", long = "format", default_value = "tsv")]
    format: Format,
    /// Write the obstacles decoded before a parse failure
    #[structopt(short = "p", long = "partial")]
    partial: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::from_args();

    let mut parser = SwedenObstacleParser::new();
    parser.load(&args.input)?;
    let parsed = parser.parse();

    if parsed.is_ok() || args.partial {
        let out = render(parser.obstacles(), args.format);
        match &args.output {
            Some(path) => File::create(path)?.write_all(out.as_bytes())?,
            None => std::io::stdout().write_all(out.as_bytes())?,
        }
        info!("Wrote {} obstacles", parser.obstacles().len());
    }

    parsed?;
    Ok(())
}
