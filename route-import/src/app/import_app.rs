use super::ImportOperation;
use clap::Parser;

/// command line tool for importing transit route geometries and
/// checking assignment validity windows
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ImportApp {
    #[command(subcommand)]
    pub op: ImportOperation,
}
