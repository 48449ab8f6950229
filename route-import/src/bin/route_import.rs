//! entry point for the route administration import utilities: shapefile
//! geometry normalization and validity window overlap checking.
use clap::Parser;
use route_import::app::ImportApp;

fn main() {
    env_logger::init();
    let args = ImportApp::parse();
    args.op.run()
}
