//! finds the rail stations with at least one passenger departure in every
//! hour of the configured range and writes them with their coordinates.
use clap::Parser;
use sdg_rail::app::RailApp;

fn main() {
    env_logger::init();
    let args = RailApp::parse();
    if let Err(e) = args.run() {
        log::error!("sdg-rail failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
