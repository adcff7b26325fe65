use clap::Parser;
use sdg::app::ScotlandApp;

fn main() {
    env_logger::init();
    let args = ScotlandApp::parse();
    if let Err(e) = args.run() {
        log::error!("sdg failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
