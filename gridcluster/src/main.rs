use clap::Parser;
use gridcluster::app::GridClusterApp;

fn main() {
    env_logger::init();
    let args = GridClusterApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("gridcluster failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
