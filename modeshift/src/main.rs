use clap::Parser;
use modeshift::app::ScenarioApp;

fn main() {
    env_logger::init();
    log::debug!("starting app at {}", chrono::Local::now().to_rfc3339());
    let args = ScenarioApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
