mod app;
mod data;
mod eval;
mod paths;
mod report;
mod state;
mod ui;

use anyhow::Result;

use app::FairlensApp;
use paths::Layout;

fn main() -> Result<()> {
    env_logger::init();

    let layout = Layout::from_env();
    log::info!("Workspace root: {}", layout.root().display());

    FairlensApp::new(layout).run()
}
