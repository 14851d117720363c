use anyhow::Result;
use glowquad_engine::device::GpuInit;
use glowquad_engine::logging::{LoggingConfig, init_logging};
use glowquad_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::QuadApp;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        // Window, device, shader, and texture failures all land here; none
        // of them are recoverable.
        log::error!("fatal: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    Runtime::run(RuntimeConfig::default(), GpuInit::default(), QuadApp::new())
}
