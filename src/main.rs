use std::path::PathBuf;
use std::sync::Arc;

use coi_server::config::{self, Config};
use coi_server::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    let root = server::enter_serving_root()?;

    // Create Tokio runtime, sized by the workers setting when present
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, root))
}

async fn async_main(cfg: Config, root: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    // Bind failure (e.g. port already in use) is fatal
    let listener = server::create_listener(cfg.socket_addr())?;
    logger::log_server_start(config::PORT);

    let state = Arc::new(server::AppState::new(cfg, root));
    server::start_server_loop(listener, state, server::shutdown_signal()).await;
    Ok(())
}
