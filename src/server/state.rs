// Application state module
// Immutable per-process state shared by all connections

use std::path::PathBuf;

use crate::config::Config;
use crate::handler::{self, Handler};

/// Application state
pub struct AppState {
    pub config: Config,
    pub handler: Box<dyn Handler>,
}

impl AppState {
    /// Build the state with the default handler stack rooted at `root`
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        let handler = Box::new(handler::build_stack(root, &config));
        Self { config, handler }
    }
}
