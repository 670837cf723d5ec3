//! Request handler module
//!
//! Handlers are stacked by wrapping: each layer holds the layer below it and
//! delegates whatever it does not handle itself.
//!
//! ```text
//! IsolationHeaders -> WasmOverride -> StaticFiles
//! ```

pub mod isolation;
pub mod static_files;
pub mod wasm;

use crate::config::Config;
use crate::error::ServeError;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

pub use isolation::{finalize_headers, IsolationHeaders};
pub use static_files::StaticFiles;
pub use wasm::WasmOverride;

pub type HandlerResult = Result<Response<Full<Bytes>>, ServeError>;
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = HandlerResult> + Send + 'a>>;

/// A request handler. The request body is never read, so handlers only see
/// the request head.
pub trait Handler: Send + Sync {
    fn handle<'a>(&'a self, req: &'a Request<()>) -> HandlerFuture<'a>;
}

/// The full handler stack type served by this crate
pub type DefaultStack = IsolationHeaders<WasmOverride<StaticFiles>>;

/// Build the handler stack serving files under `root`
pub fn build_stack(root: impl Into<PathBuf>, config: &Config) -> DefaultStack {
    let root = root.into();
    let files = StaticFiles::new(root.clone());
    IsolationHeaders::new(WasmOverride::new(files, root, config.wasm.missing))
}
