//! `.wasm` fast path
//!
//! `GET` requests whose target ends in `.wasm` are answered directly with the
//! raw file bytes and `Content-Type: application/wasm`; everything else goes to
//! the wrapped handler.

use super::{Handler, HandlerFuture, HandlerResult};
use crate::config::MissingWasmPolicy;
use crate::error::ServeError;
use crate::http;
use crate::logger;
use hyper::body::Bytes;
use hyper::{Method, Request, Uri};
use std::io;
use std::path::{Component, Path, PathBuf};

pub struct WasmOverride<H> {
    inner: H,
    root: PathBuf,
    missing: MissingWasmPolicy,
}

impl<H: Handler> WasmOverride<H> {
    pub fn new(inner: H, root: impl Into<PathBuf>, missing: MissingWasmPolicy) -> Self {
        Self {
            inner,
            root: root.into(),
            missing,
        }
    }

    async fn handle_get(&self, target: &str) -> HandlerResult {
        let result = match resolve_wasm_path(&self.root, target) {
            Some(path) => tokio::fs::read(&path)
                .await
                .map_err(|source| (path, source)),
            None => Err((
                self.root.join(target.trim_start_matches('/')),
                io::Error::new(io::ErrorKind::InvalidInput, "path leaves the serving root"),
            )),
        };

        match result {
            Ok(content) => Ok(http::build_wasm_response(Bytes::from(content))),
            Err((path, source)) => match self.missing {
                MissingWasmPolicy::Abort => Err(ServeError::WasmOpen { path, source }),
                MissingWasmPolicy::NotFound => {
                    logger::log_warning(&format!(
                        "cannot open wasm file '{}': {source}",
                        path.display()
                    ));
                    Ok(http::build_404_response("File not found", false))
                }
            },
        }
    }
}

impl<H: Handler> Handler for WasmOverride<H> {
    fn handle<'a>(&'a self, req: &'a Request<()>) -> HandlerFuture<'a> {
        Box::pin(async move {
            let target = request_target(req.uri());
            if req.method() == Method::GET && target.ends_with(".wasm") {
                return self.handle_get(target).await;
            }
            self.inner.handle(req).await
        })
    }
}

/// The request target as received: path plus query
fn request_target(uri: &Uri) -> &str {
    uri.path_and_query().map_or("/", |pq| pq.as_str())
}

/// Join the target (leading `/` stripped, not decoded) onto `root`.
///
/// Returns `None` for targets that would resolve outside `root`.
fn resolve_wasm_path(root: &Path, target: &str) -> Option<PathBuf> {
    let relative = Path::new(target.strip_prefix('/').unwrap_or(target));
    let mut path = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(path)
}
