//! Error types shared by the handler stack and process bootstrap.

use std::path::PathBuf;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening a `.wasm` file on the fast path failed.
    ///
    /// Under the default policy this is returned from the service, which makes
    /// hyper drop the connection without writing a response.
    #[error("cannot open wasm file '{}': {source}", path.display())]
    WasmOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot resolve serving root: {0}")]
    RootDir(String),
}

pub type Result<T> = std::result::Result<T, ServeError>;
