//! Static file server for cross-origin isolated WebAssembly apps.
//!
//! Serves a directory over HTTP/1.1, adds the COEP, COOP and CSP headers that
//! `SharedArrayBuffer` needs to every response, and serves `.wasm` files as
//! `application/wasm`.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use error::{Result, ServeError};
