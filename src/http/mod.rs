//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the handlers: MIME detection, path
//! translation, conditional requests, directory listings and response builders.

pub mod cache;
pub mod listing;
pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_501_response, build_error_response,
    build_file_response, build_html_response, build_redirect_response, build_wasm_response,
};
