//! Cross-origin isolation headers
//!
//! Browsers only expose `SharedArrayBuffer` to cross-origin isolated pages,
//! which requires COEP and COOP on the document and its subresources. Every
//! response leaving the handler stack passes through [`finalize_headers`].

use super::{Handler, HandlerFuture};
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Request, Response};

pub const CROSS_ORIGIN_EMBEDDER_POLICY: &str = "require-corp";
pub const CROSS_ORIGIN_OPENER_POLICY: &str = "same-origin";
pub const CONTENT_SECURITY_POLICY: &str =
    "default-src 'self' https: data: blob: 'unsafe-inline' 'unsafe-eval'; worker-src 'self' blob:;";

/// Header name/value pairs set on every response
pub const ISOLATION_HEADERS: [(&str, &str); 3] = [
    ("cross-origin-embedder-policy", CROSS_ORIGIN_EMBEDDER_POLICY),
    ("cross-origin-opener-policy", CROSS_ORIGIN_OPENER_POLICY),
    ("content-security-policy", CONTENT_SECURITY_POLICY),
];

/// Set the three isolation headers, replacing any earlier values
pub fn finalize_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    for (name, value) in ISOLATION_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

/// Wraps a handler and finalizes the headers of everything it returns
pub struct IsolationHeaders<H> {
    inner: H,
}

impl<H: Handler> IsolationHeaders<H> {
    pub const fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for IsolationHeaders<H> {
    fn handle<'a>(&'a self, req: &'a Request<()>) -> HandlerFuture<'a> {
        Box::pin(async move {
            let mut response = self.inner.handle(req).await?;
            finalize_headers(&mut response);
            Ok(response)
        })
    }
}
