//! Static file serving module
//!
//! Read-only file tree server: files, index pages, directory listings,
//! conditional GET and error pages for GET and HEAD.

use super::{Handler, HandlerFuture};
use crate::http::{self, cache, listing::ListingEntry, mime, path};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Generic static file handler rooted at a directory
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn serve(&self, req: &Request<()>) -> Response<Full<Bytes>> {
        let method = req.method();
        if method != Method::GET && method != Method::HEAD {
            return http::build_501_response(method.as_str());
        }
        let is_head = method == Method::HEAD;
        let request_path = req.uri().path();
        let fs_path = path::translate_path(&self.root, request_path);

        let Ok(metadata) = fs::metadata(&fs_path).await else {
            return http::build_404_response("File not found", is_head);
        };

        if metadata.is_dir() {
            if !request_path.ends_with('/') {
                let location = match req.uri().query() {
                    Some(query) => format!("{request_path}/?{query}"),
                    None => format!("{request_path}/"),
                };
                return http::build_redirect_response(&location);
            }
            for index in INDEX_FILES {
                let candidate = fs_path.join(index);
                if let Ok(index_meta) = fs::metadata(&candidate).await {
                    if index_meta.is_file() {
                        return serve_file(req, &candidate, &index_meta, is_head).await;
                    }
                }
            }
            return list_directory(&fs_path, request_path, is_head).await;
        }

        // A trailing slash names a directory; a file here is not a match
        if request_path.ends_with('/') {
            return http::build_404_response("File not found", is_head);
        }

        serve_file(req, &fs_path, &metadata, is_head).await
    }
}

impl Handler for StaticFiles {
    fn handle<'a>(&'a self, req: &'a Request<()>) -> HandlerFuture<'a> {
        Box::pin(async move { Ok(self.serve(req).await) })
    }
}

/// Serve one file, honouring `If-Modified-Since`
async fn serve_file(
    req: &Request<()>,
    file_path: &Path,
    metadata: &Metadata,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let modified = metadata.modified().ok();
    let last_modified = modified.map(cache::format_http_date);

    // If-None-Match takes precedence and is not supported, so it disables the date check
    if !req.headers().contains_key("if-none-match") {
        if let (Some(modified), Some(date)) = (modified, last_modified.as_deref()) {
            let since = req
                .headers()
                .get("if-modified-since")
                .and_then(|v| v.to_str().ok());
            if cache::is_not_modified(since, modified) {
                return http::build_304_response(date);
            }
        }
    }

    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return http::build_404_response("File not found", is_head);
        }
    };

    http::build_file_response(
        Bytes::from(content),
        mime::guess_type(file_path),
        last_modified.as_deref(),
        is_head,
    )
}

/// Render a listing of `dir`, or 404 if it cannot be read
async fn list_directory(dir: &Path, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let Ok(mut read_dir) = fs::read_dir(dir).await else {
        return http::build_404_response("No permission to list directory", is_head);
    };

    let mut entries = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => {
                let is_symlink = entry
                    .file_type()
                    .await
                    .is_ok_and(|t| t.is_symlink());
                // Follows symlinks, so a link to a directory lists as one
                let is_dir = fs::metadata(entry.path())
                    .await
                    .is_ok_and(|m| m.is_dir());
                entries.push(ListingEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_dir,
                    is_symlink,
                });
            }
            Ok(None) => break,
            Err(_) => {
                return http::build_404_response("No permission to list directory", is_head)
            }
        }
    }

    let display_path = path::percent_decode(request_path);
    let page = http::listing::render_directory_listing(&display_path, &entries);
    http::build_html_response(page, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn get(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        std::fs::write(dir.path().join("style.css"), "body{}").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("worker.js"), "x").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_serves_file_with_mime() {
        let dir = site();
        let files = StaticFiles::new(dir.path());
        let resp = files.serve(&get("/style.css")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/css");
        assert!(resp.headers().contains_key("last-modified"));
        assert_eq!(body_string(resp).await, "body{}");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = site();
        let resp = StaticFiles::new(dir.path()).serve(&get("/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(body_string(resp).await, "<h1>home</h1>");
    }

    #[tokio::test]
    async fn test_directory_redirect_keeps_query() {
        let dir = site();
        let resp = StaticFiles::new(dir.path())
            .serve(&get("/assets?x=1"))
            .await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()["location"], "/assets/?x=1");
    }

    #[tokio::test]
    async fn test_directory_listing() {
        let dir = site();
        let resp = StaticFiles::new(dir.path()).serve(&get("/assets/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Directory listing for /assets/"));
        assert!(body.contains("<a href=\"worker.js\">worker.js</a>"));
    }

    #[tokio::test]
    async fn test_missing_and_trailing_slash_on_file() {
        let dir = site();
        let files = StaticFiles::new(dir.path());
        assert_eq!(
            files.serve(&get("/missing.txt")).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            files.serve(&get("/style.css/")).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_if_modified_since() {
        let dir = site();
        let files = StaticFiles::new(dir.path());
        let future = cache::format_http_date(
            std::time::SystemTime::now() + std::time::Duration::from_secs(3600),
        );
        let req = Request::builder()
            .uri("/style.css")
            .header("If-Modified-Since", future.as_str())
            .body(())
            .unwrap();
        assert_eq!(files.serve(&req).await.status(), StatusCode::NOT_MODIFIED);

        let req = Request::builder()
            .uri("/style.css")
            .header("If-Modified-Since", future.as_str())
            .header("If-None-Match", "\"abc\"")
            .body(())
            .unwrap();
        assert_eq!(files.serve(&req).await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_head_and_unsupported_methods() {
        let dir = site();
        let files = StaticFiles::new(dir.path());

        let head = Request::builder()
            .method(Method::HEAD)
            .uri("/style.css")
            .body(())
            .unwrap();
        let resp = files.serve(&head).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-length"], "6");
        assert_eq!(body_string(resp).await, "");

        let post = Request::builder()
            .method(Method::POST)
            .uri("/style.css")
            .body(())
            .unwrap();
        assert_eq!(files.serve(&post).await.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn test_traversal_is_confined_to_root() {
        let outer = tempfile::tempdir().unwrap();
        std::fs::write(outer.path().join("secret.txt"), "nope").unwrap();
        let root = outer.path().join("public");
        std::fs::create_dir(&root).unwrap();

        let resp = StaticFiles::new(&root)
            .serve(&get("/../secret.txt"))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
