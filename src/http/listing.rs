//! Directory listing page

use super::path::percent_encode;
use std::fmt::Write as _;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Escape `&`, `<` and `>` for HTML text content
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the HTML listing for `display_path` (already percent-decoded).
///
/// Entries are sorted case-insensitively. Directories get a trailing `/`
/// in both link and label, symlinks an `@` in the label.
pub fn render_directory_listing(display_path: &str, entries: &[ListingEntry]) -> String {
    let mut sorted: Vec<&ListingEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.name.to_lowercase());

    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{title}</title>\n</head>");
    let _ = writeln!(html, "<body>\n<h1>{title}</h1>");
    html.push_str("<hr>\n<ul>\n");

    for entry in sorted {
        let mut link = entry.name.clone();
        let mut label = entry.name.clone();
        if entry.is_dir {
            link.push('/');
            label.push('/');
        }
        if entry.is_symlink {
            label.push('@');
        }
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            percent_encode(&link),
            escape_html(&label)
        );
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool, is_symlink: bool) -> ListingEntry {
        ListingEntry {
            name: name.to_string(),
            is_dir,
            is_symlink,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&c"), "a&lt;b&gt;&amp;c");
        assert_eq!(escape_html("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_listing_title_and_sorting() {
        let html = render_directory_listing(
            "/pkg/",
            &[
                entry("zeta.js", false, false),
                entry("Alpha.wasm", false, false),
                entry("beta", true, false),
            ],
        );
        assert!(html.contains("<title>Directory listing for /pkg/</title>"));
        let alpha = html.find("Alpha.wasm").unwrap();
        let beta = html.find("beta/").unwrap();
        let zeta = html.find("zeta.js").unwrap();
        assert!(alpha < beta && beta < zeta);
    }

    #[test]
    fn test_listing_entry_markup() {
        let html = render_directory_listing(
            "/",
            &[
                entry("my dir", true, false),
                entry("link", false, true),
                entry("<b>.txt", false, false),
            ],
        );
        assert!(html.contains("<li><a href=\"my%20dir/\">my dir/</a></li>"));
        assert!(html.contains("<li><a href=\"link\">link@</a></li>"));
        assert!(html.contains("<li><a href=\"%3Cb%3E.txt\">&lt;b&gt;.txt</a></li>"));
    }
}
