//! Static file serving module
//!
//! Maps GET/HEAD request paths onto the configured root directory, with
//! index-file fallback and a plain directory listing.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Resolution outcome for a request path
enum Resolved {
    File(Vec<u8>, &'static str),
    Listing(String),
}

/// Serve a static file (or directory listing) from the configured root
pub async fn serve(state: &AppState, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let root = &state.config.static_files.root;
    let index_files = &state.config.static_files.index_files;

    match load_from_root(root, path, index_files).await {
        Some(Resolved::File(content, content_type)) => {
            if state.config.logging.access_log {
                logger::log_response(content.len());
            }
            http::build_file_response(content, content_type, is_head)
        }
        Some(Resolved::Listing(html)) => {
            if state.config.logging.access_log {
                logger::log_response(html.len());
            }
            http::build_html_response(html, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Resolve a request path under the root directory.
///
/// Directories try the configured index files first and fall back to a
/// generated listing. Returns `None` for anything that should 404.
async fn load_from_root(root: &str, path: &str, index_files: &[String]) -> Option<Resolved> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let mut file_path = Path::new(root).join(&clean_path);

    // Security: ensure file_path stays within the root
    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{root}': {e}"
            ));
            return None;
        }
    };

    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // File not found is a routine 404, not worth a warning
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    if file_path_canonical.is_dir() {
        return render_listing(&file_path_canonical, path)
            .await
            .map(Resolved::Listing);
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));

    Some(Resolved::File(content, content_type))
}

/// Render a minimal HTML listing for a directory with no index file
async fn render_listing(dir: &Path, request_path: &str) -> Option<String> {
    let mut entries = fs::read_dir(dir).await.ok()?;
    let mut names: Vec<String> = Vec::new();

    while let Ok(Some(entry)) = entries.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>Directory listing for {request_path}</title></head>\n"));
    html.push_str(&format!("<body>\n<h1>Directory listing for {request_path}</h1>\n<ul>\n"));
    let base = request_path.trim_end_matches('/');
    for name in &names {
        html.push_str(&format!("<li><a href=\"{base}/{name}\">{name}</a></li>\n"));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::path::PathBuf as StdPathBuf;

    fn temp_root(tag: &str) -> StdPathBuf {
        let dir = std::env::temp_dir().join(format!("bol-static-{}-{}", tag, std::process::id()));
        std_fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn resolves_file_with_content_type() {
        let root = temp_root("file");
        std_fs::write(root.join("app.js"), "console.log(1);").unwrap();

        let resolved = load_from_root(root.to_str().unwrap(), "/app.js", &[])
            .await
            .unwrap();
        match resolved {
            Resolved::File(content, content_type) => {
                assert_eq!(content, b"console.log(1);");
                assert_eq!(content_type, "application/javascript");
            }
            Resolved::Listing(_) => panic!("expected a file"),
        }
    }

    #[tokio::test]
    async fn directory_falls_back_to_index_file() {
        let root = temp_root("indexdir");
        std_fs::write(root.join("index.html"), "<html></html>").unwrap();

        let resolved = load_from_root(
            root.to_str().unwrap(),
            "/",
            &["index.html".to_string(), "index.htm".to_string()],
        )
        .await
        .unwrap();
        match resolved {
            Resolved::File(content, content_type) => {
                assert_eq!(content, b"<html></html>");
                assert_eq!(content_type, "text/html; charset=utf-8");
            }
            Resolved::Listing(_) => panic!("expected the index file"),
        }
    }

    #[tokio::test]
    async fn directory_without_index_renders_listing() {
        let root = temp_root("listing");
        std_fs::write(root.join("scan.js"), "x").unwrap();

        let resolved = load_from_root(root.to_str().unwrap(), "/", &["index.html".to_string()])
            .await
            .unwrap();
        match resolved {
            Resolved::Listing(html) => assert!(html.contains("scan.js")),
            Resolved::File(..) => panic!("expected a listing"),
        }
    }

    #[tokio::test]
    async fn traversal_is_stripped() {
        let root = temp_root("traversal");
        std_fs::write(root.join("safe.txt"), "ok").unwrap();

        // ".." segments are removed, so this cannot escape the root
        let resolved = load_from_root(root.to_str().unwrap(), "/../../etc/passwd", &[]).await;
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let root = temp_root("none");
        assert!(load_from_root(root.to_str().unwrap(), "/ghost.txt", &[])
            .await
            .is_none());
    }
}
