use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use thiserror::Error;

/// Html output name, matches `[build] html_output` in Trunk.toml.
const STAGED_HTML: &str = "index.html";

/// Artefacts Trunk links with absolute URLs.
const BUNDLE_FILES: [&str; 2] = ["landmark-viewer.js", "landmark-viewer_bg.wasm"];

#[derive(Debug, Error)]
enum HtmlConfigError {
    #[error("TRUNK_STAGING_DIR is not set; run this as a Trunk post_build hook")]
    MissingStagingDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Point bundle URLs at the page's own directory so the viewer can be served
/// from a sub-path such as `/mediapipe_landmark_viewer/`.
fn relative_bundle_urls(html: &str) -> String {
    BUNDLE_FILES.iter().fold(html.to_string(), |html, file| {
        html.replace(&format!("\"/{file}"), &format!("\"./{file}"))
            .replace(&format!("'/{file}"), &format!("'./{file}"))
    })
}

fn run() -> Result<(), HtmlConfigError> {
    let staging_dir = env::var("TRUNK_STAGING_DIR").map_err(|_| HtmlConfigError::MissingStagingDir)?;
    let staged_html_path = PathBuf::from(staging_dir).join(STAGED_HTML);

    let html = fs::read_to_string(&staged_html_path).map_err(|source| HtmlConfigError::Read {
        path: staged_html_path.clone(),
        source,
    })?;

    fs::write(&staged_html_path, relative_bundle_urls(&html)).map_err(|source| {
        HtmlConfigError::Write {
            path: staged_html_path.clone(),
            source,
        }
    })
}

fn main() {
    if let Err(error) = run() {
        eprintln!("html_config: {error}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_absolute_bundle_urls() {
        let html = r#"<link rel="modulepreload" href="/landmark-viewer.js">
<script type="module">import init from '/landmark-viewer.js';init('/landmark-viewer_bg.wasm');</script>"#;

        let rewritten = relative_bundle_urls(html);

        assert!(rewritten.contains(r#"href="./landmark-viewer.js""#));
        assert!(rewritten.contains("from './landmark-viewer.js'"));
        assert!(rewritten.contains("init('./landmark-viewer_bg.wasm')"));
        assert_eq!(relative_bundle_urls(&rewritten), rewritten);
    }
}
