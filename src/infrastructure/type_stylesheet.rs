// src/infrastructure/type_stylesheet.rs
//
// Type icon stylesheet generation
//
// A pure file-to-file transform: scan a directory of type icon images and
// emit the CSS rules that put each icon behind its `.type-icon.<tag>` and
// `.type-badge.<tag>` selectors. Runs at build time, never at runtime.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use walkdir::WalkDir;

use crate::error::{AppError, AppResult};

/// Accepted icon file extensions
const IMAGE_EXTENSIONS: &[&str] = &["png", "svg", "jpg", "jpeg"];

fn type_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^type[-_]*").expect("valid literal regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid literal regex"))
}

/// Derive the type tag from an icon file stem: drop a leading `type` prefix,
/// collapse whitespace and underscores to dashes, lowercase. File names that
/// differ from the API vocabulary are aliased (`fight` -> `fighting`).
pub fn normalize_type_name(stem: &str) -> String {
    let stripped = type_prefix_re().replace(stem, "");
    let dashed = whitespace_re().replace_all(&stripped, "-").replace('_', "-");
    let tag = dashed.to_lowercase();

    match tag.as_str() {
        "fight" => "fighting".to_string(),
        _ => tag,
    }
}

/// Icon file names directly inside `icons_dir`, sorted for stable output
pub fn collect_icon_files(icons_dir: &Path) -> AppResult<Vec<String>> {
    if !icons_dir.is_dir() {
        return Err(AppError::Other(format!(
            "Icon directory not found: {}",
            icons_dir.display()
        )));
    }

    let mut files: Vec<String> = WalkDir::new(icons_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .filter(|name| {
            Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();

    if files.is_empty() {
        return Err(AppError::Other(format!(
            "No image files found in {}",
            icons_dir.display()
        )));
    }

    files.sort();
    Ok(files)
}

/// Render the stylesheet text for the given icon files. `url_base` is the
/// image path as seen from the generated stylesheet's directory.
pub fn render_stylesheet(files: &[String], url_base: &str) -> String {
    let mut css = String::from("/* Generated by generate-type-css */\n");
    css.push_str(
        ".type-icon{background-size:contain;background-repeat:no-repeat;background-position:center;display:inline-block}\n",
    );
    css.push_str(
        ".type-badge{position:relative;display:inline-flex;align-items:center;gap:0.5rem;padding-left:54px;padding-right:12px;border-radius:999px;font-weight:700;color:#fff;height:auto}\n",
    );
    css.push_str(
        ".type-badge::before{content:'';position:absolute;left:12px;width:30px;height:30px;background-size:contain;background-repeat:no-repeat;background-position:center;border-radius:50%}\n\n",
    );

    for file in files {
        let stem = file.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(file);
        let tag = normalize_type_name(stem);
        let url = format!("{}/{}", url_base, file);

        css.push_str(&format!(
            ".type-icon.{}{{background-image:url(\"{}\")}}\n",
            tag, url
        ));
        css.push_str(&format!(
            ".type-badge.{}::before{{background-image:url(\"{}\")}}\n",
            tag, url
        ));
    }

    css
}

/// Scan `icons_dir` and write the stylesheet to `out_css`.
/// Returns the number of icon files covered.
pub fn generate_type_stylesheet(
    icons_dir: &Path,
    out_css: &Path,
    url_base: &str,
) -> AppResult<usize> {
    let files = collect_icon_files(icons_dir)?;
    let css = render_stylesheet(&files, url_base);

    if let Some(parent) = out_css.parent() {
        fs::create_dir_all(parent).map_err(AppError::Io)?;
    }
    fs::write(out_css, css).map_err(AppError::Io)?;

    log::info!(
        "wrote {} with rules for {} icons",
        out_css.display(),
        files.len()
    );

    Ok(files.len())
}
