// ABOUTME: Inline image embedding for markdown text
// ABOUTME: Replaces relative image references with base64 data URIs read from disk

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, ComrakOptions};
use image::ImageFormat;
use log::{debug, warn};
use regex::Regex;
use std::fs;
use std::ops::{Range, RangeInclusive};
use std::path::Path;
use std::sync::LazyLock;
use url::Url;

static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(([^)\s]+)((?:\s+"[^"]*")?)\)"#).unwrap()
});

/// Embed every relative image reference in `text` as an inline data URI.
///
/// Targets are resolved against `base_dir`. Absolute URLs (including existing
/// `data:` URIs) and absolute paths are left alone, so embedding is idempotent.
/// References inside code blocks and code spans are literal text and are not
/// touched. Images that cannot be read are left as they were.
pub fn embed_images(text: &str, base_dir: &Path) -> String {
    let code_lines = code_block_lines(text);
    let code_spans = code_span_ranges(text);
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for caps in IMAGE_PATTERN.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let target = caps.get(2).unwrap().as_str();

        if !is_relative_reference(target) {
            continue;
        }
        let line = line_of_offset(text, whole.start());
        if code_lines.iter().any(|range| range.contains(&line))
            || code_spans.iter().any(|span| span.contains(&whole.start()))
        {
            continue;
        }

        let Some(data_uri) = load_data_uri(&base_dir.join(target)) else {
            continue;
        };

        result.push_str(&text[last..whole.start()]);
        result.push_str(&format!("![{}]({}{})", &caps[1], data_uri, &caps[3]));
        last = whole.end();
    }

    result.push_str(&text[last..]);
    result
}

/// Whether an image target refers to a file relative to the markdown source
fn is_relative_reference(target: &str) -> bool {
    if target.is_empty() || target.starts_with('#') {
        return false;
    }
    // Anything with a scheme, data URIs included
    if Url::parse(target).is_ok() {
        return false;
    }
    !Path::new(target).is_absolute()
}

/// 1-based line ranges covered by fenced or indented code blocks
fn code_block_lines(text: &str) -> Vec<RangeInclusive<usize>> {
    let arena = Arena::new();
    let root = parse_document(&arena, text, &ComrakOptions::default());

    root.descendants()
        .filter_map(|node| {
            let ast = node.data.borrow();
            match ast.value {
                NodeValue::CodeBlock(_) => {
                    Some(ast.sourcepos.start.line..=ast.sourcepos.end.line)
                }
                _ => None,
            }
        })
        .collect()
}

/// Byte ranges of inline code spans: a run of N backticks up to the next run of exactly N
fn code_span_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let run_length = |from: usize| bytes[from..].iter().take_while(|&&b| b == b'`').count();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let open = run_length(i);
        let mut j = i + open;
        let mut close = None;
        while let Some(offset) = bytes[j..].iter().position(|&b| b == b'`') {
            let start = j + offset;
            let run = run_length(start);
            if run == open {
                close = Some(start + run);
                break;
            }
            j = start + run;
        }
        match close {
            Some(end) => {
                spans.push(i..end);
                i = end;
            }
            // Unmatched backticks are literal
            None => i += open,
        }
    }
    spans
}

fn line_of_offset(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

fn load_data_uri(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!("Embedding image {:?} ({} bytes)", path, bytes.len());
            let mime = mime_type(path, &bytes);
            Some(format!(
                "data:{};base64,{}",
                mime,
                BASE64_STANDARD.encode(&bytes)
            ))
        }
        Err(e) => {
            warn!("Failed to embed image {:?}: {}", path, e);
            None
        }
    }
}

/// Sniff the image type from its bytes, falling back to the file extension
fn mime_type(path: &Path, bytes: &[u8]) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    if extension.as_deref() == Some("svg") {
        return "image/svg+xml";
    }

    let format = image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok());
    match format {
        Some(ImageFormat::Png) => "image/png",
        Some(ImageFormat::Jpeg) => "image/jpeg",
        Some(ImageFormat::Gif) => "image/gif",
        Some(ImageFormat::WebP) => "image/webp",
        Some(ImageFormat::Bmp) => "image/bmp",
        Some(ImageFormat::Ico) => "image/x-icon",
        Some(ImageFormat::Tiff) => "image/tiff",
        Some(ImageFormat::Avif) => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    fn dir_with_png(name: &str) -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join(name), PNG_HEADER).expect("Failed to write image");
        dir
    }

    #[test]
    fn test_embeds_relative_png() {
        let dir = dir_with_png("dot.png");
        let out = embed_images("Look: ![a dot](./dot.png) here", dir.path());

        let expected = format!(
            "Look: ![a dot](data:image/png;base64,{}) here",
            BASE64_STANDARD.encode(PNG_HEADER)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_preserves_title() {
        let dir = dir_with_png("dot.png");
        let out = embed_images(r#"![x](dot.png "Dot")"#, dir.path());
        assert!(out.starts_with("![x](data:image/png;base64,"));
        assert!(out.ends_with(r#" "Dot")"#));
    }

    #[test]
    fn test_embedding_is_idempotent() {
        let dir = dir_with_png("dot.png");
        let once = embed_images("![a](./dot.png)\n\nText after.", dir.path());
        let twice = embed_images(&once, dir.path());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_image_text_is_unchanged() {
        let dir = dir_with_png("dot.png");
        let text = "# Heading\n\nSome *emphasis* and [a link](./other.md).\n\n![a](./dot.png)\n\n- item\n";
        let out = embed_images(text, dir.path());

        let (before, after) = text.split_once("![a](./dot.png)").unwrap();
        assert!(out.starts_with(before));
        assert!(out.ends_with(after));
    }

    #[test]
    fn test_skips_remote_and_missing_images() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let text = "![r](https://example.com/a.png) ![m](./missing.png)";
        assert_eq!(embed_images(text, dir.path()), text);
    }

    #[test]
    fn test_skips_images_in_code_blocks() {
        let dir = dir_with_png("dot.png");
        let text = "````\n![a](./dot.png)\n````\n";
        assert_eq!(embed_images(text, dir.path()), text);
    }

    #[test]
    fn test_skips_images_in_code_spans() {
        let dir = dir_with_png("dot.png");
        let text = "Write `![a](./dot.png)` to show an image";
        assert_eq!(embed_images(text, dir.path()), text);

        let text = "Use ``![a](./dot.png)`` or ![b](./dot.png)";
        let out = embed_images(text, dir.path());
        assert!(out.starts_with("Use ``![a](./dot.png)`` or ![b](data:image/png;base64,"));
    }

    #[test]
    fn test_unmatched_backtick_does_not_hide_images() {
        let dir = dir_with_png("dot.png");
        let out = embed_images("A stray ` then ![a](./dot.png)", dir.path());
        assert!(out.starts_with("A stray ` then ![a](data:image/png;base64,"));
    }

    #[test]
    fn test_svg_mime_by_extension() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("logo.svg"), "<svg/>").unwrap();
        let out = embed_images("![l](logo.svg)", dir.path());
        assert!(out.starts_with("![l](data:image/svg+xml;base64,"));
    }
}
