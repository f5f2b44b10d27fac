// ABOUTME: Section classification for slide content
// ABOUTME: Decides what kind of content a section holds and builds the matching content node

use crate::content::{example_view, ContentNode};
use crate::images::embed_images;
use crate::model::{keys, Metadata, ParsedSlideSection};
use crate::theme::Theme;
use log::{debug, warn};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::LazyLock;

static IFRAME_SRC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"src="([^"]+)""#).unwrap());

const INVALID_IFRAME_MESSAGE: &str = "Error: Invalid iframe tag - no src attribute found";

/// Named body font tiers selected by the `font` metadata key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontTier {
    Small,
    MediumSmall,
    Normal,
    Large,
}

impl FontTier {
    /// Total mapping; anything unrecognised is `Normal`
    pub fn from_metadata(metadata: &Metadata) -> Self {
        match metadata.get(keys::FONT).map(String::as_str) {
            Some("small") => FontTier::Small,
            Some("medium-small") => FontTier::MediumSmall,
            Some("large") => FontTier::Large,
            _ => FontTier::Normal,
        }
    }

    pub fn font_size(&self) -> u32 {
        match self {
            FontTier::Small => 16,
            FontTier::MediumSmall => 20,
            FontTier::Normal => 28,
            FontTier::Large => 40,
        }
    }
}

/// Resolves a section into a content node
pub trait ContentResolver {
    fn resolve(&self, section: &ParsedSlideSection) -> crate::Result<ContentNode>;
}

/// Default content resolver: classifies section text by its shape
pub struct SectionClassifier {
    document_dir: PathBuf,
    theme: Theme,
}

/// A classification rule: yields a node when the trimmed content is of its kind
struct Rule {
    name: &'static str,
    apply: fn(&SectionClassifier, &str, &Metadata) -> Option<ContentNode>,
}

// Evaluated in order, first match wins. The patterns overlap, keep the order.
const RULES: &[Rule] = &[
    Rule {
        name: "view-example",
        apply: SectionClassifier::view_example,
    },
    Rule {
        name: "iframe",
        apply: SectionClassifier::iframe,
    },
    Rule {
        name: "markdown-file",
        apply: SectionClassifier::markdown_file,
    },
    Rule {
        name: "image",
        apply: SectionClassifier::image,
    },
];

/// Path of a section made of a single `![alt](./path)` image, `./` included.
///
/// The path runs from the first `](./` to the trailing `)`, so it may itself
/// contain parentheses and the alt text may contain brackets.
fn single_image_path(content: &str) -> Option<&str> {
    if !content.starts_with("![") || content.contains('\n') {
        return None;
    }
    let body = content.strip_suffix(')')?;
    let start = body.find("](./")?;
    Some(&body[start + 2..])
}

impl SectionClassifier {
    /// Create a classifier resolving relative paths against `document_dir`
    pub fn new(document_dir: impl Into<PathBuf>, theme: Theme) -> Self {
        Self {
            document_dir: document_dir.into(),
            theme,
        }
    }

    /// Classify a section. Never fails: recoverable problems become error text.
    pub fn classify(&self, section: &ParsedSlideSection) -> ContentNode {
        let content = section.content.trim();
        let metadata = &section.metadata;

        for rule in RULES {
            if let Some(node) = (rule.apply)(self, content, metadata) {
                debug!("Section classified as {}", rule.name);
                return node;
            }
        }

        debug!("Section classified as markdown");
        self.markdown(content, metadata)
    }

    fn view_example(&self, _content: &str, metadata: &Metadata) -> Option<ContentNode> {
        (metadata.get(keys::VIEW_EXAMPLE).map(String::as_str) == Some(keys::VIEW_EXAMPLE_SENTINEL))
            .then(|| ContentNode::View(example_view()))
    }

    fn iframe(&self, content: &str, _metadata: &Metadata) -> Option<ContentNode> {
        if !(content.starts_with("<iframe") && content.ends_with("</iframe>")) {
            return None;
        }
        let node = match IFRAME_SRC.captures(content) {
            Some(caps) => ContentNode::Iframe {
                url: caps[1].to_string(),
            },
            None => {
                warn!("Iframe section without src attribute");
                self.error_text(INVALID_IFRAME_MESSAGE.to_string())
            }
        };
        Some(node)
    }

    fn markdown_file(&self, content: &str, metadata: &Metadata) -> Option<ContentNode> {
        if !(content.starts_with("./") && content.ends_with(".md")) {
            return None;
        }
        Some(self.load_markdown_file(content, metadata))
    }

    fn load_markdown_file(&self, content: &str, metadata: &Metadata) -> ContentNode {
        let path = self.document_dir.join(content);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Included markdown file not found: {:?}", path);
                return self.error_text(format!("Error: File not found: {}", content));
            }
            Err(e) => {
                warn!("Failed to load markdown file {:?}: {}", path, e);
                return self.error_text(format!("Error loading markdown file: {}", e));
            }
        };

        // Four backticks so the file's own ``` fences survive
        let text = if metadata.get(keys::MARKDOWN_AS_TEXT).map(String::as_str) == Some("true") {
            format!("````\n{}\n````", text)
        } else {
            text
        };

        let file_dir = path.parent().unwrap_or(self.document_dir.as_path());
        ContentNode::markdown(
            embed_images(&text, file_dir),
            self.theme.external_markdown_font_size,
        )
    }

    fn image(&self, content: &str, _metadata: &Metadata) -> Option<ContentNode> {
        single_image_path(content).map(|path| ContentNode::Image {
            path: path.to_string(),
        })
    }

    fn markdown(&self, content: &str, metadata: &Metadata) -> ContentNode {
        ContentNode::markdown(
            embed_images(content, &self.document_dir),
            FontTier::from_metadata(metadata).font_size(),
        )
    }

    fn error_text(&self, message: String) -> ContentNode {
        ContentNode::markdown(message, self.theme.body_font_size)
    }
}

impl ContentResolver for SectionClassifier {
    fn resolve(&self, section: &ParsedSlideSection) -> crate::Result<ContentNode> {
        Ok(self.classify(section))
    }
}
