// ABOUTME: Input model handed over by the markdown slide parser
// ABOUTME: Parsed slides, their sections, per-section metadata and the slide kind tag

use std::collections::HashMap;

/// Per-section key/value metadata. Unknown keys are ignored.
pub type Metadata = HashMap<String, String>;

/// Metadata keys recognised by the classifier and composer
pub mod keys {
    pub const FONT: &str = "font";
    pub const SUBTITLE: &str = "subtitle";
    pub const AUTHOR: &str = "author";
    pub const TAB_LABEL: &str = "tab-label";
    pub const CAPTION: &str = "caption";
    pub const FONT_SIZE: &str = "font-size";
    pub const VIEW_EXAMPLE: &str = "figpack-view-example";
    pub const MARKDOWN_AS_TEXT: &str = "markdown-as-text";

    /// Value of `VIEW_EXAMPLE` that selects the built-in example chart
    pub const VIEW_EXAMPLE_SENTINEL: &str = "example-1";
}

/// One content block within a slide
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSlideSection {
    pub content: String,
    pub metadata: Metadata,
}

impl ParsedSlideSection {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Builder-style helper to attach a metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// A slide as split out of the source document. Sections are in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSlide {
    pub title: Option<String>,
    pub slide_type: String,
    pub sections: Vec<ParsedSlideSection>,
}

impl ParsedSlide {
    pub fn new(
        title: Option<String>,
        slide_type: impl Into<String>,
        sections: Vec<ParsedSlideSection>,
    ) -> Self {
        Self {
            title,
            slide_type: slide_type.into(),
            sections,
        }
    }

    pub fn kind(&self) -> SlideKind {
        SlideKind::from_tag(&self.slide_type)
    }
}

/// Layout intent of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    TabsOnRight,
    Standard,
}

impl SlideKind {
    /// Map a slide type tag to a kind. Unknown tags are standard slides.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => SlideKind::Title,
            "tabs-on-right" => SlideKind::TabsOnRight,
            _ => SlideKind::Standard,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::TabsOnRight => "tabs-on-right",
            SlideKind::Standard => "standard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_kind_from_tag() {
        assert_eq!(SlideKind::from_tag("title"), SlideKind::Title);
        assert_eq!(SlideKind::from_tag("tabs-on-right"), SlideKind::TabsOnRight);
        assert_eq!(SlideKind::from_tag(""), SlideKind::Standard);
        assert_eq!(SlideKind::from_tag("two-column"), SlideKind::Standard);
        assert_eq!(SlideKind::from_tag("Title"), SlideKind::Standard);
    }

    #[test]
    fn test_section_meta_lookup() {
        let section = ParsedSlideSection::new("text").with_meta(keys::FONT, "small");
        assert_eq!(section.meta(keys::FONT), Some("small"));
        assert_eq!(section.meta(keys::AUTHOR), None);
    }
}
