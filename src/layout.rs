// ABOUTME: Layout tree and slide output types
// ABOUTME: Arranges content nodes into boxes and tabs and wraps them with slide chrome

use crate::content::ContentNode;

/// Structural arrangement of content nodes
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Content(ContentNode),
    /// Items laid out side by side
    HorizontalBox {
        items: Vec<LayoutItem>,
    },
    Tabs {
        items: Vec<TabItem>,
    },
}

/// A box item with its relative share of the available space
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem {
    pub view: LayoutNode,
    pub stretch: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub label: String,
    pub view: LayoutNode,
}

impl LayoutNode {
    /// Horizontal box where every item gets stretch 1
    pub fn hbox_equal(views: Vec<LayoutNode>) -> Self {
        LayoutNode::HorizontalBox {
            items: views
                .into_iter()
                .map(|view| LayoutItem { view, stretch: 1 })
                .collect(),
        }
    }
}

impl From<ContentNode> for LayoutNode {
    fn from(node: ContentNode) -> Self {
        LayoutNode::Content(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideText {
    pub text: String,
    pub font_size: u32,
    pub font_family: String,
    pub color: String,
}

/// Header or footer band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideChrome {
    pub height: u32,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardSlide {
    pub title: SlideText,
    pub content: LayoutNode,
    pub header: Option<SlideChrome>,
    pub footer: Option<SlideChrome>,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleSlide {
    pub title: SlideText,
    pub subtitle: Option<SlideText>,
    pub author: Option<SlideText>,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Slide {
    Standard(StandardSlide),
    Title(TitleSlide),
}

impl Slide {
    pub fn title(&self) -> &SlideText {
        match self {
            Slide::Standard(slide) => &slide.title,
            Slide::Title(slide) => &slide.title,
        }
    }
}

/// A composed deck ready for the exporter
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub title: String,
    pub slides: Vec<Slide>,
}
