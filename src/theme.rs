// ABOUTME: Theme settings for composed slides
// ABOUTME: Colors, font sizes and chrome dimensions passed into the composer

use crate::layout::{SlideChrome, SlideText};

/// Immutable style configuration shared by the classifier and composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent_color: String,
    pub font_family: String,

    pub title_slide_text_color: String,
    pub title_slide_title_font_size: u32,
    pub title_slide_subtitle_font_size: u32,
    pub title_slide_author_font_size: u32,

    pub standard_background_color: String,
    pub standard_text_color: String,
    pub standard_title_font_size: u32,

    pub body_font_size: u32,
    pub external_markdown_font_size: u32,
    pub caption_font_size: u32,

    pub header_height: u32,
    pub footer_height: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_color: "#55AAFF".to_string(),
            font_family: "SANS-SERIF".to_string(),
            title_slide_text_color: "#FFFFFF".to_string(),
            title_slide_title_font_size: 80,
            title_slide_subtitle_font_size: 40,
            title_slide_author_font_size: 30,
            standard_background_color: "#FFFFFF".to_string(),
            standard_text_color: "#000000".to_string(),
            standard_title_font_size: 50,
            body_font_size: 28,
            external_markdown_font_size: 16,
            caption_font_size: 20,
            header_height: 10,
            footer_height: 10,
        }
    }
}

impl Theme {
    /// Same theme with a different accent color
    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.accent_color = color.into();
        self
    }

    pub fn title_slide_background_color(&self) -> &str {
        &self.accent_color
    }

    pub fn header(&self) -> SlideChrome {
        SlideChrome {
            height: self.header_height,
            background_color: self.accent_color.clone(),
        }
    }

    pub fn footer(&self) -> SlideChrome {
        SlideChrome {
            height: self.footer_height,
            background_color: self.accent_color.clone(),
        }
    }

    pub fn standard_title(&self, text: &str) -> SlideText {
        SlideText {
            text: text.to_string(),
            font_size: self.standard_title_font_size,
            font_family: self.font_family.clone(),
            color: self.standard_text_color.clone(),
        }
    }

    /// Text in the title-slide tier (inverted contrast) at the given size
    pub fn title_slide_text(&self, text: &str, font_size: u32) -> SlideText {
        SlideText {
            text: text.to_string(),
            font_size,
            font_family: self.font_family.clone(),
            color: self.title_slide_text_color.clone(),
        }
    }
}
