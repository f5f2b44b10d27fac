// ABOUTME: Slide composition for parsed slides
// ABOUTME: Picks a layout strategy per slide type and attaches title, chrome and background

use crate::classify::ContentResolver;
use crate::errors::{Result, SlideError};
use crate::layout::{LayoutNode, Presentation, Slide, StandardSlide, TabItem, TitleSlide};
use crate::model::{keys, ParsedSlide, SlideKind};
use crate::theme::Theme;
use log::info;

/// Builds slides from parsed slides using a content resolver and a theme
pub struct SlideComposer<R> {
    resolver: R,
    theme: Theme,
}

impl<R: ContentResolver> SlideComposer<R> {
    pub fn new(resolver: R, theme: Theme) -> Self {
        Self { resolver, theme }
    }

    /// Compose one slide. Fails when the section count does not fit the slide type.
    pub fn compose(&self, parsed: &ParsedSlide) -> Result<Slide> {
        let kind = parsed.kind();
        info!(
            "Creating slide: title={:?}, type={}, sections={}",
            parsed.title.as_deref().unwrap_or(""),
            kind.as_tag(),
            parsed.sections.len()
        );

        match kind {
            SlideKind::Title => self.title_slide(parsed),
            SlideKind::TabsOnRight => self.tabs_on_right_slide(parsed),
            SlideKind::Standard => self.standard_slide(parsed),
        }
    }

    /// Compose all slides in document order, stopping at the first invalid one
    pub fn compose_all(&self, slides: &[ParsedSlide]) -> Result<Vec<Slide>> {
        slides
            .iter()
            .enumerate()
            .map(|(i, parsed)| {
                self.compose(parsed).map_err(|e| SlideError::SlideValidation {
                    index: i + 1,
                    source: Box::new(e),
                })
            })
            .collect()
    }

    fn standard_slide(&self, parsed: &ParsedSlide) -> Result<Slide> {
        let content = match parsed.sections.as_slice() {
            [] => {
                return Err(SlideError::ValidationError(
                    "Standard slide must have at least one section".to_string(),
                ));
            }
            [section] => LayoutNode::Content(self.resolver.resolve(section)?),
            [left, right] => LayoutNode::hbox_equal(vec![
                self.resolver.resolve(left)?.into(),
                self.resolver.resolve(right)?.into(),
            ]),
            _ => {
                return Err(SlideError::ValidationError(
                    "Slides with more than two sections are not supported".to_string(),
                ));
            }
        };

        Ok(self.with_chrome(parsed, content))
    }

    fn tabs_on_right_slide(&self, parsed: &ParsedSlide) -> Result<Slide> {
        let Some((first, rest)) = parsed.sections.split_first().filter(|(_, rest)| !rest.is_empty())
        else {
            return Err(SlideError::ValidationError(
                "Tabs-on-right slide must have at least two sections".to_string(),
            ));
        };

        let left = LayoutNode::Content(self.resolver.resolve(first)?);

        let mut tabs = Vec::with_capacity(rest.len());
        for (i, section) in rest.iter().enumerate() {
            let label = section
                .meta(keys::TAB_LABEL)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Tab {}", i + 1));
            tabs.push(TabItem {
                label,
                view: LayoutNode::Content(self.resolver.resolve(section)?),
            });
        }

        let content = LayoutNode::hbox_equal(vec![left, LayoutNode::Tabs { items: tabs }]);
        Ok(self.with_chrome(parsed, content))
    }

    fn title_slide(&self, parsed: &ParsedSlide) -> Result<Slide> {
        let [section] = parsed.sections.as_slice() else {
            return Err(SlideError::ValidationError(
                "Title slide must have exactly one section".to_string(),
            ));
        };

        let theme = &self.theme;
        let optional_text = |key: &str, font_size: u32| {
            section
                .meta(key)
                .filter(|value| !value.is_empty())
                .map(|value| theme.title_slide_text(value, font_size))
        };

        Ok(Slide::Title(TitleSlide {
            title: theme.title_slide_text(
                parsed.title.as_deref().unwrap_or(""),
                theme.title_slide_title_font_size,
            ),
            subtitle: optional_text(keys::SUBTITLE, theme.title_slide_subtitle_font_size),
            author: optional_text(keys::AUTHOR, theme.title_slide_author_font_size),
            background_color: theme.title_slide_background_color().to_string(),
        }))
    }

    fn with_chrome(&self, parsed: &ParsedSlide, content: LayoutNode) -> Slide {
        Slide::Standard(StandardSlide {
            title: self
                .theme
                .standard_title(parsed.title.as_deref().unwrap_or("")),
            content,
            header: Some(self.theme.header()),
            footer: Some(self.theme.footer()),
            background_color: self.theme.standard_background_color.clone(),
        })
    }
}

/// Compose a whole deck, naming it after the first slide's title
pub fn build_presentation<R: ContentResolver>(
    composer: &SlideComposer<R>,
    slides: &[ParsedSlide],
) -> Result<Presentation> {
    let slides = composer.compose_all(slides)?;
    let title = slides
        .first()
        .map(|slide| slide.title().text.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Presentation".to_string());

    info!("Composed {} slides for {:?}", slides.len(), title);
    Ok(Presentation { title, slides })
}
