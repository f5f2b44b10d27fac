// ABOUTME: Code-execution content resolver
// ABOUTME: Runs a section's fenced code block through a host executor and wraps the resulting view

use crate::classify::ContentResolver;
use crate::content::{ContentNode, View};
use crate::errors::{Result, SlideError};
use crate::model::{keys, Metadata, ParsedSlideSection};
use crate::theme::Theme;
use log::{debug, info};
use std::collections::HashMap;

/// Name the executed code must bind its result to
pub const VIEW_BINDING: &str = "view";

/// Values bound by an executed code block, by name
pub type Namespace = HashMap<String, View>;

/// Capability supplied by the host: run source text in an isolated scope.
///
/// The core makes no assumption about how the host interprets or sandboxes
/// the code. Each call must start from a fresh namespace.
pub trait ViewExecutor {
    /// Language tag of the fenced blocks this executor runs, e.g. `python`
    fn language(&self) -> &str;

    fn execute(&self, source: &str) -> anyhow::Result<Namespace>;
}

impl<E: ViewExecutor + ?Sized> ViewExecutor for &E {
    fn language(&self) -> &str {
        (**self).language()
    }

    fn execute(&self, source: &str) -> anyhow::Result<Namespace> {
        (**self).execute(source)
    }
}

/// Collect the code between each ```` ```{language} ```` line and the next ```` ``` ```` line.
///
/// Lines of every closed block are joined in order. A block that is never
/// closed contributes nothing.
pub fn extract_code_block(markdown: &str, language: &str) -> Result<String> {
    let opener = format!("```{}", language);
    let mut extracted: Vec<&str> = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    let mut closed_blocks = 0;

    for line in markdown.lines() {
        match current.as_mut() {
            None if line == opener => current = Some(Vec::new()),
            None => {}
            Some(block) if line == "```" => {
                extracted.append(block);
                current = None;
                closed_blocks += 1;
            }
            Some(block) => block.push(line),
        }
    }

    if closed_blocks == 0 {
        return Err(SlideError::MissingCodeBlock {
            language: language.to_string(),
        });
    }
    debug!("Extracted {} ```{} block(s)", closed_blocks, language);
    Ok(extracted.join("\n"))
}

/// Content resolver that executes embedded code instead of classifying text
pub struct ExecutionResolver<E> {
    executor: E,
    theme: Theme,
}

impl<E: ViewExecutor> ExecutionResolver<E> {
    pub fn new(executor: E, theme: Theme) -> Self {
        Self { executor, theme }
    }

    /// Execute the section's code block and turn its `view` binding into a content node
    pub fn execute_view(&self, metadata: &Metadata, markdown: &str) -> Result<ContentNode> {
        let source = extract_code_block(markdown, self.executor.language())?;

        info!("Executing {} code block", self.executor.language());
        let mut namespace = self.executor.execute(&source)?;
        let view = namespace
            .remove(VIEW_BINDING)
            .ok_or_else(|| SlideError::MissingBinding(VIEW_BINDING.to_string()))?;

        let node = ContentNode::View(view);
        let Some(caption) = metadata.get(keys::CAPTION) else {
            return Ok(node);
        };

        let font_size = match metadata.get(keys::FONT_SIZE) {
            Some(value) => value.trim().parse::<u32>().map_err(|_| {
                SlideError::ValidationError(format!("Invalid font-size for caption: {:?}", value))
            })?,
            None => self.theme.caption_font_size,
        };

        Ok(ContentNode::Captioned {
            caption: caption.clone(),
            font_size,
            child: Box::new(node),
        })
    }
}

impl<E: ViewExecutor> ContentResolver for ExecutionResolver<E> {
    fn resolve(&self, section: &ParsedSlideSection) -> Result<ContentNode> {
        self.execute_view(&section.metadata, &section.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_block() {
        let md = "Intro\n```python\nx = 1\nview = x\n```\nOutro";
        assert_eq!(extract_code_block(md, "python").unwrap(), "x = 1\nview = x");
    }

    #[test]
    fn test_extract_joins_blocks() {
        let md = "```python\na = 1\n```\ntext\n```python\nb = 2\n```\n";
        assert_eq!(extract_code_block(md, "python").unwrap(), "a = 1\nb = 2");
    }

    #[test]
    fn test_extract_ignores_other_languages() {
        let md = "```js\nlet a = 1;\n```\n```python\nb = 2\n```";
        assert_eq!(extract_code_block(md, "python").unwrap(), "b = 2");
    }

    #[test]
    fn test_extract_requires_exact_fence_lines() {
        let md = "  ```python\nb = 2\n```";
        assert!(matches!(
            extract_code_block(md, "python"),
            Err(SlideError::MissingCodeBlock { .. })
        ));
    }

    #[test]
    fn test_extract_unclosed_block_is_missing() {
        let md = "```python\nb = 2\n";
        assert!(extract_code_block(md, "python").is_err());
    }

    #[test]
    fn test_extract_drops_trailing_unclosed_block() {
        let md = "```python\na = 1\n```\n```python\nb = 2\n";
        assert_eq!(extract_code_block(md, "python").unwrap(), "a = 1");
    }
}
