// ABOUTME: Library module for the slide-composer program.
// ABOUTME: Classifies slide sections into content nodes and composes slide layouts.

pub mod classify;
pub mod compose;
pub mod config;
pub mod content;
pub mod errors;
pub mod execute;
pub mod images;
pub mod layout;
pub mod model;
pub mod theme;

// Reexport common types and functions
pub use classify::{ContentResolver, FontTier, SectionClassifier};
pub use compose::{build_presentation, SlideComposer};
pub use config::Config;
pub use content::{ContentNode, View};
pub use errors::{Result, SlideError};
pub use execute::{extract_code_block, ExecutionResolver, Namespace, ViewExecutor};
pub use images::embed_images;
pub use layout::{LayoutNode, Presentation, Slide};
pub use model::{Metadata, ParsedSlide, ParsedSlideSection, SlideKind};
pub use theme::Theme;
