// ABOUTME: Configuration module for the slide-composer application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::classify::SectionClassifier;
use crate::compose::SlideComposer;
use crate::errors::{Result, SlideError};
use crate::theme::Theme;
use log::debug;
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative section paths are resolved against
    pub base_dir: PathBuf,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup("SLIDES_BASE_DIR").filter(|s| !s.is_empty()) {
            config.base_dir = PathBuf::from(dir);
        }

        if let Some(color) = lookup("SLIDES_ACCENT_COLOR").filter(|s| !s.is_empty()) {
            if !is_hex_color(&color) {
                return Err(SlideError::ConfigError(format!(
                    "SLIDES_ACCENT_COLOR must be a #RRGGBB color, got {:?}",
                    color
                )));
            }
            config.theme = config.theme.with_accent(color);
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Classifier-backed composer for this configuration
    pub fn composer(&self) -> SlideComposer<SectionClassifier> {
        SlideComposer::new(
            SectionClassifier::new(&self.base_dir, self.theme.clone()),
            self.theme.clone(),
        )
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
