use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Default, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }
}

/// Knobs of the page. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub page_size: usize,
    pub max_visible_pages: usize,
    pub excerpt_threshold: usize,
    pub loading_delay_ms: u64,
    pub total_articles: usize,
    pub theme: Theme,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            max_visible_pages: crate::components::pagination::MAX_VISIBLE_PAGES,
            excerpt_threshold: 150,
            loading_delay_ms: 1000,
            total_articles: 23,
            theme: Theme::Light,
        }
    }
}

impl PageConfig {
    pub fn loading_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.loading_delay_ms)
    }
}
