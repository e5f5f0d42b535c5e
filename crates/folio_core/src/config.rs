//! Site configuration
//!
//! A site is described by a TOML file:
//!
//! ```toml
//! unlock_gate = 2
//!
//! [timing]
//! transition_ms = 800
//!
//! [[pages]]
//! name = "welcome"
//! backdrop = "light"
//!
//! [[pages]]
//! name = "personality"
//! kind = "scrollable"
//! backdrop = { split = { mapping = "descending", upper = "light", lower = "dark", rest_percent = 100.0 } }
//! ```
//!
//! Every table has defaults, so an empty file yields the eight-page
//! portfolio.

use std::fs;
use std::path::Path;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::page::{Backdrop, PageKind, PageSpec, SplitMapping, SplitSpec, Tone};

/// Timing tunables, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Page-slide transition; navigation is blocked while it runs
    pub transition_ms: u64,
    /// Minimum spacing between accepted wheel page changes on static pages
    pub debounce_ms: u64,
    /// Duration of a mouse-wheel smooth scroll inside a page
    pub smooth_scroll_ms: u64,
    /// Closing animation of the navigation menu
    pub menu_close_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: 800,
            debounce_ms: 100,
            smooth_scroll_ms: 400,
            menu_close_ms: 320,
        }
    }
}

impl TimingConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }

    pub fn menu_close(&self) -> Duration {
        Duration::from_millis(self.menu_close_ms)
    }
}

/// Wheel tunables
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Pixels per line for `DeltaMode::Line`
    pub line_height_px: f32,
    /// Minimum |delta| for a static page to change page
    pub page_threshold: f32,
    /// Mouse-wheel delta multiplier for smooth scrolling
    pub smooth_multiplier: f32,
    /// |delta| at or above which an event counts as a mouse wheel
    pub mouse_min_delta: f32,
    /// Delta step of one wheel notch
    pub mouse_notch: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            line_height_px: 16.0,
            page_threshold: 50.0,
            smooth_multiplier: 1.8,
            mouse_min_delta: 100.0,
            mouse_notch: 120.0,
        }
    }
}

/// Complete description of a page stack
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Pages reachable only after unlock start at this index
    #[serde(default = "default_unlock_gate")]
    pub unlock_gate: usize,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default = "default_pages")]
    pub pages: Vec<PageSpec>,
}

fn default_unlock_gate() -> usize {
    2
}

fn default_pages() -> Vec<PageSpec> {
    let personality = SplitSpec::new(SplitMapping::Descending, Tone::Light, Tone::Dark, 100.0)
        .with_overlay(0.4)
        .with_strike(0.3, 0.8);
    let conclusion = SplitSpec::new(SplitMapping::Ascending, Tone::Light, Tone::Dark, 0.0);

    vec![
        PageSpec::new("welcome", PageKind::Static, Backdrop::Light),
        PageSpec::new("sayhi", PageKind::Static, Backdrop::Light),
        PageSpec::new("personality", PageKind::Scrollable, Backdrop::Split(personality)),
        PageSpec::new("study_path", PageKind::Static, Backdrop::Dark),
        PageSpec::new("learning", PageKind::Static, Backdrop::Dark),
        PageSpec::new("story", PageKind::Scrollable, Backdrop::Dark),
        PageSpec::new("gallery", PageKind::Flip, Backdrop::Light).with_fixed_progress(1.0),
        PageSpec::new("conclusion", PageKind::Scrollable, Backdrop::Split(conclusion)).terminal(),
    ]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            unlock_gate: default_unlock_gate(),
            timing: TimingConfig::default(),
            wheel: WheelConfig::default(),
            pages: default_pages(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate config text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&PageSpec> {
        self.pages.get(index)
    }

    /// Pages indexed by name, in stack order
    pub fn registry(&self) -> IndexMap<&str, usize> {
        self.pages
            .iter()
            .enumerate()
            .map(|(index, page)| (page.name.as_str(), index))
            .collect()
    }

    pub fn page_index(&self, name: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.name == name)
    }

    /// Check invariants the navigator and page behaviours rely on
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(ConfigError::Invalid("site has no pages".to_string()));
        }

        if self.registry().len() != self.pages.len() {
            let mut seen = IndexMap::new();
            for page in &self.pages {
                *seen.entry(page.name.as_str()).or_insert(0usize) += 1;
            }
            let duplicates: Vec<&str> = seen
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(|(name, _)| name)
                .collect();
            return Err(ConfigError::Invalid(format!(
                "duplicate page names: {}",
                duplicates.join(", ")
            )));
        }

        if self.unlock_gate == 0 || self.unlock_gate > self.pages.len() {
            return Err(ConfigError::Invalid(format!(
                "unlock_gate must be in 1..={}, got {}",
                self.pages.len(),
                self.unlock_gate
            )));
        }

        for page in &self.pages {
            if let Some(split) = page.backdrop.split() {
                if !(0.0..=100.0).contains(&split.rest_percent) {
                    return Err(ConfigError::Invalid(format!(
                        "page '{}': rest_percent must be within 0..=100, got {}",
                        page.name, split.rest_percent
                    )));
                }
                if !(0.0..=1.0).contains(&split.overlay_max) {
                    return Err(ConfigError::Invalid(format!(
                        "page '{}': overlay_max must be within 0..=1, got {}",
                        page.name, split.overlay_max
                    )));
                }
                if let Some(strike) = split.strike {
                    if !(0.0 <= strike.start && strike.start < strike.end && strike.end <= 1.0) {
                        return Err(ConfigError::Invalid(format!(
                            "page '{}': strike window must satisfy 0 <= start < end <= 1, got {}..{}",
                            page.name, strike.start, strike.end
                        )));
                    }
                }
            }
            if let Some(progress) = page.fixed_progress {
                if !(0.0..=1.0).contains(&progress) {
                    return Err(ConfigError::Invalid(format!(
                        "page '{}': fixed_progress must be within 0..=1, got {}",
                        page.name, progress
                    )));
                }
            }
        }

        let wheel = &self.wheel;
        if wheel.line_height_px <= 0.0 || wheel.mouse_notch <= 0.0 || wheel.smooth_multiplier <= 0.0
        {
            return Err(ConfigError::Invalid(
                "wheel.line_height_px, wheel.mouse_notch and wheel.smooth_multiplier must be positive"
                    .to_string(),
            ));
        }
        if wheel.page_threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "wheel.page_threshold must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site() {
        let config = SiteConfig::default();
        assert_eq!(config.page_count(), 8);
        assert_eq!(config.unlock_gate, 2);
        assert!(config.validate().is_ok());
        assert_eq!(config.page_index("gallery"), Some(6));
        assert!(config.page(7).unwrap().terminal);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_parse_pages_and_timing() {
        let text = r#"
            unlock_gate = 1

            [timing]
            transition_ms = 500

            [[pages]]
            name = "intro"
            backdrop = "dark"

            [[pages]]
            name = "essay"
            kind = "scrollable"
            terminal = true
            backdrop = { split = { mapping = "double_rate", upper = "dark", lower = "light" } }
        "#;
        let config = SiteConfig::from_toml_str(text).unwrap();
        assert_eq!(config.unlock_gate, 1);
        assert_eq!(config.timing.transition_ms, 500);
        assert_eq!(config.timing.debounce_ms, 100);
        assert_eq!(config.pages[0].kind, PageKind::Static);
        let split = config.pages[1].backdrop.split().unwrap();
        assert_eq!(split.mapping, SplitMapping::DoubleRate);
        assert_eq!(split.rest_percent, 100.0);
        assert!(config.pages[1].terminal);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        let config = SiteConfig::default();
        config.save(&path).unwrap();
        assert_eq!(SiteConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut config = SiteConfig::default();
        config.pages[3].name = "welcome".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("welcome"));
    }

    #[test]
    fn test_rejects_bad_gate() {
        let config = SiteConfig {
            unlock_gate: 9,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_rest_percent() {
        let mut config = SiteConfig::default();
        config.pages[2].backdrop = Backdrop::Split(SplitSpec::new(
            SplitMapping::Descending,
            Tone::Light,
            Tone::Dark,
            140.0,
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_strike_window() {
        let mut config = SiteConfig::default();
        config.pages[2].backdrop = Backdrop::Split(
            SplitSpec::new(SplitMapping::Descending, Tone::Light, Tone::Dark, 100.0)
                .with_strike(0.8, 0.3),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("strike window"));
    }

    #[test]
    fn test_gallery_reports_full_progress() {
        let config = SiteConfig::default();
        let gallery = config.page(6).unwrap();
        assert_eq!(gallery.fixed_progress, Some(1.0));
        assert!(gallery.shows_capsule());

        let mut config = config;
        config.pages[6].fixed_progress = Some(1.5);
        assert!(config.validate().is_err());
    }
}
