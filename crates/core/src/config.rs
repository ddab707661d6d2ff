//! Enhancement-layer configuration.
//!
//! Every threshold the page tuning might touch, plus the boot-diagnostic
//! gate. Loaded from a JSON blob carried in a `data-pagelift` attribute on
//! `<body>`; absent or malformed JSON falls back to the defaults, field by
//! field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnhancerConfig {
    /// Scroll depth past which the navbar gains its scrolled treatment.
    #[cfg_attr(feature = "serde", serde(default = "default_navbar_threshold"))]
    pub navbar_threshold: f64,
    /// Scroll depth past which the scroll-to-top control shows.
    #[cfg_attr(feature = "serde", serde(default = "default_to_top_threshold"))]
    pub to_top_threshold: f64,
    /// Hero background translation per scrolled pixel.
    #[cfg_attr(feature = "serde", serde(default = "default_parallax_rate"))]
    pub parallax_rate: f64,
    /// Fraction of an element that must be visible before its one-shot
    /// watcher fires.
    #[cfg_attr(feature = "serde", serde(default = "default_reveal_threshold"))]
    pub reveal_threshold: f64,
    /// Bottom margin (px) subtracted from the viewport so watchers fire
    /// slightly before an element reaches the viewport bottom.
    #[cfg_attr(feature = "serde", serde(default = "default_reveal_margin_px"))]
    pub reveal_margin_px: f64,
    /// Emit one console.info line on load naming the wired components.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boot_diagnostics: bool,
}

fn default_navbar_threshold() -> f64 {
    50.0
}

fn default_to_top_threshold() -> f64 {
    300.0
}

fn default_parallax_rate() -> f64 {
    0.5
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_reveal_margin_px() -> f64 {
    50.0
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: default_navbar_threshold(),
            to_top_threshold: default_to_top_threshold(),
            parallax_rate: default_parallax_rate(),
            reveal_threshold: default_reveal_threshold(),
            reveal_margin_px: default_reveal_margin_px(),
            boot_diagnostics: false,
        }
    }
}

impl EnhancerConfig {
    /// Parse a JSON config blob; `None` input or garbage yields defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    /// Root margin string for the intersection watchers.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_margin_px)
    }
}
