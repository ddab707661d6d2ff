//! Derivation of scroll-driven UI effects.
//!
//! One pure function from a sampled scroll position to the three derived
//! flags, so the threshold and hero-bounds rules are testable without a
//! browser. The wasm side samples the position once per coalesced frame
//! and applies whatever this returns.

use crate::config::EnhancerConfig;

/// Vertical extent of the hero section, measured from the top of the
/// document (`top` = offset of the hero, `height` = its own height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroBounds {
    pub top: f64,
    pub height: f64,
}

impl HeroBounds {
    fn span(self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedEffects {
    /// Navbar gains its shadow/blur treatment past the navbar threshold.
    pub navbar_scrolled: bool,
    /// Parallax translation for the hero background, `None` while the
    /// viewport has scrolled past the hero span (the transform is then
    /// left unmodified rather than reset).
    pub parallax_offset: Option<f64>,
    /// Scroll-to-top control visibility.
    pub to_top_visible: bool,
}

/// Derive all scroll effects from one freshly sampled position.
pub fn derive(y: f64, hero: Option<HeroBounds>, config: &EnhancerConfig) -> DerivedEffects {
    DerivedEffects {
        navbar_scrolled: y > config.navbar_threshold,
        parallax_offset: hero
            .filter(|h| y <= h.span())
            .map(|_| y * config.parallax_rate),
        to_top_visible: to_top_visible(y, config),
    }
}

/// Visibility rule for the scroll-to-top control. Runs unthrottled on the
/// raw scroll stream, so it is kept separate from `derive` callers that
/// only want the cheap check.
pub fn to_top_visible(y: f64, config: &EnhancerConfig) -> bool {
    y > config.to_top_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> EnhancerConfig {
        EnhancerConfig::default()
    }

    fn hero() -> Option<HeroBounds> {
        Some(HeroBounds {
            top: 0.0,
            height: 600.0,
        })
    }

    #[test]
    fn navbar_flag_flips_past_fifty_pixels() {
        assert!(!derive(50.0, hero(), &cfg()).navbar_scrolled);
        assert!(derive(50.5, hero(), &cfg()).navbar_scrolled);
        assert!(!derive(0.0, hero(), &cfg()).navbar_scrolled);
    }

    #[test]
    fn parallax_is_half_the_position_while_inside_the_hero_span() {
        let fx = derive(400.0, hero(), &cfg());
        assert_eq!(fx.parallax_offset, Some(200.0));
    }

    #[test]
    fn parallax_is_left_unmodified_past_the_hero_span() {
        let fx = derive(601.0, hero(), &cfg());
        assert_eq!(fx.parallax_offset, None);
        // Boundary itself is still inside.
        let fx = derive(600.0, hero(), &cfg());
        assert_eq!(fx.parallax_offset, Some(300.0));
    }

    #[test]
    fn parallax_respects_a_hero_offset_from_the_document_top() {
        let hero = Some(HeroBounds {
            top: 80.0,
            height: 600.0,
        });
        assert_eq!(derive(680.0, hero, &cfg()).parallax_offset, Some(340.0));
        assert_eq!(derive(681.0, hero, &cfg()).parallax_offset, None);
    }

    #[test]
    fn missing_hero_is_a_silent_noop_for_parallax() {
        assert_eq!(derive(100.0, None, &cfg()).parallax_offset, None);
    }

    #[test]
    fn to_top_visibility_toggles_exactly_at_three_hundred_both_directions() {
        assert!(!to_top_visible(300.0, &cfg()));
        assert!(to_top_visible(300.5, &cfg()));
        // Travel back down across the boundary.
        assert!(to_top_visible(301.0, &cfg()));
        assert!(!to_top_visible(299.0, &cfg()));
    }

    #[test]
    fn burst_scenario_zero_to_five_hundred() {
        // Ten notifications within one frame collapse to a single derive
        // at the freshest position (see frame::FrameSlot); the derived
        // values must match one recomputation at y=500.
        let fx = derive(500.0, hero(), &cfg());
        assert!(fx.navbar_scrolled);
        assert_eq!(fx.parallax_offset, Some(250.0));
        assert!(fx.to_top_visible);
    }
}
