//! Engine configuration.
//!
//! Every timing and layout constant the page depends on lives here, so the
//! JS side only holds rendering concerns. JS may pass a partial JSON object;
//! missing keys keep their defaults.

use serde::Deserialize;

use crate::error::{EngineError, Result};

/// What to do with a `#projects/<slug>` hash present on a fresh page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StaleDeepLink {
    /// Strip the hash, keep the modal closed, start at the top.
    Discard,
    /// Strip the hash, then open the referenced project after `open_modal_delay_ms`.
    OpenAfterDelay,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypewriterConfig {
    pub speed_ms: f64,
    pub delete_speed_ms: f64,
    pub pause_ms: f64,
    pub initial_delay_ms: f64,
    pub start_delay_ms: f64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed_ms: 100.0,
            delete_speed_ms: 50.0,
            pause_ms: 1500.0,
            initial_delay_ms: 300.0,
            start_delay_ms: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    // --- Pagination ---
    pub cards_per_page: usize,
    pub max_pagination_pages: usize,
    /// Render prev/number/next controls when everything fits on one page.
    pub render_single_page_pagination: bool,

    // --- Gallery ---
    pub fallback_image: String,
    pub auto_slide_interval_ms: f64,
    /// Resume delay after prev/next/thumbnail navigation.
    pub resume_slide_timeout_ms: f64,
    /// Resume delay after releasing a press on the main image.
    pub pointer_resume_delay_ms: f64,
    pub focus_close_delay_ms: f64,

    // --- Routing ---
    pub stale_deep_link: StaleDeepLink,
    pub open_modal_delay_ms: f64,

    // --- Scrolling ---
    pub resize_debounce_ms: f64,
    pub scroll_throttle_ms: f64,
    pub scroll_offset: f64,
    pub scroll_duration_ms: f64,
    pub mobile_scroll_duration_ms: f64,
    pub mobile_breakpoint: f64,
    pub navigation_settle_ms: f64,
    pub scroll_to_top_threshold: f64,
    pub header_scrolled_threshold: f64,
    pub section_min_visible_percent: f64,
    pub section_tie_tolerance_percent: f64,

    // --- Misc ---
    pub announcement_ttl_ms: f64,
    pub typewriter: TypewriterConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cards_per_page: 6,
            max_pagination_pages: 3,
            render_single_page_pagination: false,
            fallback_image: folio_shared::FALLBACK_IMAGE.to_string(),
            auto_slide_interval_ms: 3000.0,
            resume_slide_timeout_ms: 2000.0,
            pointer_resume_delay_ms: 1000.0,
            focus_close_delay_ms: 100.0,
            stale_deep_link: StaleDeepLink::Discard,
            open_modal_delay_ms: 300.0,
            resize_debounce_ms: 200.0,
            scroll_throttle_ms: 100.0,
            scroll_offset: 80.0,
            scroll_duration_ms: 1200.0,
            mobile_scroll_duration_ms: 1500.0,
            mobile_breakpoint: 768.0,
            navigation_settle_ms: 100.0,
            scroll_to_top_threshold: 300.0,
            header_scrolled_threshold: 1.0,
            section_min_visible_percent: 5.0,
            section_tie_tolerance_percent: 15.0,
            announcement_ttl_ms: 1000.0,
            typewriter: TypewriterConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config. Degenerate values are
    /// repaired rather than rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json).map_err(EngineError::Config)?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        if self.cards_per_page == 0 {
            self.cards_per_page = 1;
        }
        if self.max_pagination_pages == 0 {
            self.max_pagination_pages = 1;
        }
        // Timers that re-arm themselves from their own callback need a
        // positive delay, or a single tick would never catch up.
        let tw = &mut self.typewriter;
        for delay in [
            &mut self.auto_slide_interval_ms,
            &mut tw.speed_ms,
            &mut tw.delete_speed_ms,
            &mut tw.pause_ms,
            &mut tw.initial_delay_ms,
        ] {
            if !(*delay >= 1.0) {
                *delay = 1.0;
            }
        }
        for delay in [
            &mut self.resize_debounce_ms,
            &mut self.scroll_throttle_ms,
            &mut tw.start_delay_ms,
        ] {
            if !(*delay >= 0.0) {
                *delay = 0.0;
            }
        }
        if self.fallback_image.is_empty() {
            self.fallback_image = folio_shared::FALLBACK_IMAGE.to_string();
        }
        self
    }

    /// Smooth-scroll duration for a viewport of the given width.
    pub fn scroll_duration_for(&self, viewport_width: f64) -> f64 {
        if viewport_width <= self.mobile_breakpoint {
            self.mobile_scroll_duration_ms
        } else {
            self.scroll_duration_ms
        }
    }
}
