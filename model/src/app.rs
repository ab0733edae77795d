//! # Portfolio Engine
//!
//! The one object JS talks to. It owns every piece of page state: the card
//! catalog, pagination, the gallery modal, the mirrored history stack, the
//! scroll spy and the decorative animations.
//!
//! ## Protocol
//! - DOM events come in as method calls with primitives (`&str`, `f64`,
//!   `&[f64]`). Methods that can arm timers take `now_ms`.
//! - Every call appends `Effect`s to a queue. JS drains it once per call
//!   (or per frame) with `drain_effects_json()` and applies them in order.
//! - `tick(now_ms)` fires due timers, steps the smooth-scroll animation and
//!   fills a flat frame buffer. JS reads it zero-copy through `frame_ptr()`.
//! - `data_version()` bumps on every state mutation.
//!
//! ## Errors
//! Nothing here returns an error to JS. Failures are logged and degraded:
//! an unresolvable card force-closes the modal, an invalid catalog drops to
//! fallback mode, malformed JSON keeps defaults.

use folio_shared::data::{self, ProjectRecord};
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::animation::{ScrollReveal, Typewriter};
use crate::catalog::{CardId, Catalog};
use crate::config::EngineConfig;
use crate::content::{self, Section};
use crate::context::Ctx;
use crate::effects::{Effect, EffectQueue, Politeness};
use crate::error::EngineError;
use crate::modal::{KeyOutcome, ModalController, ModalState};
use crate::navigation::{NavigationController, ScrollStep};
use crate::pagination::Pagination;
use crate::router::{resolve_popstate, PopAction, RouteState, Router};
use crate::timers::{TimerKey, TimerRegistry};

// ============================================
// Frame buffer offsets
//
// These MUST match the JS F constants exactly.
// Booleans are 0.0 / 1.0.
// ============================================

pub const F_MODAL_OPEN: usize = 0;
pub const F_IMAGE_INDEX: usize = 1; // -1 while closed
pub const F_AUTOPLAY: usize = 2;
pub const F_CURRENT_PAGE: usize = 3;
pub const F_TOTAL_PAGES: usize = 4;
pub const F_FILTERED_COUNT: usize = 5;
pub const F_SCROLL_TARGET: usize = 6;
pub const F_SCROLL_ANIMATING: usize = 7;
pub const F_MENU_OPEN: usize = 8;
pub const F_HEADER_SCROLLED: usize = 9;
pub const F_SCROLL_TO_TOP: usize = 10;
pub const F_FALLBACK: usize = 11;
pub const F_PENDING_EFFECTS: usize = 12;
pub const FRAME_SIZE: usize = 13;

const FALLBACK_ANNOUNCEMENT: &str = "Application loaded in fallback mode";

/// Install `console_error_panic_hook` when built with the `panic-hook`
/// feature; a no-op otherwise.
#[wasm_bindgen]
pub fn install_panic_hook() {
    #[cfg(feature = "panic-hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct PortfolioEngine {
    config: EngineConfig,
    records: Vec<ProjectRecord>,

    // --- Controllers ---
    catalog: Catalog,
    pagination: Pagination,
    modal: ModalController,
    router: Router,
    navigation: NavigationController,
    typewriter: Typewriter,
    reveal: ScrollReveal,

    // --- Shared event-loop state ---
    timers: TimerRegistry,
    effects: EffectQueue,
    now_ms: f64,
    viewport_height: f64,
    /// Slug restored from a stale deep link, opened by `OpenModalDelay`.
    pending_open: Option<String>,

    initialized: bool,
    fallback_mode: bool,
    data_version: u32,
    frame: Vec<f64>,
}

#[wasm_bindgen]
impl PortfolioEngine {
    // ── Construction ───────────────────────────────────────────────────

    #[wasm_bindgen(constructor)]
    pub fn new() -> PortfolioEngine {
        Self::with_records(EngineConfig::default(), data::projects())
    }

    /// Build with a (possibly partial) JSON config. Malformed JSON logs a
    /// warning and keeps the defaults.
    pub fn with_config(config_json: &str) -> PortfolioEngine {
        let config = EngineConfig::from_json(config_json).unwrap_or_else(|e| {
            warn!(error = %e, "using default engine config");
            EngineConfig::default()
        });
        Self::with_records(config, data::projects())
    }

    /// Replace the built-in project table before `init`. Returns false (and
    /// keeps the current table) if the JSON does not parse.
    pub fn load_projects_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Vec<ProjectRecord>>(json) {
            Ok(records) => {
                self.records = records;
                self.bump_version();
                true
            }
            Err(e) => {
                warn!(error = %e, "ignoring malformed project data");
                false
            }
        }
    }

    /// Page load. `hash` is `location.hash`; `scroll_y` the current window
    /// offset. Builds the catalog, strips a stale project hash, renders page
    /// 1 of the grid and starts the typewriter.
    pub fn init(&mut self, hash: &str, scroll_y: f64, viewport_width: f64, viewport_height: f64, now_ms: f64) {
        self.now_ms = now_ms;
        self.viewport_height = viewport_height;
        self.navigation.set_viewport_width(viewport_width);

        self.router = Router::new(hash);
        let stale = self.router.initial_load(self.config.stale_deep_link, &mut self.effects);
        let start_y = if self.router.current_hash() != hash { 0.0 } else { scroll_y };

        match Catalog::build(self.records.clone(), &self.config.fallback_image) {
            Ok(catalog) => self.catalog = catalog,
            Err(e) => {
                error!(error = %e, "startup failed, entering fallback mode");
                self.enter_fallback_mode();
            }
        }
        self.effects.push(Effect::RenderCards {
            html: self.catalog.render_html(&self.config.fallback_image),
        });
        self.pagination = Pagination::new(&self.config);
        self.pagination.load(self.catalog.ids(), &mut self.effects);

        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.navigation.set_initial_active(hash, &mut ctx);
        self.navigation.on_scroll(start_y, false, &mut ctx);
        if !self.fallback_mode {
            self.typewriter.start(&mut ctx);
        }

        if let Some(slug) = stale {
            info!(%slug, "opening stale deep link after delay");
            self.pending_open = Some(slug);
            self.timers
                .set_timeout(TimerKey::OpenModalDelay, self.now_ms, self.config.open_modal_delay_ms);
        }

        self.initialized = true;
        info!(cards = self.catalog.len(), fallback = self.fallback_mode, "engine initialized");
        self.bump_version();
    }

    /// Register the `<section id>`s the scroll spy watches, as a JSON array
    /// of ids. Rects passed to `animation_frame` follow this order.
    pub fn set_sections(&mut self, ids_json: &str) -> bool {
        match serde_json::from_str::<Vec<String>>(ids_json) {
            Ok(ids) => {
                self.navigation.set_sections(ids);
                true
            }
            Err(e) => {
                warn!(error = %e, "ignoring malformed section list");
                false
            }
        }
    }

    // ── Static content ─────────────────────────────────────────────────

    /// Markup for a named page region (`hero`, `skills`, ...). Unknown
    /// names render nothing.
    pub fn render_section_html(&self, name: &str) -> String {
        match Section::parse(name) {
            Some(section) => content::render_section(section),
            None => {
                warn!(name, "unknown section");
                String::new()
            }
        }
    }

    pub fn cards_html(&self) -> String {
        self.catalog.render_html(&self.config.fallback_image)
    }

    // ── Filter & pagination ────────────────────────────────────────────

    pub fn filter(&mut self, category: &str) {
        self.pagination.filter(&self.catalog, category, &mut self.effects);
        self.bump_version();
    }

    /// Page number click. `projects_top` is the document offset of the
    /// projects section, scrolled into view afterwards.
    pub fn go_to_page(&mut self, page: usize, projects_top: f64, now_ms: f64) {
        self.now_ms = now_ms;
        self.pagination.go_to_page(page, &mut self.effects);
        self.scroll_to_projects(projects_top);
        self.bump_version();
    }

    pub fn prev_page(&mut self, projects_top: f64, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        if !self.pagination.prev_page(&mut self.effects) {
            return false;
        }
        self.scroll_to_projects(projects_top);
        self.bump_version();
        true
    }

    pub fn next_page(&mut self, projects_top: f64, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        if !self.pagination.next_page(&mut self.effects) {
            return false;
        }
        self.scroll_to_projects(projects_top);
        self.bump_version();
        true
    }

    /// Window resize. The grid is re-shown once resizing settles.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64, now_ms: f64) {
        self.now_ms = now_ms;
        self.viewport_height = viewport_height;
        self.navigation.set_viewport_width(viewport_width);
        self.timers
            .set_timeout(TimerKey::ResizeDebounce, now_ms, self.config.resize_debounce_ms);
    }

    // ── Modal ──────────────────────────────────────────────────────────

    /// "View details" click. `opener` is the focus key of the clicked
    /// control. Returns false if the card could not be opened.
    pub fn open_card(&mut self, card_id: usize, scroll_y: f64, opener: Option<String>, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        self.open_card_at(card_id, scroll_y, opener, true)
    }

    /// Close button, Escape, or a programmatic close. Returns false (and
    /// emits nothing) if the modal was already closed.
    pub fn close_modal(&mut self, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        self.close_modal_inner()
    }

    /// Click on the overlay backdrop. Clicks inside the dialog are ignored.
    pub fn overlay_click(&mut self, on_backdrop: bool, now_ms: f64) -> bool {
        if !on_backdrop {
            return false;
        }
        self.close_modal(now_ms)
    }

    pub fn modal_prev(&mut self, now_ms: f64) -> bool {
        self.navigate_image(-1, now_ms)
    }

    pub fn modal_next(&mut self, now_ms: f64) -> bool {
        self.navigate_image(1, now_ms)
    }

    /// Thumbnail click.
    pub fn select_image(&mut self, index: usize, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        let changed = self.modal.switch_to(index, &mut ctx);
        if changed {
            self.bump_version();
        }
        changed
    }

    /// Keydown on a focused thumbnail. Returns true if handled.
    pub fn thumbnail_keydown(&mut self, index: usize, key: &str, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        let handled = self.modal.thumbnail_key(index, key, &mut ctx);
        if handled {
            self.bump_version();
        }
        handled
    }

    /// Wheel over the thumbnail strip. Returns true if JS should
    /// `preventDefault()`.
    pub fn thumbnail_wheel(&mut self, delta_y: f64) -> bool {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.modal.thumbnail_wheel(delta_y, &mut ctx)
    }

    /// Document keydown. `active` is the focus key of the focused element.
    /// Returns true if JS should `preventDefault()`.
    pub fn keydown(&mut self, key: &str, shift: bool, active: &str, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        match self.modal.handle_key(key, shift, active, &mut ctx) {
            KeyOutcome::Ignored => false,
            KeyOutcome::Handled => {
                self.bump_version();
                true
            }
            KeyOutcome::CloseRequested => {
                self.close_modal_inner();
                true
            }
        }
    }

    /// Mouse-down / touch-start on the main image.
    pub fn pointer_down(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.modal.pointer_down(&mut ctx);
        self.bump_version();
    }

    /// Mouse-up / mouse-leave / touch-end / touch-cancel on the main image.
    pub fn pointer_up(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.modal.pointer_up(&mut ctx);
    }

    // ── History ────────────────────────────────────────────────────────

    /// Browser back/forward. `state_json` is `JSON.stringify(event.state)`.
    pub fn popstate(&mut self, state_json: &str, hash: &str, now_ms: f64) {
        self.now_ms = now_ms;
        let state = RouteState::from_json(state_json).unwrap_or_else(|e| {
            warn!(error = %e, "treating unreadable history state as empty");
            None
        });
        self.router.sync(hash, state.as_ref());
        self.apply_popstate(state.as_ref());
    }

    // ── Navigation ─────────────────────────────────────────────────────

    /// Window scroll. Coalesced: JS gets at most one RequestFrame per frame.
    pub fn scroll(&mut self, scroll_y: f64) {
        let modal_open = self.modal.is_open();
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.navigation.on_scroll(scroll_y, modal_open, &mut ctx);
    }

    /// In-page nav link click. `element_top` is the target's document
    /// offset. Returns true if JS should `preventDefault()`.
    pub fn nav_link_click(&mut self, href: &str, element_top: f64, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.navigation.close_menu(&mut ctx);
        if href.is_empty() || href == "#" {
            return false;
        }
        self.navigation.scroll_to_anchor(element_top, href, &mut ctx);
        self.bump_version();
        true
    }

    pub fn scroll_to_top(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.navigation.scroll_to(0.0, None, &mut ctx);
        self.bump_version();
    }

    pub fn toggle_menu(&mut self) {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.navigation.toggle_menu(&mut ctx);
        self.bump_version();
    }

    /// Any document click; `inside_menu` if it hit the nav links or toggle.
    pub fn document_click(&mut self, inside_menu: bool) {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.navigation.outside_click(inside_menu, &mut ctx);
        self.bump_version();
    }

    // ── Frame loop ─────────────────────────────────────────────────────

    /// Fire due timers, step the scroll animation and fill the frame.
    pub fn tick(&mut self, now_ms: f64) {
        self.advance(now_ms);
        self.fill_frame();
    }

    /// Answer to a RequestFrame effect. `rects` holds the registered
    /// sections' viewport-relative `[top, bottom]` pairs.
    pub fn animation_frame(&mut self, now_ms: f64, rects: &[f64]) {
        self.advance(now_ms);
        if self.navigation.needs_layout() {
            let rects = self.navigation.rects_from_flat(rects);
            let modal_scroll = self.modal.session().map(|s| s.saved_scroll_y);
            let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
            self.navigation
                .layout(&rects, self.viewport_height, modal_scroll, &mut ctx);
            self.reveal.update(&rects, self.viewport_height, &mut ctx);
        }
        self.fill_frame();
    }

    pub fn frame_ptr(&self) -> *const f64 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> usize {
        FRAME_SIZE
    }

    /// Serialize and clear the pending effects.
    pub fn drain_effects_json(&mut self) -> String {
        self.effects.drain_json()
    }

    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    pub fn data_version(&self) -> u32 {
        self.data_version
    }

    // ── Getters ────────────────────────────────────────────────────────

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.modal.state() == ModalState::Playing
    }

    /// Index of the displayed image, or -1 while closed.
    pub fn current_image_index(&self) -> i32 {
        self.modal.current_index().map_or(-1, |i| i as i32)
    }

    pub fn current_slug(&self) -> String {
        self.modal.current_slug().unwrap_or_default().to_string()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn filtered_count(&self) -> usize {
        self.pagination.filtered_len()
    }

    pub fn active_filter(&self) -> String {
        self.pagination.active_filter().to_string()
    }

    pub fn current_hash(&self) -> String {
        self.router.current_hash().to_string()
    }

    pub fn history_length(&self) -> usize {
        self.router.history_len()
    }

    pub fn active_nav_href(&self) -> String {
        self.navigation.active_href().to_string()
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigation.is_menu_open()
    }

    pub fn is_fallback_mode(&self) -> bool {
        self.fallback_mode
    }

    pub fn card_count(&self) -> usize {
        self.catalog.len()
    }

    // ── Teardown ───────────────────────────────────────────────────────

    /// Page unload: cancel every timer and drop all session state.
    pub fn destroy(&mut self) {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.typewriter.stop(&mut ctx);
        self.timers.clear_all();
        self.effects.clear();
        self.modal = ModalController::new(&self.config);
        self.navigation = NavigationController::new(&self.config);
        self.reveal = ScrollReveal::default();
        self.pending_open = None;
        self.initialized = false;
        info!("engine destroyed");
        self.bump_version();
    }
}

impl Default for PortfolioEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// Internal helpers (not exported to JS)
// ============================================

impl PortfolioEngine {
    pub(crate) fn with_records(config: EngineConfig, records: Vec<ProjectRecord>) -> Self {
        Self {
            catalog: Catalog::default(),
            pagination: Pagination::new(&config),
            modal: ModalController::new(&config),
            router: Router::new(""),
            navigation: NavigationController::new(&config),
            typewriter: Typewriter::new(data::home().professions.as_slice(), &config.typewriter),
            reveal: ScrollReveal::default(),
            timers: TimerRegistry::new(),
            effects: EffectQueue::new(),
            now_ms: 0.0,
            viewport_height: 0.0,
            pending_open: None,
            initialized: false,
            fallback_mode: false,
            data_version: 0,
            frame: vec![0.0; FRAME_SIZE],
            records,
            config,
        }
    }

    fn bump_version(&mut self) {
        self.data_version = self.data_version.wrapping_add(1);
    }

    fn enter_fallback_mode(&mut self) {
        self.catalog = Catalog::build_lenient(self.records.clone(), &self.config.fallback_image);
        self.fallback_mode = true;
        self.effects.push(Effect::EnterFallbackMode);
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.reveal.reveal_all(&mut ctx);
        ctx.emit(Effect::Announce {
            message: FALLBACK_ANNOUNCEMENT.to_string(),
            priority: Politeness::Assertive,
            ttl_ms: self.config.announcement_ttl_ms,
        });
    }

    fn open_card_at(&mut self, card: CardId, scroll_y: f64, opener: Option<String>, push_history: bool) -> bool {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        self.navigation.cancel_animation(&mut ctx);
        match self.modal.open(&self.catalog, card, scroll_y, opener, &mut ctx) {
            Ok(()) => {
                self.navigation.update_header(scroll_y, &mut ctx);
                if push_history {
                    if let Some(slug) = self.modal.current_slug() {
                        self.router.record_open(slug, scroll_y, &mut self.effects);
                    }
                }
                self.bump_version();
                true
            }
            Err(e) => {
                error!(error = %e, card, "failed to open project modal");
                self.close_modal_inner();
                false
            }
        }
    }

    fn open_slug(&mut self, slug: &str, scroll_y: f64, push_history: bool) -> bool {
        match self.catalog.find_by_slug(slug) {
            Some(card) => self.open_card_at(card, scroll_y, None, push_history),
            None => {
                warn!(error = %EngineError::UnknownProject(slug.to_string()), "cannot open project");
                false
            }
        }
    }

    fn close_modal_inner(&mut self) -> bool {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        let Some(session) = self.modal.close(&mut ctx) else {
            return false;
        };
        self.navigation.on_scroll(session.saved_scroll_y, false, &mut ctx);
        self.router.collapse_modal_hash(&mut self.effects);
        self.bump_version();
        true
    }

    fn navigate_image(&mut self, direction: i32, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        let moved = self.modal.navigate(direction, &mut ctx);
        if moved {
            self.bump_version();
        }
        moved
    }

    fn apply_popstate(&mut self, state: Option<&RouteState>) {
        match resolve_popstate(state, self.modal.current_slug()) {
            PopAction::Open { slug, scroll_y } => {
                self.open_slug(&slug, scroll_y, false);
            }
            PopAction::Close => {
                self.close_modal_inner();
            }
            PopAction::Nothing => {}
        }
    }

    fn scroll_to_projects(&mut self, projects_top: f64) {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        let target = projects_top - self.config.scroll_offset;
        self.navigation.scroll_to(target, None, &mut ctx);
    }

    fn advance(&mut self, now_ms: f64) {
        // Callbacks run at their scheduled time, so anything they arm is
        // timed from there rather than from a late frame.
        while let Some((key, due_at)) = self.timers.pop_due_at(now_ms) {
            self.now_ms = due_at.max(self.now_ms);
            self.dispatch_timer(key);
        }
        self.now_ms = now_ms;

        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        if let ScrollStep::Finished { hash } = self.navigation.step(&mut ctx) {
            if let Some(hash) = hash {
                self.router.record_anchor(&hash, &mut self.effects);
            }
            self.bump_version();
        }
    }

    fn dispatch_timer(&mut self, key: TimerKey) {
        let mut ctx = Ctx::new(self.now_ms, &mut self.timers, &mut self.effects);
        match key {
            TimerKey::Slideshow | TimerKey::ResumeSlideshow | TimerKey::FocusCloseButton => {
                self.modal.on_timer(key, &mut ctx);
            }
            TimerKey::NavigationSettle | TimerKey::ScrollThrottle => {
                self.navigation.on_timer(key, &mut ctx);
            }
            TimerKey::Typewriter => {
                self.typewriter.on_timer(&mut ctx);
            }
            TimerKey::ResizeDebounce => {
                let page = self.pagination.current_page();
                self.pagination.show_page(page, ctx.fx);
                self.navigation.request_layout(&mut ctx);
            }
            TimerKey::OpenModalDelay => {
                if let Some(slug) = self.pending_open.take() {
                    let scroll_y = self.navigation.scroll_y();
                    self.open_slug(&slug, scroll_y, true);
                }
            }
        }
        self.bump_version();
    }

    fn fill_frame(&mut self) {
        let session = self.modal.session();
        self.frame[F_MODAL_OPEN] = flag(session.is_some());
        self.frame[F_IMAGE_INDEX] = session.map_or(-1.0, |s| s.current_index as f64);
        self.frame[F_AUTOPLAY] = flag(self.modal.state() == ModalState::Playing);
        self.frame[F_CURRENT_PAGE] = self.pagination.current_page() as f64;
        self.frame[F_TOTAL_PAGES] = self.pagination.total_pages() as f64;
        self.frame[F_FILTERED_COUNT] = self.pagination.filtered_len() as f64;
        self.frame[F_SCROLL_TARGET] = self.navigation.scroll_target();
        self.frame[F_SCROLL_ANIMATING] = flag(self.navigation.is_animating());
        self.frame[F_MENU_OPEN] = flag(self.navigation.is_menu_open());
        self.frame[F_HEADER_SCROLLED] = flag(self.navigation.is_header_scrolled());
        self.frame[F_SCROLL_TO_TOP] = flag(self.navigation.is_scroll_to_top_visible());
        self.frame[F_FALLBACK] = flag(self.fallback_mode);
        self.frame[F_PENDING_EFFECTS] = self.effects.len() as f64;
    }

    #[cfg(test)]
    fn frame(&self) -> &[f64] {
        &self.frame
    }
}

fn flag(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}
