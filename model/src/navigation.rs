// ============================================================================
// Navigation / Scroll Controller
// ============================================================================
//
// THE PATTERN:
//   - JS forwards every window scroll as on_scroll(y). The engine coalesces
//     them: the first scroll of a frame sets `ticking` and emits RequestFrame,
//     later ones only record the offset.
//   - In the animation frame JS reads section rects (viewport-relative, as
//     a flat [top0, bottom0, top1, bottom1, ...] slice in registration order)
//     and calls layout(). That clears `ticking`, updates the header, and,
//     at most once per throttle window, the active nav link and the
//     scroll-to-top button.
//   - While the modal is open, scroll handling pauses; the header reflects
//     the offset saved when the modal opened.
//
// SMOOTH SCROLL:
//   scroll_to() starts an eased animation from the current offset. Each
//   step() emits ScrollWindowTo and asks for another frame until progress
//   reaches 1. The finished step hands back the hash to record, so the URL
//   changes once, at completion. `is_navigating` stays set until the
//   NavigationSettle timer fires, so the scroll spy does not fight the
//   animation.
//
// ============================================================================

use folio_shared::ease_in_out_cubic;
use tracing::debug;

use crate::config::EngineConfig;
use crate::context::Ctx;
use crate::effects::Effect;
use crate::router::Route;
use crate::timers::TimerKey;

const MENU_OPEN_CLASS: &str = "mobile-menu-open";
const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
const DEFAULT_SECTION: &str = "home";

/// A section's bounding rect relative to the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Percentage of the viewport height covered by `rect`.
pub fn visible_percent(rect: &SectionRect, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 || rect.top >= viewport_height || rect.bottom <= 0.0 {
        return 0.0;
    }
    let visible = rect.bottom.min(viewport_height) - rect.top.max(0.0);
    visible / viewport_height * 100.0
}

/// Pick the section that should own the active nav link.
///
/// Candidates must cover more than `min_percent` of the viewport. A candidate
/// beats the current best if it covers clearly more (by at least
/// `tie_tolerance` points), or if the two are within tolerance and it sits
/// closer to the top of the viewport.
pub fn most_visible_section<'a>(
    rects: &'a [SectionRect],
    viewport_height: f64,
    min_percent: f64,
    tie_tolerance: f64,
) -> Option<&'a str> {
    rects
        .iter()
        .map(|r| (r, visible_percent(r, viewport_height)))
        .filter(|(_, pct)| *pct > min_percent)
        .fold(None::<(&SectionRect, f64)>, |best, (rect, pct)| match best {
            None => Some((rect, pct)),
            Some((b, b_pct)) => {
                let wins = if (pct - b_pct).abs() < tie_tolerance {
                    rect.top.abs() < b.top.abs()
                } else {
                    pct > b_pct
                };
                if wins {
                    Some((rect, pct))
                } else {
                    Some((b, b_pct))
                }
            }
        })
        .map(|(r, _)| r.id.as_str())
}

#[derive(Clone, Debug, PartialEq)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    started_at: Option<f64>,
    duration_ms: f64,
    /// Hash to record once the animation lands.
    hash: Option<String>,
}

/// Outcome of one animation step.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollStep {
    Idle,
    Moving,
    Finished { hash: Option<String> },
}

#[derive(Debug)]
pub struct NavigationController {
    section_ids: Vec<String>,
    active_href: String,
    menu_open: bool,
    is_navigating: bool,
    ticking: bool,
    scroll_dirty: bool,
    scroll_y: f64,
    viewport_width: f64,
    header_scrolled: bool,
    scroll_to_top_visible: bool,
    animation: Option<ScrollAnimation>,
    config: EngineConfig,
}

impl NavigationController {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            section_ids: Vec::new(),
            active_href: String::new(),
            menu_open: false,
            is_navigating: false,
            ticking: false,
            scroll_dirty: false,
            scroll_y: 0.0,
            viewport_width: 0.0,
            header_scrolled: false,
            scroll_to_top_visible: false,
            animation: None,
            config: config.clone(),
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn active_href(&self) -> &str {
        &self.active_href
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_navigating(&self) -> bool {
        self.is_navigating
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn scroll_target(&self) -> f64 {
        self.animation.as_ref().map_or(self.scroll_y, |a| a.to)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    pub fn is_scroll_to_top_visible(&self) -> bool {
        self.scroll_to_top_visible
    }

    pub fn section_ids(&self) -> &[String] {
        &self.section_ids
    }

    // ── Setup ──────────────────────────────────────────────────────────

    pub fn set_sections(&mut self, ids: Vec<String>) {
        self.section_ids = ids;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Zip a flat `[top, bottom, ...]` slice with the registered ids.
    /// Trailing values without an id (or an id without both values) are dropped.
    pub fn rects_from_flat(&self, flat: &[f64]) -> Vec<SectionRect> {
        self.section_ids
            .iter()
            .zip(flat.chunks_exact(2))
            .map(|(id, pair)| SectionRect {
                id: id.clone(),
                top: pair[0],
                bottom: pair[1],
            })
            .collect()
    }

    /// Highlight the nav link for the first segment of `hash`, or `#home`.
    pub fn set_initial_active(&mut self, hash: &str, ctx: &mut Ctx) {
        let route = Route::parse(hash);
        let section = route.section().unwrap_or(DEFAULT_SECTION);
        self.set_active(&format!("#{section}"), ctx);
    }

    fn set_active(&mut self, href: &str, ctx: &mut Ctx) {
        if self.active_href == href {
            return;
        }
        self.active_href = href.to_string();
        ctx.emit(Effect::SetActiveNavLink {
            href: href.to_string(),
        });
    }

    // ── Mobile menu ────────────────────────────────────────────────────

    pub fn toggle_menu(&mut self, ctx: &mut Ctx) {
        self.menu_open = !self.menu_open;
        self.emit_menu(ctx);
    }

    pub fn close_menu(&mut self, ctx: &mut Ctx) {
        if !self.menu_open {
            return;
        }
        self.menu_open = false;
        self.emit_menu(ctx);
    }

    /// A document click. `inside_menu` is true when the target sits in the
    /// nav links or the toggle itself.
    pub fn outside_click(&mut self, inside_menu: bool, ctx: &mut Ctx) {
        if !inside_menu {
            self.close_menu(ctx);
        }
    }

    fn emit_menu(&self, ctx: &mut Ctx) {
        ctx.emit(Effect::SetBodyClass {
            class: MENU_OPEN_CLASS.to_string(),
            on: self.menu_open,
        });
        ctx.emit(Effect::SetAttribute {
            selector: MENU_TOGGLE_SELECTOR.to_string(),
            name: "aria-expanded".to_string(),
            value: self.menu_open.to_string(),
        });
    }

    // ── Scroll spy ─────────────────────────────────────────────────────

    /// Record a window scroll. Returns true if a frame was requested.
    pub fn on_scroll(&mut self, scroll_y: f64, modal_open: bool, ctx: &mut Ctx) -> bool {
        if modal_open {
            return false;
        }
        self.scroll_y = scroll_y;
        self.scroll_dirty = true;
        if self.ticking {
            return false;
        }
        self.ticking = true;
        ctx.emit(Effect::RequestFrame);
        true
    }

    /// Ask for a layout pass regardless of scrolling (startup, resize).
    pub fn request_layout(&mut self, ctx: &mut Ctx) {
        self.scroll_dirty = true;
        if !self.ticking {
            self.ticking = true;
            ctx.emit(Effect::RequestFrame);
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.ticking
    }

    /// Animation-frame layout pass.
    pub fn layout(
        &mut self,
        rects: &[SectionRect],
        viewport_height: f64,
        modal_scroll: Option<f64>,
        ctx: &mut Ctx,
    ) {
        self.ticking = false;
        self.update_header(modal_scroll.unwrap_or(self.scroll_y), ctx);
        if modal_scroll.is_some() {
            return;
        }
        if ctx.timers.is_pending(TimerKey::ScrollThrottle) {
            return;
        }
        self.scroll_dirty = false;
        ctx.set_timeout(TimerKey::ScrollThrottle, self.config.scroll_throttle_ms);

        if !self.is_navigating {
            let best = most_visible_section(
                rects,
                viewport_height,
                self.config.section_min_visible_percent,
                self.config.section_tie_tolerance_percent,
            );
            if let Some(id) = best {
                self.set_active(&format!("#{id}"), ctx);
            }
        }

        let show = self.scroll_y > self.config.scroll_to_top_threshold;
        if show != self.scroll_to_top_visible {
            self.scroll_to_top_visible = show;
            ctx.emit(Effect::SetScrollToTopVisible { visible: show });
        }
    }

    /// Header state follows `scroll_y`; used directly when the modal opens.
    pub fn update_header(&mut self, scroll_y: f64, ctx: &mut Ctx) {
        let scrolled = scroll_y > self.config.header_scrolled_threshold;
        if scrolled != self.header_scrolled {
            self.header_scrolled = scrolled;
            ctx.emit(Effect::SetHeaderScrolled { scrolled });
        }
    }

    // ── Timers ─────────────────────────────────────────────────────────

    pub fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx) -> bool {
        match key {
            TimerKey::ScrollThrottle => {
                // Trailing edge: catch scrolls that landed inside the window.
                if self.scroll_dirty {
                    self.request_layout(ctx);
                }
                true
            }
            TimerKey::NavigationSettle => {
                self.is_navigating = false;
                true
            }
            _ => false,
        }
    }

    // ── Smooth scroll ──────────────────────────────────────────────────

    /// Animate to an anchor whose document offset is `element_top`, leaving
    /// room for the sticky header. `hash` is recorded on arrival.
    pub fn scroll_to_anchor(&mut self, element_top: f64, hash: &str, ctx: &mut Ctx) {
        let target = element_top - self.config.scroll_offset;
        self.scroll_to(target, Some(hash.to_string()), ctx);
    }

    /// Animate to `target` (a window scroll offset).
    pub fn scroll_to(&mut self, target: f64, hash: Option<String>, ctx: &mut Ctx) {
        let target = target.max(0.0);
        debug!(from = self.scroll_y, to = target, "smooth scroll");
        self.is_navigating = true;
        ctx.clear_timer(TimerKey::NavigationSettle);
        self.animation = Some(ScrollAnimation {
            from: self.scroll_y,
            to: target,
            started_at: None,
            duration_ms: self.config.scroll_duration_for(self.viewport_width),
            hash,
        });
        ctx.emit(Effect::RequestFrame);
    }

    /// Advance the running animation to `ctx.now_ms`.
    pub fn step(&mut self, ctx: &mut Ctx) -> ScrollStep {
        let Some(anim) = self.animation.as_mut() else {
            return ScrollStep::Idle;
        };
        let started = *anim.started_at.get_or_insert(ctx.now_ms);
        let progress = if anim.duration_ms <= 0.0 {
            1.0
        } else {
            ((ctx.now_ms - started) / anim.duration_ms).clamp(0.0, 1.0)
        };
        let y = anim.from + (anim.to - anim.from) * ease_in_out_cubic(progress);
        self.scroll_y = y;
        ctx.emit(Effect::ScrollWindowTo { y });

        if progress < 1.0 {
            ctx.emit(Effect::RequestFrame);
            return ScrollStep::Moving;
        }

        let hash = anim.hash.take();
        self.animation = None;
        ctx.set_timeout(TimerKey::NavigationSettle, self.config.navigation_settle_ms);
        ScrollStep::Finished { hash }
    }

    /// Drop any running animation (modal opened, engine torn down).
    pub fn cancel_animation(&mut self, ctx: &mut Ctx) {
        if self.animation.take().is_some() {
            ctx.clear_timer(TimerKey::NavigationSettle);
            self.is_navigating = false;
        }
    }
}
