// ============================================================================
// Modal / Gallery Controller
// ============================================================================
//
// One project dialog with an image slideshow.
//
//   Closed ──open──▶ Playing ──navigate / press──▶ Paused
//     ▲                 ▲                             │
//     │                 └──── resume timer fires ─────┘
//     └──────────────── close (from any open state) ──┘
//
// TIMERS (all registered in the shared TimerRegistry):
//   Slideshow         interval, advances one image per tick while Playing
//   ResumeSlideshow   one-shot, re-arms Slideshow after a pause
//   FocusCloseButton  one-shot, focuses the close control after opening
//
// Pausing clears Slideshow synchronously, so a pause always lands before the
// next autoplay tick. Arming ResumeSlideshow replaces any pending one, so
// rapid clicks never leave two resume timers racing.
//
// A gallery with a single image never plays; it opens Paused.
//
// ============================================================================

use folio_shared::data::LinkKind;
use tracing::{debug, info};

use crate::catalog::{CardId, Catalog};
use crate::config::EngineConfig;
use crate::context::Ctx;
use crate::effects::{Effect, ModalAction, Thumbnail};
use crate::error::{EngineError, Result};
use crate::timers::TimerKey;

/// Focus key of the close control; also the first stop of the focus trap.
pub const CLOSE_FOCUS_KEY: &str = "modal-close";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Playing,
    Paused,
}

/// What a keydown inside the open dialog resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours; let the browser handle it.
    Ignored,
    /// Handled; the host should `preventDefault()`.
    Handled,
    /// Escape: the caller must close the modal (history is involved).
    CloseRequested,
}

/// Per-open gallery state.
#[derive(Clone, Debug, PartialEq)]
pub struct GallerySession {
    pub card: CardId,
    pub slug: String,
    pub title: String,
    pub images: Vec<String>,
    pub current_index: usize,
    pub is_autoplaying: bool,
    pub saved_scroll_y: f64,
    /// Focus key of the control that opened the dialog.
    pub opener: Option<String>,
    pointer_held: bool,
    /// Resume deadline that was pending when the press began.
    held_resume_at: Option<f64>,
    focus_first: String,
    focus_last: String,
}

impl GallerySession {
    fn len(&self) -> usize {
        self.images.len()
    }

    fn current_src(&self) -> String {
        self.images[self.current_index].clone()
    }
}

#[derive(Debug)]
pub struct ModalController {
    session: Option<GallerySession>,
    auto_slide_interval_ms: f64,
    resume_slide_timeout_ms: f64,
    pointer_resume_delay_ms: f64,
    focus_close_delay_ms: f64,
}

impl ModalController {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            session: None,
            auto_slide_interval_ms: config.auto_slide_interval_ms,
            resume_slide_timeout_ms: config.resume_slide_timeout_ms,
            pointer_resume_delay_ms: config.pointer_resume_delay_ms,
            focus_close_delay_ms: config.focus_close_delay_ms,
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn state(&self) -> ModalState {
        match &self.session {
            None => ModalState::Closed,
            Some(s) if s.is_autoplaying => ModalState::Playing,
            Some(_) => ModalState::Paused,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GallerySession> {
        self.session.as_ref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.current_index)
    }

    pub fn current_slug(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.slug.as_str())
    }

    // ── Open / close ───────────────────────────────────────────────────

    /// Open the dialog for `card`. An already open dialog is closed first.
    ///
    /// Fails without side effects if the card cannot be resolved.
    pub fn open(
        &mut self,
        catalog: &Catalog,
        card: CardId,
        scroll_y: f64,
        opener: Option<String>,
        ctx: &mut Ctx,
    ) -> Result<()> {
        let element = catalog.card(card).ok_or(EngineError::UnknownCard(card))?;
        let record = catalog.record(card).ok_or(EngineError::UnknownCard(card))?;
        if element.images.is_empty() {
            return Err(EngineError::MalformedCard {
                slug: element.slug.clone(),
                reason: "image list is empty".to_string(),
            });
        }

        if self.is_open() {
            self.close(ctx);
        }

        let actions: Vec<ModalAction> = record
            .links
            .iter()
            .map(|link| {
                let label = match link.kind() {
                    LinkKind::Demo => "Live Demo",
                    LinkKind::Source => "Source Code",
                    LinkKind::External => "External Link",
                };
                ModalAction {
                    href: link.url.clone(),
                    aria_label: format!("{label} for {}", record.title),
                }
            })
            .collect();

        let image_count = element.images.len();
        let thumbs: Vec<Thumbnail> = element
            .images
            .iter()
            .enumerate()
            .map(|(index, src)| Thumbnail {
                index,
                src: src.clone(),
                aria_label: format!("Image {} of {}", index + 1, image_count),
            })
            .collect();

        let focus_last = if !actions.is_empty() {
            format!("action-{}", actions.len() - 1)
        } else {
            format!("thumb-{}", image_count - 1)
        };

        let session = GallerySession {
            card,
            slug: element.slug.clone(),
            title: record.title.clone(),
            images: element.images.clone(),
            current_index: 0,
            is_autoplaying: false,
            saved_scroll_y: scroll_y,
            opener,
            pointer_held: false,
            held_resume_at: None,
            focus_first: CLOSE_FOCUS_KEY.to_string(),
            focus_last,
        };

        ctx.emit(Effect::LockBodyScroll { scroll_y });
        ctx.emit(Effect::SetModalContent {
            title: record.title.clone(),
            tags: record.tags.clone(),
            description: record.description.clone(),
            actions,
        });
        ctx.emit(Effect::ShowImage {
            index: 0,
            src: session.current_src(),
            alt: session.title.clone(),
        });
        ctx.emit(Effect::SetThumbnails { thumbs, active: 0 });
        ctx.emit(Effect::ShowModal);
        ctx.emit(Effect::AttachModalListeners);
        ctx.emit(Effect::TrapFocus {
            first: session.focus_first.clone(),
            last: session.focus_last.clone(),
        });
        ctx.set_timeout(TimerKey::FocusCloseButton, self.focus_close_delay_ms);

        info!(slug = %session.slug, images = image_count, "modal opened");
        self.session = Some(session);
        self.start_slideshow(ctx);
        Ok(())
    }

    /// Close the dialog and return the finished session. A closed dialog
    /// stays closed and emits nothing.
    pub fn close(&mut self, ctx: &mut Ctx) -> Option<GallerySession> {
        let session = self.session.take()?;

        ctx.clear_timer(TimerKey::Slideshow);
        ctx.clear_timer(TimerKey::ResumeSlideshow);
        ctx.clear_timer(TimerKey::FocusCloseButton);

        ctx.emit(Effect::DetachModalListeners);
        ctx.emit(Effect::ReleaseFocusTrap);
        ctx.emit(Effect::HideModal);
        ctx.emit(Effect::UnlockBodyScroll);
        ctx.emit(Effect::ScrollWindowTo {
            y: session.saved_scroll_y,
        });
        if let Some(opener) = &session.opener {
            ctx.emit(Effect::Focus {
                target: opener.clone(),
            });
        }

        info!(slug = %session.slug, "modal closed");
        Some(session)
    }

    // ── Navigation ─────────────────────────────────────────────────────

    /// Step one image back (-1) or forward (+1), wrapping around, and pause
    /// autoplay until the resume timer fires.
    pub fn navigate(&mut self, direction: i32, ctx: &mut Ctx) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let len = session.len() as i64;
        let next = (session.current_index as i64 + direction as i64).rem_euclid(len) as usize;
        self.switch_to(next, ctx)
    }

    /// Jump to `index`, pausing autoplay until the resume timer fires.
    pub fn switch_to(&mut self, index: usize, ctx: &mut Ctx) -> bool {
        match &self.session {
            Some(s) if index < s.len() => {}
            _ => return false,
        }
        self.pause(ctx);
        self.set_index(index, ctx);
        ctx.set_timeout(TimerKey::ResumeSlideshow, self.resume_slide_timeout_ms);
        true
    }

    fn set_index(&mut self, index: usize, ctx: &mut Ctx) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.current_index = index;
        ctx.emit(Effect::ShowImage {
            index,
            src: session.current_src(),
            alt: session.title.clone(),
        });
        ctx.emit(Effect::HighlightThumbnail { index });
    }

    // ── Autoplay ───────────────────────────────────────────────────────

    fn start_slideshow(&mut self, ctx: &mut Ctx) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.len() <= 1 {
            return;
        }
        session.is_autoplaying = true;
        ctx.set_interval(TimerKey::Slideshow, self.auto_slide_interval_ms);
    }

    fn pause(&mut self, ctx: &mut Ctx) {
        if let Some(session) = self.session.as_mut() {
            session.is_autoplaying = false;
        }
        ctx.clear_timer(TimerKey::Slideshow);
        ctx.clear_timer(TimerKey::ResumeSlideshow);
    }

    /// Dispatch a fired timer. Returns true if the key belongs to the modal.
    pub fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx) -> bool {
        match key {
            TimerKey::Slideshow => {
                let advance = match &self.session {
                    Some(s) if s.is_autoplaying => Some((s.current_index + 1) % s.len()),
                    _ => None,
                };
                match advance {
                    Some(next) => {
                        debug!(index = next, "autoplay advance");
                        self.set_index(next, ctx);
                    }
                    // Stale interval from a session that no longer plays.
                    None => {
                        ctx.clear_timer(TimerKey::Slideshow);
                    }
                }
                true
            }
            TimerKey::ResumeSlideshow => {
                let resume = matches!(&self.session, Some(s) if !s.is_autoplaying && !s.pointer_held);
                if resume {
                    self.start_slideshow(ctx);
                }
                true
            }
            TimerKey::FocusCloseButton => {
                if self.is_open() {
                    ctx.emit(Effect::Focus {
                        target: CLOSE_FOCUS_KEY.to_string(),
                    });
                }
                true
            }
            _ => false,
        }
    }

    // ── Pointer & keyboard ─────────────────────────────────────────────

    /// Mouse-down / touch-start on the main image.
    pub fn pointer_down(&mut self, ctx: &mut Ctx) {
        if !self.is_open() {
            return;
        }
        let pending = ctx.timers.deadline(TimerKey::ResumeSlideshow);
        self.pause(ctx);
        if let Some(session) = self.session.as_mut() {
            session.pointer_held = true;
            session.held_resume_at = match (session.held_resume_at, pending) {
                (Some(held), Some(pending)) => Some(held.max(pending)),
                (held, pending) => held.or(pending),
            };
        }
    }

    /// Mouse-up / mouse-leave / touch-end / touch-cancel on the main image.
    pub fn pointer_up(&mut self, ctx: &mut Ctx) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.pointer_held {
            return;
        }
        session.pointer_held = false;
        // A navigation resume that was already further out is kept.
        let resume_at = (ctx.now_ms + self.pointer_resume_delay_ms)
            .max(session.held_resume_at.take().unwrap_or(f64::MIN));
        ctx.set_timeout(TimerKey::ResumeSlideshow, resume_at - ctx.now_ms);
    }

    /// Keydown while the dialog is open. `active` is the focus key of the
    /// focused element (used by the Tab trap).
    pub fn handle_key(&mut self, key: &str, shift: bool, active: &str, ctx: &mut Ctx) -> KeyOutcome {
        let Some(session) = self.session.as_ref() else {
            return KeyOutcome::Ignored;
        };
        match key {
            "Escape" => KeyOutcome::CloseRequested,
            "ArrowLeft" => {
                self.navigate(-1, ctx);
                KeyOutcome::Handled
            }
            "ArrowRight" => {
                self.navigate(1, ctx);
                KeyOutcome::Handled
            }
            "Tab" => {
                let target = if shift && active == session.focus_first {
                    Some(session.focus_last.clone())
                } else if !shift && active == session.focus_last {
                    Some(session.focus_first.clone())
                } else {
                    None
                };
                match target {
                    Some(target) => {
                        ctx.emit(Effect::Focus { target });
                        KeyOutcome::Handled
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Enter/Space on a focused thumbnail.
    pub fn thumbnail_key(&mut self, index: usize, key: &str, ctx: &mut Ctx) -> bool {
        if key == "Enter" || key == " " {
            self.switch_to(index, ctx)
        } else {
            false
        }
    }

    /// Vertical wheel over the thumbnail strip scrolls it horizontally.
    /// Returns true if the host should `preventDefault()`.
    pub fn thumbnail_wheel(&mut self, delta_y: f64, ctx: &mut Ctx) -> bool {
        if !self.is_open() || delta_y == 0.0 {
            return false;
        }
        ctx.emit(Effect::ScrollThumbnails { delta: delta_y });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectQueue;
    use crate::timers::TimerRegistry;
    use folio_shared::data::projects;
    use folio_shared::FALLBACK_IMAGE;

    struct Harness {
        catalog: Catalog,
        modal: ModalController,
        timers: TimerRegistry,
        fx: EffectQueue,
        now: f64,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                catalog: Catalog::build(projects(), FALLBACK_IMAGE).unwrap(),
                modal: ModalController::new(&EngineConfig::default()),
                timers: TimerRegistry::new(),
                fx: EffectQueue::new(),
                now: 0.0,
            }
        }

        fn with<R>(&mut self, f: impl FnOnce(&mut ModalController, &Catalog, &mut Ctx) -> R) -> R {
            let mut ctx = Ctx::new(self.now, &mut self.timers, &mut self.fx);
            f(&mut self.modal, &self.catalog, &mut ctx)
        }

        fn open(&mut self, card: CardId) {
            self.with(|m, c, ctx| m.open(c, card, 250.0, Some("details-0".into()), ctx))
                .unwrap();
        }

        /// Advance the clock, firing due timers in order.
        fn advance_to(&mut self, t: f64) {
            self.now = t;
            while let Some(key) = self.timers.pop_due(t) {
                self.with(|m, _, ctx| m.on_timer(key, ctx));
            }
        }
    }

    #[test]
    fn test_open_starts_autoplay() {
        let mut h = Harness::new();
        h.open(0);
        assert_eq!(h.modal.state(), ModalState::Playing);
        assert_eq!(h.modal.current_index(), Some(0));
        assert!(h.timers.is_pending(TimerKey::Slideshow));
        assert!(h.fx.iter().any(|e| matches!(e, Effect::LockBodyScroll { scroll_y } if *scroll_y == 250.0)));
        assert!(h.fx.iter().any(|e| matches!(e, Effect::SetThumbnails { thumbs, .. } if thumbs.len() == 6)));
    }

    #[test]
    fn test_open_unknown_card_fails_cleanly() {
        let mut h = Harness::new();
        let err = h.with(|m, c, ctx| m.open(c, 42, 0.0, None, ctx)).unwrap_err();
        assert!(matches!(err, EngineError::UnknownCard(42)));
        assert!(!h.modal.is_open());
        assert!(h.fx.is_empty());
    }

    #[test]
    fn test_autoplay_advances_one_per_tick() {
        let mut h = Harness::new();
        h.open(0);
        h.advance_to(3000.0);
        assert_eq!(h.modal.current_index(), Some(1));
        h.advance_to(6000.0);
        assert_eq!(h.modal.current_index(), Some(2));
        // A late tick fires the interval once.
        h.advance_to(20_000.0);
        assert_eq!(h.modal.current_index(), Some(3));
        assert_eq!(h.modal.state(), ModalState::Playing);
    }

    #[test]
    fn test_navigate_wraps_circularly() {
        let mut h = Harness::new();
        h.open(0);
        for _ in 0..6 {
            h.with(|m, _, ctx| m.navigate(1, ctx));
        }
        assert_eq!(h.modal.current_index(), Some(0));
        h.with(|m, _, ctx| m.navigate(-1, ctx));
        assert_eq!(h.modal.current_index(), Some(5));
    }

    #[test]
    fn test_navigate_pauses_then_resumes() {
        let mut h = Harness::new();
        h.open(0);
        h.advance_to(1000.0);
        h.with(|m, _, ctx| m.navigate(1, ctx));
        assert_eq!(h.modal.state(), ModalState::Paused);
        assert!(!h.timers.is_pending(TimerKey::Slideshow));

        // The pre-pause 3000 ms tick must not fire while paused.
        h.advance_to(2999.0);
        assert_eq!(h.modal.current_index(), Some(1));

        h.advance_to(3000.0); // resume at 1000 + 2000
        assert_eq!(h.modal.state(), ModalState::Playing);
        h.advance_to(6000.0);
        assert_eq!(h.modal.current_index(), Some(2));
    }

    #[test]
    fn test_rapid_clicks_keep_one_resume_timer() {
        let mut h = Harness::new();
        h.open(0);
        h.with(|m, _, ctx| m.navigate(1, ctx));
        h.now = 500.0;
        h.with(|m, _, ctx| m.navigate(1, ctx));
        h.now = 900.0;
        h.with(|m, _, ctx| m.navigate(1, ctx));
        assert_eq!(h.timers.len(), 2); // FocusCloseButton + ResumeSlideshow
        assert_eq!(h.timers.deadline(TimerKey::ResumeSlideshow), Some(2900.0));
        h.advance_to(2899.0);
        assert_eq!(h.modal.state(), ModalState::Paused);
        h.advance_to(2900.0);
        assert_eq!(h.modal.state(), ModalState::Playing);
    }

    #[test]
    fn test_pointer_hold_pauses_until_release() {
        let mut h = Harness::new();
        h.open(0);
        h.now = 1000.0;
        h.with(|m, _, ctx| m.pointer_down(ctx));
        assert_eq!(h.modal.state(), ModalState::Paused);
        h.advance_to(10_000.0);
        assert_eq!(h.modal.state(), ModalState::Paused);
        assert_eq!(h.modal.current_index(), Some(0));

        h.with(|m, _, ctx| m.pointer_up(ctx));
        h.advance_to(10_999.0);
        assert_eq!(h.modal.state(), ModalState::Paused);
        h.advance_to(11_000.0);
        assert_eq!(h.modal.state(), ModalState::Playing);
    }

    #[test]
    fn test_pointer_release_keeps_later_navigation_resume() {
        let mut h = Harness::new();
        h.open(0);
        h.now = 1000.0;
        h.with(|m, _, ctx| m.navigate(1, ctx));
        h.now = 1200.0;
        h.with(|m, _, ctx| m.pointer_down(ctx));
        h.now = 1300.0;
        h.with(|m, _, ctx| m.pointer_up(ctx));
        assert_eq!(h.timers.deadline(TimerKey::ResumeSlideshow), Some(3000.0));
        h.advance_to(2999.0);
        assert_eq!(h.modal.state(), ModalState::Paused);
        h.advance_to(3000.0);
        assert_eq!(h.modal.state(), ModalState::Playing);
    }

    #[test]
    fn test_pointer_up_without_press_is_ignored() {
        let mut h = Harness::new();
        h.open(0);
        h.with(|m, _, ctx| m.pointer_up(ctx));
        assert!(!h.timers.is_pending(TimerKey::ResumeSlideshow));
    }

    #[test]
    fn test_single_image_never_plays() {
        let mut records = projects();
        records[0].images.truncate(1);
        let mut h = Harness::new();
        h.catalog = Catalog::build(records, FALLBACK_IMAGE).unwrap();
        h.open(0);
        assert_eq!(h.modal.state(), ModalState::Paused);
        h.advance_to(10_000.0);
        assert_eq!(h.modal.state(), ModalState::Paused);
        assert!(!h.timers.is_pending(TimerKey::Slideshow));
    }

    #[test]
    fn test_close_clears_timers_and_is_idempotent() {
        let mut h = Harness::new();
        h.open(0);
        h.with(|m, _, ctx| m.navigate(1, ctx));
        h.fx.clear();

        let session = h.with(|m, _, ctx| m.close(ctx)).unwrap();
        assert_eq!(session.saved_scroll_y, 250.0);
        assert!(h.timers.is_empty());
        assert!(h.fx.iter().any(|e| matches!(e, Effect::ScrollWindowTo { y } if *y == 250.0)));
        assert!(h.fx.iter().any(|e| matches!(e, Effect::Focus { target } if target == "details-0")));

        h.fx.clear();
        assert!(h.with(|m, _, ctx| m.close(ctx)).is_none());
        assert!(h.fx.is_empty());
    }

    #[test]
    fn test_focus_close_button_after_delay() {
        let mut h = Harness::new();
        h.open(0);
        h.fx.clear();
        h.advance_to(100.0);
        assert!(h.fx.iter().any(|e| matches!(e, Effect::Focus { target } if target == CLOSE_FOCUS_KEY)));
    }

    #[test]
    fn test_keyboard() {
        let mut h = Harness::new();
        h.open(0);
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("ArrowRight", false, "", ctx)),
            KeyOutcome::Handled
        );
        assert_eq!(h.modal.current_index(), Some(1));
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("ArrowLeft", false, "", ctx)),
            KeyOutcome::Handled
        );
        assert_eq!(h.modal.current_index(), Some(0));
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("Escape", false, "", ctx)),
            KeyOutcome::CloseRequested
        );
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("a", false, "", ctx)),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_focus_trap_wraps() {
        let mut h = Harness::new();
        h.open(0);
        h.fx.clear();
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("Tab", false, "action-1", ctx)),
            KeyOutcome::Handled
        );
        assert!(h.fx.iter().any(|e| matches!(e, Effect::Focus { target } if target == CLOSE_FOCUS_KEY)));
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("Tab", true, CLOSE_FOCUS_KEY, ctx)),
            KeyOutcome::Handled
        );
        assert!(h.fx.iter().any(|e| matches!(e, Effect::Focus { target } if target == "action-1")));
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("Tab", false, "thumb-2", ctx)),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_thumbnail_activation() {
        let mut h = Harness::new();
        h.open(0);
        assert!(h.with(|m, _, ctx| m.thumbnail_key(4, "Enter", ctx)));
        assert_eq!(h.modal.current_index(), Some(4));
        assert!(h.with(|m, _, ctx| m.thumbnail_key(2, " ", ctx)));
        assert_eq!(h.modal.current_index(), Some(2));
        assert!(!h.with(|m, _, ctx| m.thumbnail_key(3, "x", ctx)));
        assert!(!h.with(|m, _, ctx| m.switch_to(99, ctx)));
        assert_eq!(h.modal.current_index(), Some(2));
    }

    #[test]
    fn test_closed_modal_ignores_input() {
        let mut h = Harness::new();
        assert!(!h.with(|m, _, ctx| m.navigate(1, ctx)));
        h.with(|m, _, ctx| m.pointer_down(ctx));
        assert!(!h.with(|m, _, ctx| m.thumbnail_wheel(10.0, ctx)));
        assert_eq!(
            h.with(|m, _, ctx| m.handle_key("Escape", false, "", ctx)),
            KeyOutcome::Ignored
        );
        assert!(h.fx.is_empty());
        assert!(h.timers.is_empty());
    }

    #[test]
    fn test_action_labels() {
        let mut h = Harness::new();
        h.open(1);
        let actions = h
            .fx
            .iter()
            .find_map(|e| match e {
                Effect::SetModalContent { actions, .. } => Some(actions.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(actions[0].aria_label, "Live Demo for Project Title 2");
        assert_eq!(actions[1].aria_label, "Source Code for Project Title 2");
    }
}
