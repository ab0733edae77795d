//! DOM effect stream.
//!
//! Engines never touch the DOM. Each operation appends `Effect`s describing
//! what the page should do; JS drains the queue once per call (or per frame)
//! and applies them in order. The JSON shape is the contract with the view
//! layer: `{"type":"showImage","index":2,"src":"...","alt":"..."}`.

use serde::Serialize;
use tracing::error;

use crate::router::RouteState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Politeness {
    Polite,
    Assertive,
}

/// One pagination control, left to right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageControl {
    Prev { disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalAction {
    pub href: String,
    pub aria_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub index: usize,
    pub src: String,
    pub aria_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Effect {
    // --- Cards & pagination ---
    RenderCards { html: String },
    /// Exactly these card ids are shown; every other card is hidden.
    ShowCards { cards: Vec<usize> },
    SetPagination { visible: bool, controls: Vec<PageControl> },
    SetFilterButtons { active: String },
    ShowEmptyMessage { heading: String, body: String },
    HideEmptyMessage,

    // --- Modal ---
    ShowModal,
    HideModal,
    SetModalContent {
        title: String,
        tags: String,
        description: String,
        actions: Vec<ModalAction>,
    },
    ShowImage { index: usize, src: String, alt: String },
    SetThumbnails { thumbs: Vec<Thumbnail>, active: usize },
    HighlightThumbnail { index: usize },
    ScrollThumbnails { delta: f64 },
    AttachModalListeners,
    DetachModalListeners,
    TrapFocus { first: String, last: String },
    ReleaseFocusTrap,
    Focus { target: String },

    // --- Page scroll ---
    LockBodyScroll { scroll_y: f64 },
    UnlockBodyScroll,
    ScrollWindowTo { y: f64 },
    RequestFrame,

    // --- History ---
    /// An empty `url` means the document path with no fragment.
    PushState { state: Option<RouteState>, url: String },
    ReplaceState { state: Option<RouteState>, url: String },
    SetScrollRestoration { manual: bool },

    // --- Navigation chrome ---
    SetActiveNavLink { href: String },
    SetBodyClass { class: String, on: bool },
    SetAttribute { selector: String, name: String, value: String },
    SetHeaderScrolled { scrolled: bool },
    SetScrollToTopVisible { visible: bool },

    // --- Animation ---
    SetTypewriterText { text: String },
    RevealSection { id: String },

    // --- Accessibility & recovery ---
    Announce {
        message: String,
        priority: Politeness,
        ttl_ms: f64,
    },
    EnterFallbackMode,
}

/// Ordered buffer of pending effects.
#[derive(Debug, Default)]
pub struct EffectQueue {
    effects: Vec<Effect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Serialize and clear. Returns `[]` if serialization fails.
    pub fn drain_json(&mut self) -> String {
        let effects = self.take();
        serde_json::to_string(&effects).unwrap_or_else(|e| {
            error!(error = %e, dropped = effects.len(), "failed to serialize effects");
            "[]".to_string()
        })
    }
}
