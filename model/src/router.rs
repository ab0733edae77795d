// ============================================================================
// Hash Router
// ============================================================================
//
// URL CONTRACT:
//   #<section-id>        in-page anchor (home, about, projects, ...)
//   #projects/<slug>     a project modal is open
//
// HISTORY:
//   A stack with a cursor that mirrors what the engine asked the browser to
//   do. push() appends and truncates forward history; replace() rewrites the
//   current entry. Both emit the matching Effect so JS can apply it to the
//   real History API. When the browser reports a popstate, sync() moves the
//   cursor to the matching entry, or rewrites the current one if the browser
//   knows history the engine never saw.
//
// WHO PUSHES:
//   Only a user-initiated modal open pushes. Closing the modal, finishing an
//   anchor scroll and stripping a stale deep link all replace.
//
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::StaleDeepLink;
use crate::effects::{Effect, EffectQueue};
use crate::error::{EngineError, Result};
use folio_shared::{PROJECTS_SECTION, PROJECT_HASH_PREFIX};

/// The state object stored with each browser history entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub scroll_y: f64,
}

impl RouteState {
    pub fn project(slug: &str, scroll_y: f64) -> Self {
        Self {
            slug: Some(slug.to_string()),
            scroll_y,
        }
    }

    /// Parse the `event.state` of a popstate. `null`, empty input and states
    /// that are not objects all mean "no route state".
    pub fn from_json(json: &str) -> Result<Option<RouteState>> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }
        let value: serde_json::Value =
            serde_json::from_str(trimmed).map_err(EngineError::HistoryState)?;
        if !value.is_object() {
            return Ok(None);
        }
        let state: RouteState =
            serde_json::from_value(value).map_err(EngineError::HistoryState)?;
        Ok(Some(state))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// No fragment, or a bare `#`.
    Empty,
    Section(String),
    Project(String),
}

impl Route {
    pub fn parse(hash: &str) -> Route {
        if let Some(slug) = hash.strip_prefix(PROJECT_HASH_PREFIX) {
            if !slug.is_empty() {
                return Route::Project(slug.to_string());
            }
            return Route::Section(PROJECTS_SECTION.to_string());
        }
        let id = hash.trim_start_matches('#');
        // Only the first segment names a section.
        let id = id.split('/').next().unwrap_or_default();
        if id.is_empty() {
            Route::Empty
        } else {
            Route::Section(id.to_string())
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Empty => String::new(),
            Route::Section(id) => format!("#{id}"),
            Route::Project(slug) => format!("{PROJECT_HASH_PREFIX}{slug}"),
        }
    }

    /// Section whose nav link should be active for this route.
    pub fn section(&self) -> Option<&str> {
        match self {
            Route::Empty => None,
            Route::Section(id) => Some(id),
            Route::Project(_) => Some(PROJECTS_SECTION),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<RouteState>,
}

/// What the engine should do in response to a popstate.
#[derive(Clone, Debug, PartialEq)]
pub enum PopAction {
    Open { slug: String, scroll_y: f64 },
    Close,
    Nothing,
}

#[derive(Debug)]
pub struct Router {
    history: Vec<HistoryEntry>,
    history_index: usize,
}

impl Router {
    pub fn new(initial_hash: &str) -> Self {
        Self {
            history: vec![HistoryEntry {
                url: initial_hash.to_string(),
                state: None,
            }],
            history_index: 0,
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.history_index]
    }

    pub fn current_hash(&self) -> &str {
        &self.current().url
    }

    pub fn current_route(&self) -> Route {
        Route::parse(self.current_hash())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    // ── Mutations ──────────────────────────────────────────────────────

    pub fn push(&mut self, state: Option<RouteState>, url: &str, fx: &mut EffectQueue) {
        self.history.truncate(self.history_index + 1);
        self.history.push(HistoryEntry {
            url: url.to_string(),
            state: state.clone(),
        });
        self.history_index = self.history.len() - 1;
        fx.push(Effect::PushState {
            state,
            url: url.to_string(),
        });
    }

    pub fn replace(&mut self, state: Option<RouteState>, url: &str, fx: &mut EffectQueue) {
        self.history[self.history_index] = HistoryEntry {
            url: url.to_string(),
            state: state.clone(),
        };
        fx.push(Effect::ReplaceState {
            state,
            url: url.to_string(),
        });
    }

    /// Fresh page load. Takes over scroll restoration and strips a
    /// `#projects/<slug>` hash left from an earlier session. Returns the slug
    /// to open later when the policy asks for it.
    pub fn initial_load(&mut self, policy: StaleDeepLink, fx: &mut EffectQueue) -> Option<String> {
        fx.push(Effect::SetScrollRestoration { manual: true });

        let Route::Project(slug) = self.current_route() else {
            return None;
        };
        debug!(%slug, ?policy, "stripping stale project hash");
        self.replace(None, "", fx);
        fx.push(Effect::ScrollWindowTo { y: 0.0 });

        match policy {
            StaleDeepLink::Discard => None,
            StaleDeepLink::OpenAfterDelay => Some(slug),
        }
    }

    /// Record a user-initiated modal open.
    pub fn record_open(&mut self, slug: &str, scroll_y: f64, fx: &mut EffectQueue) {
        let url = Route::Project(slug.to_string()).to_hash();
        self.push(Some(RouteState::project(slug, scroll_y)), &url, fx);
    }

    /// After the modal closes, turn `#projects/<slug>` back into `#projects`.
    /// Leaves any other hash alone.
    pub fn collapse_modal_hash(&mut self, fx: &mut EffectQueue) -> bool {
        if !matches!(self.current_route(), Route::Project(_)) {
            return false;
        }
        let url = Route::Section(PROJECTS_SECTION.to_string()).to_hash();
        self.replace(None, &url, fx);
        true
    }

    /// An anchor scroll finished: the URL catches up without a new entry.
    pub fn record_anchor(&mut self, hash: &str, fx: &mut EffectQueue) {
        self.replace(None, hash, fx);
    }

    /// Align the cursor with a popstate reported by the browser.
    pub fn sync(&mut self, hash: &str, state: Option<&RouteState>) {
        let is_match = |e: &HistoryEntry| e.url == hash && e.state.as_ref() == state;
        // Nearest matching entry to the cursor, looking back first.
        let back = (0..self.history_index).rev().find(|&i| is_match(&self.history[i]));
        let forward = (self.history_index + 1..self.history.len()).find(|&i| is_match(&self.history[i]));
        match back.or(forward) {
            Some(index) => self.history_index = index,
            None => {
                warn!(%hash, "popstate to an unknown history entry");
                self.history[self.history_index] = HistoryEntry {
                    url: hash.to_string(),
                    state: state.cloned(),
                };
            }
        }
    }

    /// Step back in the mirrored history, returning the entry the browser
    /// would hand to popstate.
    pub fn go_back(&mut self) -> Option<HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.history_index -= 1;
        Some(self.current().clone())
    }

    pub fn go_forward(&mut self) -> Option<HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.history_index += 1;
        Some(self.current().clone())
    }
}

/// Decide what a popstate means given the modal's current project.
pub fn resolve_popstate(state: Option<&RouteState>, open_slug: Option<&str>) -> PopAction {
    match state.and_then(|s| s.slug.as_deref().map(|slug| (slug, s.scroll_y))) {
        Some((slug, _)) if open_slug == Some(slug) => PopAction::Nothing,
        Some((slug, scroll_y)) => PopAction::Open {
            slug: slug.to_string(),
            scroll_y,
        },
        None if open_slug.is_some() => PopAction::Close,
        None => PopAction::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Empty);
        assert_eq!(Route::parse("#"), Route::Empty);
        assert_eq!(Route::parse("#about"), Route::Section("about".into()));
        assert_eq!(
            Route::parse("#projects/project-title-1"),
            Route::Project("project-title-1".into())
        );
        assert_eq!(Route::parse("#projects/"), Route::Section("projects".into()));
        assert_eq!(Route::parse("#skills/extra"), Route::Section("skills".into()));
        assert_eq!(Route::Project("a".into()).to_hash(), "#projects/a");
        assert_eq!(Route::Project("a".into()).section(), Some("projects"));
    }

    #[test]
    fn test_state_from_json() {
        assert_eq!(RouteState::from_json("null").unwrap(), None);
        assert_eq!(RouteState::from_json("").unwrap(), None);
        assert_eq!(RouteState::from_json("42").unwrap(), None);
        assert_eq!(
            RouteState::from_json(r#"{"slug":"project-title-2"}"#).unwrap(),
            Some(RouteState::project("project-title-2", 0.0))
        );
        assert_eq!(
            RouteState::from_json(r#"{"slug":"x","scrollY":812.5}"#).unwrap(),
            Some(RouteState::project("x", 812.5))
        );
        assert_eq!(RouteState::from_json("{}").unwrap(), Some(RouteState::default()));
        assert!(matches!(
            RouteState::from_json("{oops"),
            Err(EngineError::HistoryState(_))
        ));
    }

    #[test]
    fn test_initial_load_strips_project_hash() {
        let mut fx = EffectQueue::new();
        let mut router = Router::new("#projects/project-title-1");
        assert_eq!(router.initial_load(StaleDeepLink::Discard, &mut fx), None);
        assert_eq!(router.current_hash(), "");
        assert!(fx.iter().any(|e| matches!(e, Effect::ReplaceState { state: None, url } if url.is_empty())));
        assert!(fx.iter().any(|e| matches!(e, Effect::ScrollWindowTo { y } if *y == 0.0)));

        let mut router = Router::new("#projects/project-title-1");
        assert_eq!(
            router.initial_load(StaleDeepLink::OpenAfterDelay, &mut fx),
            Some("project-title-1".into())
        );
    }

    #[test]
    fn test_initial_load_keeps_section_hash() {
        let mut fx = EffectQueue::new();
        let mut router = Router::new("#about");
        assert_eq!(router.initial_load(StaleDeepLink::Discard, &mut fx), None);
        assert_eq!(router.current_hash(), "#about");
        assert_eq!(fx.len(), 1);
    }

    #[test]
    fn test_open_close_round_trip() {
        let mut fx = EffectQueue::new();
        let mut router = Router::new("#projects");
        router.record_open("project-title-3", 640.0, &mut fx);
        assert_eq!(router.history_len(), 2);
        assert_eq!(router.current_hash(), "#projects/project-title-3");

        assert!(router.collapse_modal_hash(&mut fx));
        assert_eq!(router.current_hash(), "#projects");
        // Close rewrites, it doesn't grow the stack.
        assert_eq!(router.history_len(), 2);
        assert!(!router.collapse_modal_hash(&mut fx));
    }

    #[test]
    fn test_back_and_forward() {
        let mut fx = EffectQueue::new();
        let mut router = Router::new("#projects");
        router.record_open("a", 100.0, &mut fx);
        let entry = router.go_back().unwrap();
        assert_eq!(entry.url, "#projects");
        assert_eq!(entry.state, None);
        assert!(router.go_back().is_none());

        let entry = router.go_forward().unwrap();
        assert_eq!(entry.state, Some(RouteState::project("a", 100.0)));
        assert!(router.go_forward().is_none());

        // Pushing after going back drops forward history.
        router.go_back();
        router.record_open("b", 0.0, &mut fx);
        assert_eq!(router.history_len(), 2);
        assert!(!router.can_go_forward());
    }

    #[test]
    fn test_sync_moves_cursor() {
        let mut fx = EffectQueue::new();
        let mut router = Router::new("#projects");
        router.record_open("a", 10.0, &mut fx);
        router.sync("#projects", None);
        assert_eq!(router.history_index(), 0);
        router.sync("#projects/a", Some(&RouteState::project("a", 10.0)));
        assert_eq!(router.history_index(), 1);

        router.sync("#elsewhere", None);
        assert_eq!(router.history_index(), 1);
        assert_eq!(router.current_hash(), "#elsewhere");
    }

    #[test]
    fn test_resolve_popstate() {
        let state = RouteState::project("p2", 300.0);
        assert_eq!(
            resolve_popstate(Some(&state), None),
            PopAction::Open {
                slug: "p2".into(),
                scroll_y: 300.0
            }
        );
        assert_eq!(resolve_popstate(Some(&state), Some("p2")), PopAction::Nothing);
        assert_eq!(resolve_popstate(None, Some("p2")), PopAction::Close);
        assert_eq!(resolve_popstate(Some(&RouteState::default()), Some("p2")), PopAction::Close);
        assert_eq!(resolve_popstate(None, None), PopAction::Nothing);
    }
}
