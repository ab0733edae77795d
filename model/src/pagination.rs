// =============================================================================
// Pagination & Filter Controller
// =============================================================================
//
// Owns the filtered card list and the current page of the project grid.
//
//   - filter(tag)       narrows the list by category and resets to page 1
//   - show_page(n)      shows the slice [(n-1)*size, n*size) of the list
//   - go_to_page(n)     show_page + re-render the controls
//   - controls()        prev / window of page numbers / ellipses / next
//
// HOW THE PAGE WINDOW WORKS:
//
//   With max_pages = 3 the window is centred on the current page:
//     start = max(1, current - 1), end = min(total, start + 2)
//   and near the end it slides left to keep three numbers where possible.
//   Page 1 and the last page are always reachable: if the window does not
//   touch them they are appended with an ellipsis for any skipped pages.
//
//   [<] [1] … [4] [5] [6] … [9] [>]
//
// =============================================================================

use tracing::debug;

use crate::catalog::{CardId, Catalog};
use crate::config::EngineConfig;
use crate::content;
use crate::effects::{Effect, EffectQueue, PageControl, Politeness};

#[derive(Debug)]
pub struct Pagination {
    /// Every card, in grid order.
    all: Vec<CardId>,
    /// Cards matching the active filter, in grid order.
    filtered: Vec<CardId>,
    /// 1-based.
    current_page: usize,
    active_filter: String,
    page_size: usize,
    max_pages: usize,
    render_single_page: bool,
    announcement_ttl_ms: f64,
}

impl Pagination {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            current_page: 1,
            active_filter: folio_shared::FILTER_ALL.to_string(),
            page_size: config.cards_per_page.max(1),
            max_pages: config.max_pagination_pages.max(1),
            render_single_page: config.render_single_page_pagination,
            announcement_ttl_ms: config.announcement_ttl_ms,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Cards on the current page.
    pub fn visible(&self) -> &[CardId] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn is_prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_next_disabled(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// Whether any controls are rendered for the current list.
    pub fn controls_visible(&self) -> bool {
        let total = self.total_pages();
        total > 1 || (self.render_single_page && total == 1)
    }

    /// The control row, left to right. Empty when controls are suppressed.
    pub fn controls(&self) -> Vec<PageControl> {
        if !self.controls_visible() {
            return Vec::new();
        }
        let total = self.total_pages();
        let (start, end) = self.page_window();
        let mut controls = Vec::with_capacity(self.max_pages + 6);

        controls.push(PageControl::Prev {
            disabled: self.is_prev_disabled(),
        });

        if start > 1 {
            controls.push(self.page_control(1));
            if start > 2 {
                controls.push(PageControl::Ellipsis);
            }
        }
        for n in start..=end {
            controls.push(self.page_control(n));
        }
        if end < total {
            if end < total - 1 {
                controls.push(PageControl::Ellipsis);
            }
            controls.push(self.page_control(total));
        }

        controls.push(PageControl::Next {
            disabled: self.is_next_disabled(),
        });
        controls
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Install the full card list and show page 1 of it.
    pub fn load(&mut self, all: Vec<CardId>, fx: &mut EffectQueue) {
        self.all = all;
        self.filtered = self.all.clone();
        self.active_filter = folio_shared::FILTER_ALL.to_string();
        self.current_page = 1;
        self.show_page(1, fx);
        self.render(fx);
    }

    /// Narrow the list to `filter` ("all" or a category tag) and reset to
    /// page 1. An unknown tag yields an empty list.
    pub fn filter(&mut self, catalog: &Catalog, filter: &str, fx: &mut EffectQueue) {
        fx.push(Effect::HideEmptyMessage);
        fx.push(Effect::SetFilterButtons {
            active: filter.to_string(),
        });

        self.active_filter = filter.to_string();
        self.filtered = catalog
            .filter_ids(filter)
            .into_iter()
            .filter(|id| self.all.contains(id))
            .collect();
        self.current_page = 1;
        self.show_page(1, fx);
        self.render(fx);

        if self.filtered.is_empty() {
            let (heading, body) = content::empty_message(filter);
            fx.push(Effect::ShowEmptyMessage { heading, body });
        }

        debug!(filter, count = self.filtered.len(), "filter applied");
        fx.push(Effect::Announce {
            message: self.filter_announcement(),
            priority: Politeness::Polite,
            ttl_ms: self.announcement_ttl_ms,
        });
    }

    /// Show page `n`, clamped into `[1, total_pages]`. Idempotent.
    pub fn show_page(&mut self, n: usize, fx: &mut EffectQueue) {
        self.current_page = n.clamp(1, self.total_pages().max(1));
        fx.push(Effect::ShowCards {
            cards: self.visible().to_vec(),
        });
    }

    /// Show page `n` and re-render the controls.
    pub fn go_to_page(&mut self, n: usize, fx: &mut EffectQueue) {
        self.show_page(n, fx);
        self.render(fx);
    }

    /// Returns false if already on the first page.
    pub fn prev_page(&mut self, fx: &mut EffectQueue) -> bool {
        if self.is_prev_disabled() {
            return false;
        }
        self.go_to_page(self.current_page - 1, fx);
        true
    }

    /// Returns false if already on the last page.
    pub fn next_page(&mut self, fx: &mut EffectQueue) -> bool {
        if self.is_next_disabled() {
            return false;
        }
        self.go_to_page(self.current_page + 1, fx);
        true
    }

    pub fn render(&self, fx: &mut EffectQueue) {
        fx.push(Effect::SetPagination {
            visible: self.controls_visible(),
            controls: self.controls(),
        });
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn page_control(&self, number: usize) -> PageControl {
        PageControl::Page {
            number,
            active: number == self.current_page,
        }
    }

    /// Inclusive range of page numbers shown around the current page.
    fn page_window(&self) -> (usize, usize) {
        let total = self.total_pages();
        let mut start = self.current_page.saturating_sub(self.max_pages / 2).max(1);
        let end = (start + self.max_pages - 1).min(total);
        if end + 1 - start < self.max_pages {
            start = (end + 1).saturating_sub(self.max_pages).max(1);
        }
        (start, end)
    }

    fn filter_announcement(&self) -> String {
        let scope = if self.active_filter == folio_shared::FILTER_ALL {
            "all categories".to_string()
        } else {
            format!("{} category", self.active_filter)
        };
        format!("Showing {} projects in {}", self.filtered.len(), scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_shared::data::{projects, Category, ProjectRecord};
    use folio_shared::FALLBACK_IMAGE;

    fn catalog_of(n: usize) -> Catalog {
        let template = projects().remove(0);
        let records: Vec<ProjectRecord> = (0..n)
            .map(|i| ProjectRecord {
                title: format!("Card {i}"),
                slug: None,
                category: if i % 2 == 0 { Category::Web } else { Category::Mobile },
                ..template.clone()
            })
            .collect();
        Catalog::build(records, FALLBACK_IMAGE).unwrap()
    }

    fn loaded(n: usize) -> (Catalog, Pagination, EffectQueue) {
        let catalog = catalog_of(n);
        let mut pagination = Pagination::new(&EngineConfig::default());
        let mut fx = EffectQueue::new();
        pagination.load(catalog.ids(), &mut fx);
        (catalog, pagination, fx)
    }

    fn numbers(controls: &[PageControl]) -> Vec<String> {
        controls
            .iter()
            .map(|c| match c {
                PageControl::Prev { .. } => "<".to_string(),
                PageControl::Next { .. } => ">".to_string(),
                PageControl::Ellipsis => "…".to_string(),
                PageControl::Page { number, active: true } => format!("[{number}]"),
                PageControl::Page { number, .. } => number.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_thirteen_cards_three_pages() {
        let (_, mut pagination, mut fx) = loaded(13);
        assert_eq!(pagination.total_pages(), 3);
        assert!(!pagination.is_next_disabled());

        pagination.go_to_page(3, &mut fx);
        assert_eq!(pagination.visible(), &[12]);
        assert!(pagination.is_next_disabled());
        assert!(matches!(
            pagination.controls().last(),
            Some(PageControl::Next { disabled: true })
        ));

        pagination.go_to_page(2, &mut fx);
        assert!(!pagination.is_next_disabled());
        assert_eq!(pagination.visible().len(), 6);
    }

    #[test]
    fn test_show_page_clamps() {
        let (_, mut pagination, mut fx) = loaded(13);
        pagination.show_page(99, &mut fx);
        assert_eq!(pagination.current_page(), 3);
        pagination.show_page(0, &mut fx);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_window_and_ellipses() {
        let (_, mut pagination, mut fx) = loaded(54); // 9 pages
        assert_eq!(numbers(&pagination.controls()), ["<", "[1]", "2", "3", "…", "9", ">"]);

        pagination.go_to_page(5, &mut fx);
        assert_eq!(
            numbers(&pagination.controls()),
            ["<", "1", "…", "4", "[5]", "6", "…", "9", ">"]
        );

        pagination.go_to_page(9, &mut fx);
        assert_eq!(numbers(&pagination.controls()), ["<", "1", "…", "7", "8", "[9]", ">"]);

        // Window starting at 2 needs no ellipsis before it.
        pagination.go_to_page(3, &mut fx);
        assert_eq!(
            numbers(&pagination.controls()),
            ["<", "1", "2", "[3]", "4", "…", "9", ">"]
        );
    }

    #[test]
    fn test_two_pages_window_is_short() {
        let (_, mut pagination, mut fx) = loaded(8);
        pagination.go_to_page(2, &mut fx);
        assert_eq!(numbers(&pagination.controls()), ["<", "1", "[2]", ">"]);
    }

    #[test]
    fn test_single_page_suppressed_by_default() {
        let (_, pagination, fx) = loaded(4);
        assert!(!pagination.controls_visible());
        assert!(pagination.controls().is_empty());
        assert!(fx.iter().any(|e| matches!(
            e,
            Effect::SetPagination { visible: false, controls } if controls.is_empty()
        )));
    }

    #[test]
    fn test_single_page_rendered_when_configured() {
        let config = EngineConfig {
            render_single_page_pagination: true,
            ..EngineConfig::default()
        };
        let catalog = catalog_of(4);
        let mut pagination = Pagination::new(&config);
        let mut fx = EffectQueue::new();
        pagination.load(catalog.ids(), &mut fx);
        assert_eq!(numbers(&pagination.controls()), ["<", "[1]", ">"]);
    }

    #[test]
    fn test_filter_resets_page_and_announces() {
        let (catalog, mut pagination, mut fx) = loaded(13);
        pagination.go_to_page(3, &mut fx);
        fx.clear();

        pagination.filter(&catalog, "mobile", &mut fx);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.filtered_len(), 6);
        assert!(pagination
            .visible()
            .iter()
            .all(|&id| catalog.card(id).unwrap().category == Category::Mobile));
        assert!(fx.iter().any(|e| matches!(
            e,
            Effect::Announce { message, .. } if message == "Showing 6 projects in mobile category"
        )));
    }

    #[test]
    fn test_unknown_filter_is_empty() {
        let (catalog, mut pagination, mut fx) = loaded(6);
        pagination.filter(&catalog, "desktop", &mut fx);
        assert_eq!(pagination.filtered_len(), 0);
        assert!(pagination.visible().is_empty());
        assert_eq!(pagination.current_page(), 1);
        assert!(fx
            .iter()
            .any(|e| matches!(e, Effect::ShowEmptyMessage { heading, .. } if heading == "No Desktop Found")));
    }

    #[test]
    fn test_prev_next_respect_bounds() {
        let (_, mut pagination, mut fx) = loaded(13);
        assert!(!pagination.prev_page(&mut fx));
        assert!(pagination.next_page(&mut fx));
        assert!(pagination.next_page(&mut fx));
        assert!(!pagination.next_page(&mut fx));
        assert_eq!(pagination.current_page(), 3);
    }
}
