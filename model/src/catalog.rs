//! Card catalog: the in-memory index behind the project grid.
//!
//! Each project record becomes one `CardElement` with a stable `CardId`
//! (its position in the grid). The controller looks cards up by id (from a
//! click) or by slug (from the URL hash) without ever re-parsing DOM
//! attributes.

use std::collections::HashMap;

use folio_shared::data::{Category, ProjectRecord};
use folio_shared::validation::validate_project;
use tracing::{debug, warn};

use crate::content;
use crate::error::{EngineError, Result};

pub type CardId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct CardElement {
    pub id: CardId,
    pub slug: String,
    pub category: Category,
    /// Gallery images; never empty once built.
    pub images: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    cards: Vec<CardElement>,
    by_slug: HashMap<String, CardId>,
}

impl Catalog {
    /// Build the catalog, rejecting the first invalid or duplicate record.
    pub fn build(records: Vec<ProjectRecord>, fallback_image: &str) -> Result<Self> {
        let mut catalog = Catalog::default();
        for (index, record) in records.into_iter().enumerate() {
            validate_project(&record)
                .map_err(|reason| EngineError::InvalidRecord { index, reason })?;
            let slug = record.slug();
            if catalog.by_slug.contains_key(&slug) {
                return Err(EngineError::DuplicateSlug(slug));
            }
            catalog.insert(record, slug, fallback_image);
        }
        debug!(cards = catalog.len(), "catalog built");
        Ok(catalog)
    }

    /// Build the catalog, skipping records that fail validation or reuse a
    /// slug. Used when the strict build failed and the page must still render.
    pub fn build_lenient(records: Vec<ProjectRecord>, fallback_image: &str) -> Self {
        let mut catalog = Catalog::default();
        for (index, record) in records.into_iter().enumerate() {
            if let Err(reason) = validate_project(&record) {
                warn!(index, %reason, "skipping invalid project record");
                continue;
            }
            let slug = record.slug();
            if catalog.by_slug.contains_key(&slug) {
                warn!(index, %slug, "skipping duplicate project slug");
                continue;
            }
            catalog.insert(record, slug, fallback_image);
        }
        catalog
    }

    fn insert(&mut self, record: ProjectRecord, slug: String, fallback_image: &str) {
        let id = self.cards.len();
        let images = record.gallery_images(fallback_image);
        self.by_slug.insert(slug.clone(), id);
        self.cards.push(CardElement {
            id,
            slug,
            category: record.category,
            images,
        });
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ids(&self) -> Vec<CardId> {
        (0..self.cards.len()).collect()
    }

    pub fn card(&self, id: CardId) -> Option<&CardElement> {
        self.cards.get(id)
    }

    pub fn record(&self, id: CardId) -> Option<&ProjectRecord> {
        self.records.get(id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<CardId> {
        self.by_slug.get(slug).copied()
    }

    /// Cards whose category matches `filter`. `"all"` matches everything;
    /// an unknown tag matches nothing.
    pub fn filter_ids(&self, filter: &str) -> Vec<CardId> {
        if filter == folio_shared::FILTER_ALL {
            return self.ids();
        }
        match Category::parse(filter) {
            Some(category) => self
                .cards
                .iter()
                .filter(|c| c.category == category)
                .map(|c| c.id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Grid markup for every card, in id order.
    pub fn render_html(&self, fallback_image: &str) -> String {
        self.cards
            .iter()
            .zip(&self.records)
            .map(|(card, record)| content::render_card(card, record, fallback_image))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_shared::data::projects;
    use folio_shared::FALLBACK_IMAGE;

    #[test]
    fn test_build_indexes_slugs() {
        let catalog = Catalog::build(projects(), FALLBACK_IMAGE).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.find_by_slug("project-title-3"), Some(2));
        assert_eq!(catalog.card(2).unwrap().category, Category::Mobile);
        assert_eq!(catalog.find_by_slug("nope"), None);
    }

    #[test]
    fn test_empty_images_fall_back() {
        let mut records = projects();
        records[0].images.clear();
        let catalog = Catalog::build(records, "./fallback.png").unwrap();
        assert_eq!(catalog.card(0).unwrap().images, vec!["./fallback.png".to_string()]);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut records = projects();
        records[1].slug = Some("project-title-1".into());
        let err = Catalog::build(records, FALLBACK_IMAGE).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateSlug(ref s) if s == "project-title-1"));
    }

    #[test]
    fn test_lenient_skips_bad_records() {
        let mut records = projects();
        records[1].slug = Some("project-title-1".into());
        records[2].title = String::new();
        records[2].slug = None;
        let catalog = Catalog::build_lenient(records, FALLBACK_IMAGE);
        assert_eq!(catalog.len(), 4);
        // Ids stay dense after skipping.
        assert_eq!(catalog.find_by_slug("project-title-4"), Some(1));
    }

    #[test]
    fn test_filter_ids() {
        let catalog = Catalog::build(projects(), FALLBACK_IMAGE).unwrap();
        assert_eq!(catalog.filter_ids("all").len(), 6);
        assert_eq!(catalog.filter_ids("backend"), vec![1, 4]);
        assert!(catalog.filter_ids("desktop").is_empty());
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"[{"title":"Json App","tags":"Rust","description":"d","category":"backend"}]"#;
        let records: Vec<ProjectRecord> = serde_json::from_str(json).unwrap();
        let catalog = Catalog::build(records, FALLBACK_IMAGE).unwrap();
        assert_eq!(catalog.find_by_slug("json-app"), Some(0));
        assert_eq!(catalog.card(0).unwrap().images, vec![FALLBACK_IMAGE.to_string()]);
    }
}
