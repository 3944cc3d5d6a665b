//! Producer catalog presenter
//!
//! `project` is the pure classify → rank pipeline. `ProducerCatalog`
//! wraps it with the view-local state (expanded sections, dish overlay,
//! search query) and produces what the page renders.

use serde::Serialize;
use shared::models::{Category, Dish};

use super::classifier::{Bucket, BucketKey, classify};
use super::highlights::partition_highlights;
use super::overlay::DishOverlay;
use super::ranker::{PriorityTable, rank};
use super::revealer::Revealer;
use super::search::DishQuery;
use crate::core::Config;

/// Highlights plus fully populated, ordered buckets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection<'a> {
    pub highlights: Vec<&'a Dish>,
    pub sections: Vec<Bucket<'a>>,
}

/// Project a producer's dishes into highlights and ordered sections
///
/// Pure: the same inputs always give the same projection.
pub fn project<'a, I>(
    dishes: I,
    categories: Option<&[Category]>,
    priorities: &PriorityTable,
    highlight_limit: usize,
) -> Projection<'a>
where
    I: IntoIterator<Item = &'a Dish>,
{
    let (highlights, rest) = partition_highlights(dishes, highlight_limit);
    let sections = rank(classify(rest, categories), priorities);

    Projection {
        highlights,
        sections,
    }
}

/// One rendered section of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView<'a> {
    pub key: BucketKey,
    pub main_name: String,
    pub sub_name: String,
    /// Dishes currently on screen
    pub visible: Vec<&'a Dish>,
    /// All dishes in the section
    pub total: usize,
    /// Stored counter, may exceed `total`
    pub visible_count: usize,
    pub has_more: bool,
}

/// Everything the catalog page renders in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView<'a> {
    pub highlights: Vec<&'a Dish>,
    pub sections: Vec<SectionView<'a>>,
    /// Dish shown in the detail overlay, if open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_dish: Option<&'a Dish>,
}

impl CatalogView<'_> {
    pub fn section(&self, key: &BucketKey) -> Option<&SectionView<'_>> {
        self.sections.iter().find(|s| &s.key == key)
    }
}

/// Stateful catalog view for a single producer page
#[derive(Debug, Clone)]
pub struct ProducerCatalog {
    priorities: PriorityTable,
    highlight_limit: usize,
    revealer: Revealer,
    overlay: DishOverlay,
    query: DishQuery,
}

impl ProducerCatalog {
    pub fn new(priorities: PriorityTable, page_size: usize, highlight_limit: usize) -> Self {
        Self {
            priorities,
            highlight_limit,
            revealer: Revealer::new(page_size),
            overlay: DishOverlay::new(),
            query: DishQuery::default(),
        }
    }

    pub fn from_config(config: &Config, priorities: PriorityTable) -> Self {
        Self::new(priorities, config.page_size, config.highlight_limit)
    }

    /// Render the page for the current dish list and category tree
    pub fn render<'a>(
        &'a self,
        dishes: &'a [Dish],
        categories: Option<&[Category]>,
    ) -> CatalogView<'a> {
        let matching = self.query.filter(dishes);
        let projection = project(matching, categories, &self.priorities, self.highlight_limit);

        let sections: Vec<SectionView<'a>> = projection
            .sections
            .into_iter()
            .map(|bucket| self.section_view(bucket))
            .collect();

        tracing::debug!(
            "Rendered catalog: {} dishes, {} highlights, {} sections",
            dishes.len(),
            projection.highlights.len(),
            sections.len()
        );

        CatalogView {
            highlights: projection.highlights,
            sections,
            open_dish: self.overlay.current(),
        }
    }

    fn section_view<'a>(&self, bucket: Bucket<'a>) -> SectionView<'a> {
        let total = bucket.len();
        let shown = self.revealer.rendered_len(&bucket.key, total);
        let visible_count = self.revealer.visible_count(&bucket.key);
        let has_more = self.revealer.has_more(&bucket.key, total);

        let mut visible = bucket.dishes;
        visible.truncate(shown);

        SectionView {
            key: bucket.key,
            main_name: bucket.main_name,
            sub_name: bucket.sub_name,
            visible,
            total,
            visible_count,
            has_more,
        }
    }

    /// "Show more" on one section
    pub fn reveal_more(&mut self, key: &BucketKey) -> usize {
        self.revealer.reveal_more(key)
    }

    pub fn open_dish(&mut self, dish: Dish) {
        self.overlay.open(dish);
    }

    pub fn close_dish(&mut self) {
        self.overlay.close();
    }

    pub fn overlay(&self) -> &DishOverlay {
        &self.overlay
    }

    pub fn revealer(&self) -> &Revealer {
        &self.revealer
    }

    /// Filter dishes by name; expanded sections stay expanded
    pub fn set_query(&mut self, query: &str) {
        self.query = DishQuery::new(query);
    }

    /// Forget view-local state, as on remount
    pub fn reset(&mut self) {
        self.revealer.reset();
        self.overlay.reset();
        self.query = DishQuery::default();
    }
}

impl Default for ProducerCatalog {
    fn default() -> Self {
        Self::from_config(&Config::default(), PriorityTable::default())
    }
}
