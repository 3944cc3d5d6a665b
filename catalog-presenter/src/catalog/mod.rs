//! Producer catalog: classify, rank, highlight and progressively reveal
//! a producer's dishes.

pub mod classifier;
pub mod collate;
pub mod highlights;
pub mod overlay;
pub mod presenter;
pub mod ranker;
pub mod revealer;
pub mod search;

pub use classifier::{
    Bucket, BucketKey, CategoryIndex, CategoryRef, NO_SUBCATEGORY_KEY, NO_SUBCATEGORY_NAME,
    UNCATEGORIZED_KEY, UNCATEGORIZED_NAME, classify,
};
pub use collate::compare_names;
pub use highlights::{partition_highlights, select_highlights};
pub use overlay::DishOverlay;
pub use presenter::{CatalogView, ProducerCatalog, Projection, SectionView, project};
pub use ranker::{PriorityTable, UNRANKED_PRIORITY, rank, sort_dishes};
pub use revealer::Revealer;
pub use search::DishQuery;
