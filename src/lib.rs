//! launchgrid: sortable application list model for desktop launchers.
//!
//! Provides:
//! - An application list store reconciled against a live application-info
//!   source (add-or-update by identifier, duplicates reported back)
//! - A category/alphabet sort selector over the store
//! - Stable role names for binding the rows from a UI layer
//!
//! Discovery, icon resolution, category classification and transliteration
//! are external collaborators consumed through the [`AppInfoSource`],
//! [`CategoryMatcher`] and [`Transliterator`] seams.

mod category;
mod entry;
mod roles;
mod sort;
mod source;
mod store;

pub use category::{Category, CategoryMatcher};
pub use entry::{AppEntry, AppRecord};
pub use roles::{AppRow, Role};
pub use sort::{CategorizedSort, SortEvent, SortMode};
pub use source::{AppInfoSource, Passthrough, SourceEvent, Transliterator};
pub use store::{AppListStore, MergeOutcome, StoreEvent};
