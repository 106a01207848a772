//! Application list store implementation.

use log::{debug, info};
use std::sync::RwLock;
use tokio::sync::broadcast;

use crate::category::CategoryMatcher;
use crate::entry::AppEntry;
use crate::roles::AppRow;
use crate::source::{AppInfoSource, Transliterator};

/// Broadcast channel capacity for store notifications.
const CHANNEL_CAPACITY: usize = 16;

/// Events emitted when the store contents change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The store was reconciled against a fresh snapshot; views over it
    /// must re-read.
    Invalidated,
}

/// Result of a bulk merge.
///
/// The two sequences are disjoint: `inserted` lists the identifiers the
/// store took ownership of, `leftovers` hands the remaining input entries
/// back to the caller.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    /// Identifiers of the entries appended to the store, in input order.
    pub inserted: Vec<String>,
    /// Input entries not added to the store, in input order.
    pub leftovers: Vec<AppEntry>,
}

/// The application list store.
///
/// Holds one entry per identifier in stable append order. All mutation goes
/// through `&self` behind an internal lock, so the store can be shared via
/// `Arc` with the views that read it.
pub struct AppListStore {
    /// Entries in append order. Identifier uniqueness is the sole invariant.
    entries: RwLock<Vec<AppEntry>>,
    /// Application-info service the store reconciles against.
    source: Box<dyn AppInfoSource>,
    /// Classifier for the coarse category of new entries.
    matcher: Box<dyn CategoryMatcher>,
    /// Derives the alphabetic sort key from a display name.
    transliterator: Box<dyn Transliterator>,
    /// Event sender for store invalidation.
    event_tx: broadcast::Sender<StoreEvent>,
}

impl AppListStore {
    /// Create a store bound to its collaborators and populate it with the
    /// source's current snapshot.
    pub fn new(
        source: Box<dyn AppInfoSource>,
        matcher: Box<dyn CategoryMatcher>,
        transliterator: Box<dyn Transliterator>,
    ) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        let store = Self {
            entries: RwLock::new(Vec::new()),
            source,
            matcher,
            transliterator,
            event_tx: tx,
        };

        let initial = store.all_apps_to_show();
        let outcome = store.add_all(initial);
        // The service already deduplicates by identifier.
        debug_assert!(
            outcome.leftovers.is_empty(),
            "initial snapshot repeated application ids"
        );
        info!("{} applications loaded", store.len());

        store
    }

    /// Query the source and translate its records into fresh entries. The
    /// caller owns them until they are handed to `add_all` or
    /// `update_or_add_all`.
    pub fn all_apps_to_show(&self) -> Vec<AppEntry> {
        self.source
            .all_apps_to_show()
            .iter()
            .map(|record| AppEntry::from_record(record, self.matcher.as_ref()))
            .collect()
    }

    /// Append every entry whose identifier is not yet stored; entries that
    /// collide with a stored identifier come back untouched in
    /// `leftovers` and the stored entry keeps its fields.
    pub fn add_all(&self, items: Vec<AppEntry>) -> MergeOutcome {
        let mut entries = self.entries.write().unwrap();
        let mut outcome = MergeOutcome::default();

        for item in items {
            if entries.iter().any(|e| e.id == item.id) {
                outcome.leftovers.push(item);
            } else {
                outcome.inserted.push(item.id.clone());
                entries.push(item);
            }
        }

        outcome
    }

    /// Reconcile a snapshot into the store: entries matching a stored
    /// identifier overwrite the stored fields in place and come back in
    /// `leftovers`; the rest are appended. The whole batch runs under one
    /// write lock, so readers never observe a partial update.
    pub fn update_or_add_all(&self, items: Vec<AppEntry>) -> MergeOutcome {
        let mut entries = self.entries.write().unwrap();
        let mut outcome = MergeOutcome::default();

        for item in items {
            if let Some(existing) = entries.iter_mut().find(|e| e.id == item.id) {
                existing.update_from(&item);
                outcome.leftovers.push(item);
            } else {
                outcome.inserted.push(item.id.clone());
                entries.push(item);
            }
        }

        outcome
    }

    /// Re-query the source and reconcile the store against the fresh
    /// snapshot. The handler for the source's `Changed` notification.
    pub fn refresh(&self) {
        debug!("application set changed, reconciling");

        let snapshot = self.all_apps_to_show();
        let outcome = self.update_or_add_all(snapshot);
        debug!(
            "reconciled: {} added, {} updated",
            outcome.inserted.len(),
            outcome.leftovers.len()
        );
        // Leftovers were merged into existing entries and are dropped here.
        drop(outcome);

        let _ = self.event_tx.send(StoreEvent::Invalidated);
    }

    /// First entry whose identifier is an exact match, if any.
    pub fn find_by_id(&self, id: &str) -> Option<AppEntry> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// Sortable alphabetic key for an entry, derived on demand so it can
    /// never go stale after an overwrite.
    pub fn transliterated_key(&self, entry: &AppEntry) -> String {
        self.transliterator.transliterate(&entry.name)
    }

    /// Displayable projection of one entry.
    pub fn row(&self, entry: &AppEntry) -> AppRow {
        AppRow {
            desktop_id: entry.id.clone(),
            category: entry.category,
            icon_name: entry.icon_name.clone(),
            transliterated: self.transliterated_key(entry),
        }
    }

    /// Displayable projections of all entries, in append order.
    pub fn rows(&self) -> Vec<AppRow> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .map(|e| self.row(e))
            .collect()
    }

    /// Snapshot of all entries in append order.
    pub fn entries(&self) -> Vec<AppEntry> {
        self.entries.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Subscribe to store invalidation.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }
}
