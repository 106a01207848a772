//! Category/alphabet sort selection over the store.

use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

use crate::roles::{AppRow, Role};
use crate::store::AppListStore;

/// Broadcast channel capacity for selector notifications.
const CHANNEL_CAPACITY: usize = 16;

/// The two interchangeable sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Order by the transliterated display name.
    Alphabetical,
    /// Order by the coarse category.
    Category,
}

/// Events emitted when the selector state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    ModeChanged(SortMode),
}

/// Read-through sorted view over an [`AppListStore`].
///
/// Holds the active sort role and reorders the store's rows on read, so a
/// mode change never leaves a stale ordering behind.
pub struct CategorizedSort {
    store: Arc<AppListStore>,
    /// Active sort role; anything other than `Transliterated` sorts by
    /// category.
    sort_role: RwLock<Role>,
    /// Event sender for mode changes.
    event_tx: broadcast::Sender<SortEvent>,
}

impl CategorizedSort {
    /// Create a selector over the given store, sorting by category until a
    /// mode is set.
    pub fn new(store: Arc<AppListStore>) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            store,
            sort_role: RwLock::new(Role::Category),
            event_tx: tx,
        }
    }

    /// Switch the active sort mode. Announces the change only when the
    /// underlying sort role actually changes.
    pub fn set_mode(&self, mode: SortMode) {
        let new_role = match mode {
            SortMode::Alphabetical => Role::Transliterated,
            SortMode::Category => Role::Category,
        };

        let mut role = self.sort_role.write().unwrap();
        if *role != new_role {
            *role = new_role;
            let _ = self.event_tx.send(SortEvent::ModeChanged(mode));
        }
    }

    /// The active sort mode, inferred from the sort role.
    pub fn mode(&self) -> SortMode {
        if *self.sort_role.read().unwrap() == Role::Transliterated {
            SortMode::Alphabetical
        } else {
            SortMode::Category
        }
    }

    /// Stable name of the active sort role, for diagnostics and binding.
    pub fn sort_key_name(&self) -> &'static str {
        self.sort_role.read().unwrap().name()
    }

    /// The store's rows reordered by the active sort key. The sort is
    /// stable, so ties keep the store's append order.
    pub fn sorted(&self) -> Vec<AppRow> {
        let mut rows = self.store.rows();

        match *self.sort_role.read().unwrap() {
            Role::Transliterated => rows.sort_by(|a, b| {
                // Case-insensitive, like the launcher grid expects.
                a.transliterated
                    .to_lowercase()
                    .cmp(&b.transliterated.to_lowercase())
            }),
            _ => rows.sort_by(|a, b| a.category.cmp(&b.category)),
        }

        rows
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> broadcast::Receiver<SortEvent> {
        self.event_tx.subscribe()
    }
}
