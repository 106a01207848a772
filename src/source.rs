//! Seams for the external application-info service.

use tokio::sync::broadcast;

use crate::entry::AppRecord;

/// Events emitted by the application-info service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent {
    /// The installed set changed in some way; consumers must re-query.
    Changed,
}

/// Live view of the applications that should be shown in the launcher.
///
/// Implemented outside this crate, typically on top of a desktop-file
/// monitor. The query is synchronous and is expected to be fast enough to
/// run on the UI thread.
pub trait AppInfoSource: Send + Sync {
    /// Snapshot of all applications that should currently be shown, in the
    /// service's reporting order.
    fn all_apps_to_show(&self) -> Vec<AppRecord>;

    /// Subscribe to change notifications.
    fn subscribe(&self) -> broadcast::Receiver<SourceEvent>;
}

/// Derives a sortable alphabetic key from a display name.
///
/// Locale-aware transliteration (pinyin, romaji, ...) is provided by the
/// host environment; this crate only consumes the derived key.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, name: &str) -> String;
}

/// No-op transliterator for scripts that already sort natively.
pub struct Passthrough;

impl Transliterator for Passthrough {
    fn transliterate(&self, name: &str) -> String {
        name.to_string()
    }
}
