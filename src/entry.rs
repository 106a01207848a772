//! Application records and entries.

use serde::Deserialize;

use crate::category::{Category, CategoryMatcher};

/// Raw key-value record from the application-info service.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Semicolon-delimited category tags, e.g. "Network;WebBrowser;".
    #[serde(default)]
    pub categories: String,
}

/// One application, keyed by its stable identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppEntry {
    /// Unique stable identifier, e.g. "org.mozilla.firefox.desktop".
    pub id: String,
    pub name: String,
    pub icon_name: String,
    /// Raw category tags in the order the service reported them.
    pub categories: Vec<String>,
    /// Coarse category derived from the tags.
    pub category: Category,
}

impl AppEntry {
    /// Translate a raw record into an entry, classifying the coarse
    /// category through the given matcher.
    pub fn from_record(record: &AppRecord, matcher: &dyn CategoryMatcher) -> Self {
        let categories: Vec<String> = record
            .categories
            .split(';')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let category = matcher.best_match(&categories);

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            icon_name: record.icon.clone(),
            categories,
            category,
        }
    }

    /// Overwrite every field from `other`, keeping this entry's identity.
    /// Both sides carry the same identifier when called during
    /// reconciliation, so `id` is left untouched.
    pub fn update_from(&mut self, other: &AppEntry) {
        self.name = other.name.clone();
        self.icon_name = other.icon_name.clone();
        self.categories = other.categories.clone();
        self.category = other.category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstTagMatcher;

    impl CategoryMatcher for FirstTagMatcher {
        fn best_match(&self, tags: &[String]) -> Category {
            match tags.first().map(String::as_str) {
                Some("Network") => Category::Internet,
                Some("AudioVideo") => Category::Music,
                _ => Category::Others,
            }
        }
    }

    fn record(id: &str, name: &str, categories: &str) -> AppRecord {
        AppRecord {
            id: id.to_string(),
            name: name.to_string(),
            icon: format!("{name}-icon"),
            categories: categories.to_string(),
        }
    }

    #[test]
    fn test_from_record_splits_tags() {
        let entry = AppEntry::from_record(
            &record("firefox.desktop", "Firefox", "Network;WebBrowser;"),
            &FirstTagMatcher,
        );

        assert_eq!(entry.id, "firefox.desktop");
        assert_eq!(entry.categories, vec!["Network", "WebBrowser"]);
        assert_eq!(entry.category, Category::Internet);
        assert_eq!(entry.icon_name, "Firefox-icon");
    }

    #[test]
    fn test_from_record_empty_categories() {
        let entry = AppEntry::from_record(&record("a.desktop", "A", ""), &FirstTagMatcher);

        assert!(entry.categories.is_empty());
        assert_eq!(entry.category, Category::Others);
    }

    #[test]
    fn test_update_from_overwrites_all_fields() {
        let mut entry = AppEntry::from_record(
            &record("music.desktop", "Player", "AudioVideo;"),
            &FirstTagMatcher,
        );
        let replacement = AppEntry::from_record(
            &record("music.desktop", "Player II", "Network;"),
            &FirstTagMatcher,
        );

        entry.update_from(&replacement);

        assert_eq!(entry.id, "music.desktop");
        assert_eq!(entry.name, "Player II");
        assert_eq!(entry.icon_name, "Player II-icon");
        assert_eq!(entry.categories, vec!["Network"]);
        assert_eq!(entry.category, Category::Internet);
    }
}
