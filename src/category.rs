//! Coarse application categories and the classifier seam.

use serde::Serialize;

/// Coarse launcher category. The declaration order is the display order
/// used when sorting by category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Internet,
    Chat,
    Music,
    Video,
    Graphics,
    Game,
    Office,
    Reading,
    Development,
    System,
    #[default]
    Others,
}

impl Category {
    /// Stable lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Category::Internet => "internet",
            Category::Chat => "chat",
            Category::Music => "music",
            Category::Video => "video",
            Category::Graphics => "graphics",
            Category::Game => "game",
            Category::Office => "office",
            Category::Reading => "reading",
            Category::Development => "development",
            Category::System => "system",
            Category::Others => "others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the best matching coarse category for a list of raw tags.
/// Classification heuristics live outside this crate.
pub trait CategoryMatcher: Send + Sync {
    fn best_match(&self, tags: &[String]) -> Category;
}
