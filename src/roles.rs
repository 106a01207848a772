//! Stable role naming for the presentation layer.

use serde::Serialize;

use crate::category::Category;

/// Per-entry fields the front end can bind to. The role names are part of
/// the outward contract and must stay stable across releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    DesktopId,
    Category,
    IconName,
    Transliterated,
}

impl Role {
    /// The stable name the presentation layer binds against.
    pub const fn name(self) -> &'static str {
        match self {
            Role::DesktopId => "desktopId",
            Role::Category => "category",
            Role::IconName => "iconName",
            Role::Transliterated => "transliterated",
        }
    }
}

/// Displayable projection of one entry, serialized under the role names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppRow {
    #[serde(rename = "desktopId")]
    pub desktop_id: String,
    pub category: Category,
    #[serde(rename = "iconName")]
    pub icon_name: String,
    pub transliterated: String,
}
