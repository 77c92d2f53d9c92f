//! Display order of the move list.

use serde::{Deserialize, Serialize};

/// Whether the move list is shown oldest-first or newest-first.
///
/// Purely a display concern; it never changes the history itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Most recent move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether the list is shown oldest-first.
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    /// Label of the sort button.
    ///
    /// Mirrors the current order: "asd" while ascending, "desc" while
    /// descending.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort by asd",
            Self::Descending => "Sort by desc",
        }
    }

    /// Puts `items`, given oldest-first, into this order.
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if !self.is_ascending() {
            items.reverse();
        }
        items
    }
}
