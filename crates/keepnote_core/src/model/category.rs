//! Note category model.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the three mutually exclusive sequences a note lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Main notes list. The only user-ordered sequence.
    Active,
    /// Notes put aside by the user.
    Archived,
    /// Notes awaiting permanent deletion or restore.
    Trashed,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Active, Category::Archived, Category::Trashed];

    /// Stable lowercase label used in logs and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Trashed => "trashed",
        }
    }

    /// Whether users may reorder notes inside this category.
    pub fn is_reorderable(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
