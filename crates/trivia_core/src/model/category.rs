//! Category domain model and quiz scope.

use serde::{Deserialize, Serialize};

/// Stable identifier for a category row.
pub type CategoryId = i64;

/// Wire sentinel meaning "every category" in quiz requests.
pub const ALL_CATEGORIES_ID: CategoryId = 0;

/// Question category, e.g. `Science`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category seed applied by schema migration and by in-memory fakes.
pub const DEFAULT_CATEGORIES: &[(CategoryId, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Pool of questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Every stored question.
    All,
    /// Only questions whose `category` equals the id.
    Category(CategoryId),
}

impl QuizScope {
    /// Maps a wire category id to a scope.
    ///
    /// Returns `None` for negative ids, which never name a category.
    pub fn from_category_id(id: CategoryId) -> Option<Self> {
        match id {
            ALL_CATEGORIES_ID => Some(Self::All),
            id if id > 0 => Some(Self::Category(id)),
            _ => None,
        }
    }

    /// Category filter to apply to the store, `None` for all categories.
    pub fn category_filter(self) -> Option<CategoryId> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}
