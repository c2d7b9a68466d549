use serde::{Deserialize, Serialize};

/// An optional add-on tied to an event type, with a selection flag.
///
/// Identity is by `id`. `is_checked` is UI-local selection state and is not
/// guaranteed to be present on externally stored records, so it defaults to
/// `false` when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: u32,
    pub title: String,
    pub price: u64,
    #[serde(default)]
    pub is_checked: bool,
}

impl Offer {
    /// Creates an unchecked offer.
    pub fn new(id: u32, title: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            is_checked: false,
        }
    }
}
