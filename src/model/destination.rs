use serde::{Deserialize, Serialize};

/// An image attached to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub src: String,
    pub description: String,
}

/// A place record with descriptive text and an image.
///
/// Destinations come from a reference list supplied by the host; the form
/// view looks them up by `name` and never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub description: String,
    pub picture: Picture,
}

impl Destination {
    /// Creates a destination record.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        picture_src: impl Into<String>,
        picture_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            picture: Picture {
                src: picture_src.into(),
                description: picture_description.into(),
            },
        }
    }
}
