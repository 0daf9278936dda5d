use serde::{Deserialize, Serialize};

/// A single catalog entry as seen by callers.
///
/// Books carry no identity: two books with the same title and author are
/// distinct entries. Any field may be empty. `pages` is bounded to the
/// 16-bit range by its type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book.
    pub title: String,
    /// Author of the book.
    pub author: String,
    /// Page count.
    pub pages: u16,
}

impl Book {
    /// Create a book from its three fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u16) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
        }
    }
}
