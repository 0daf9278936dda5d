use serde::{Deserialize, Serialize};

/// On-disk shape of a single book record.
///
/// Field names and their order in the document are fixed here, independent
/// of the domain `Book` type. Every field is mandatory: a record missing one
/// is rejected on decode rather than defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub pages: u16,
}

impl BookDto {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u16) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
        }
    }
}

/// The full catalog as stored at one path.
///
/// Serialized form:
/// ```text
/// {
///   "library": {
///     "book": [
///       { "title": "...", "author": "...", "pages": 0 }
///     ]
///   }
/// }
/// ```
///
/// Record order is the order in which the sequence was last written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    library: Library,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Library {
    book: Vec<BookDto>,
}

impl CatalogDocument {
    /// Wrap an ordered sequence of records.
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            library: Library { book: books },
        }
    }

    /// The records in document order.
    pub fn books(&self) -> &[BookDto] {
        &self.library.book
    }

    /// Unwrap into the ordered record sequence.
    pub fn into_books(self) -> Vec<BookDto> {
        self.library.book
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.library.book.len()
    }

    /// Returns `true` if the document holds no records.
    pub fn is_empty(&self) -> bool {
        self.library.book.is_empty()
    }

    /// Encode as pretty-printed UTF-8 JSON.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }

    /// Decode from JSON bytes, enforcing the record schema.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

impl From<Vec<BookDto>> for CatalogDocument {
    fn from(books: Vec<BookDto>) -> Self {
        Self::new(books)
    }
}
