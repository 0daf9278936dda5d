//! Conversion between the domain record and its persisted shape.
//!
//! The two types carry the same fields today. Keeping the conversion in one
//! place lets the stored layout change without touching callers.

use folio_store::BookDto;
use folio_types::Book;

/// Map a domain book to its persisted shape.
pub fn to_dto(book: Book) -> BookDto {
    BookDto {
        title: book.title,
        author: book.author,
        pages: book.pages,
    }
}

/// Map a persisted record to the domain book.
pub fn to_book(dto: BookDto) -> Book {
    Book {
        title: dto.title,
        author: dto.author,
        pages: dto.pages,
    }
}
