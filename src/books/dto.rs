use serde::{Deserialize, Serialize};

// BookDto is what a catalog lookup hands back for a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub title: String,
}

impl BookDto {
    pub fn new(book_id: &str, title: &str) -> BookDto {
        BookDto {
            book_id: book_id.to_string(),
            title: title.to_string(),
        }
    }
}
