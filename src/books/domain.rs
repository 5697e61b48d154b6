use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

/// Port to the catalog that confirms a book record exists.
///
/// No implementation ships with this crate; the hosting service wires in its own
/// catalog (database, remote service, ...). An absent book must surface as an error,
/// typically [`crate::core::library::LibraryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookLookup: Sync + Send {
    async fn find_book_by_id(&self, book_id: &str) -> LibraryResult<BookDto>;
}
