//! The book records and the fixed catalog they are served from.

use async_graphql::Object;
use std::sync::Arc;

/// A comment left on a book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// The text of the comment.
    pub body: String,
}

// Fields are published as nullable, list elements included.

#[Object]
impl Comment {
    async fn body(&self) -> Option<&str> {
        Some(self.body.as_str())
    }
}

/// The person who wrote a book.
// NOTE: `books` is a snapshot taken when the record is built and is never checked against the
// catalog, so it may be stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    /// The name of the author.
    pub name: String,
    /// Identifiers of the books associated with the author.
    pub books: Vec<i32>,
}

#[Object]
impl Author {
    async fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    async fn books(&self) -> Option<Vec<Option<i32>>> {
        Some(self.books.iter().copied().map(Some).collect())
    }
}

/// A book, with its author and comments embedded by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    /// The identifier of the book. Unique within a catalog.
    pub id: i32,
    /// The title of the book.
    pub title: String,
    /// The author of the book.
    pub author: Author,
    /// Comments on the book, in the order they were made.
    pub comments: Vec<Comment>,
}

#[Object]
impl Book {
    async fn id(&self) -> Option<i32> {
        Some(self.id)
    }

    async fn title(&self) -> Option<&str> {
        Some(self.title.as_str())
    }

    async fn author(&self) -> Option<&Author> {
        Some(&self.author)
    }

    async fn comments(&self) -> Option<Vec<Option<&Comment>>> {
        Some(self.comments.iter().map(Some).collect())
    }
}

/// An immutable, ordered collection of books. Cloning is cheap and shares the records.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// The records, in construction order.
    books: Arc<[Book]>,
}

impl Catalog {
    /// Builds the fixed catalog served by the application.
    #[inline]
    #[must_use]
    pub fn populate() -> Self {
        let author = Author {
            name: "Robert C. Martin".to_owned(),
            books: vec![2],
        };

        Self::new(vec![
            Book {
                id: 1,
                title: "Clean Code".to_owned(),
                author: author.clone(),
                comments: vec![Comment {
                    body: "This book is awesome!".to_owned(),
                }],
            },
            Book {
                id: 2,
                title: "Clean Architecture".to_owned(),
                author,
                comments: vec![Comment {
                    body: "This book is also awesome!".to_owned(),
                }],
            },
        ])
    }

    /// Wraps the given records. Identifiers are expected to be unique but this is not checked.
    #[inline]
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books.into(),
        }
    }

    /// All records, in construction order.
    #[inline]
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the first book with a matching identifier.
    #[inline]
    #[must_use]
    pub fn find(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// The number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether there are no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_is_ordered_by_construction() {
        let catalog = Catalog::populate();

        assert_eq!(catalog.len(), 2);
        let titles: Vec<_> = catalog.books().iter().map(|book| book.title.as_str()).collect();
        assert_eq!(titles, ["Clean Code", "Clean Architecture"]);
    }

    #[test]
    fn populate_is_deterministic() {
        assert_eq!(Catalog::populate().books(), Catalog::populate().books());
    }

    #[test]
    fn books_share_the_author_snapshot() {
        let catalog = Catalog::populate();
        let authors: Vec<_> = catalog.books().iter().map(|book| &book.author).collect();

        assert_eq!(authors[0], authors[1]);
        assert_eq!(authors[0].name, "Robert C. Martin");
        // Stale for the first book, kept as constructed.
        assert_eq!(authors[0].books, [2]);
    }

    #[test]
    fn find_existing() {
        let catalog = Catalog::populate();
        let book = catalog.find(2).expect("book 2 should exist");

        assert_eq!(book.title, "Clean Architecture");
        assert_eq!(book.comments[0].body, "This book is also awesome!");
    }

    #[test]
    fn find_missing() {
        let catalog = Catalog::populate();

        assert!(catalog.find(0).is_none());
        assert!(catalog.find(999).is_none());
        assert!(catalog.find(-1).is_none());
    }

    #[test]
    fn find_returns_first_duplicate() {
        let book = |title: &str| Book {
            id: 7,
            title: title.to_owned(),
            author: Author {
                name: "Anonymous".to_owned(),
                books: vec![],
            },
            comments: vec![],
        };
        let catalog = Catalog::new(vec![book("first"), book("second")]);

        assert_eq!(catalog.find(7).map(|b| b.title.as_str()), Some("first"));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(vec![]);

        assert!(catalog.is_empty());
        assert!(catalog.find(1).is_none());
    }
}
