//! The GraphQL schema: the object types from [`dataset`](crate::dataset) and the query root.

use crate::dataset::{Book, Catalog};
use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};

/// The executable schema served by the application.
pub type BookSchema = Schema<RootQuery, EmptyMutation, EmptySubscription>;

/// The query root, holding the catalog every resolver reads from.
#[derive(Debug)]
pub struct RootQuery {
    /// The records served by the resolvers.
    catalog: Catalog,
}

#[Object(name = "RootQuery")]
impl RootQuery {
    /// Get Book By ID
    async fn book(&self, id: Option<i32>) -> Option<Book> {
        // A missing id matches nothing.
        self.catalog.find(id?).cloned()
    }

    /// Get Book List
    async fn list(&self) -> Option<Vec<Option<Book>>> {
        Some(self.catalog.books().iter().cloned().map(Some).collect())
    }
}

/// Builds the schema around a catalog. The shapes themselves are checked when the crate is
/// compiled, so this cannot fail.
#[inline]
#[must_use]
pub fn build_schema(catalog: Catalog) -> BookSchema {
    Schema::build(RootQuery { catalog }, EmptyMutation, EmptySubscription).finish()
}
