//! GraphQL schema
//!
//! One module per entity, merged into the root objects. The store adapter is
//! injected as schema data at build time so resolvers never reach for
//! globals.

pub mod comment;
pub mod post;

use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::store::ContentStore;

/// Root query object
#[derive(MergedObject, Default)]
pub struct QueryRoot(post::PostQuery, comment::CommentQuery);

/// Root mutation object
#[derive(MergedObject, Default)]
pub struct MutationRoot(post::PostMutation, comment::CommentMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store handles available to every resolver.
pub fn build_schema(store: Arc<ContentStore>) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(store)
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_builds() {
        let schema = build_schema(Arc::new(ContentStore::in_memory()));
        let sdl = schema.sdl();
        assert!(sdl.contains("type Post"));
        assert!(sdl.contains("type Comment"));
        assert!(sdl.contains("createPost"));
        assert!(sdl.contains("createComment"));
    }
}
