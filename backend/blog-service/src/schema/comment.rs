//! Comment schema and resolvers

use std::sync::Arc;

use async_graphql::{
    ComplexObject, Context, ErrorExtensions, Object, Result as GraphQLResult, SimpleObject,
};
use serde::{Deserialize, Serialize};

use crate::identifier;
use crate::models::{self, NewComment};
use crate::store::ContentStore;

use super::post::Post;

#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub content: String,
}

impl From<models::Comment> for Comment {
    fn from(comment: models::Comment) -> Self {
        Comment {
            id: identifier::encode(&comment.id),
            post_id: identifier::encode(&comment.post_id),
            content: comment.content,
        }
    }
}

#[ComplexObject]
impl Comment {
    /// The referenced post. A dangling reference resolves to null.
    async fn post(&self, ctx: &Context<'_>) -> GraphQLResult<Option<Post>> {
        let store = ctx
            .data::<Arc<ContentStore>>()
            .map_err(|_| "Content store not available")?;

        let post_id = identifier::decode(&self.post_id).map_err(|e| e.extend())?;
        let post = store
            .posts
            .get_by_id(post_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(post.map(Post::from))
    }
}

#[derive(Default)]
pub struct CommentQuery;

#[Object]
impl CommentQuery {
    /// Point lookup by wire id. Absent resolves to null, not an error.
    async fn comment(&self, ctx: &Context<'_>, id: String) -> GraphQLResult<Option<Comment>> {
        let store = ctx
            .data::<Arc<ContentStore>>()
            .map_err(|_| "Content store not available")?;

        let id = identifier::decode(&id).map_err(|e| e.extend())?;
        let comment = store.comments.get_by_id(id).await.map_err(|e| e.extend())?;

        Ok(comment.map(Comment::from))
    }
}

#[derive(Default)]
pub struct CommentMutation;

#[Object]
impl CommentMutation {
    /// Create a comment referencing a post. The id must be well-formed, but
    /// the post's existence is deliberately not checked; the relation is
    /// held by value and dangling references are valid.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        post_id: String,
        content: Option<String>,
    ) -> GraphQLResult<Comment> {
        let store = ctx
            .data::<Arc<ContentStore>>()
            .map_err(|_| "Content store not available")?;

        let post_id = identifier::decode(&post_id).map_err(|e| e.extend())?;
        let created = store
            .comments
            .insert_and_return(NewComment {
                post_id,
                content: content.unwrap_or_default(),
            })
            .await
            .map_err(|e| e.extend())?;

        Ok(created.into())
    }
}
