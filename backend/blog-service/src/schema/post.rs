//! Post schema and resolvers

use std::sync::Arc;

use async_graphql::{
    ComplexObject, Context, ErrorExtensions, Object, Result as GraphQLResult, SimpleObject,
};
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

use crate::identifier;
use crate::models::{self, NewPost};
use crate::store::ContentStore;

use super::comment::Comment;

#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl From<models::Post> for Post {
    fn from(post: models::Post) -> Self {
        Post {
            id: identifier::encode(&post.id),
            title: post.title,
            content: post.content,
        }
    }
}

#[ComplexObject]
impl Post {
    /// Comments referencing this post, in store order. Resolved only when
    /// the query asks for the field; empty list when nothing matches.
    async fn comments(&self, ctx: &Context<'_>) -> GraphQLResult<Option<Vec<Comment>>> {
        let store = ctx
            .data::<Arc<ContentStore>>()
            .map_err(|_| "Content store not available")?;

        let id = identifier::decode(&self.id).map_err(|e| e.extend())?;
        let comments = store
            .comments
            .find_by("postId", Bson::ObjectId(id))
            .await
            .map_err(|e| e.extend())?;

        Ok(Some(comments.into_iter().map(Comment::from).collect()))
    }
}

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// Point lookup by wire id. Absent resolves to null, not an error.
    async fn post(&self, ctx: &Context<'_>, id: String) -> GraphQLResult<Option<Post>> {
        let store = ctx
            .data::<Arc<ContentStore>>()
            .map_err(|_| "Content store not available")?;

        let id = identifier::decode(&id).map_err(|e| e.extend())?;
        let post = store.posts.get_by_id(id).await.map_err(|e| e.extend())?;

        Ok(post.map(Post::from))
    }

    /// Every post in the store, in store order.
    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Option<Vec<Post>>> {
        let store = ctx
            .data::<Arc<ContentStore>>()
            .map_err(|_| "Content store not available")?;

        let posts = store.posts.list_all().await.map_err(|e| e.extend())?;

        Ok(Some(posts.into_iter().map(Post::from).collect()))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Create a post. The response carries the store-assigned id; there is
    /// no other way for a client to learn it.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: Option<String>,
        content: Option<String>,
    ) -> GraphQLResult<Post> {
        let store = ctx
            .data::<Arc<ContentStore>>()
            .map_err(|_| "Content store not available")?;

        let created = store
            .posts
            .insert_and_return(NewPost {
                title: title.unwrap_or_default(),
                content: content.unwrap_or_default(),
            })
            .await
            .map_err(|e| e.extend())?;

        Ok(created.into())
    }
}
