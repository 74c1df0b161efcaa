//! Persisted document models
//!
//! Field names match the stored documents (`_id`, `postId`). The `New*`
//! structs carry exactly the fields a create persists; the store assigns the
//! identifier and hands back the full document.

use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A persisted document: deserializable from the store, assembled from its
/// insert fields plus the store-assigned identifier.
pub trait DocumentEntity:
    Serialize + DeserializeOwned + Clone + Unpin + Send + Sync + 'static
{
    /// The fields persisted on insert, without the identifier.
    type Fields: Serialize + Clone + Send + Sync + 'static;

    fn assemble(id: ObjectId, fields: Self::Fields) -> Self;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl DocumentEntity for Post {
    type Fields = NewPost;

    fn assemble(id: ObjectId, fields: NewPost) -> Self {
        Post {
            id,
            title: fields.title,
            content: fields.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Foreign reference to a Post. Held by value only; never validated
    /// against existence, so a dangling reference is a valid state.
    #[serde(rename = "postId")]
    pub post_id: ObjectId,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    #[serde(rename = "postId")]
    pub post_id: ObjectId,
    pub content: String,
}

impl DocumentEntity for Comment {
    type Fields = NewComment;

    fn assemble(id: ObjectId, fields: NewComment) -> Self {
        Comment {
            id,
            post_id: fields.post_id,
            content: fields.content,
        }
    }
}
