//! MongoDB-backed collections

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection, Database};
use tracing::info;

use super::{ContentStore, EntityCollection};
use crate::config::StoreConfig;
use crate::error::{AppError, Result};
use crate::models::DocumentEntity;

pub struct MongoCollection<T: DocumentEntity> {
    inner: Collection<T>,
}

impl<T: DocumentEntity> MongoCollection<T> {
    fn new(db: &Database, name: &str) -> Self {
        Self {
            inner: db.collection(name),
        }
    }
}

#[async_trait]
impl<T: DocumentEntity> EntityCollection<T> for MongoCollection<T> {
    async fn get_by_id(&self, id: ObjectId) -> Result<Option<T>> {
        Ok(self.inner.find_one(doc! { "_id": id }).await?)
    }

    async fn list_all(&self) -> Result<Vec<T>> {
        let cursor = self.inner.find(doc! {}).await?;
        let docs: Vec<T> = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn find_by(&self, field: &str, value: Bson) -> Result<Vec<T>> {
        let mut filter = Document::new();
        filter.insert(field, value);
        let cursor = self.inner.find(filter).await?;
        let docs: Vec<T> = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn insert_and_return(&self, fields: T::Fields) -> Result<T> {
        let res = self
            .inner
            .clone_with_type::<T::Fields>()
            .insert_one(&fields)
            .await?;
        let id = res.inserted_id.as_object_id().ok_or_else(|| {
            AppError::Internal("insert returned a non-ObjectId identifier".to_string())
        })?;
        Ok(T::assemble(id, fields))
    }
}

/// Connect, ping, and hand back store handles for both collections.
pub(super) async fn connect(config: &StoreConfig) -> Result<ContentStore> {
    let client = Client::with_uri_str(&config.url).await?;
    let db = client.database(&config.database);

    // Fail here, at startup, rather than on the first request.
    db.run_command(doc! { "ping": 1 }).await?;
    info!(database = %config.database, "connected to document store");

    Ok(ContentStore {
        posts: Box::new(MongoCollection::new(&db, "posts")),
        comments: Box::new(MongoCollection::new(&db, "comments")),
    })
}
