//! In-memory collections
//!
//! Process-local backing behind the same capability interface as the
//! MongoDB collections. Field equality goes through bson serialization so
//! `find_by` matches exactly what the document backing would match.

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Bson};
use tokio::sync::RwLock;

use super::EntityCollection;
use crate::error::Result;
use crate::models::DocumentEntity;

pub struct MemoryCollection<T> {
    docs: RwLock<Vec<T>>,
}

impl<T> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn field_matches<T: DocumentEntity>(entity: &T, field: &str, value: &Bson) -> Result<bool> {
    let document = bson::to_document(entity)?;
    Ok(document.get(field) == Some(value))
}

#[async_trait]
impl<T: DocumentEntity> EntityCollection<T> for MemoryCollection<T> {
    async fn get_by_id(&self, id: ObjectId) -> Result<Option<T>> {
        let wanted = Bson::ObjectId(id);
        for entity in self.docs.read().await.iter() {
            if field_matches(entity, "_id", &wanted)? {
                return Ok(Some(entity.clone()));
            }
        }
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<T>> {
        Ok(self.docs.read().await.clone())
    }

    async fn find_by(&self, field: &str, value: Bson) -> Result<Vec<T>> {
        let mut found = Vec::new();
        for entity in self.docs.read().await.iter() {
            if field_matches(entity, field, &value)? {
                found.push(entity.clone());
            }
        }
        Ok(found)
    }

    async fn insert_and_return(&self, fields: T::Fields) -> Result<T> {
        let entity = T::assemble(ObjectId::new(), fields);
        self.docs.write().await.push(entity.clone());
        Ok(entity)
    }
}
