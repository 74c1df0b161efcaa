//! Entity store adapter
//!
//! The only module permitted to talk to persistent storage. Each collection
//! is exposed through the [`EntityCollection`] capability interface;
//! [`ContentStore`] bundles the two handles and is constructed once at
//! startup, then injected into the resolver set. This layer has no retry
//! policy: an unreachable store propagates as
//! [`AppError::StoreUnavailable`](crate::error::AppError::StoreUnavailable).

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{Comment, DocumentEntity, Post};

/// Capability interface over one document collection.
#[async_trait]
pub trait EntityCollection<T: DocumentEntity>: Send + Sync {
    /// Point lookup. Absent is `None`, never an error.
    async fn get_by_id(&self, id: ObjectId) -> Result<Option<T>>;

    /// Unbounded scan in store-native order; a snapshot as of call time.
    async fn list_all(&self) -> Result<Vec<T>>;

    /// Equality filter scan over one field.
    async fn find_by(&self, field: &str, value: Bson) -> Result<Vec<T>>;

    /// Persist a new document and return it with its store-assigned
    /// identifier. One atomic operation: the returned id is the one the
    /// document is durably stored under, immediately visible to subsequent
    /// reads through this adapter. No secondary lookup.
    async fn insert_and_return(&self, fields: T::Fields) -> Result<T>;
}

/// Store handles for the two collections.
pub struct ContentStore {
    pub posts: Box<dyn EntityCollection<Post>>,
    pub comments: Box<dyn EntityCollection<Comment>>,
}

impl ContentStore {
    /// Connect to the document store and verify it is reachable. Startup is
    /// ordered: this completes before the server binds, so resolvers never
    /// observe a half-initialized store.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        mongo::connect(config).await
    }

    /// Store backed by process memory. The test double enabled by the
    /// injection seam; shares `find_by` semantics with the MongoDB backing.
    pub fn in_memory() -> Self {
        ContentStore {
            posts: Box::new(memory::MemoryCollection::new()),
            comments: Box::new(memory::MemoryCollection::new()),
        }
    }
}
