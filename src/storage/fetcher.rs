use async_trait::async_trait;
use serde_json::Value;

use crate::core::models::RawItem;
use crate::errors::StorageError;

/// Loads the raw items of the group an invocation event refers to.
///
/// Implementations own the query semantics (key lookup, filtering,
/// pagination). Any returned collection, empty included, is a valid result.
/// A single instance is shared read-only across overlapping invocations.
#[async_trait]
pub trait GroupItemFetcher: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the underlying store cannot be queried.
    async fn fetch(&self, event: &Value) -> Result<Vec<RawItem>, StorageError>;
}

