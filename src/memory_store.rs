//! In-memory `BucketStore` used by the tests, with optional fault injection.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::error::{LifecycleError, Result};
use crate::store::{BucketInfo, BucketStore, CreatedBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Delete,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    buckets: Mutex<Vec<BucketInfo>>,
    calls: Mutex<Vec<Operation>>,
    fail_on: Option<Operation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// a store that rejects every call of the given operation
    pub fn failing_on(op: Operation) -> Self {
        Self { fail_on: Some(op), ..Self::default() }
    }

    pub fn with_buckets(names: &[&str]) -> Self {
        let store = Self::new();
        store.buckets.lock().unwrap().extend(names.iter().map(|name| BucketInfo {
            name: (*name).to_owned(),
            created: Some(Utc::now()),
        }));
        store
    }

    pub fn bucket_names(&self) -> Vec<String> {
        self.buckets.lock().unwrap().iter().map(|b| b.name.clone()).collect()
    }

    /// operations received so far, in order
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: Operation) -> bool {
        self.calls.lock().unwrap().push(op);
        self.fail_on == Some(op)
    }
}

#[async_trait]
impl BucketStore for MemoryStore {
    async fn create_bucket(&self, bucket_name: &str) -> Result<CreatedBucket> {
        let bucket = bucket_name.to_owned();
        if self.record(Operation::Create) {
            return Err(LifecycleError::CreateBucket { bucket, message: "injected failure".to_owned() });
        }
        let mut buckets = self.buckets.lock().unwrap();
        if buckets.iter().any(|b| b.name == bucket_name) {
            return Err(LifecycleError::CreateBucket { bucket, message: "BucketAlreadyOwnedByYou".to_owned() });
        }
        buckets.push(BucketInfo { name: bucket, created: Some(Utc::now()) });
        Ok(CreatedBucket { location: Some(format!("/{bucket_name}")) })
    }

    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        if self.record(Operation::List) {
            return Err(LifecycleError::ListBuckets { message: "injected failure".to_owned() });
        }
        Ok(self.buckets.lock().unwrap().clone())
    }

    async fn delete_bucket(&self, bucket_name: &str) -> Result<()> {
        let bucket = bucket_name.to_owned();
        if self.record(Operation::Delete) {
            return Err(LifecycleError::DeleteBucket { bucket, message: "injected failure".to_owned() });
        }
        let mut buckets = self.buckets.lock().unwrap();
        let Some(idx) = buckets.iter().position(|b| b.name == bucket_name) else {
            return Err(LifecycleError::DeleteBucket { bucket, message: "NoSuchBucket".to_owned() });
        };
        buckets.remove(idx);
        Ok(())
    }
}
