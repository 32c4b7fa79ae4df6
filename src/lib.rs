//! Create, list and delete an S3 bucket, plus the small date helpers the run prints.

pub mod client;
pub mod clock;
pub mod error;
pub mod lifecycle;
pub mod session;
pub mod store;

#[cfg(test)]
mod memory_store;

pub use client::{client_for, client_region};
pub use error::{LifecycleError, Result};
pub use lifecycle::{run_lifecycle, LifecycleReport};
pub use session::Session;
pub use store::{BucketInfo, BucketStore, CreatedBucket};

pub const REGION: &str = "us-west-2";

/// the bucket created and removed again by the lifecycle run
pub const BUCKET_NAME: &str = "core-aha-bucket1";
