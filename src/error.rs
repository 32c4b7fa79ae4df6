//! Error types for the bucket lifecycle

use thiserror::Error;

/// Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Everything that can stop the lifecycle. Each remote step has its own variant so the
/// top-level handler can tell where the run stopped.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The session could not be configured
    #[error("Session error: {0}")]
    Session(String),

    /// The credentials provider did not yield credentials
    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Failed to create bucket {bucket}: {message}")]
    CreateBucket { bucket: String, message: String },

    #[error("Failed to list buckets: {message}")]
    ListBuckets { message: String },

    #[error("Failed to delete bucket {bucket}: {message}")]
    DeleteBucket { bucket: String, message: String },

    /// Writing the step output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
