use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::DateTime as AwsDateTime;
use aws_sdk_s3::types::{Bucket, BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::client::client_region;
use crate::error::{LifecycleError, Result};

/// S3 refuses an explicit location constraint for this region.
const DEFAULT_S3_REGION: &str = "us-east-1";


/// A bucket as reported by a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketInfo {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
}

/// Result of a successful create
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedBucket {
    /// where the service placed the bucket, if it said so
    pub location: Option<String>,
}

/// The three bucket operations the lifecycle needs from an object store.
#[async_trait]
pub trait BucketStore {
    async fn create_bucket(&self, bucket_name: &str) -> Result<CreatedBucket>;
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;
    async fn delete_bucket(&self, bucket_name: &str) -> Result<()>;
}


#[async_trait]
impl BucketStore for Client {
    async fn create_bucket(&self, bucket_name: &str) -> Result<CreatedBucket> {
        create_bucket(self, bucket_name, client_region(self)).await
    }

    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        list_buckets(self).await
    }

    async fn delete_bucket(&self, bucket_name: &str) -> Result<()> {
        delete_bucket(self, bucket_name).await
    }
}


/// the location constraint to send for `region`, if any
fn location_configuration(region: Option<&str>) -> Option<CreateBucketConfiguration> {
    match region {
        Some(region) if region != DEFAULT_S3_REGION => Some(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build(),
        ),
        _ => None,
    }
}

pub async fn create_bucket(
    client: &Client,
    bucket_name: &str,
    region: Option<&str>,
) -> Result<CreatedBucket> {
    let output = client
        .create_bucket()
        .set_create_bucket_configuration(location_configuration(region))
        .bucket(bucket_name)
        .send()
        .await
        .map_err(|err| LifecycleError::CreateBucket {
            bucket: bucket_name.to_owned(),
            message: DisplayErrorContext(&err).to_string(),
        })?;
    info!(bucket = bucket_name, "Created bucket");

    Ok(CreatedBucket { location: output.location().map(str::to_owned) })
}

fn to_chrono(ts: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
}

/// A listed bucket without a name cannot be addressed, so it is skipped.
fn to_bucket_info(bucket: &Bucket) -> Option<BucketInfo> {
    let Some(name) = bucket.name() else {
        warn!(created = ?bucket.creation_date(), "Skipping listed bucket without a name");
        return None;
    };
    Some(BucketInfo {
        name: name.to_owned(),
        created: bucket.creation_date().and_then(to_chrono),
    })
}

/// list all buckets owned by the caller, in the order the service returns them
pub async fn list_buckets(client: &Client) -> Result<Vec<BucketInfo>> {
    let output = client
        .list_buckets()
        .send()
        .await
        .map_err(|err| LifecycleError::ListBuckets {
            message: DisplayErrorContext(&err).to_string(),
        })?;

    let buckets: Vec<BucketInfo> = output.buckets().iter().filter_map(to_bucket_info).collect();
    info!(count = buckets.len(), "Listed buckets");

    Ok(buckets)
}

pub async fn delete_bucket(client: &Client, bucket_name: &str) -> Result<()> {
    client
        .delete_bucket()
        .bucket(bucket_name)
        .send()
        .await
        .map_err(|err| LifecycleError::DeleteBucket {
            bucket: bucket_name.to_owned(),
            message: DisplayErrorContext(&err).to_string(),
        })?;
    info!(bucket = bucket_name, "Deleted bucket");
    Ok(())
}
