use std::io::Write;
use tracing::{error, info};

use crate::error::Result;
use crate::store::{BucketInfo, BucketStore};


/// What a completed run observed
#[derive(Debug, Clone, Default)]
pub struct LifecycleReport {
    /// the buckets returned by the list step, while `bucket` still existed
    pub listed: Vec<BucketInfo>,
}

/// Create `bucket`, list all buckets, then delete `bucket`, writing one line per step to `out`.
///
/// Steps run strictly in order and the first failure is returned as is: nothing after it
/// runs, and a bucket created before a failed list or delete stays behind.
/// Create and delete lines leave the bucket name out, so in the output it only shows up
/// in the listing.
pub async fn run_lifecycle<S, W>(store: &S, bucket: &str, out: &mut W) -> Result<LifecycleReport>
where
    S: BucketStore + ?Sized,
    W: Write,
{
    info!(bucket, "Creating bucket");
    let created = store
        .create_bucket(bucket)
        .await
        .inspect_err(|err| error!(%err, "Create step failed"))?;
    info!(location = created.location.as_deref().unwrap_or("-"), "Bucket created");
    writeln!(out, "Create bucket: ok")?;

    info!("Listing buckets");
    let listed = store
        .list_buckets()
        .await
        .inspect_err(|err| error!(%err, "List step failed"))?;
    writeln!(out, "Buckets ({}):", listed.len())?;
    for info in &listed {
        writeln!(out, "{}", info.name)?;
    }

    info!(bucket, "Deleting bucket");
    store
        .delete_bucket(bucket)
        .await
        .inspect_err(|err| error!(%err, "Delete step failed"))?;
    writeln!(out, "Delete bucket: ok")?;

    Ok(LifecycleReport { listed })
}
