use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_s3::config::Region;
use tracing::{error, info};

use crate::error::{LifecycleError, Result};


/// Region and credentials context from which service clients are built.
///
/// The credentials provider is always passed in by the caller, so a session never consults
/// process-wide state on its own. Use `from_default_chain` to get the usual
/// environment / profile / instance-role lookup.
#[derive(Debug, Clone)]
pub struct Session {
    region: Region,
    credentials: SharedCredentialsProvider,
    config: SdkConfig,
}

impl Session {

    /// Build a session for `region` using the given credentials provider.
    pub async fn new(region: &str, credentials: SharedCredentialsProvider) -> Result<Self> {
        if region.trim().is_empty() {
            error!("Refusing to create a session without a region");
            return Err(LifecycleError::Session("region must not be empty".to_owned()));
        }
        let region = Region::new(region.to_owned());

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region.clone())
            .credentials_provider(credentials.clone())
            .load()
            .await;
        info!(region = %region, "Session created");

        Ok(Self { region, credentials, config })
    }

    /// Build a session whose credentials come from the SDK's default provider chain.
    pub async fn from_default_chain(region: &str) -> Result<Self> {
        let chain = DefaultCredentialsChain::builder()
            .region(Region::new(region.to_owned()))
            .build()
            .await;
        Self::new(region, SharedCredentialsProvider::new(chain)).await
    }

    pub fn region(&self) -> &str {
        self.region.as_ref()
    }

    /// the shared SDK configuration that clients are constructed from
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Resolve the credentials once and return the access key id.
    pub async fn access_key_id(&self) -> Result<String> {
        let creds = self.credentials
            .provide_credentials()
            .await
            .map_err(|err| LifecycleError::Credentials(err.to_string()))?;
        Ok(creds.access_key_id().to_owned())
    }
}
