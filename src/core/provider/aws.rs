//! AWS identity provider.
//!
//! Validates credentials with STS `GetCallerIdentity` and reads user tags
//! with IAM `ListUserTags`. Enable with `--features aws` (on by default).
//!
//! The STS client is built per call from the caller's credentials and
//! dropped when the call returns. The IAM client uses the process's own
//! credentials from the default provider chain (environment, profile,
//! instance or Lambda role), which need `iam:ListUserTags`.

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_sts::config::Credentials;
use aws_sdk_sts::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::{CredentialVerifier, TagDirectory};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::types::{CredentialPair, IdentityDescriptor, Tag, TagSet};
use crate::error::{ProviderError, Result};

/// STS + IAM backed provider.
pub struct AwsProvider {
    runtime: Runtime,
    sdk_config: SdkConfig,
    region: Region,
    iam: aws_sdk_iam::Client,
}

impl AwsProvider {
    /// Load the AWS configuration and build the shared IAM client.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Fault` if the async runtime cannot be created.
    pub fn connect(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ProviderError::Fault(format!("failed to create runtime: {}", e)))?;

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &config.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(timeout) = config.timeout {
                loader = loader.timeout_config(
                    TimeoutConfig::builder().operation_timeout(timeout).build(),
                );
            }
            loader.load().await
        });

        let region = sdk_config
            .region()
            .cloned()
            .unwrap_or_else(|| Region::new(constants::DEFAULT_REGION));
        debug!(region = %region, "aws provider configured");

        let iam_config = aws_sdk_iam::config::Builder::from(&sdk_config)
            .region(region.clone())
            .build();

        Ok(Self {
            runtime,
            iam: aws_sdk_iam::Client::from_conf(iam_config),
            sdk_config,
            region,
        })
    }

    /// STS client scoped to one credential pair.
    fn sts_client(&self, credentials: &CredentialPair) -> aws_sdk_sts::Client {
        let static_credentials = Credentials::new(
            credentials.access_key(),
            credentials.secret_key(),
            None,
            None,
            constants::CREDENTIALS_PROVIDER_NAME,
        );
        let config = aws_sdk_sts::config::Builder::from(&self.sdk_config)
            .region(self.region.clone())
            .credentials_provider(static_credentials)
            .build();
        aws_sdk_sts::Client::from_conf(config)
    }
}

impl CredentialVerifier for AwsProvider {
    fn caller_identity(
        &self,
        credentials: &CredentialPair,
    ) -> std::result::Result<IdentityDescriptor, ProviderError> {
        trace!(access_key = %credentials.masked_access_key(), "calling sts:GetCallerIdentity");

        let client = self.sts_client(credentials);
        self.runtime.block_on(async move {
            let output = client
                .get_caller_identity()
                .send()
                .await
                .map_err(classify)?;

            let field = |value: Option<&str>, name: &str| {
                value.map(str::to_string).ok_or_else(|| {
                    ProviderError::Fault(format!("GetCallerIdentity response missing {}", name))
                })
            };

            Ok(IdentityDescriptor {
                arn: field(output.arn(), "Arn")?,
                account: field(output.account(), "Account")?,
                user_id: field(output.user_id(), "UserId")?,
            })
        })
    }
}

impl TagDirectory for AwsProvider {
    fn user_tags(&self, username: &str) -> std::result::Result<TagSet, ProviderError> {
        trace!(username = %username, "calling iam:ListUserTags");

        self.runtime.block_on(async {
            let mut tags = TagSet::default();
            let mut marker: Option<String> = None;
            let mut pages = 0usize;

            loop {
                let page = self
                    .iam
                    .list_user_tags()
                    .user_name(username)
                    .set_marker(marker.take())
                    .send()
                    .await
                    .map_err(classify)?;
                pages += 1;

                tags.extend(page.tags().iter().map(|t| Tag::new(t.key(), t.value())));

                match (page.is_truncated(), page.marker()) {
                    (true, Some(next)) => marker = Some(next.to_string()),
                    _ => break,
                }
            }

            trace!(username = %username, tags = tags.len(), pages, "listed user tags");
            Ok(tags)
        })
    }
}

/// Service errors are rejections; everything else never got an answer.
fn classify<E, R>(err: SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match &err {
        SdkError::ServiceError(service) => {
            let inner = service.err();
            ProviderError::rejected(
                inner.code().unwrap_or("Unknown"),
                inner.message().unwrap_or("no message returned"),
            )
        }
        _ => ProviderError::Fault(DisplayErrorContext(&err).to_string()),
    }
}
