use crate::consts::MAX_ATTEMPTS;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;

/// Static credentials and location for one run.
#[derive(Clone)]
pub struct AwsCred {
	pub key_id: String,
	pub key_secret: String,
	pub region: String,
	pub endpoint: Option<String>,
}

// Hand written so the secret never lands in logs.
impl std::fmt::Debug for AwsCred {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AwsCred")
			.field("key_id", &self.key_id)
			.field("region", &self.region)
			.field("endpoint", &self.endpoint)
			.finish_non_exhaustive()
	}
}

/// Build the shared SdkConfig every service client is created from.
/// Throttled or transient failures are retried by the SDK standard strategy (exponential backoff).
pub async fn load_sdk_config(aws_cred: AwsCred) -> SdkConfig {
	let AwsCred {
		key_id,
		key_secret,
		region,
		endpoint,
	} = aws_cred;

	let cred = Credentials::new(key_id, key_secret, None, None, "loaded-from-args-or-env");

	let mut loader = aws_config::defaults(BehaviorVersion::latest())
		.credentials_provider(cred)
		.region(Region::new(region))
		.retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS));

	if let Some(endpoint) = endpoint {
		loader = loader.endpoint_url(endpoint);
	}

	loader.load().await
}

#[cfg(test)]
#[path = "../_tests/test-cred.rs"]
mod tests;
