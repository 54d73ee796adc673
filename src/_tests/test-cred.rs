use super::*;

fn cred(endpoint: Option<&str>) -> AwsCred {
	AwsCred {
		key_id: "AKIDTEST".to_string(),
		key_secret: "very-secret".to_string(),
		region: "eu-west-3".to_string(),
		endpoint: endpoint.map(String::from),
	}
}

#[tokio::test]
async fn test_load_sdk_config_region_endpoint_retry() {
	let config = load_sdk_config(cred(Some("http://127.0.0.1:4566"))).await;

	assert_eq!(config.region().map(|r| r.to_string()), Some("eu-west-3".to_string()));
	assert_eq!(config.endpoint_url(), Some("http://127.0.0.1:4566"));
	assert_eq!(config.retry_config().map(|r| r.max_attempts()), Some(MAX_ATTEMPTS));
}

#[tokio::test]
async fn test_load_sdk_config_static_credentials() {
	let config = load_sdk_config(cred(None)).await;

	assert!(config.credentials_provider().is_some());
	assert_eq!(config.region().map(|r| r.to_string()), Some("eu-west-3".to_string()));
}

#[test]
fn test_aws_cred_debug_hides_secret() {
	let txt = format!("{:?}", cred(None));

	assert!(txt.contains("AKIDTEST"));
	assert!(!txt.contains("very-secret"));
}
