use super::*;
use crate::_test_support::{strings, FakeTopics};
use std::collections::HashMap;

const ARN_A: &str = "arn:aws:sns:us-east-1:123456789012:alerts-a";
const ARN_B: &str = "arn:aws:sns:us-east-1:123456789012:alerts-b";
const ARN_OTHER: &str = "arn:aws:sns:us-east-1:123456789012:billing-alerts";

fn fake_topics() -> FakeTopics {
	FakeTopics {
		topic_pages: vec![strings(&[ARN_A, ARN_OTHER]), strings(&[ARN_B])],
		subscription_pages: HashMap::from([(ARN_A.to_string(), vec![vec![3], vec![2]])]),
		..Default::default()
	}
}

#[tokio::test]
async fn test_topics_match_on_name_not_arn() -> Result<()> {
	let cleaner = TopicCleaner::new(fake_topics());

	let topics = cleaner.list_matching("alerts-").await?;

	assert_eq!(topics, strings(&[ARN_A, ARN_B]));
	// the arn prefix itself never matches
	assert!(cleaner.list_matching("arn:").await?.is_empty());
	Ok(())
}

#[tokio::test]
async fn test_topics_subscription_count_all_pages() -> Result<()> {
	let fake = fake_topics();
	let calls = fake.calls.clone();
	let cleaner = TopicCleaner::new(fake);

	assert_eq!(cleaner.subscription_count(ARN_A).await?, 5);
	assert_eq!(calls.count("count_subscriptions"), 2);
	Ok(())
}

#[tokio::test]
async fn test_topics_deleted_even_if_subscriptions_fail() -> Result<()> {
	let mut fake = fake_topics();
	fake.fail_subscriptions.insert(ARN_A.to_string());
	let calls = fake.calls.clone();
	let cleaner = TopicCleaner::new(fake);

	cleaner.purge(&ARN_A.to_string()).await?;

	assert_eq!(calls.count(&f!("delete_topic:{ARN_A}")), 1);
	Ok(())
}

#[tokio::test]
async fn test_topics_never_delete_subscriptions() -> Result<()> {
	let fake = fake_topics();
	let calls = fake.calls.clone();
	let cleaner = TopicCleaner::new(fake);

	cleaner.purge(&ARN_A.to_string()).await?;

	assert_eq!(
		calls.all(),
		vec![
			f!("count_subscriptions:{ARN_A}"),
			f!("count_subscriptions:{ARN_A}"),
			f!("delete_topic:{ARN_A}"),
		]
	);
	Ok(())
}
