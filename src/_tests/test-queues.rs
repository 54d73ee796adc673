use super::*;
use crate::_test_support::{strings, FakeQueues};

const URL_BASE: &str = "https://sqs.us-east-1.amazonaws.com/123456789012";

fn url(name: &str) -> String {
	f!("{URL_BASE}/{name}")
}

#[tokio::test]
async fn test_queues_list_matching_pages_and_case() -> Result<()> {
	let fake = FakeQueues {
		queue_urls: vec![url("work-a"), url("Work-b"), url("work-c"), url("other"), url("work-d")],
		page_size: 2,
		..Default::default()
	};
	let calls = fake.calls.clone();
	let cleaner = QueueCleaner::new(fake);

	let queues = cleaner.list_matching("work-").await?;

	// the fake server filter is case insensitive, the client side one is not
	assert_eq!(queues, vec![url("work-a"), url("work-c"), url("work-d")]);
	assert_eq!(calls.count("list_queues:work-"), 2);
	Ok(())
}

#[tokio::test]
async fn test_queues_purge_error_keeps_url() {
	let mut fake = FakeQueues::default();
	fake.fail_delete.insert(url("work-a"));
	let cleaner = QueueCleaner::new(fake);

	let err = cleaner.purge(&url("work-a")).await.expect_err("should fail");

	assert!(err.to_string().contains(&url("work-a")), "{err}");
	assert!(err.to_string().contains("delete queue denied"), "{err}");
}

#[tokio::test]
async fn test_queues_empty_listing() -> Result<()> {
	let cleaner = QueueCleaner::new(FakeQueues {
		queue_urls: strings(&[]),
		..Default::default()
	});

	assert!(cleaner.list_matching("work-").await?.is_empty());
	Ok(())
}
