use super::*;

#[tokio::test]
async fn test_collect_pages_walks_all_pages_in_order() -> Result<()> {
	let pages = vec![
		Page::new(vec!["a", "b"], Some("t1".to_string())),
		Page::new(vec![], Some("t2".to_string())),
		Page::new(vec!["c"], None),
	];
	let mut seen_tokens = Vec::new();

	let items = collect_pages(|token| {
		seen_tokens.push(token.clone());
		let idx = seen_tokens.len() - 1;
		let page = pages[idx].clone();
		async move { Ok(page) }
	})
	.await?;

	assert_eq!(items, vec!["a", "b", "c"]);
	assert_eq!(seen_tokens, vec![None, Some("t1".to_string()), Some("t2".to_string())]);
	Ok(())
}

#[tokio::test]
async fn test_collect_pages_stops_on_empty_token() -> Result<()> {
	let mut calls = 0;
	let items = collect_pages(|_| {
		calls += 1;
		async { Ok(Page::new(vec![1], Some(String::new()))) }
	})
	.await?;

	assert_eq!(items, vec![1]);
	assert_eq!(calls, 1);
	Ok(())
}

#[tokio::test]
async fn test_collect_pages_propagates_error() {
	let res: Result<Vec<u8>> = collect_pages(|_| async { Err(Error::Generic("boom".to_string())) }).await;
	assert!(matches!(res, Err(Error::Generic(msg)) if msg == "boom"));
}

#[test]
fn test_retain_prefixed_is_case_sensitive_and_ordered() {
	let names = vec!["test-b", "prod-x", "test-a", "Test-c", "test"];
	let kept = retain_prefixed(names, "test-", |n| n);
	assert_eq!(kept, vec!["test-b", "test-a"]);
}

#[test]
fn test_retain_prefixed_empty_prefix_keeps_all() {
	let kept = retain_prefixed(vec!["a", "b"], "", |n| n);
	assert_eq!(kept, vec!["a", "b"]);
}

#[test]
fn test_last_segment() {
	assert_eq!(last_segment("arn:aws:sns:us-east-1:123456789012:test-topic", ':'), "test-topic");
	assert_eq!(
		last_segment("https://sqs.us-east-1.amazonaws.com/123456789012/test-queue", '/'),
		"test-queue"
	);
	assert_eq!(last_segment("plain", ':'), "plain");
}
