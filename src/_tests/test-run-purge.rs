use super::*;
use crate::_test_support::{prompter, strings, FakeBuckets, FakeEvents, FakeQueues};
use std::collections::HashMap;

#[tokio::test]
async fn test_run_purge_buckets_force_scenario() -> Result<()> {
	let fake = FakeBuckets {
		bucket_pages: vec![strings(&["test-a", "test-b", "prod-x"])],
		version_pages: HashMap::from([(
			"test-a".to_string(),
			vec![(vec![ObjectRef::new("k1", Some("v1".to_string()))], vec![])],
		)]),
		..Default::default()
	};
	let calls = fake.calls.clone();
	let cleaner = BucketCleaner::new(fake);
	// force: the prompt answer is never read
	let mut prompter = prompter("no\n");

	let report = run_purge(&cleaner, "test-", true, &mut prompter).await?;

	assert_eq!(report.status, RunStatus::Completed);
	assert_eq!(report.matched, strings(&["test-a", "test-b"]));
	assert_eq!(report.deleted_count(), 2);
	assert_eq!(calls.count("delete_bucket:test-a"), 1);
	assert_eq!(calls.count("delete_bucket:test-b"), 1);
	assert!(!calls.all().iter().any(|c| c.contains("prod-x")), "prod-x touched: {:?}", calls.all());
	Ok(())
}

#[tokio::test]
async fn test_run_purge_no_match_only_lists() -> Result<()> {
	let fake = FakeEvents {
		rule_pages: vec![strings(&["app-a"]), strings(&["other"])],
		..Default::default()
	};
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);
	let mut prompter = prompter("yes\n");

	let report = run_purge(&cleaner, "job-", false, &mut prompter).await?;

	assert_eq!(report.status, RunStatus::NoMatch);
	assert_eq!(calls.all(), strings(&["list_rules", "list_rules"]));
	assert!(prompter.output_text().is_empty(), "should not prompt");
	Ok(())
}

#[tokio::test]
async fn test_run_purge_declined_no_delete_calls() -> Result<()> {
	for answer in ["no\n", "y\n", "\n", ""] {
		let fake = FakeEvents {
			rule_pages: vec![strings(&["job-a", "job-b"])],
			targets: HashMap::from([("job-a".to_string(), strings(&["t1"]))]),
			..Default::default()
		};
		let calls = fake.calls.clone();
		let cleaner = RuleCleaner::new(fake);
		let mut prompter = prompter(answer);

		let report = run_purge(&cleaner, "job-", false, &mut prompter).await?;

		assert_eq!(report.status, RunStatus::Cancelled);
		assert!(report.outcomes.is_empty());
		assert_eq!(calls.all(), strings(&["list_rules"]), "answer '{answer}'");
		assert!(prompter.output_text().contains("remove all their targets"));
	}
	Ok(())
}

#[tokio::test]
async fn test_run_purge_confirmed_yes() -> Result<()> {
	let fake = FakeEvents {
		rule_pages: vec![strings(&["job-a"])],
		..Default::default()
	};
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);
	let mut prompter = prompter("YES\n");

	let report = run_purge(&cleaner, "job-", false, &mut prompter).await?;

	assert_eq!(report.status, RunStatus::Completed);
	assert_eq!(calls.count("delete_rule:job-a"), 1);
	Ok(())
}

#[tokio::test]
async fn test_run_purge_one_queue_fails_other_deleted() -> Result<()> {
	let url_a = "https://sqs.us-east-1.amazonaws.com/123456789012/tmp-a".to_string();
	let url_b = "https://sqs.us-east-1.amazonaws.com/123456789012/tmp-b".to_string();
	let mut fake = FakeQueues {
		queue_urls: vec![url_a.clone(), url_b.clone()],
		..Default::default()
	};
	fake.fail_delete.insert(url_a.clone());
	let calls = fake.calls.clone();
	let cleaner = QueueCleaner::new(fake);
	let mut prompter = prompter("");

	let report = run_purge(&cleaner, "tmp-", true, &mut prompter).await?;

	assert_eq!(report.status, RunStatus::Completed);
	assert_eq!(report.deleted_count(), 1);
	assert_eq!(report.failed_count(), 1);
	let failed = &report.outcomes[0];
	assert_eq!(failed.resource, url_a);
	assert!(failed.error.as_deref().unwrap_or_default().contains("delete queue denied"));
	assert!(report.outcomes[1].is_success());
	assert_eq!(calls.count(&f!("delete_queue:{url_b}")), 1);
	Ok(())
}

#[tokio::test]
async fn test_run_purge_list_error_is_fatal() {
	let fake = FakeEvents {
		fail_list_rules: true,
		..Default::default()
	};
	let cleaner = RuleCleaner::new(fake);
	let mut prompter = prompter("yes\n");

	let res = run_purge(&cleaner, "job-", true, &mut prompter).await;

	match res {
		Err(err @ Error::ListFailed { kind: ResourceKind::Rule, .. }) => {
			assert!(err.to_string().starts_with("Error listing rules:"), "{err}")
		}
		other => panic!("expected ListFailed, got {other:?}"),
	}
}

#[tokio::test]
async fn test_run_purge_failed_item_does_not_stop_run() -> Result<()> {
	let mut fake = FakeEvents {
		rule_pages: vec![strings(&["job-a", "job-b", "job-c"])],
		..Default::default()
	};
	fake.fail_list_targets.insert("job-a".to_string());
	fake.fail_delete.insert("job-b".to_string());
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);
	let mut prompter = prompter("yes\n");

	let report = run_purge(&cleaner, "job-", false, &mut prompter).await?;

	assert_eq!(report.failed_count(), 2);
	assert_eq!(report.deleted_count(), 1);
	assert_eq!(calls.count("delete_rule:job-a"), 0);
	assert_eq!(calls.count("delete_rule:job-c"), 1);
	Ok(())
}
