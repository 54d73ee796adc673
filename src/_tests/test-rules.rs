use super::*;
use crate::_test_support::{strings, FakeEvents};
use std::collections::HashMap;

fn fake_events() -> FakeEvents {
	FakeEvents {
		rule_pages: vec![strings(&["app-a", "other", "app-b"]), strings(&["APP-c", "app-c"])],
		targets: HashMap::from([("app-a".to_string(), strings(&["t1", "t2"]))]),
		..Default::default()
	}
}

#[tokio::test]
async fn test_rules_list_matching_all_pages() -> Result<()> {
	let fake = fake_events();
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);

	let rules = cleaner.list_matching("app-").await?;

	assert_eq!(rules, strings(&["app-a", "app-b", "app-c"]));
	assert_eq!(calls.count("list_rules"), 2);
	Ok(())
}

#[tokio::test]
async fn test_rules_purge_removes_targets_before_delete() -> Result<()> {
	let fake = fake_events();
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);

	cleaner.purge(&"app-a".to_string()).await?;

	let remove_at = calls.position("remove_targets:app-a:t1,t2").ok_or(Error::Generic("no remove".into()))?;
	let delete_at = calls.position("delete_rule:app-a").ok_or(Error::Generic("no delete".into()))?;
	assert!(remove_at < delete_at, "targets must be removed first: {:?}", calls.all());
	assert_eq!(calls.count("remove_targets"), 1);
	Ok(())
}

#[tokio::test]
async fn test_rules_purge_without_targets_skips_remove() -> Result<()> {
	let fake = fake_events();
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);

	cleaner.purge(&"app-b".to_string()).await?;

	assert_eq!(calls.count("remove_targets"), 0);
	assert_eq!(calls.all(), strings(&["list_targets:app-b", "delete_rule:app-b"]));
	Ok(())
}

#[tokio::test]
async fn test_rules_purge_list_targets_error_skips_rule() {
	let mut fake = fake_events();
	fake.fail_list_targets.insert("app-a".to_string());
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);

	let res = cleaner.purge(&"app-a".to_string()).await;

	assert!(matches!(res, Err(Error::DependentClear { what: "targets", .. })));
	assert_eq!(calls.count("delete_rule"), 0);
}

#[tokio::test]
async fn test_rules_purge_refused_targets_skips_rule() {
	let mut fake = fake_events();
	fake.refuse_targets.insert("app-a".to_string());
	let calls = fake.calls.clone();
	let cleaner = RuleCleaner::new(fake);

	let res = cleaner.purge(&"app-a".to_string()).await;

	let err = res.expect_err("should fail");
	assert!(err.to_string().contains("rule app-a"), "{err}");
	assert!(err.to_string().contains("2 target(s) not removed"), "{err}");
	assert_eq!(calls.count("delete_rule"), 0);
}

#[tokio::test]
async fn test_rules_purge_delete_error() {
	let mut fake = fake_events();
	fake.fail_delete.insert("app-b".to_string());
	let cleaner = RuleCleaner::new(fake);

	let res = cleaner.purge(&"app-b".to_string()).await;

	assert!(matches!(res, Err(Error::DeleteFailed { resource, .. }) if resource == "rule app-b"));
}
