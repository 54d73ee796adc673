use super::*;
use crate::_test_support::FakeScheduler;

#[test]
fn test_schedule_ref_missing_group_is_default() {
	let schedule = ScheduleRef::new("job-a", None);
	assert_eq!(schedule.group, "default");

	let schedule = ScheduleRef::new("job-a", Some("nightly".to_string()));
	assert_eq!(schedule.group, "nightly");
}

#[tokio::test]
async fn test_schedules_purge_uses_name_and_group() -> Result<()> {
	let fake = FakeScheduler {
		schedule_pages: vec![
			vec![ScheduleRef::new("job-a", None), ScheduleRef::new("other", None)],
			vec![ScheduleRef::new("job-b", Some("nightly".to_string()))],
		],
		..Default::default()
	};
	let calls = fake.calls.clone();
	let cleaner = ScheduleCleaner::new(fake);

	let schedules = cleaner.list_matching("job-").await?;
	assert_eq!(schedules.len(), 2);
	assert_eq!(cleaner.label(&schedules[1]), "job-b (Group: nightly)");

	for schedule in schedules.iter() {
		cleaner.purge(schedule).await?;
	}

	assert_eq!(calls.count("delete_schedule:job-a:default"), 1);
	assert_eq!(calls.count("delete_schedule:job-b:nightly"), 1);
	assert_eq!(calls.count("delete_schedule:other"), 0);
	Ok(())
}

#[tokio::test]
async fn test_schedules_purge_error_names_schedule() {
	let mut fake = FakeScheduler::default();
	fake.fail_delete.insert("job-a".to_string());
	let cleaner = ScheduleCleaner::new(fake);

	let err = cleaner.purge(&ScheduleRef::new("job-a", None)).await.expect_err("should fail");

	assert!(err.to_string().starts_with("Error deleting schedule job-a:"), "{err}");
}
