use super::*;
use aws_sdk_eventbridge::types::Rule;

#[test]
fn test_rule_page_names_and_token() -> Result<()> {
	let resp = ListRulesOutput::builder()
		.rules(Rule::builder().name("job-a").build())
		.rules(Rule::builder().name("job-b").build())
		.next_token("tok-1")
		.build();

	let page = to_rule_page(resp)?;

	assert_eq!(page.items, vec!["job-a".to_string(), "job-b".to_string()]);
	assert_eq!(page.next_token.as_deref(), Some("tok-1"));
	Ok(())
}

#[test]
fn test_rule_page_missing_name_fails() {
	let resp = ListRulesOutput::builder()
		.rules(Rule::builder().name("job-a").build())
		.rules(Rule::builder().arn("arn:aws:events:eu-west-3:123:rule/unnamed").build())
		.build();

	let res = to_rule_page(resp);

	assert!(matches!(res, Err(Error::Parse { what: "rule name" })));
}
