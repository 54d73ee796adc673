use super::*;
use std::io::Cursor;

fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
	LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_confirm_yes_any_case() -> Result<()> {
	for answer in ["yes\n", "YES\n", "Yes\n", "yes\r\n", "yes"] {
		let mut p = prompter(answer);
		assert!(confirm(&mut p, false, "Boom.")?, "'{answer}' should confirm");
	}
	Ok(())
}

#[test]
fn test_confirm_anything_else_declines() -> Result<()> {
	for answer in ["no\n", "y\n", "yes please\n", "ye s\n", "\n", ""] {
		let mut p = prompter(answer);
		assert!(!confirm(&mut p, false, "Boom.")?, "'{answer}' should decline");
	}
	Ok(())
}

#[test]
fn test_confirm_force_skips_prompt() -> Result<()> {
	let mut p = prompter("no\n");
	assert!(confirm(&mut p, true, "Boom.")?);
	assert!(p.output.is_empty(), "nothing should be printed with force");
	Ok(())
}

#[test]
fn test_confirm_prints_warning() -> Result<()> {
	let mut p = prompter("no\n");
	confirm(&mut p, false, "This will delete things.")?;
	let out = p.output_text();
	assert!(out.contains("WARNING: This will delete things."));
	assert!(out.ends_with("(yes/no): "));
	Ok(())
}

#[test]
fn test_confirm_padded_yes_declines() -> Result<()> {
	for answer in [" yes\n", "yes \n", "  yes  \n", "\tYES\t\n", " yes"] {
		let mut p = prompter(answer);
		assert!(!confirm(&mut p, false, "Boom.")?, "{answer:?} should decline");
	}
	Ok(())
}

#[test]
fn test_prompt_strips_line_ending_only() -> Result<()> {
	let mut p = prompter(" yes \r\n");
	assert_eq!(p.prompt("? ")?, " yes ");
	Ok(())
}
