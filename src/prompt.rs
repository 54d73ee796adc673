use crate::prelude::*;
use std::io::{self, BufRead, Write};

/// Line based question/answer with the operator.
pub trait Prompter {
	/// Print `msg` and return the answer line, without its line ending. End of input returns an empty string.
	fn prompt(&mut self, msg: &str) -> Result<String>;
}

pub struct LinePrompter<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
	pub fn new(input: R, output: W) -> Self {
		LinePrompter { input, output }
	}
}

#[cfg(test)]
impl<R, W: AsRef<[u8]>> LinePrompter<R, W> {
	/// What was printed to the operator so far.
	pub fn output_text(&self) -> String {
		String::from_utf8_lossy(self.output.as_ref()).to_string()
	}
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
	pub fn stdio() -> Self {
		LinePrompter::new(io::stdin().lock(), io::stdout())
	}
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
	fn prompt(&mut self, msg: &str) -> Result<String> {
		write!(self.output, "{msg}")?;
		self.output.flush()?;

		let mut buff = String::new();
		self.input.read_line(&mut buff)?;

		Ok(buff.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
	}
}

/// Returns true when the deletion can go ahead.
/// `force` skips the question, otherwise only an exact "yes" answer (any case) confirms.
pub fn confirm(prompter: &mut impl Prompter, force: bool, warning: &str) -> Result<bool> {
	if force {
		return Ok(true);
	}

	let answer = prompter.prompt(&f!("\nWARNING: {warning}\nAre you sure you want to proceed? (yes/no): "))?;

	Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
	answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
#[path = "_tests/test-prompt.rs"]
mod tests;
