#![allow(unused)]

// --- Re-exports
pub use exec::{exec_purge, TEST_CRED_ARGS};

// --- Imports
use std::str::Lines;

// --- Sub-Modules
mod exec;

// region:    --- Consts
/// Nothing listens there, so every provider call fails fast.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";

pub const SUB_COMMANDS: [&str; 5] = ["rules", "buckets", "schedules", "topics", "queues"];
// endregion: --- Consts

// region:    --- String Utils
// Note: Personal best practice, "x" prefix to note that this is just private crate interface.

pub trait XString {
	fn x_lines(&self) -> Lines;
	fn x_has_line(&self, line: &str) -> bool;
}

impl XString for str {
	/// Return the str::Lines but for the trimmed text (so no starting or ending empty lines)
	fn x_lines(&self) -> Lines {
		self.trim().lines()
	}
	fn x_has_line(&self, line: &str) -> bool {
		self.x_lines().any(|l| l.trim() == line)
	}
}

impl XString for String {
	fn x_lines(&self) -> Lines {
		str::x_lines(self)
	}

	fn x_has_line(&self, line: &str) -> bool {
		str::x_has_line(self, line)
	}
}
// endregion: --- String Utils
