use crate::prelude::*;
use std::future::Future;

/// One page of a provider listing.
#[derive(Debug, Clone, Default)]
pub struct Page<T> {
	pub items: Vec<T>,
	pub next_token: Option<String>,
}

impl<T> Page<T> {
	pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
		Page { items, next_token }
	}
}

/// Walk every page of a listing, starting with no token, until the provider stops returning one.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
	F: FnMut(Option<String>) -> Fut,
	Fut: Future<Output = Result<Page<T>>>,
{
	let mut items = Vec::new();
	let mut token: Option<String> = None;

	loop {
		let page = fetch(token.take()).await?;
		items.extend(page.items);

		match page.next_token {
			Some(next) if !next.is_empty() => token = Some(next),
			_ => break,
		}
	}

	Ok(items)
}

/// Keep the items whose name starts with `prefix` (case sensitive), in order.
pub fn retain_prefixed<T>(items: Vec<T>, prefix: &str, name_of: impl Fn(&T) -> &str) -> Vec<T> {
	items.into_iter().filter(|item| name_of(item).starts_with(prefix)).collect()
}

/// Last segment of a `sep` separated identifier (topic ARN, queue URL).
pub fn last_segment(id: &str, sep: char) -> &str {
	id.rsplit(sep).next().unwrap_or(id)
}

#[cfg(test)]
#[path = "../_tests/test-page.rs"]
mod tests;
