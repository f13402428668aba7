//! Query filtering for the option list.
//!
//! The query is matched against each option's `value`, never its display
//! name. A query is first tried as a case-insensitive regular expression; when
//! it does not parse, it is matched as a plain case-insensitive substring.

use regex::{Regex, RegexBuilder};

use crate::catalog::{Catalog, OptionItem};

/// How a [`QueryMatcher`] interprets its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
	/// Empty query, every option matches.
	All,
	/// The query compiled as a regular expression.
	Pattern,
	/// The query failed to compile and is matched literally.
	Literal,
}

/// Compiled form of a user query.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
	inner: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
	All,
	Pattern(Regex),
	Literal(String),
}

impl QueryMatcher {
	#[must_use]
	pub fn new(query: &str) -> Self {
		if query.is_empty() {
			return Self {
				inner: Matcher::All,
			};
		}

		let inner = match RegexBuilder::new(query).case_insensitive(true).build() {
			Ok(regex) => Matcher::Pattern(regex),
			Err(err) => {
				tracing::debug!(query, %err, "query is not a valid pattern, matching literally");
				Matcher::Literal(query.to_lowercase())
			}
		};
		Self { inner }
	}

	#[must_use]
	pub fn mode(&self) -> MatchMode {
		match self.inner {
			Matcher::All => MatchMode::All,
			Matcher::Pattern(_) => MatchMode::Pattern,
			Matcher::Literal(_) => MatchMode::Literal,
		}
	}

	#[must_use]
	pub fn is_match(&self, option: &OptionItem) -> bool {
		match &self.inner {
			Matcher::All => true,
			Matcher::Pattern(regex) => regex.is_match(&option.value),
			Matcher::Literal(needle) => option.value.to_lowercase().contains(needle.as_str()),
		}
	}
}

/// Catalog positions visible under the current query, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
	indices: Vec<usize>,
}

impl FilteredView {
	/// View containing every option of `catalog`.
	#[must_use]
	pub fn full(catalog: &Catalog) -> Self {
		Self {
			indices: (0..catalog.len()).collect(),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// Catalog positions backing each visible row.
	#[must_use]
	pub fn indices(&self) -> &[usize] {
		&self.indices
	}

	/// Resolve the option shown at `row`.
	#[must_use]
	pub fn get<'c>(&self, catalog: &'c Catalog, row: usize) -> Option<&'c OptionItem> {
		let index = *self.indices.get(row)?;
		catalog.get_index(index)
	}

	/// Iterate the visible options in row order.
	pub fn options<'a, 'c: 'a>(
		&'a self,
		catalog: &'c Catalog,
	) -> impl Iterator<Item = &'c OptionItem> + 'a {
		self.indices
			.iter()
			.filter_map(move |&index| catalog.get_index(index))
	}
}

/// Derive the visible subset of `catalog` for `query`.
#[must_use]
pub fn apply_query(catalog: &Catalog, query: &str) -> FilteredView {
	let matcher = QueryMatcher::new(query);
	if matcher.mode() == MatchMode::All {
		return FilteredView::full(catalog);
	}

	let indices = catalog
		.iter()
		.enumerate()
		.filter(|(_, option)| matcher.is_match(option))
		.map(|(index, _)| index)
		.collect();
	FilteredView { indices }
}
