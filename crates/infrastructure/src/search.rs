//! Filtering, sorting and paging shared by the in-memory gateways.

use std::cmp::Ordering;

use common::{Direction, Pagination, SearchQuery};
use domain::{AggregateRoot, CastMember, Category, Genre, Identifier};

/// An aggregate that can be listed through a [`SearchQuery`].
pub(crate) trait Searchable: AggregateRoot + Clone {
    /// `terms` is already lowercased and trimmed.
    fn matches(&self, terms: &str) -> bool;

    /// Compares by the given sort key; unknown keys sort by name.
    fn compare_by(&self, other: &Self, sort: &str) -> Ordering;
}

impl Searchable for Category {
    fn matches(&self, terms: &str) -> bool {
        self.name().to_lowercase().contains(terms)
            || self
                .description()
                .is_some_and(|d| d.to_lowercase().contains(terms))
    }

    fn compare_by(&self, other: &Self, sort: &str) -> Ordering {
        match sort {
            "created_at" | "createdAt" => self.created_at().cmp(&other.created_at()),
            "description" => self.description().cmp(&other.description()),
            _ => self.name().cmp(other.name()),
        }
    }
}

impl Searchable for Genre {
    fn matches(&self, terms: &str) -> bool {
        self.name().to_lowercase().contains(terms)
    }

    fn compare_by(&self, other: &Self, sort: &str) -> Ordering {
        match sort {
            "created_at" | "createdAt" => self.created_at().cmp(&other.created_at()),
            _ => self.name().cmp(other.name()),
        }
    }
}

impl Searchable for CastMember {
    fn matches(&self, terms: &str) -> bool {
        self.name().to_lowercase().contains(terms)
    }

    fn compare_by(&self, other: &Self, sort: &str) -> Ordering {
        match sort {
            "created_at" | "createdAt" => self.created_at().cmp(&other.created_at()),
            _ => self.name().cmp(other.name()),
        }
    }
}

/// Applies `query` to `items` and returns the requested page.
pub(crate) fn search<'a, T, I>(items: I, query: &SearchQuery) -> Pagination<T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let terms = query.terms.trim().to_lowercase();
    let mut matching: Vec<&T> = items
        .into_iter()
        .filter(|item| terms.is_empty() || item.matches(&terms))
        .collect();

    matching.sort_by(|a, b| {
        let ordering = a
            .compare_by(b, &query.sort)
            .then_with(|| a.id().value().cmp(b.id().value()));
        match query.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    let total = matching.len() as u64;
    let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
    let page = matching
        .into_iter()
        .skip(offset)
        .take(query.per_page as usize)
        .cloned()
        .collect();

    Pagination::new(query.page, query.per_page, total, page)
}
