//! Page request and page result contracts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Returns the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

/// A page request.
///
/// `page` is zero-based. An empty `terms` means no filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: Direction,
}

impl SearchQuery {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        }
    }

    /// Number of items to skip before the requested page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.per_page)
    }

    /// Returns true if the query carries a free-text filter.
    pub fn has_terms(&self) -> bool {
        !self.terms.trim().is_empty()
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: Direction::Asc,
        }
    }
}

/// One page of results.
///
/// `total` is the number of items matching the query across all pages,
/// not the length of `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Projects every item while keeping the paging metadata untouched.
    pub fn map<R, F>(self, f: F) -> Pagination<R>
    where
        F: FnMut(T) -> R,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_metadata_and_order() {
        let page = Pagination::new(2, 3, 11, vec![1, 2, 3]);

        let mapped = page.map(|n| format!("item-{n}"));

        assert_eq!(mapped.current_page, 2);
        assert_eq!(mapped.per_page, 3);
        assert_eq!(mapped.total, 11);
        assert_eq!(mapped.items, vec!["item-1", "item-2", "item-3"]);
    }

    #[test]
    fn map_of_empty_page_keeps_total() {
        let page: Pagination<i32> = Pagination::new(5, 10, 42, vec![]);

        let mapped = page.map(|n| n * 2);

        assert!(mapped.is_empty());
        assert_eq!(mapped.total, 42);
    }

    #[test]
    fn search_query_offset() {
        let query = SearchQuery::new(3, 25, "", "name", Direction::Asc);
        assert_eq!(query.offset(), 75);
    }

    #[test]
    fn search_query_defaults() {
        let query = SearchQuery::default();
        assert_eq!(query.page, 0);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.sort, "name");
        assert_eq!(query.direction, Direction::Asc);
        assert!(!query.has_terms());
    }

    #[test]
    fn blank_terms_are_not_a_filter() {
        let query = SearchQuery::new(0, 10, "   ", "name", Direction::Asc);
        assert!(!query.has_terms());
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("ASC".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Desc);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn pagination_serializes_snake_case() {
        let page = Pagination::new(0, 10, 1, vec!["a"]);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["current_page"], 0);
        assert_eq!(json["per_page"], 10);
        assert_eq!(json["total"], 1);
        assert_eq!(json["items"][0], "a");
    }
}
