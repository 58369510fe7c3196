//! Read-only projections of the suggestion feed.
//!
//! Pure derivations over the board's collection: same inputs, same
//! ordered output. No state, no invariants beyond determinism.

use sb_core::{Category, Suggestion, SuggestionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Newest `createdAt` first.
    #[default]
    Newest,
    /// Most likes first, newest breaking ties.
    Popular,
}

/// Filter and ordering for one render of the feed.
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub category: Option<Category>,
    pub kind: Option<SuggestionKind>,
    /// Case-insensitive substring match on title and problem.
    pub search: Option<String>,
    pub sort: SortBy,
}

impl FeedQuery {
    pub fn apply<'a>(&self, suggestions: &'a [Suggestion]) -> Vec<&'a Suggestion> {
        let needle = self.search.as_deref().map(str::to_lowercase);

        let mut rows: Vec<&Suggestion> = suggestions
            .iter()
            .filter(|s| self.category.map_or(true, |c| s.category == c))
            .filter(|s| self.kind.map_or(true, |k| s.kind == k))
            .filter(|s| {
                needle.as_deref().map_or(true, |n| {
                    s.title.to_lowercase().contains(n) || s.problem.to_lowercase().contains(n)
                })
            })
            .collect();

        match self.sort {
            SortBy::Newest => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortBy::Popular => {
                rows.sort_by(|a, b| b.likes.cmp(&a.likes).then(b.created_at.cmp(&a.created_at)))
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::suggestion;

    fn feed() -> Vec<Suggestion> {
        let mut a = suggestion("a", 1);
        a.created_at = 100;
        a.category = Category::Facilities;
        a.title = "Longer Lab Hours".to_string();

        let mut b = suggestion("b", 5);
        b.created_at = 200;
        b.kind = SuggestionKind::Initiative;

        let mut c = suggestion("c", 5);
        c.created_at = 300;
        c.problem = "lab equipment is aging".to_string();

        vec![a, b, c]
    }

    #[test]
    fn default_query_sorts_by_recency() {
        let rows = feed();
        let out = FeedQuery::default().apply(&rows);
        let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn popular_sort_breaks_ties_by_recency() {
        let rows = feed();
        let query = FeedQuery {
            sort: SortBy::Popular,
            ..FeedQuery::default()
        };
        let ids: Vec<&str> = query.apply(&rows).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn filters_compose() {
        let rows = feed();
        let query = FeedQuery {
            category: Some(Category::Facilities),
            ..FeedQuery::default()
        };
        let ids: Vec<&str> = query.apply(&rows).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a"]);

        let query = FeedQuery {
            kind: Some(SuggestionKind::Initiative),
            ..FeedQuery::default()
        };
        let ids: Vec<&str> = query.apply(&rows).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b"]);
    }

    #[test]
    fn search_matches_title_and_problem_case_insensitively() {
        let rows = feed();
        let query = FeedQuery {
            search: Some("LAB".to_string()),
            ..FeedQuery::default()
        };
        let ids: Vec<&str> = query.apply(&rows).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
    }

    #[test]
    fn projection_is_deterministic() {
        let rows = feed();
        let query = FeedQuery {
            sort: SortBy::Popular,
            search: Some("title".to_string()),
            ..FeedQuery::default()
        };
        let first: Vec<&str> = query.apply(&rows).iter().map(|s| s.id.as_str()).collect();
        let second: Vec<&str> = query.apply(&rows).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(first, second);
    }
}
