use crate::model::{normalize_query, SearchResult, Site};
use crate::search;

struct Memo {
    normalized_query: String,
    results: Vec<SearchResult>,
}

/// Live query state over an immutable site list.
///
/// Results are memoized against the normalized query and recomputed lazily
/// on the next read after the query changes, so repeated reads between
/// keystrokes cost nothing.
pub struct SearchSession<'a> {
    sites: &'a [Site],
    query: String,
    memo: Option<Memo>,
}

impl<'a> SearchSession<'a> {
    pub fn new(sites: &'a [Site]) -> Self {
        Self {
            sites,
            query: String::new(),
            memo: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn results(&mut self) -> &[SearchResult] {
        let normalized = normalize_query(&self.query);
        let stale = self
            .memo
            .as_ref()
            .map(|memo| memo.normalized_query != normalized)
            .unwrap_or(true);

        if stale {
            let results = search::rank(&self.query, self.sites);
            self.memo = Some(Memo {
                normalized_query: normalized,
                results,
            });
        }

        self.memo
            .as_ref()
            .map(|memo| memo.results.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_results(&mut self) -> bool {
        !self.query.is_empty() && !self.results().is_empty()
    }

    pub fn no_results(&mut self) -> bool {
        !self.query.is_empty() && self.results().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SearchSession;
    use crate::model::{I18nText, Site};

    fn site(name: &str) -> Site {
        Site {
            name: I18nText::new(name, name),
            url: format!("https://{}.example.com", name.to_lowercase()),
            description: I18nText::new("", ""),
            icon: String::new(),
            category: "tools".to_string(),
            tags: Vec::new(),
            featured: false,
        }
    }

    #[test]
    fn results_follow_query_changes() {
        let sites = vec![site("GitHub"), site("GitLab")];
        let mut session = SearchSession::new(&sites);

        assert!(session.results().is_empty());

        session.set_query("github");
        assert_eq!(session.results().len(), 1);
        assert!(session.has_results());

        session.set_query("git");
        assert_eq!(session.results().len(), 2);

        session.clear();
        assert!(session.results().is_empty());
        assert!(!session.no_results());
    }

    #[test]
    fn whitespace_variants_of_same_query_share_the_memo() {
        let sites = vec![site("GitHub")];
        let mut session = SearchSession::new(&sites);

        session.set_query("git");
        let first = session.results().to_vec();
        session.set_query("  git  ");
        assert_eq!(session.results(), first.as_slice());
    }

    #[test]
    fn no_results_requires_a_live_query() {
        let sites = vec![site("GitHub")];
        let mut session = SearchSession::new(&sites);

        session.set_query("zzz");
        assert!(session.no_results());
        assert!(!session.has_results());
    }
}
