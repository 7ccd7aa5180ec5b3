use crate::model::{normalize_query, MatchType, SearchResult, Site};

/// Hard cap on ranked results regardless of the caller's limit.
pub const RESULT_LIMIT: usize = 20;

const NAME_CONTAINS_SCORE: i64 = 100;
const NAME_PREFIX_SCORE: i64 = 150;
const TAG_SCORE: i64 = 75;
const TAG_BOOST: i64 = 25;
const DESCRIPTION_SCORE: i64 = 50;
const URL_SCORE: i64 = 30;

/// Ranks the catalog against a free-text query.
///
/// Fields are checked in a fixed priority order (name, description, tag,
/// url) so every result carries exactly one primary classification. A tag
/// hit on a site that already matched by name or description boosts the
/// score without relabeling the result. Equal scores keep catalog order.
pub fn rank(query: &str, sites: &[Site]) -> Vec<SearchResult> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, SearchResult)> = sites
        .iter()
        .enumerate()
        .filter_map(|(index, site)| score_site(site, &query).map(|result| (index, result)))
        .collect();

    scored.sort_by(|a, b| b.1.score.cmp(&a.1.score).then_with(|| a.0.cmp(&b.0)));

    scored
        .into_iter()
        .take(RESULT_LIMIT)
        .map(|(_, result)| result)
        .collect()
}

fn score_site(site: &Site, query: &str) -> Option<SearchResult> {
    let mut score = 0;
    let mut match_type = MatchType::Name;

    let name_zh = site.name.zh_cn.to_lowercase();
    let name_en = site.name.en_us.to_lowercase();
    if name_zh.contains(query) || name_en.contains(query) {
        score = NAME_CONTAINS_SCORE;
        if name_zh.starts_with(query) || name_en.starts_with(query) {
            score = NAME_PREFIX_SCORE;
        }
        match_type = MatchType::Name;
    }

    if score == 0 {
        let desc_zh = site.description.zh_cn.to_lowercase();
        let desc_en = site.description.en_us.to_lowercase();
        if desc_zh.contains(query) || desc_en.contains(query) {
            score = DESCRIPTION_SCORE;
            match_type = MatchType::Description;
        }
    }

    if site.tags.iter().any(|tag| tag.to_lowercase().contains(query)) {
        if score == 0 {
            score = TAG_SCORE;
            match_type = MatchType::Tag;
        } else {
            score += TAG_BOOST;
        }
    }

    if score == 0 && site.url.to_lowercase().contains(query) {
        score = URL_SCORE;
        match_type = MatchType::Url;
    }

    if score == 0 {
        return None;
    }

    Some(SearchResult {
        site: site.clone(),
        match_type,
        score,
    })
}
