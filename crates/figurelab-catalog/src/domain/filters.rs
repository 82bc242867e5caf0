//! Browsing filters over a clip corpus.

use figurelab_core::clip::Clip;
use serde::{Deserialize, Serialize};

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep corpus order.
    #[default]
    Unsorted,
    /// Title, A to Z (case-insensitive).
    TitleAsc,
    /// Title, Z to A (case-insensitive).
    TitleDesc,
}

/// Search text, active tag chips and sort order for one browsing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClipFilter {
    /// Case-insensitive substring matched against the title.
    pub search: String,
    /// Tags a clip must all carry, at its start or its end.
    pub tags: Vec<String>,
    /// Result ordering.
    pub sort: SortOrder,
}

impl ClipFilter {
    /// Returns `true` if `clip` passes the search text and tag chips.
    #[must_use]
    pub fn matches(&self, clip: &Clip) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !clip.title.to_lowercase().contains(&needle) {
            return false;
        }
        self.tags
            .iter()
            .all(|tag| clip.tags_initial.contains(tag) || clip.tags_final.contains(tag))
    }

    /// Filters and sorts `corpus`.
    #[must_use]
    pub fn apply<'a>(&self, corpus: &'a [Clip]) -> Vec<&'a Clip> {
        let mut clips: Vec<&Clip> = corpus.iter().filter(|c| self.matches(c)).collect();
        match self.sort {
            SortOrder::Unsorted => {}
            SortOrder::TitleAsc => clips.sort_by_cached_key(|c| c.title.to_lowercase()),
            SortOrder::TitleDesc => {
                clips.sort_by_cached_key(|c| c.title.to_lowercase());
                clips.reverse();
            }
        }
        clips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Clip> {
        vec![
            Clip::new("1", "Cross Body Lead", "salsa")
                .with_initial_tags(["closed-hold"])
                .with_final_tags(["open-hold"]),
            Clip::new("2", "basic step", "salsa")
                .with_initial_tags(["closed-hold"])
                .with_final_tags(["closed-hold"]),
            Clip::new("3", "Copa", "salsa")
                .with_initial_tags(["open-hold"])
                .with_final_tags(["cross-hold"]),
        ]
    }

    fn titles(clips: &[&Clip]) -> Vec<String> {
        clips.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let corpus = corpus();
        let filtered = ClipFilter::default().apply(&corpus);

        assert_eq!(titles(&filtered), vec!["Cross Body Lead", "basic step", "Copa"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let corpus = corpus();
        let filter = ClipFilter {
            search: "  BODY ".to_owned(),
            ..ClipFilter::default()
        };

        assert_eq!(titles(&filter.apply(&corpus)), vec!["Cross Body Lead"]);
    }

    #[test]
    fn test_tags_must_all_match_initial_or_final() {
        let corpus = corpus();
        let filter = ClipFilter {
            tags: vec!["open-hold".to_owned(), "closed-hold".to_owned()],
            ..ClipFilter::default()
        };

        assert_eq!(titles(&filter.apply(&corpus)), vec!["Cross Body Lead"]);
    }

    #[test]
    fn test_sort_orders() {
        let corpus = corpus();
        let asc = ClipFilter {
            sort: SortOrder::TitleAsc,
            ..ClipFilter::default()
        };
        let desc = ClipFilter {
            sort: SortOrder::TitleDesc,
            ..ClipFilter::default()
        };

        assert_eq!(
            titles(&asc.apply(&corpus)),
            vec!["basic step", "Copa", "Cross Body Lead"]
        );
        assert_eq!(
            titles(&desc.apply(&corpus)),
            vec!["Cross Body Lead", "Copa", "basic step"]
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let filter: ClipFilter = serde_json::from_str(r#"{"sort":"title_desc"}"#).unwrap();

        assert_eq!(filter.sort, SortOrder::TitleDesc);
        assert!(filter.search.is_empty());
        assert!(filter.tags.is_empty());
    }
}
