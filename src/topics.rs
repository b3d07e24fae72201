//! Topic categories derived from article keywords
//!
//! An explicit ordered table maps known keyword fragments to a category
//! tag. Lookup is deterministic: an exact entry wins, otherwise the
//! first entry whose fragment the keyword contains.

use serde::Serialize;

/// Category tag an article keyword can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    Network,
    Intelligence,
    Automation,
    Orchestration,
    Data,
    Agents,
    Compute,
    Integration,
    Cloud,
}

impl TopicCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TopicCategory::Network => "network",
            TopicCategory::Intelligence => "intelligence",
            TopicCategory::Automation => "automation",
            TopicCategory::Orchestration => "orchestration",
            TopicCategory::Data => "data",
            TopicCategory::Agents => "agents",
            TopicCategory::Compute => "compute",
            TopicCategory::Integration => "integration",
            TopicCategory::Cloud => "cloud",
        }
    }
}

impl std::fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Known keyword fragments, in match priority order
const TOPIC_TABLE: &[(&str, TopicCategory)] = &[
    ("ipaas", TopicCategory::Network),
    ("ai", TopicCategory::Intelligence),
    ("artificial intelligence", TopicCategory::Intelligence),
    ("workflow automation", TopicCategory::Automation),
    ("workflow orchestration", TopicCategory::Orchestration),
    ("big data", TopicCategory::Data),
    ("ai agents", TopicCategory::Agents),
    ("agentic intelligence", TopicCategory::Agents),
    ("processing", TopicCategory::Compute),
    ("integration", TopicCategory::Integration),
    ("cloud", TopicCategory::Cloud),
    ("react", TopicCategory::Compute),
    ("webdev", TopicCategory::Automation),
    ("data-visualization", TopicCategory::Data),
    ("architecture", TopicCategory::Orchestration),
    ("performance", TopicCategory::Integration),
];

/// Categories shown when no keyword maps to anything
pub const DEFAULT_TOPICS: [TopicCategory; 3] = [
    TopicCategory::Intelligence,
    TopicCategory::Automation,
    TopicCategory::Data,
];

/// At most this many categories are displayed per article
pub const MAX_TOPICS: usize = 3;

/// Resolve one keyword to a category, if any table entry applies.
fn category_for(keyword: &str) -> Option<TopicCategory> {
    let key = keyword.to_lowercase();
    TOPIC_TABLE
        .iter()
        .find(|(fragment, _)| *fragment == key)
        .or_else(|| TOPIC_TABLE.iter().find(|(fragment, _)| key.contains(fragment)))
        .map(|(_, category)| *category)
}

/// Map an article's keywords to its display categories.
///
/// First-hit order is preserved, duplicates collapse, and the list is
/// capped at [`MAX_TOPICS`]. Articles whose keywords match nothing get
/// the fixed [`DEFAULT_TOPICS`] fallback.
pub fn topic_categories(keywords: &[String]) -> Vec<TopicCategory> {
    let mut categories = Vec::new();
    for keyword in keywords {
        if let Some(category) = category_for(keyword) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
    }

    if categories.is_empty() {
        DEFAULT_TOPICS.to_vec()
    } else {
        categories.truncate(MAX_TOPICS);
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn exact_entry_beats_fragment_containment() {
        // "ai agents" contains the fragment "ai", but the exact entry wins
        assert_eq!(
            topic_categories(&kws(&["ai agents"])),
            vec![TopicCategory::Agents]
        );
    }

    #[test]
    fn fragment_containment_applies_in_table_order() {
        // no exact entry; "cloud" is the first contained fragment
        assert_eq!(
            topic_categories(&kws(&["cloud-native"])),
            vec![TopicCategory::Cloud]
        );
        // "workflow automation at scale" contains "workflow automation"
        assert_eq!(
            topic_categories(&kws(&["workflow automation at scale"])),
            vec![TopicCategory::Automation]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(topic_categories(&kws(&["AI"])), vec![TopicCategory::Intelligence]);
    }

    #[test]
    fn duplicate_categories_collapse() {
        assert_eq!(
            topic_categories(&kws(&["ai", "artificial intelligence"])),
            vec![TopicCategory::Intelligence]
        );
    }

    #[test]
    fn capped_at_three_categories() {
        let cats = topic_categories(&kws(&["ipaas", "ai", "big data", "cloud"]));
        assert_eq!(
            cats,
            vec![
                TopicCategory::Network,
                TopicCategory::Intelligence,
                TopicCategory::Data
            ]
        );
    }

    #[test]
    fn unmatched_keywords_get_the_fallback() {
        assert_eq!(topic_categories(&kws(&["cooking"])), DEFAULT_TOPICS.to_vec());
        assert_eq!(topic_categories(&[]), DEFAULT_TOPICS.to_vec());
    }
}
